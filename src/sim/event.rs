use crate::cartridge::Cartridge;
use crate::dynamics::state::State;

use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Shot events
// ---------------------------------------------------------------------------

/// Kinds of events during a shot.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Chamber pressure reached the case yield pressure.
    CaseYield,
    /// Chamber pressure reached the case burst pressure.
    CaseBurst,
    PeakPressure,
    MuzzleExit,
    Custom(String),
}

/// A discrete event detected in a trajectory.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Fires once when chamber pressure crosses a threshold.
pub struct PressureDetector {
    pub pressure: f64,
    pub rising: bool,
    kind: EventKind,
    fired: bool,
}

impl PressureDetector {
    /// Custom threshold, reported as [`EventKind::Custom`].
    pub fn new(pressure: f64, rising: bool) -> Self {
        let kind = EventKind::Custom(format!(
            "Pressure {:.1} MPa ({})",
            pressure / 1e6,
            if rising { "rising" } else { "falling" }
        ));
        Self { pressure, rising, kind, fired: false }
    }

    pub fn case_yield(cartridge: &Cartridge) -> Self {
        Self { pressure: cartridge.yield_pressure(), rising: true, kind: EventKind::CaseYield, fired: false }
    }

    pub fn case_burst(cartridge: &Cartridge) -> Self {
        Self { pressure: cartridge.burst_pressure(), rising: true, kind: EventKind::CaseBurst, fired: false }
    }
}

impl EventDetector for PressureDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.rising {
            prev.pressure < self.pressure && current.pressure >= self.pressure
        } else {
            prev.pressure > self.pressure && current.pressure <= self.pressure
        };
        if crossed {
            self.fired = true;
            Some(self.kind.clone())
        } else {
            None
        }
    }
}

/// Detects the first drop in chamber pressure after it started rising.
#[derive(Default)]
pub struct PeakPressureDetector {
    fired: bool,
}

impl EventDetector for PeakPressureDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if !self.fired && prev.pressure > 0.0 && current.pressure < prev.pressure {
            self.fired = true;
            Some(EventKind::PeakPressure)
        } else {
            None
        }
    }
}

/// Detects the bullet passing the muzzle.
pub struct MuzzleDetector {
    pub barrel_length: f64,
}

impl EventDetector for MuzzleDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if prev.pos <= self.barrel_length && current.pos > self.barrel_length {
            Some(EventKind::MuzzleExit)
        } else {
            None
        }
    }
}

/// Yield, burst, peak pressure and muzzle exit detectors for one round.
pub fn standard_detectors(cartridge: &Cartridge, barrel_length: f64) -> Vec<Box<dyn EventDetector>> {
    vec![
        Box::new(PressureDetector::case_yield(cartridge)),
        Box::new(PressureDetector::case_burst(cartridge)),
        Box::new(PeakPressureDetector::default()),
        Box::new(MuzzleDetector { barrel_length }),
    ]
}

/// Run detectors over consecutive samples, in time order.
pub fn detect_events(
    trajectory: &Trajectory,
    detectors: &mut [Box<dyn EventDetector>],
) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for pair in trajectory.samples().windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(SimEvent { time: pair[1].time, kind, state: pair[1] });
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::presets;
    use crate::dynamics::state::SimConfig;
    use crate::sim::runner::simulate;

    fn make_state(pos: f64, pressure: f64) -> State {
        State { pos, pressure, ..State::default() }
    }

    #[test]
    fn threshold_fires_once() {
        let mut det = PressureDetector::new(1e7, true);
        let prev = make_state(0.0, 5e6);
        let curr = make_state(0.0, 2e7);
        assert!(matches!(det.check(&prev, &curr), Some(EventKind::Custom(_))));
        assert!(det.check(&prev, &curr).is_none());
    }

    #[test]
    fn falling_threshold() {
        let mut det = PressureDetector::new(1e7, false);
        assert!(det.check(&make_state(0.0, 5e6), &make_state(0.0, 2e7)).is_none());
        assert!(det.check(&make_state(0.0, 2e7), &make_state(0.0, 5e6)).is_some());
    }

    #[test]
    fn muzzle_detected() {
        let mut det = MuzzleDetector { barrel_length: 0.1 };
        assert_eq!(
            det.check(&make_state(0.099, 0.0), &make_state(0.101, 0.0)),
            Some(EventKind::MuzzleExit)
        );
        assert!(det.check(&make_state(0.101, 0.0), &make_state(0.102, 0.0)).is_none());
    }

    #[test]
    fn luger_event_sequence() {
        let c = presets::luger_9mm();
        let cfg = SimConfig::with_barrel(0.4572, true);
        let traj = simulate(&c, &cfg).unwrap();
        let mut dets = standard_detectors(&c, cfg.barrel_length);
        let events = detect_events(&traj, &mut dets);
        let kinds: Vec<_> = events.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::CaseYield,
                EventKind::CaseBurst,
                EventKind::PeakPressure,
                EventKind::MuzzleExit
            ]
        );
        assert!(events.windows(2).all(|w| w[0].time < w[1].time));
        let peak = traj.peak_pressure().unwrap();
        assert!((events[2].time - peak.time - cfg.dt).abs() < 1e-12);
    }
}
