use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Checks, SimError, Violation};
use crate::physics::units::INCH;

// ---------------------------------------------------------------------------
// Interior ballistics state: bullet kinematics + chamber loads
// ---------------------------------------------------------------------------

/// One sample of the trajectory.
///
/// `pressure` and `force` are the chamber loads computed from the previous
/// sample and carried forward, so sample 0 is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pub time: f64,     // s
    pub pos: f64,      // m, bullet travel from seated position
    pub vel: f64,      // m/s
    pub pressure: f64, // Pa, post-expansion chamber pressure
    pub force: f64,    // N, case/bolt force (never negative)
    pub friction: f64, // N, case wall friction subtracted from `force`
}

impl State {
    /// `[pos, vel]`, the part of the state advanced by the stepper.
    pub fn kinematics(&self) -> Vector2<f64> {
        Vector2::new(self.pos, self.vel)
    }

    /// First non-finite component, if any.
    pub fn non_finite(&self) -> Option<&'static str> {
        [
            ("position", self.pos),
            ("velocity", self.vel),
            ("pressure", self.pressure),
            ("force", self.force),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }
}

// ---------------------------------------------------------------------------
// Kinematic derivative
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dpos: f64, // velocity
    pub dvel: f64, // acceleration
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64,              // integration timestep, s
    pub max_time: f64,        // horizon, s
    pub barrel_length: f64,   // m; combustion stops driving past this
    pub model_friction: bool, // case wall friction once the case yields
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1e-6,                  // 1 MHz
            max_time: 3.0e-3,          // 3 ms
            barrel_length: 18.0 * INCH,
            model_friction: false,
        }
    }
}

/// Upper bound on samples per run; keeps the preallocated buffer bounded.
pub const MAX_STEPS: usize = 10_000_000;

impl SimConfig {
    /// Default timing with the given barrel and friction setting.
    pub fn with_barrel(barrel_length: f64, model_friction: bool) -> Self {
        Self { barrel_length, model_friction, ..Self::default() }
    }

    /// Number of samples, `floor(max_time / dt)`. Only meaningful once
    /// [`SimConfig::validate`] has passed.
    pub fn steps(&self) -> usize {
        self.step_count().floor() as usize
    }

    fn step_count(&self) -> f64 {
        self.max_time / self.dt
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let mut c = Checks::new();
        c.positive("dt", self.dt);
        c.positive("max_time", self.max_time);
        c.positive("barrel_length", self.barrel_length);
        if self.dt > 0.0 && self.max_time > 0.0 && self.max_time < self.dt {
            c.push(Violation::InvalidTimeStep { dt: self.dt, max_time: self.max_time });
        }
        let n = self.step_count();
        if self.dt > 0.0 && self.max_time > 0.0 && !(n.is_finite() && n <= MAX_STEPS as f64) {
            c.push(Violation::TooManySteps { steps: n, max: MAX_STEPS });
        }
        c.finish()
    }
}
