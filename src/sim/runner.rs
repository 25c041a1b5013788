use nalgebra::Vector2;

use crate::cartridge::Cartridge;
use crate::dynamics::chamber::{chamber_loads, derivatives};
use crate::dynamics::state::{SimConfig, State};
use crate::error::SimError;

use super::integrator::{ForwardEuler, Stepper};
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Interior ballistics run
// ---------------------------------------------------------------------------

/// Simulate one shot with a custom integration strategy.
///
/// Each step reads sample `i` and writes sample `i + 1`: the bullet is
/// accelerated by the pressure carried in sample `i`, while the new chamber
/// loads are computed from sample `i`'s time and position.
///
/// Inputs are validated before any stepping. A non-finite value in any
/// written sample aborts the run with no partial trajectory.
pub fn simulate_with(
    cartridge: &Cartridge,
    config: &SimConfig,
    stepper: &dyn Stepper,
) -> Result<Trajectory, SimError> {
    validate_inputs(cartridge, config)?;

    let n = config.steps();
    let mut samples = vec![State::default(); n];

    for i in 0..n.saturating_sub(1) {
        let s = samples[i];
        let loads = chamber_loads(
            cartridge,
            s.time,
            s.pos,
            config.barrel_length,
            config.model_friction,
        );

        // Pressure held at sample i over the step
        let y = stepper.step(&s.kinematics(), config.dt, &|y: &Vector2<f64>| {
            let d = derivatives(&State { pos: y[0], vel: y[1], ..s }, cartridge);
            Vector2::new(d.dpos, d.dvel)
        });

        let next = State {
            time: (i + 1) as f64 * config.dt,
            pos: y[0],
            vel: y[1],
            pressure: loads.pressure,
            force: loads.force,
            friction: loads.friction,
        };

        if let Some(quantity) = next.non_finite() {
            return Err(SimError::NumericalInstability {
                step: i + 1,
                time: next.time,
                quantity,
            });
        }
        samples[i + 1] = next;
    }

    Ok(Trajectory::new(samples, config.dt))
}

/// Simulate one shot with forward Euler.
pub fn simulate(cartridge: &Cartridge, config: &SimConfig) -> Result<Trajectory, SimError> {
    simulate_with(cartridge, config, &ForwardEuler)
}

fn validate_inputs(cartridge: &Cartridge, config: &SimConfig) -> Result<(), SimError> {
    match (cartridge.validate(), config.validate()) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(a), Err(b)) => {
            let mut all = a.violations().to_vec();
            all.extend_from_slice(b.violations());
            Err(SimError::Configuration(all))
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
