use crate::cartridge::Cartridge;
use crate::physics::curves::sigmoid;

use super::state::{Deriv, State};

/// Empirical loss factor applied to the pressure that accelerates the bullet.
pub const PRESSURE_EFFICIENCY: f64 = 0.9;

// ---------------------------------------------------------------------------
// Chamber loads for one step
// ---------------------------------------------------------------------------

/// Pressures and forces acting in the chamber at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberLoads {
    pub combustion_pressure: f64, // Pa, sigmoid driving pressure
    pub pressure: f64,            // Pa, after expansion into the bore
    pub friction: f64,            // N
    pub force: f64,               // N, net case/bolt force
}

/// Sigmoid combustion pressure at `time`, zero once the bullet is past `barrel_length`.
pub fn combustion_pressure(cartridge: &Cartridge, time: f64, pos: f64, barrel_length: f64) -> f64 {
    if pos > barrel_length {
        return 0.0;
    }
    cartridge.peak_pressure * sigmoid(time, cartridge.burn_steepness(), cartridge.burn_duration)
}

/// Adiabatic expansion of the powder gas into the bore swept behind the bullet.
pub fn expanded_pressure(cartridge: &Cartridge, combustion_pressure: f64, pos: f64) -> f64 {
    let v_case = cartridge.case_volume();
    let v_swept = pos * cartridge.case_area();
    combustion_pressure * (v_case / (v_case + v_swept)).powf(cartridge.specific_heat_ratio)
}

/// Case wall friction opposing bolt thrust.
///
/// Zero until the case yields against the chamber wall; above that it grows
/// with the excess over yield pressure, not with the full pressure.
pub fn wall_friction(cartridge: &Cartridge, pressure: f64, model_friction: bool) -> f64 {
    let p_yield = cartridge.yield_pressure();
    if !model_friction || pressure < p_yield {
        return 0.0;
    }
    (pressure - p_yield) * cartridge.case_wall_area() * cartridge.wall_friction_coefficient
}

/// Chamber loads for a bullet at `pos` and time `time`.
pub fn chamber_loads(
    cartridge: &Cartridge,
    time: f64,
    pos: f64,
    barrel_length: f64,
    model_friction: bool,
) -> ChamberLoads {
    let combustion = combustion_pressure(cartridge, time, pos, barrel_length);
    let pressure = expanded_pressure(cartridge, combustion, pos);
    let friction = wall_friction(cartridge, pressure, model_friction);
    // Force only pushes the bolt; it cannot pull it forward
    let force = (pressure * cartridge.chamber_area() - friction).max(0.0);

    ChamberLoads {
        combustion_pressure: combustion,
        pressure,
        friction,
        force,
    }
}

/// Bullet acceleration driven by `pressure` acting on the case section.
pub fn bullet_acceleration(cartridge: &Cartridge, pressure: f64) -> f64 {
    pressure * cartridge.case_area() / cartridge.bullet_mass * PRESSURE_EFFICIENCY
}

/// Kinematic derivative of `state`, using the pressure it carries.
pub fn derivatives(state: &State, cartridge: &Cartridge) -> Deriv {
    Deriv {
        dpos: state.vel,
        dvel: bullet_acceleration(cartridge, state.pressure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::presets;

    const BARREL: f64 = 0.4572;

    #[test]
    fn combustion_cut_off_past_muzzle() {
        let c = presets::luger_9mm();
        let t = 2.0 * c.burn_duration;
        assert!(combustion_pressure(&c, t, BARREL, BARREL) > 0.0);
        assert_eq!(combustion_pressure(&c, t, BARREL + 1e-9, BARREL), 0.0);
        let loads = chamber_loads(&c, t, BARREL + 0.01, BARREL, true);
        assert_eq!(loads.combustion_pressure, 0.0);
        assert_eq!(loads.pressure, 0.0);
        assert_eq!(loads.force, 0.0);
    }

    #[test]
    fn half_peak_at_burn_duration() {
        let c = presets::luger_9mm();
        let p = combustion_pressure(&c, c.burn_duration, 0.0, BARREL);
        assert!((p - 0.5 * c.peak_pressure).abs() < 1e-6 * c.peak_pressure);
    }

    #[test]
    fn no_expansion_at_seated_position() {
        let c = presets::luger_9mm();
        assert_eq!(expanded_pressure(&c, 1e8, 0.0), 1e8);
        assert!(expanded_pressure(&c, 1e8, 0.01) < 1e8);
    }

    #[test]
    fn expansion_matches_adiabatic_law() {
        let c = presets::luger_9mm();
        // Travel equal to the case inside length doubles the gas volume
        let p = expanded_pressure(&c, 1e8, c.case_inside_length);
        assert!((p - 1e8 * 0.5_f64.powf(1.15)).abs() < 1e-3);
    }

    #[test]
    fn friction_only_above_yield() {
        let c = presets::luger_9mm();
        let py = c.yield_pressure();
        assert_eq!(wall_friction(&c, 2.0 * py, false), 0.0);
        assert_eq!(wall_friction(&c, 0.5 * py, true), 0.0);
        let f = wall_friction(&c, py + 1e6, true);
        let expected = 1e6 * c.case_wall_area() * c.wall_friction_coefficient;
        assert!((f - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn force_is_pressure_times_area_without_friction() {
        let c = presets::luger_9mm();
        let loads = chamber_loads(&c, 3e-4, 0.002, BARREL, false);
        assert_eq!(loads.friction, 0.0);
        assert_eq!(loads.force, loads.pressure * c.chamber_area());
    }

    #[test]
    fn force_clamped_at_zero() {
        // Friction coefficient high enough that friction exceeds thrust
        let c = Cartridge { wall_friction_coefficient: 1.0, ..presets::luger_9mm() };
        let loads = chamber_loads(&c, 5e-4, 0.0, BARREL, true);
        assert!(loads.friction > loads.pressure * c.chamber_area());
        assert_eq!(loads.force, 0.0);
    }

    #[test]
    fn acceleration_uses_case_area_and_efficiency() {
        let c = presets::luger_9mm();
        let a = bullet_acceleration(&c, 1e8);
        assert!((a - 1e8 * c.case_area() / c.bullet_mass * 0.9).abs() < 1e-6);
        let d = derivatives(&State { vel: 12.0, pressure: 1e8, ..State::default() }, &c);
        assert_eq!(d.dpos, 12.0);
        assert_eq!(d.dvel, a);
    }
}
