use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{Checks, SimError, Violation};
use crate::physics::curves::steepness_for_width;

// ---------------------------------------------------------------------------
// Cartridge: one round's physical, material and combustion constants (SI)
// ---------------------------------------------------------------------------

/// Straight-walled cartridge parameter bundle.
///
/// All values are SI. Conventional units are converted once, at construction,
/// with the multipliers in [`crate::physics::units`]. Derived geometry is
/// computed on every call from the base fields, never cached.
///
/// Fields are public for struct-update variants. A bundle edited after
/// construction is unchecked until [`Cartridge::validate`] runs again, which
/// [`crate::sim::simulate`] does on entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cartridge {
    pub name: String,

    // Round geometry
    pub bullet_mass: f64,            // kg
    pub chamber_diameter: f64,       // m
    pub case_diameter: f64,          // m, inside diameter
    pub case_length: f64,            // m
    pub case_inside_length: f64,     // m
    pub overall_round_length: f64,   // m

    // Case material
    pub case_yield_strength: f64,    // Pa
    pub case_ultimate_strength: f64, // Pa
    pub case_wall_modulus: f64,      // Pa (not used by the force model)
    pub wall_friction_coefficient: f64,

    // Combustion: sigmoid pressure rise
    pub peak_pressure: f64,          // Pa
    pub burn_duration: f64,          // s, ~0 to peak
    pub specific_heat_ratio: f64,    // Cp/Cv
}

impl Cartridge {
    /// Sigmoid steepness spanning ~0 to peak pressure over `burn_duration`.
    pub fn burn_steepness(&self) -> f64 {
        steepness_for_width(self.burn_duration)
    }

    /// Chamber cross-section, m^2.
    pub fn chamber_area(&self) -> f64 {
        PI * self.chamber_diameter.powi(2) / 4.0
    }

    /// Case inside cross-section, m^2.
    pub fn case_area(&self) -> f64 {
        PI * self.case_diameter.powi(2) / 4.0
    }

    /// Bullet base area as `π·d_chamber²`.
    ///
    /// This lacks the `/4` of a circular section. It is kept as-is and is not
    /// read by the integrator.
    pub fn bullet_base_area(&self) -> f64 {
        PI * self.chamber_diameter.powi(2)
    }

    /// Inside case wall area in contact with the powder gas, m^2.
    pub fn case_wall_area(&self) -> f64 {
        PI * self.case_diameter * self.case_inside_length
    }

    /// Powder volume, m^3.
    pub fn case_volume(&self) -> f64 {
        self.case_area() * self.case_inside_length
    }

    pub fn case_wall_thickness(&self) -> f64 {
        (self.chamber_diameter - self.case_diameter) / 2.0
    }

    /// Internal pressure at which the case wall starts to yield (thin-wall hoop stress).
    pub fn yield_pressure(&self) -> f64 {
        2.0 * self.case_yield_strength * self.case_wall_thickness() / self.case_diameter
    }

    /// Internal pressure at which the case wall bursts.
    pub fn burst_pressure(&self) -> f64 {
        2.0 * self.case_ultimate_strength * self.case_wall_thickness() / self.case_diameter
    }

    /// Check every invariant, reporting all violations at once.
    pub fn validate(&self) -> Result<(), SimError> {
        let mut c = Checks::new();

        c.positive("bullet_mass", self.bullet_mass);
        c.positive("chamber_diameter", self.chamber_diameter);
        c.positive("case_diameter", self.case_diameter);
        c.positive("case_length", self.case_length);
        c.positive("case_inside_length", self.case_inside_length);
        c.positive("overall_round_length", self.overall_round_length);
        c.positive("case_yield_strength", self.case_yield_strength);
        c.positive("case_ultimate_strength", self.case_ultimate_strength);
        c.positive("case_wall_modulus", self.case_wall_modulus);
        c.in_range("wall_friction_coefficient", self.wall_friction_coefficient, 0.0, 1.0);
        c.positive("peak_pressure", self.peak_pressure);
        c.positive("burn_duration", self.burn_duration);
        c.positive("specific_heat_ratio", self.specific_heat_ratio);

        if self.chamber_diameter < self.case_diameter {
            c.push(Violation::ChamberNarrowerThanCase {
                chamber: self.chamber_diameter,
                case: self.case_diameter,
            });
        }
        if self.case_length < self.case_inside_length {
            c.push(Violation::CaseInsideLongerThanCase {
                inside: self.case_inside_length,
                outside: self.case_length,
            });
        }
        if self.case_ultimate_strength < self.case_yield_strength {
            c.push(Violation::UltimateBelowYield {
                ultimate: self.case_ultimate_strength,
                yield_strength: self.case_yield_strength,
            });
        }

        c.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::presets;

    fn luger() -> Cartridge {
        presets::luger_9mm()
    }

    #[test]
    fn areas_follow_diameters() {
        let c = luger();
        let d = c.chamber_diameter;
        assert!((c.chamber_area() - PI * d * d / 4.0).abs() < 1e-15);
        assert!((c.bullet_base_area() / c.chamber_area() - 4.0).abs() < 1e-12);
        assert!((c.case_volume() - c.case_area() * c.case_inside_length).abs() < 1e-18);
    }

    #[test]
    fn wall_thickness_and_pressures() {
        let c = luger();
        let t = c.case_wall_thickness();
        assert!((t - 0.385e-3).abs() < 1e-9);
        let py = c.yield_pressure();
        assert!((py - 2.0 * 200e6 * t / c.case_diameter).abs() < 1e-3);
        assert!(c.burst_pressure() > py);
        assert!((c.burst_pressure() / py - 550.0 / 200.0).abs() < 1e-12);
    }

    #[test]
    fn derived_values_track_base_fields() {
        let a = luger();
        let b = Cartridge { case_diameter: 9.2e-3, ..a.clone() };
        assert!(b.case_area() > a.case_area());
        assert!(b.case_wall_thickness() < a.case_wall_thickness());
        assert!(b.yield_pressure() < a.yield_pressure());
        assert!(b.burst_pressure() < a.burst_pressure());
        let t = (b.chamber_diameter - 9.2e-3) / 2.0;
        assert!((b.yield_pressure() - 2.0 * b.case_yield_strength * t / 9.2e-3).abs() < 1e-3);
        assert!((b.case_area() - PI * 9.2e-3 * 9.2e-3 / 4.0).abs() < 1e-15);
    }

    #[test]
    fn burn_steepness_spans_duration() {
        let c = luger();
        assert!((c.burn_steepness() * c.burn_duration - 6.0).abs() < 1e-12);
    }

    #[test]
    fn presets_are_valid() {
        assert!(luger().validate().is_ok());
    }

    #[test]
    fn negative_mass_rejected() {
        let c = Cartridge { bullet_mass: -1.0, ..luger() };
        let err = c.validate().unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::NonPositive { field: "bullet_mass", value: -1.0 }]
        );
    }

    #[test]
    fn geometry_ordering_rejected() {
        let c = Cartridge {
            case_diameter: 10.0e-3,
            case_inside_length: 25.0e-3,
            case_ultimate_strength: 100e6,
            wall_friction_coefficient: -0.1,
            ..luger()
        };
        let v = c.validate().unwrap_err();
        let v = v.violations();
        assert_eq!(v.len(), 4);
        assert!(v.iter().any(|x| matches!(x, Violation::ChamberNarrowerThanCase { .. })));
        assert!(v.iter().any(|x| matches!(x, Violation::CaseInsideLongerThanCase { .. })));
        assert!(v.iter().any(|x| matches!(x, Violation::UltimateBelowYield { .. })));
        assert!(v.iter().any(|x| matches!(x, Violation::OutOfRange { .. })));
    }

    #[test]
    fn steepness_shared_with_curve_helper() {
        let c = luger();
        assert_eq!(c.burn_steepness(), steepness_for_width(c.burn_duration));
    }

    #[test]
    fn edited_bundle_rechecked_by_simulate() {
        use crate::cartridge::CartridgeBuilder;
        use crate::dynamics::state::SimConfig;

        let mut c = CartridgeBuilder::from(&luger()).build().unwrap();
        c.case_diameter = 11.0e-3;
        let err = crate::sim::simulate(&c, &SimConfig::default()).unwrap_err();
        assert!(err
            .violations()
            .iter()
            .any(|v| matches!(v, Violation::ChamberNarrowerThanCase { .. })));
    }

    #[test]
    fn json_round_trip_keeps_fields() {
        let c = luger();
        let json = serde_json::to_string(&c).unwrap();
        let back: Cartridge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.chamber_diameter.to_bits(), c.chamber_diameter.to_bits());
    }
}
