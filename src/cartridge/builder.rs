use crate::error::{SimError, Violation};
use crate::physics::units::KSI;

use super::params::Cartridge;

// ---------------------------------------------------------------------------
// Brass case and generic smokeless-powder defaults
// ---------------------------------------------------------------------------

pub const BRASS_YIELD_STRENGTH: f64 = 200e6;    // Pa
pub const BRASS_ULTIMATE_STRENGTH: f64 = 550e6; // Pa
pub const BRASS_MODULUS: f64 = 97e9;            // Pa
pub const BRASS_WALL_FRICTION: f64 = 0.1;

pub const DEFAULT_PEAK_PRESSURE: f64 = 55.0 * KSI;
pub const DEFAULT_BURN_DURATION: f64 = 5e-4;    // s
pub const DEFAULT_SPECIFIC_HEAT_RATIO: f64 = 1.3; // air + CO2

// ---------------------------------------------------------------------------
// Cartridge builder
// ---------------------------------------------------------------------------

/// Builds a [`Cartridge`] from SI values.
///
/// Geometry and bullet mass have no sensible default and must be set.
/// Material and combustion fields start at brass / 55 ksi defaults.
#[derive(Debug, Clone)]
pub struct CartridgeBuilder {
    name: String,
    bullet_mass: Option<f64>,
    chamber_diameter: Option<f64>,
    case_diameter: Option<f64>,
    case_length: Option<f64>,
    case_inside_length: Option<f64>,
    overall_round_length: Option<f64>,
    case_yield_strength: f64,
    case_ultimate_strength: f64,
    case_wall_modulus: f64,
    wall_friction_coefficient: f64,
    peak_pressure: f64,
    burn_duration: f64,
    specific_heat_ratio: f64,
}

impl CartridgeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bullet_mass: None,
            chamber_diameter: None,
            case_diameter: None,
            case_length: None,
            case_inside_length: None,
            overall_round_length: None,
            case_yield_strength: BRASS_YIELD_STRENGTH,
            case_ultimate_strength: BRASS_ULTIMATE_STRENGTH,
            case_wall_modulus: BRASS_MODULUS,
            wall_friction_coefficient: BRASS_WALL_FRICTION,
            peak_pressure: DEFAULT_PEAK_PRESSURE,
            burn_duration: DEFAULT_BURN_DURATION,
            specific_heat_ratio: DEFAULT_SPECIFIC_HEAT_RATIO,
        }
    }

    pub fn bullet_mass(mut self, v: f64) -> Self { self.bullet_mass = Some(v); self }
    pub fn chamber_diameter(mut self, v: f64) -> Self { self.chamber_diameter = Some(v); self }
    pub fn case_diameter(mut self, v: f64) -> Self { self.case_diameter = Some(v); self }
    pub fn case_length(mut self, v: f64) -> Self { self.case_length = Some(v); self }
    pub fn case_inside_length(mut self, v: f64) -> Self { self.case_inside_length = Some(v); self }
    pub fn overall_round_length(mut self, v: f64) -> Self { self.overall_round_length = Some(v); self }
    pub fn case_yield_strength(mut self, v: f64) -> Self { self.case_yield_strength = v; self }
    pub fn case_ultimate_strength(mut self, v: f64) -> Self { self.case_ultimate_strength = v; self }
    pub fn case_wall_modulus(mut self, v: f64) -> Self { self.case_wall_modulus = v; self }
    pub fn wall_friction_coefficient(mut self, v: f64) -> Self { self.wall_friction_coefficient = v; self }
    pub fn peak_pressure(mut self, v: f64) -> Self { self.peak_pressure = v; self }
    pub fn burn_duration(mut self, v: f64) -> Self { self.burn_duration = v; self }
    pub fn specific_heat_ratio(mut self, v: f64) -> Self { self.specific_heat_ratio = v; self }

    /// Fails with every missing field, or else with every violated invariant.
    pub fn build(self) -> Result<Cartridge, SimError> {
        let required = [
            ("bullet_mass", self.bullet_mass),
            ("chamber_diameter", self.chamber_diameter),
            ("case_diameter", self.case_diameter),
            ("case_length", self.case_length),
            ("case_inside_length", self.case_inside_length),
            ("overall_round_length", self.overall_round_length),
        ];
        let missing: Vec<Violation> = required
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|&(field, _)| Violation::Missing { field })
            .collect();
        if !missing.is_empty() {
            return Err(SimError::Configuration(missing));
        }

        let cartridge = Cartridge {
            name: self.name,
            bullet_mass: self.bullet_mass.unwrap_or_default(),
            chamber_diameter: self.chamber_diameter.unwrap_or_default(),
            case_diameter: self.case_diameter.unwrap_or_default(),
            case_length: self.case_length.unwrap_or_default(),
            case_inside_length: self.case_inside_length.unwrap_or_default(),
            overall_round_length: self.overall_round_length.unwrap_or_default(),
            case_yield_strength: self.case_yield_strength,
            case_ultimate_strength: self.case_ultimate_strength,
            case_wall_modulus: self.case_wall_modulus,
            wall_friction_coefficient: self.wall_friction_coefficient,
            peak_pressure: self.peak_pressure,
            burn_duration: self.burn_duration,
            specific_heat_ratio: self.specific_heat_ratio,
        };
        cartridge.validate()?;
        Ok(cartridge)
    }
}

impl From<&Cartridge> for CartridgeBuilder {
    /// Start from an existing round, e.g. to derive a variant.
    fn from(c: &Cartridge) -> Self {
        Self {
            name: c.name.clone(),
            bullet_mass: Some(c.bullet_mass),
            chamber_diameter: Some(c.chamber_diameter),
            case_diameter: Some(c.case_diameter),
            case_length: Some(c.case_length),
            case_inside_length: Some(c.case_inside_length),
            overall_round_length: Some(c.overall_round_length),
            case_yield_strength: c.case_yield_strength,
            case_ultimate_strength: c.case_ultimate_strength,
            case_wall_modulus: c.case_wall_modulus,
            wall_friction_coefficient: c.wall_friction_coefficient,
            peak_pressure: c.peak_pressure,
            burn_duration: c.burn_duration,
            specific_heat_ratio: c.specific_heat_ratio,
        }
    }
}
