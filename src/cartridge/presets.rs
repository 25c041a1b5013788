use crate::error::SimError;
use crate::physics::units::{GRAINS, INCH, KSI, MM};

use super::builder::{
    BRASS_MODULUS, BRASS_ULTIMATE_STRENGTH, BRASS_WALL_FRICTION, BRASS_YIELD_STRENGTH,
};
use super::params::Cartridge;

// ---------------------------------------------------------------------------
// Preset table (conventional units, converted on lookup)
// ---------------------------------------------------------------------------

struct Preset {
    key: &'static str,
    aliases: &'static [&'static str],
    name: &'static str,
    bullet_grains: f64,
    length_unit: f64, // multiplier for the five lengths below
    chamber_diameter: f64,
    case_diameter: f64,
    case_length: f64,
    case_inside_length: f64,
    overall_length: f64,
    peak_ksi: f64,
    burn_duration: f64, // s
    gamma: f64,
}

const PRESETS: &[Preset] = &[
    Preset {
        key: "cci-minimag",
        aliases: &["22lr", ".22lr", "minimag"],
        name: "CCI Mini-Mag .22 LR",
        bullet_grains: 40.0,
        length_unit: INCH,
        chamber_diameter: 0.223,
        case_diameter: 0.203,
        case_length: 0.55,
        case_inside_length: 0.50,
        overall_length: 1.25,
        peak_ksi: 55.0,
        burn_duration: 5e-4,
        gamma: 1.3,
    },
    // Same round, lower published peak pressure
    Preset {
        key: "varmint-al-22",
        aliases: &["22lr-al"],
        name: ".22 LR (Varmint Al data)",
        bullet_grains: 40.0,
        length_unit: INCH,
        chamber_diameter: 0.223,
        case_diameter: 0.203,
        case_length: 0.55,
        case_inside_length: 0.50,
        overall_length: 1.25,
        peak_ksi: 40.0,
        burn_duration: 5e-4,
        gamma: 1.3,
    },
    Preset {
        key: "9mm-luger",
        aliases: &["9mm", "9x19", "luger"],
        name: "9x19mm Luger",
        bullet_grains: 115.0,
        length_unit: MM,
        chamber_diameter: 9.8,
        case_diameter: 9.03,
        case_length: 19.15,
        case_inside_length: 15.00,
        overall_length: 29.69,
        peak_ksi: 55.0,
        burn_duration: 1.5e-4,
        gamma: 1.15,
    },
];

impl Preset {
    fn to_cartridge(&self) -> Cartridge {
        let u = self.length_unit;
        Cartridge {
            name: self.name.to_string(),
            bullet_mass: self.bullet_grains * GRAINS,
            chamber_diameter: self.chamber_diameter * u,
            case_diameter: self.case_diameter * u,
            case_length: self.case_length * u,
            case_inside_length: self.case_inside_length * u,
            overall_round_length: self.overall_length * u,
            case_yield_strength: BRASS_YIELD_STRENGTH,
            case_ultimate_strength: BRASS_ULTIMATE_STRENGTH,
            case_wall_modulus: BRASS_MODULUS,
            wall_friction_coefficient: BRASS_WALL_FRICTION,
            peak_pressure: self.peak_ksi * KSI,
            burn_duration: self.burn_duration,
            specific_heat_ratio: self.gamma,
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.key.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Look up a preset by key or alias (case-insensitive).
pub fn preset(name: &str) -> Result<Cartridge, SimError> {
    PRESETS
        .iter()
        .find(|p| p.matches(name.trim()))
        .map(Preset::to_cartridge)
        .ok_or_else(|| SimError::UnknownPreset(name.to_string()))
}

/// Preset keys, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.key)
}

/// All presets, in table order.
pub fn all() -> Vec<Cartridge> {
    PRESETS.iter().map(Preset::to_cartridge).collect()
}

/// CCI Mini-Mag .22 LR, 40 gr.
pub fn cci_minimag() -> Cartridge {
    PRESETS[0].to_cartridge()
}

/// .22 LR at 40 ksi peak.
pub fn varmint_al_22() -> Cartridge {
    PRESETS[1].to_cartridge()
}

/// 9x19mm Luger, 115 gr.
pub fn luger_9mm() -> Cartridge {
    PRESETS[2].to_cartridge()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_validates() {
        for c in all() {
            assert!(c.validate().is_ok(), "{} failed validation", c.name);
        }
    }

    #[test]
    fn lookup_by_key_and_alias() {
        assert_eq!(preset("9mm-luger").unwrap(), luger_9mm());
        assert_eq!(preset("9X19").unwrap(), luger_9mm());
        assert_eq!(preset(" 22lr ").unwrap(), cci_minimag());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert_eq!(
            preset("45-70").unwrap_err(),
            SimError::UnknownPreset("45-70".into())
        );
    }

    #[test]
    fn luger_values_in_si() {
        let c = luger_9mm();
        assert!((c.bullet_mass - 115.0 * 6.479891e-5).abs() < 1e-12);
        assert!((c.chamber_diameter - 9.8e-3).abs() < 1e-12);
        assert!((c.case_inside_length - 15.0e-3).abs() < 1e-12);
        assert!((c.peak_pressure - 55.0 * KSI).abs() < 1e-3);
        assert_eq!(c.burn_duration, 1.5e-4);
        assert_eq!(c.specific_heat_ratio, 1.15);
    }

    #[test]
    fn rimfire_variant_differs_only_in_pressure() {
        let a = cci_minimag();
        let b = varmint_al_22();
        assert!(b.peak_pressure < a.peak_pressure);
        assert_eq!(
            Cartridge { name: a.name.clone(), peak_pressure: a.peak_pressure, ..b },
            a
        );
    }

    #[test]
    fn names_listed_in_order() {
        let n: Vec<_> = names().collect();
        assert_eq!(n, vec!["cci-minimag", "varmint-al-22", "9mm-luger"]);
    }
}
