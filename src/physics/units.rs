// ---------------------------------------------------------------------------
// Conventional unit -> SI multipliers
// ---------------------------------------------------------------------------
//
// Multiply to convert into SI, divide to convert back:
//   let x = 2.0 * INCH;     // 2 in, stored in m
//   let x_in = x / INCH;    // back to inches

pub const MM: f64 = 0.001;                 // mm -> m
pub const INCH: f64 = 0.0254;              // in -> m
pub const FT: f64 = 12.0 * INCH;           // ft -> m

pub const KSI: f64 = 6.894_759_086_775_37e6; // ksi -> Pa
pub const PSI: f64 = 6_894.757_29;           // psi -> Pa

pub const LB: f64 = 0.453_592;             // lb -> kg
pub const OZ: f64 = LB / 16.0;             // oz -> kg
pub const LBF: f64 = 4.448_22;             // lbf -> N
pub const OZF: f64 = LBF / 16.0;           // ozf -> N

pub const GRAINS: f64 = 6.479_891e-5;      // gr -> kg
pub const G: f64 = 9.81;                   // standard gravity, m/s^2

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_units_follow_base_units() {
        assert!((FT - 0.3048).abs() < 1e-12);
        assert!((OZ * 16.0 - LB).abs() < 1e-12);
        assert!((OZF * 16.0 - LBF).abs() < 1e-12);
    }

    #[test]
    fn ksi_and_psi_agree() {
        assert!((KSI / PSI - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn grains_per_pound() {
        // 7000 gr to the pound
        assert!((7000.0 * GRAINS - LB).abs() < 1e-6);
    }
}
