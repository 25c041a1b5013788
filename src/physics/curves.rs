/// Logistic sigmoid, rising from 0 to 1 and equal to exactly 0.5 at `midpoint`.
///
/// With `steepness = 1` the transition spans roughly `±6` around the midpoint,
/// so a curve that rises over a window of width `w` uses `steepness = 6 / w`
/// (see [`steepness_for_width`]). Defined for every real `x`.
pub fn sigmoid(x: f64, steepness: f64, midpoint: f64) -> f64 {
    1.0 / (1.0 + (-steepness * (x - midpoint)).exp())
}

/// Steepness that makes [`sigmoid`] go from ~0 to ~1 over `width`.
pub fn steepness_for_width(width: f64) -> f64 {
    6.0 / width
}
