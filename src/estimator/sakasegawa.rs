/// Sakasegawa's approximation to the M/M/m queue length, `u^sqrt(2(m+1)) / (1-u)`.
///
/// See Sakasegawa (1976, 1982). Requires `0 <= u < 1`; a negative `u` raised to
/// the fractional exponent gives `NaN`.
pub fn queue_length(u: f64, m: f64) -> f64 {
    u.powf((2.0 * (m + 1.0)).sqrt()) / (1.0 - u)
}
