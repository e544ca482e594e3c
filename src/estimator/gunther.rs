/// Gunther's generalisation of the stretch factor to `m` servers, minus the
/// service time: `1 / (1 - u^m) - 1`.
///
/// See eq. 2.63 in Gunther, *Analyzing Computer System Performance with Perl::PDQ*.
pub fn queue_length(u: f64, m: f64) -> f64 {
    1.0 / (1.0 - u.powf(m)) - 1.0
}
