//! Exact M/M/m queue length via Erlang C.
//!
//! Erlang C is derived from Erlang B, which is built up one server at a time:
//!
//! ```text
//! B(1) = A / (1 + A)
//! B(i) = A·B(i-1) / (i + A·B(i-1))
//! C    = B(m) / (1 - u + u·B(m))
//! ```
//!
//! where `A = u·m` is the offered load. The recurrence never forms `A^m / m!`,
//! so it stays finite for large server counts.
//!
//! See `erlang.pl` in Gunther, *Analyzing Computer System Performance with Perl::PDQ*.

/// Erlang B blocking probability for `erlangs` of offered load on `m` servers.
///
/// The loop bound is `i <= m`, so a fractional `m` behaves like `floor(m)`.
pub fn erlang_b(erlangs: f64, m: f64) -> f64 {
    let mut erlang_b = erlangs / (1.0 + erlangs);
    for i in 2..=(m as u64) {
        let eb = erlang_b * erlangs;
        erlang_b = eb / (i as f64 + eb);
    }
    erlang_b
}

/// Erlang C probability that an arrival has to wait.
pub fn erlang_c(u: f64, m: f64) -> f64 {
    let erlang_b = erlang_b(u * m, m);
    erlang_b / (1.0 - u + u * erlang_b)
}

/// Queue length normalised by the wait probability, `C / (m·(1-u))`.
///
/// Finite and non-negative for `0 <= u < 1`, `m >= 1`. Returns `inf` or `NaN`
/// once `u` reaches 1.
pub fn queue_length(u: f64, m: f64) -> f64 {
    erlang_c(u, m) / (m * (1.0 - u))
}
