use crate::estimator::convention::Convention;
use crate::estimator::{erlang, gunther, sakasegawa};
use crate::sweep::point::SweepPoint;
use std::fmt;

pub const HEADER: [&str; 5] = ["servers", "util", "erlang", "gunther", "sakasegawa"];

/// All three estimates for one sweep point. The convention rescales Erlang C
/// and Gunther onto Sakasegawa's scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    servers: u32,
    utilization: f64,
    erlang: f64,
    gunther: f64,
    sakasegawa: f64,
}

impl Row {
    pub fn evaluate(point: SweepPoint, convention: Convention) -> Self {
        let u = point.utilization();
        let m = point.servers() as f64;
        let load = point.offered_load();
        Self {
            servers: point.servers(),
            utilization: u,
            erlang: convention.apply(erlang::queue_length(u, m), load),
            gunther: convention.apply(gunther::queue_length(u, m), load),
            sakasegawa: sakasegawa::queue_length(u, m),
        }
    }

    pub fn servers(&self) -> u32 {
        self.servers
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    pub fn is_finite(&self) -> bool {
        self.erlang.is_finite() && self.gunther.is_finite() && self.sakasegawa.is_finite()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.3}\t{:.6}\t{:.6}\t{:.6}",
            self.servers, self.utilization, self.erlang, self.gunther, self.sakasegawa
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(servers: u32, u: f64, convention: Convention) -> Row {
        Row::evaluate(SweepPoint::new(servers, u).unwrap(), convention)
    }

    #[test]
    fn test_half_utilized_single_server() {
        let row = row(1, 0.5, Convention::Plain);
        assert_relative_eq!(1.0, row.erlang, max_relative = 1e-12);
        assert_relative_eq!(1.0, row.gunther);
        assert_relative_eq!(0.5, row.sakasegawa, max_relative = 1e-12);
        assert_eq!("1\t0.500\t1.000000\t1.000000\t0.500000", row.to_string());
    }

    #[test]
    fn test_scaled_convention_leaves_sakasegawa_alone() {
        let plain = row(4, 0.9, Convention::Plain);
        let scaled = row(4, 0.9, Convention::Scaled);
        let load = 0.9 * 4.0;
        assert_relative_eq!(load * plain.erlang, scaled.erlang);
        assert_relative_eq!(load * plain.gunther, scaled.gunther);
        assert_eq!(plain.sakasegawa.to_bits(), scaled.sakasegawa.to_bits());
    }

    #[test]
    fn test_scaled_single_server_matches_sakasegawa() {
        // u^2/(1-u) for all three columns
        let row = row(1, 0.5, Convention::Scaled);
        assert_relative_eq!(0.5, row.erlang, max_relative = 1e-12);
        assert_relative_eq!(0.5, row.gunther, max_relative = 1e-12);
        assert_relative_eq!(0.5, row.sakasegawa, max_relative = 1e-12);
        assert_eq!("1\t0.500\t0.500000\t0.500000\t0.500000", row.to_string());
    }

    #[test]
    fn test_deterministic() {
        let a = row(4, 0.9, Convention::Plain);
        let b = row(4, 0.9, Convention::Plain);
        assert_eq!(a.erlang.to_bits(), b.erlang.to_bits());
        assert_eq!(a.gunther.to_bits(), b.gunther.to_bits());
        assert_eq!(a.sakasegawa.to_bits(), b.sakasegawa.to_bits());
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_estimators_ranked_at_four_servers() {
        // u=0.9, m=4: Gunther sits below the exact value, Sakasegawa above
        let row = row(4, 0.9, Convention::Plain);
        assert!(row.gunther < row.erlang);
        assert!(row.erlang < row.sakasegawa);
    }

    #[test]
    fn test_utilization_formatted_to_three_places() {
        let row = row(64, 0.999, Convention::Plain);
        assert!(row.to_string().starts_with("64\t0.999\t"));
        assert!(row.is_finite());
    }
}
