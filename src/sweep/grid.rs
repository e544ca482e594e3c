use clap::ValueEnum;
use std::iter;

pub const MAX_SERVERS: u32 = 64;

/// Near-saturation points appended to every grid.
const TAIL: [f64; 2] = [0.99, 0.999];

/// `1, 2, 4, ...` up to and including `max`.
pub fn server_counts(max: u32) -> Vec<u32> {
    iter::successors(Some(1u32), |m| m.checked_mul(2))
        .take_while(|m| *m <= max)
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum UtilizationGrid {
    /// 0.05 to 0.95 in steps of 0.05.
    #[default]
    Fine,
    /// 0.0 to 0.9 in steps of 0.1.
    Coarse,
}

impl UtilizationGrid {
    pub fn values(self) -> Vec<f64> {
        // each value comes from its index so the boundaries are exact
        let body: Vec<f64> = match self {
            UtilizationGrid::Fine => (1..=19).map(|i| i as f64 / 20.0).collect(),
            UtilizationGrid::Coarse => (0..=9).map(|i| i as f64 / 10.0).collect(),
        };
        body.into_iter().chain(TAIL).collect()
    }
}
