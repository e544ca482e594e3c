use crate::sweep::grid::{UtilizationGrid, server_counts};
use crate::sweep::point::SweepPoint;
use tracing::{debug, warn};

/// Server counts crossed with utilizations, servers outer.
pub struct Sweep {
    servers: Vec<u32>,
    utilizations: Vec<f64>,
}

impl Sweep {
    pub fn new(max_servers: u32, grid: UtilizationGrid) -> Self {
        let servers = server_counts(max_servers);
        let utilizations = grid.values();
        debug!(
            "sweep over {} server counts and {} utilizations ({:?})",
            servers.len(),
            utilizations.len(),
            grid
        );
        Self {
            servers,
            utilizations,
        }
    }

    /// Number of points `points()` yields, after invalid ones are dropped.
    pub fn len(&self) -> usize {
        self.points().count()
    }

    /// Restartable: every call walks the sweep from the start.
    pub fn points(&self) -> impl Iterator<Item = SweepPoint> + '_ {
        self.servers.iter().flat_map(move |m| {
            self.utilizations
                .iter()
                .filter_map(move |u| {
                    let point = SweepPoint::new(*m, *u);
                    if point.is_none() {
                        warn!("skipping unstable point servers={} util={}", m, u);
                    }
                    point
                })
        })
    }
}
