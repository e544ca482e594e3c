#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    /// servers >= 1
    servers: u32,
    /// utilization [0.0, 1.0)
    utilization: f64,
}

impl SweepPoint {
    /// Returns `None` outside the stable region: no servers, or utilization
    /// negative, non-finite or at/above 1.
    pub fn new(servers: u32, utilization: f64) -> Option<Self> {
        if servers == 0 || !utilization.is_finite() || !(0.0..1.0).contains(&utilization) {
            return None;
        }
        Some(Self {
            servers,
            utilization,
        })
    }

    pub fn servers(&self) -> u32 {
        self.servers
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    pub fn offered_load(&self) -> f64 {
        self.utilization * self.servers as f64
    }
}
