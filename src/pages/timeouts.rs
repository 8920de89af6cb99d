use std::time::Duration;

use crate::capability::{DeviceProfile, Series};

/// UI wait budgets for one device, already scaled by its multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeouts {
    pub default: Duration,
    pub short: Duration,
    pub long: Duration,
    pub poll_interval: Duration,
}

const POLL_INTERVAL: Duration = Duration::from_millis(500);

impl Timeouts {
    /// Series 3 consoles are slower and get larger bases. Before detection
    /// (no profile) the Series 2 bases apply.
    pub fn for_profile(profile: Option<&DeviceProfile>) -> Self {
        let (default, short, long, multiplier) = match profile {
            Some(p) if p.series == Series::Three => (90, 10, 120, p.timeout_multiplier()),
            Some(p) => (30, 5, 60, p.timeout_multiplier()),
            None => (30, 5, 60, 1.0),
        };
        Self {
            default: Duration::from_secs(default).mul_f64(multiplier),
            short: Duration::from_secs(short).mul_f64(multiplier),
            long: Duration::from_secs(long).mul_f64(multiplier),
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self::for_profile(None)
    }
}
