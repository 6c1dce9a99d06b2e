//! Mock run configuration.
//!
//! The channel list and the per-step delays are injectable so the UI can
//! use the demo defaults while tests drive the runner with any list and a
//! no-op sleeper.

use std::time::Duration;

/// Fixed delays between simulated steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delays {
    /// Simulated channel discovery.
    pub discovery: Duration,
    /// Simulated switch to a channel.
    pub channel_switch: Duration,
    /// Simulated video processing.
    pub processing: Duration,
    /// Wait between two channels.
    pub between_channels: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            discovery: Duration::from_millis(2000),
            channel_switch: Duration::from_millis(1500),
            processing: Duration::from_millis(3000),
            between_channels: Duration::from_millis(2000),
        }
    }
}

/// Channel list and delays for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub channels: Vec<String>,
    pub delays: Delays,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            channels: vec![
                "Brand Channel 1".to_string(),
                "Brand Channel 2".to_string(),
                "Brand Channel 3".to_string(),
                "Brand Channel 4".to_string(),
            ],
            delays: Delays::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel_list_has_four_entries() {
        let config = RunConfig::default();
        assert_eq!(config.channels.len(), 4);
        assert_eq!(config.channels[0], "Brand Channel 1");
        assert_eq!(config.channels[3], "Brand Channel 4");
    }
}
