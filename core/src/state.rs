//! Run state snapshot.

use serde::{Deserialize, Serialize};

/// Observable state of one run, mutated only by the runner.
///
/// `progress` is a pre-step fraction: it reflects channels *started*, not
/// channels completed, and only reaches 1.0 on normal completion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub is_running: bool,
    /// Fraction in [0, 1].
    pub progress: f64,
    pub channels_uploaded: usize,
    pub total_channels: usize,
    pub cancelled: bool,
}

impl RunState {
    /// Restore the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = RunState::default();
        assert!(!state.is_running);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.channels_uploaded, 0);
        assert_eq!(state.total_channels, 0);
        assert!(!state.cancelled);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = RunState {
            is_running: true,
            progress: 0.75,
            channels_uploaded: 3,
            total_channels: 4,
            cancelled: true,
        };
        state.reset();
        assert_eq!(state, RunState::default());
    }
}
