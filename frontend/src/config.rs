//! Application configuration.
//!
//! Centralized constants for the Brandcast frontend. The simulated run
//! itself (channel list, step delays) is configured in `brandcast-core`.

/// Application name for the header and page title.
pub const APP_NAME: &str = "YouTube Brand Channel Uploader";

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 200;
