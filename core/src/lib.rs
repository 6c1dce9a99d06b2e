//! # Brandcast Core - Simulated multi-channel upload runner
//!
//! Brandcast simulates publishing one video to several YouTube brand
//! channels. Nothing is uploaded anywhere: channel discovery, channel
//! switching and upload confirmation are all fabricated with fixed delays
//! against a mock channel list.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │  UploadJob  │────▶│  resolve()  │────▶│  run() sequencer │
//! │ (form data) │     │ (validate)  │     │ (events + state) │
//! └─────────────┘     └─────────────┘     └──────────────────┘
//! ```
//!
//! The runner is deliberately pure: delays are an injected async sleeper
//! and all output goes through a caller-supplied event sink, so the full
//! sequence can be tested on the host without wall-clock waits and driven
//! in the browser with a wasm timer.
//!
//! ## Modules
//!
//! - [`types`] - Log entry and severity types shared with the UI
//! - [`job`] - Upload job, validation, title cycling
//! - [`state`] - Run state snapshot (progress, counters)
//! - [`config`] - Mock channel list and step delays
//! - [`runner`] - The sequential simulated run loop

pub mod config;
pub mod job;
pub mod runner;
pub mod state;
pub mod types;

pub use config::{Delays, RunConfig};
pub use job::{Privacy, ResolvedJob, TitleMode, UploadJob, ValidationError, VideoFile};
pub use runner::{run, CancelToken, RunEvent, RunOutcome};
pub use state::RunState;
pub use types::{LogEntry, LogLevel};
