//! UI Components for the Brandcast application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Page title bar
//! - [`Instructions`] - How-to sidebar
//!
//! # Feature Components
//! - [`VideoPicker`] - Video file selection
//! - [`DetailsForm`] - Title mode, titles, description, privacy
//! - [`Actions`] - Start/Stop/Reset buttons
//! - [`ProgressSection`] - Run status, bar and channel counters
//! - [`SettingsPanel`] - Inert browser-automation settings (demo only)
//! - [`LogsPanel`] - Activity log with auto-scroll
//! - [`SummaryAlert`] - Dismissible completion banner

mod header;
mod upload;
mod settings;
mod progress;
mod logs;
mod instructions;
mod summary;

pub use header::*;
pub use upload::*;
pub use settings::*;
pub use progress::*;
pub use logs::*;
pub use instructions::*;
pub use summary::*;
