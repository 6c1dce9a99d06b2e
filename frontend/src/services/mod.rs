//! Run driver services.
//!
//! The only "backend" of this demo is the simulated runner from
//! `brandcast-core`; these services bridge it to Leptos signals:
//!
//! # Services
//!
//! - [`runner`] - start/stop a simulated run, log helpers, event mapping

pub mod runner;

pub use runner::*;
