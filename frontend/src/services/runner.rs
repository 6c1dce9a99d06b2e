//! Drives the simulated run loop and maps its events onto signals.
//!
//! The core runner owns the run state while it is active; everything the
//! UI shows (logs, progress, counters) arrives here as [`RunEvent`]s and
//! is written into the corresponding signals. Suspension points use the
//! browser timer via `gloo-timers`, so the UI stays responsive and the
//! Stop button can request cooperative cancellation.

use brandcast_core::{run, CancelToken, LogEntry, LogLevel, RunConfig, RunEvent, UploadJob};
use gloo_timers::future::sleep;
use leptos::*;

use crate::config::MAX_LOG_ENTRIES;

/// Write handles for everything a run mutates.
#[derive(Clone, Copy)]
pub struct RunHandles {
    pub set_is_uploading: WriteSignal<bool>,
    pub set_progress: WriteSignal<f64>,
    pub set_channels_uploaded: WriteSignal<usize>,
    pub set_total_channels: WriteSignal<usize>,
    pub set_logs: WriteSignal<Vec<LogEntry>>,
    pub set_show_done: WriteSignal<bool>,
}

/// Append a timestamped entry to the activity log.
pub fn push_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: &str) {
    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();

    set_logs.update(|logs| {
        logs.push(LogEntry {
            level,
            message: message.to_string(),
            timestamp,
        });
        // Keep max logs in memory
        if logs.len() > MAX_LOG_ENTRIES {
            logs.remove(0);
        }
    });

    // Log also to the browser console
    log::info!("{}", message);
}

/// Validate the job and, if it passes, spawn the simulated run.
///
/// At most one run may be active at a time; a second start while
/// `is_uploading` is true is ignored. Validation failures produce a single
/// log line and leave all run state untouched.
pub fn start_run(
    job: UploadJob,
    handles: RunHandles,
    cancel_slot: StoredValue<Option<CancelToken>>,
    is_uploading: ReadSignal<bool>,
) {
    if is_uploading.get_untracked() {
        return;
    }

    let resolved = match job.resolve() {
        Ok(resolved) => resolved,
        Err(err) => {
            push_log(handles.set_logs, LogLevel::Error, &format!("Error: {}", err));
            return;
        }
    };

    let cancel = CancelToken::new();
    cancel_slot.set_value(Some(cancel.clone()));

    spawn_local(async move {
        let config = RunConfig::default();
        run(&resolved, &config, &cancel, |d| sleep(d), move |event| {
            apply_event(event, handles)
        })
        .await;
        cancel_slot.set_value(None);
    });
}

/// Request cooperative cancellation of the active run, if any.
///
/// The runner observes the token at the next channel boundary; a step that
/// already started runs to completion first.
pub fn stop_run(cancel_slot: StoredValue<Option<CancelToken>>) {
    if let Some(cancel) = cancel_slot.get_value() {
        cancel.cancel();
    }
}

/// Clear the activity log, leaving run state untouched.
pub fn clear_logs(set_logs: WriteSignal<Vec<LogEntry>>) {
    set_logs.set(Vec::new());
    push_log(set_logs, LogLevel::Info, "Logs cleared");
}

fn apply_event(event: RunEvent, handles: RunHandles) {
    match event {
        RunEvent::Log { level, message } => push_log(handles.set_logs, level, &message),
        RunEvent::State(state) => {
            handles.set_is_uploading.set(state.is_running);
            handles.set_progress.set(state.progress);
            handles.set_channels_uploaded.set(state.channels_uploaded);
            handles.set_total_channels.set(state.total_channels);
        }
        RunEvent::Completed { .. } => handles.set_show_done.set(true),
    }
}
