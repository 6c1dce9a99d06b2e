//! The simulated sequential run loop.
//!
//! One logical thread of control that suspends at fixed delay points,
//! yielding back to the surrounding event loop so the UI stays live.
//! Cancellation is cooperative: the token is only observed at the top of
//! each per-channel iteration, never mid-step, so a step that already
//! started always runs to completion.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::config::RunConfig;
use crate::job::ResolvedJob;
use crate::state::RunState;
use crate::types::LogLevel;

/// Cooperative cancellation flag.
///
/// Cloneable handle; the whole app is single-threaded (wasm), so a plain
/// `Rc<Cell<bool>>` is enough.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Takes effect at the next loop boundary.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Event emitted by the runner as the simulation advances.
#[derive(Clone, Debug, PartialEq)]
pub enum RunEvent {
    /// A human-readable log line (the UI stamps the timestamp).
    Log { level: LogLevel, message: String },
    /// Full state snapshot after every mutation.
    State(RunState),
    /// Normal completion only; never emitted after cancellation.
    Completed { uploaded: usize, total: usize },
}

/// Terminal result of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { uploaded: usize, total: usize },
    Cancelled { uploaded: usize, total: usize },
}

/// Run the simulated upload against every channel in `config`, in order.
///
/// `sleep` is the injected suspension point (a wasm timer in the browser,
/// a no-op future in tests); `emit` receives every log line and state
/// snapshot as it happens.
pub async fn run<S, F, E>(
    job: &ResolvedJob,
    config: &RunConfig,
    cancel: &CancelToken,
    mut sleep: S,
    mut emit: E,
) -> RunOutcome
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
    E: FnMut(RunEvent),
{
    let mut state = RunState {
        is_running: true,
        ..Default::default()
    };
    emit(RunEvent::State(state.clone()));
    log(&mut emit, LogLevel::Info, format!(
        "Starting upload process with video: {}",
        job.video.name
    ));

    // Simulated channel discovery.
    log(&mut emit, LogLevel::Info, "Retrieving list of brand channels...".into());
    sleep(config.delays.discovery).await;

    let total = config.channels.len();
    state.total_channels = total;
    emit(RunEvent::State(state.clone()));
    log(&mut emit, LogLevel::Info, format!("Found {} channels", total));

    for (i, channel) in config.channels.iter().enumerate() {
        // Cancellation is observed here and only here.
        if cancel.is_cancelled() {
            state.cancelled = true;
            break;
        }

        log(&mut emit, LogLevel::Info, format!(
            "--- Processing Channel {}/{}: {} ---",
            i + 1,
            total,
            channel
        ));

        // Pre-step fraction: channels started, not channels completed.
        state.progress = i as f64 / total as f64;
        emit(RunEvent::State(state.clone()));

        log(&mut emit, LogLevel::Info, format!("Switching to channel: {}", channel));
        sleep(config.delays.channel_switch).await;

        log(&mut emit, LogLevel::Info, format!("Initiating upload for {}...", channel));
        log(&mut emit, LogLevel::Info, format!("Setting title: \"{}\"", job.title_for(i)));
        if job.description.is_some() {
            log(&mut emit, LogLevel::Info, "Setting description".into());
        }
        log(&mut emit, LogLevel::Info, format!("Setting privacy to: {}", job.privacy));

        log(&mut emit, LogLevel::Info, "Video processing...".into());
        sleep(config.delays.processing).await;

        log(&mut emit, LogLevel::Success, format!(
            "Video upload confirmed successfully for channel: {}",
            channel
        ));
        state.channels_uploaded += 1;
        emit(RunEvent::State(state.clone()));

        if i + 1 < total {
            log(&mut emit, LogLevel::Info, "Waiting 2 seconds before next channel...".into());
            sleep(config.delays.between_channels).await;
        }
    }

    if state.cancelled {
        log(&mut emit, LogLevel::Warning, "Upload process stopped by user".into());
        state.is_running = false;
        emit(RunEvent::State(state.clone()));
        RunOutcome::Cancelled {
            uploaded: state.channels_uploaded,
            total,
        }
    } else {
        state.progress = 1.0;
        log(&mut emit, LogLevel::Success, "Finished processing all channels".into());
        state.is_running = false;
        emit(RunEvent::State(state.clone()));
        emit(RunEvent::Completed {
            uploaded: state.channels_uploaded,
            total,
        });
        RunOutcome::Completed {
            uploaded: state.channels_uploaded,
            total,
        }
    }
}

fn log<E: FnMut(RunEvent)>(emit: &mut E, level: LogLevel, message: String) {
    emit(RunEvent::Log { level, message });
}
