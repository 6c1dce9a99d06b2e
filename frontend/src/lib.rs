//! Brandcast - Frontend Rust/Leptos Application
//!
//! A WebAssembly demonstration UI that simulates uploading one video to
//! several YouTube brand channels. No real upload happens: the run loop,
//! channel list and delays all come from `brandcast-core`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── SummaryAlert (after a completed run)                   │
//! │  ├── Tabs: Upload | Settings | Logs                         │
//! │  │   ├── VideoPicker + DetailsForm + Actions + Progress     │
//! │  │   ├── SettingsPanel (inert demo fields)                  │
//! │  │   └── LogsPanel                                          │
//! │  └── Instructions (sidebar)                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Frontend constants (app name, log cap)
//! - [`components`] - UI components (Header, UploadForm, Logs, etc.)
//! - [`services`] - The run driver bridging the core runner to signals

use brandcast_core::{CancelToken, LogEntry, Privacy, TitleMode, UploadJob, VideoFile};
use leptos::html;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Brandcast - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

/// Active tab of the main panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Upload,
    Settings,
    Logs,
}

#[component]
fn MainContent() -> impl IntoView {
    // Job fields, exactly as typed.
    let (video_file, set_video_file) = create_signal(None::<VideoFile>);
    let (title_mode, set_title_mode) = create_signal(TitleMode::Multiple);
    let (single_title, set_single_title) = create_signal(String::new());
    let (multiple_titles, set_multiple_titles) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (privacy, set_privacy) = create_signal(Privacy::Public);

    // Run state, mutated only through the runner service.
    let (is_uploading, set_is_uploading) = create_signal(false);
    let (progress, set_progress) = create_signal(0.0_f64);
    let (channels_uploaded, set_channels_uploaded) = create_signal(0_usize);
    let (total_channels, set_total_channels) = create_signal(0_usize);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());
    let (show_done, set_show_done) = create_signal(false);

    let (active_tab, set_active_tab) = create_signal(Tab::Upload);
    let cancel_slot = store_value(None::<CancelToken>);
    let file_input = create_node_ref::<html::Input>();

    let handles = RunHandles {
        set_is_uploading,
        set_progress,
        set_channels_uploaded,
        set_total_channels,
        set_logs,
        set_show_done,
    };

    let on_start = Callback::new(move |_: ()| {
        let job = UploadJob {
            video: video_file.get_untracked(),
            title_mode: title_mode.get_untracked(),
            single_title: single_title.get_untracked(),
            multiple_titles: multiple_titles.get_untracked(),
            description: description.get_untracked(),
            privacy: privacy.get_untracked(),
        };
        start_run(job, handles, cancel_slot, is_uploading);
    });

    let on_stop = Callback::new(move |_: ()| stop_run(cancel_slot));

    let on_reset = Callback::new(move |_: ()| {
        // Callers must cancel first; the button is disabled while running.
        if is_uploading.get_untracked() {
            return;
        }
        set_video_file.set(None);
        set_title_mode.set(TitleMode::Multiple);
        set_single_title.set(String::new());
        set_multiple_titles.set(String::new());
        set_description.set(String::new());
        set_privacy.set(Privacy::Public);
        set_progress.set(0.0);
        set_channels_uploaded.set(0);
        set_total_channels.set(0);
        set_logs.set(Vec::new());
        set_show_done.set(false);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    });

    view! {
        <Header/>

        <div class="container">
            <SummaryAlert
                show_done=show_done
                channels_uploaded=channels_uploaded
                total_channels=total_channels
                set_show_done=set_show_done
            />

            <div class="main-grid">
                <div class="main-column">
                    <div class="tab-bar">
                        <button
                            class="tab"
                            class:active=move || active_tab.get() == Tab::Upload
                            on:click=move |_| set_active_tab.set(Tab::Upload)
                        >
                            "Upload"
                        </button>
                        <button
                            class="tab"
                            class:active=move || active_tab.get() == Tab::Settings
                            on:click=move |_| set_active_tab.set(Tab::Settings)
                        >
                            "Settings"
                        </button>
                        <button
                            class="tab"
                            class:active=move || active_tab.get() == Tab::Logs
                            on:click=move |_| set_active_tab.set(Tab::Logs)
                        >
                            "Logs"
                        </button>
                    </div>

                    <Show when=move || active_tab.get() == Tab::Upload fallback=|| view! { }>
                        <VideoPicker
                            video_file=video_file
                            set_video_file=set_video_file
                            set_logs=set_logs
                            is_uploading=is_uploading
                            file_input=file_input
                        />
                        <DetailsForm
                            title_mode=title_mode
                            set_title_mode=set_title_mode
                            single_title=single_title
                            set_single_title=set_single_title
                            multiple_titles=multiple_titles
                            set_multiple_titles=set_multiple_titles
                            description=description
                            set_description=set_description
                            privacy=privacy
                            set_privacy=set_privacy
                            is_uploading=is_uploading
                        />
                        <Actions
                            is_uploading=is_uploading
                            video_file=video_file
                            on_start=on_start
                            on_stop=on_stop
                            on_reset=on_reset
                        />
                        <ProgressSection
                            is_uploading=is_uploading
                            progress=progress
                            channels_uploaded=channels_uploaded
                            total_channels=total_channels
                        />
                    </Show>

                    <Show when=move || active_tab.get() == Tab::Settings fallback=|| view! { }>
                        <SettingsPanel is_uploading=is_uploading/>
                    </Show>

                    <Show when=move || active_tab.get() == Tab::Logs fallback=|| view! { }>
                        <LogsPanel logs=logs set_logs=set_logs/>
                    </Show>
                </div>

                <div class="side-column">
                    <Instructions/>
                </div>
            </div>
        </div>
    }
}
