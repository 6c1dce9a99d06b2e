//! Upload form: video selection, video details and run actions.
//!
//! All inputs are disabled while a run is active; the run itself is
//! started/stopped through the callbacks owned by `MainContent`.

use brandcast_core::{LogEntry, LogLevel, Privacy, TitleMode, VideoFile};
use leptos::html;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::services::push_log;

/// Video file selection card.
#[component]
pub fn VideoPicker(
    video_file: ReadSignal<Option<VideoFile>>,
    set_video_file: WriteSignal<Option<VideoFile>>,
    set_logs: WriteSignal<Vec<LogEntry>>,
    is_uploading: ReadSignal<bool>,
    /// Owned by `MainContent` so Reset can clear the element's value.
    file_input: NodeRef<html::Input>,
) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                push_log(
                    set_logs,
                    LogLevel::Info,
                    &format!("Video selected: {}", file.name()),
                );
                set_video_file.set(Some(VideoFile {
                    name: file.name(),
                    size_bytes: file.size(),
                }));
            }
        }
    };

    view! {
        <div class="card">
            <div class="card-title">"Video Selection"</div>
            <input
                type="file"
                accept="video/*"
                node_ref=file_input
                on:change=on_file_change
                disabled=move || is_uploading.get()
            />
            <Show when=move || video_file.get().is_some() fallback=|| view! { }>
                <p class="file-summary">
                    {move || {
                        video_file
                            .get()
                            .map(|f| format!("Selected: {} ({:.2} MB)", f.name, f.size_mb()))
                            .unwrap_or_default()
                    }}
                </p>
            </Show>
        </div>
    }
}

/// Title mode, title(s), description and privacy card.
#[component]
pub fn DetailsForm(
    title_mode: ReadSignal<TitleMode>,
    set_title_mode: WriteSignal<TitleMode>,
    single_title: ReadSignal<String>,
    set_single_title: WriteSignal<String>,
    multiple_titles: ReadSignal<String>,
    set_multiple_titles: WriteSignal<String>,
    description: ReadSignal<String>,
    set_description: WriteSignal<String>,
    privacy: ReadSignal<Privacy>,
    set_privacy: WriteSignal<Privacy>,
    is_uploading: ReadSignal<bool>,
) -> impl IntoView {
    let on_privacy_change = move |ev: Event| {
        let selected = match event_target_value(&ev).as_str() {
            "unlisted" => Privacy::Unlisted,
            "private" => Privacy::Private,
            _ => Privacy::Public,
        };
        set_privacy.set(selected);
    };

    view! {
        <div class="card">
            <div class="card-title">"Video Details"</div>

            <div class="field">
                <label class="field-label">"Title Mode"</label>
                <div class="radio-row">
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="title-mode"
                            prop:checked=move || title_mode.get() == TitleMode::Single
                            on:change=move |_| set_title_mode.set(TitleMode::Single)
                            disabled=move || is_uploading.get()
                        />
                        "Single Title"
                    </label>
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="title-mode"
                            prop:checked=move || title_mode.get() == TitleMode::Multiple
                            on:change=move |_| set_title_mode.set(TitleMode::Multiple)
                            disabled=move || is_uploading.get()
                        />
                        "Multiple Titles (1 per line)"
                    </label>
                </div>
            </div>

            <Show
                when=move || title_mode.get() == TitleMode::Single
                fallback=move || view! {
                    <div class="field">
                        <label class="field-label" for="titles">"Titles (1 per line)"</label>
                        <textarea
                            id="titles"
                            rows=5
                            placeholder="Enter one title per line"
                            prop:value=move || multiple_titles.get()
                            on:input=move |ev| set_multiple_titles.set(event_target_value(&ev))
                            disabled=move || is_uploading.get()
                        ></textarea>
                    </div>
                }
            >
                <div class="field">
                    <label class="field-label" for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="Enter video title"
                        prop:value=move || single_title.get()
                        on:input=move |ev| set_single_title.set(event_target_value(&ev))
                        disabled=move || is_uploading.get()
                    />
                </div>
            </Show>

            <div class="field">
                <label class="field-label" for="description">"Description (Optional)"</label>
                <textarea
                    id="description"
                    rows=4
                    placeholder="Enter video description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    disabled=move || is_uploading.get()
                ></textarea>
            </div>

            <div class="field">
                <label class="field-label" for="privacy">"Privacy"</label>
                <select
                    id="privacy"
                    prop:value=move || privacy.get().as_str()
                    on:change=on_privacy_change
                    disabled=move || is_uploading.get()
                >
                    <option value="public">"Public"</option>
                    <option value="unlisted">"Unlisted"</option>
                    <option value="private">"Private"</option>
                </select>
            </div>
        </div>
    }
}

/// Start/Stop/Reset row.
///
/// Start is replaced by Stop while a run is active; Reset is disabled
/// until the run ends.
#[component]
pub fn Actions(
    is_uploading: ReadSignal<bool>,
    video_file: ReadSignal<Option<VideoFile>>,
    on_start: Callback<()>,
    on_stop: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="actions">
            <Show
                when=move || !is_uploading.get()
                fallback=move || view! {
                    <button class="button danger" on:click=move |_| on_stop.call(())>
                        "Stop"
                    </button>
                }
            >
                <button
                    class="button primary"
                    disabled=move || video_file.get().is_none()
                    on:click=move |_| on_start.call(())
                >
                    "▶ Start Upload"
                </button>
            </Show>
            <button
                class="button outline"
                disabled=move || is_uploading.get()
                on:click=move |_| on_reset.call(())
            >
                "Reset"
            </button>
        </div>
    }
}
