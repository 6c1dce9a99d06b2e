//! Dismissible completion banner.
//!
//! Shown only after a run finishes normally; a cancelled run never
//! triggers it.

use leptos::*;

#[component]
pub fn SummaryAlert(
    show_done: ReadSignal<bool>,
    channels_uploaded: ReadSignal<usize>,
    total_channels: ReadSignal<usize>,
    set_show_done: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || show_done.get() fallback=|| view! { }>
            <div class="alert alert-success">
                <div class="alert-title">"✅ Upload Complete"</div>
                <div class="alert-body">
                    {move || format!(
                        "Finished uploading process. Successfully uploaded to {} of {} channels.",
                        channels_uploaded.get(),
                        total_channels.get()
                    )}
                </div>
                <button class="button outline small" on:click=move |_| set_show_done.set(false)>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}
