//! Run progress card.

use leptos::*;

#[component]
pub fn ProgressSection(
    is_uploading: ReadSignal<bool>,
    /// Fraction in [0, 1], scaled to a percentage for the bar.
    progress: ReadSignal<f64>,
    channels_uploaded: ReadSignal<usize>,
    total_channels: ReadSignal<usize>,
) -> impl IntoView {
    view! {
        <div class="card progress-section">
            <div class="card-title">"Progress"</div>
            <div class="progress-row">
                <span>"Status:"</span>
                <span>{move || if is_uploading.get() { "Uploading..." } else { "Ready" }}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.0}%;", progress.get() * 100.0)
                ></div>
            </div>
            <div class="progress-row">
                <span>"Uploaded:"</span>
                <span>
                    {move || format!("{}/{} channels", channels_uploaded.get(), total_channels.get())}
                </span>
            </div>
        </div>
    }
}
