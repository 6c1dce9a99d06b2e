//! Activity log panel with auto-scroll.

use brandcast_core::LogEntry;
use leptos::*;

use crate::services::clear_logs;

#[component]
pub fn LogsPanel(
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        // Track logs changes
        let _ = logs.get();

        // Scroll to bottom after DOM update
        if let Some(container) = logs_container.get() {
            // Use requestAnimationFrame to ensure DOM is updated
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="card logs-panel">
            <div class="logs-header">
                <span class="card-title">"Logs"</span>
                <button class="button outline small" on:click=move |_| clear_logs(set_logs)>
                    "Clear Logs"
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                <Show
                    when=move || !logs.get().is_empty()
                    fallback=|| view! {
                        <p class="logs-empty">"No logs yet. Start an upload to see activity."</p>
                    }
                >
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(i, _)| *i
                        children=move |(_, entry)| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
