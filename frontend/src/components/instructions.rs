//! Instructions sidebar.

use leptos::*;

#[component]
pub fn Instructions() -> impl IntoView {
    view! {
        <div class="card sticky">
            <div class="card-title">"📋 Instructions"</div>

            <div class="alert alert-info">
                <div class="alert-title">"Web Demo Version"</div>
                <div class="alert-body">
                    "This is a web demonstration of the YouTube Brand Channel \
                     Uploader. For full functionality with actual YouTube uploads, \
                     you would need the desktop application that can control your \
                     browser."
                </div>
            </div>

            <h3>"How to use:"</h3>
            <ol>
                <li>"Select your video file"</li>
                <li>"Choose title mode (single or multiple)"</li>
                <li>"Enter title(s) - one per line for multiple mode"</li>
                <li>"Add an optional description"</li>
                <li>"Select privacy setting"</li>
                <li>"Click \"Start Upload\" to begin the process"</li>
            </ol>

            <h3>"Multiple Titles Mode:"</h3>
            <p>
                "When using multiple titles mode, each channel will use the \
                 corresponding title from your list. If you have more channels \
                 than titles, the list will cycle from the beginning."
            </p>

            <h3>"Requirements:"</h3>
            <ul>
                <li>"Google Chrome or Chromium browser"</li>
                <li>"Logged in to your YouTube account"</li>
                <li>"Access to your brand channels"</li>
            </ul>
        </div>
    }
}
