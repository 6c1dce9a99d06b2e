//! Inert automation settings tab.
//!
//! These fields mirror what a real browser-automation backend would need
//! (Chrome profile, driver path, waits). They are display-only: nothing
//! reads them and the simulated run ignores them entirely.

use leptos::*;

#[component]
pub fn SettingsPanel(is_uploading: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">"Chrome/Chromium Settings"</div>
            <p class="card-subtitle">
                "These settings are for demonstration purposes only. In a real \
                 application, these would configure the browser automation."
            </p>

            <div class="field">
                <label class="field-label" for="profile-path">"User Profile Path"</label>
                <input
                    id="profile-path"
                    type="text"
                    placeholder="C:\\Users\\YourName\\AppData\\Local\\Google\\Chrome\\User Data"
                    disabled=move || is_uploading.get()
                />
            </div>
            <div class="field">
                <label class="field-label" for="binary-path">"Browser Binary Path (Optional)"</label>
                <input
                    id="binary-path"
                    type="text"
                    placeholder="C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe"
                    disabled=move || is_uploading.get()
                />
            </div>
            <div class="field">
                <label class="field-label" for="driver-path">"ChromeDriver Path (Optional)"</label>
                <input
                    id="driver-path"
                    type="text"
                    placeholder="C:\\WebDrivers\\chromedriver.exe"
                    disabled=move || is_uploading.get()
                />
                <p class="field-hint">
                    "Leave blank to use webdriver-manager (if installed) or system PATH"
                </p>
            </div>

            <button class="button outline" disabled=move || is_uploading.get()>
                "⚙ Save Settings"
            </button>
        </div>

        <div class="card">
            <div class="card-title">"Timing Settings (seconds)"</div>
            <div class="field-grid">
                <div class="field">
                    <label class="field-label" for="wait-timeout">"Explicit Wait Timeout"</label>
                    <input
                        id="wait-timeout"
                        type="number"
                        value="30"
                        min="1"
                        disabled=move || is_uploading.get()
                    />
                    <p class="field-hint">"Max time to wait for elements"</p>
                </div>
                <div class="field">
                    <label class="field-label" for="page-load">"Page Load Static Wait"</label>
                    <input
                        id="page-load"
                        type="number"
                        value="10"
                        min="1"
                        disabled=move || is_uploading.get()
                    />
                    <p class="field-hint">"Wait after channel switch/major loads"</p>
                </div>
            </div>
            <div class="field">
                <label class="field-label" for="channel-wait">"Between Channels Static Wait"</label>
                <input
                    id="channel-wait"
                    type="number"
                    value="5"
                    min="1"
                    disabled=move || is_uploading.get()
                />
                <p class="field-hint">"Wait before starting next channel"</p>
            </div>
        </div>
    }
}
