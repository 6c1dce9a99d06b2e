//! Page header component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"📤 " {APP_NAME}</h1>
            <span class="header-badge">"Web Demo"</span>
        </header>
    }
}
