//! System status indicator: a coloured dot and the status message.

use leptos::prelude::*;
use zerofeed_app::views::Indicator;

/// The dot class comes from the status keyword, e.g. `status-ok`.
#[component]
pub fn StatusIndicator(indicator: Indicator) -> impl IntoView {
    view! {
        <div class="status-indicator">
            <div class=format!("status-dot {}", indicator.dot_class)></div>
            <span>{indicator.message}</span>
        </div>
    }
}
