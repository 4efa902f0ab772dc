//! Scrolling log list showing the most recent log rows.

use leptos::html::Div;
use leptos::prelude::*;
use zerofeed_app::views::{LogRow, LogView};

/// The log container (`#logContainer`).
///
/// Re-renders whenever a new log snapshot arrives and then scrolls to the
/// bottom so the newest entry is visible.
#[component]
pub fn LogList(
    /// Latest log view, `None` before the first snapshot.
    logs: ReadSignal<Option<LogView>>,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();

    Effect::new(move |_| {
        logs.track();
        request_animation_frame(move || {
            if let Some(el) = container.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    });

    view! {
        <div id="logContainer" class="log-container" node_ref=container>
            {move || {
                logs.get().map(|log_view| {
                    log_view.rows
                        .into_iter()
                        .map(|row| view! { <LogLine row/> })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// A single log row.
#[component]
fn LogLine(
    /// The row to display.
    row: LogRow,
) -> impl IntoView {
    let LogRow {
        timestamp,
        level,
        level_class,
        message,
    } = row;

    view! {
        <div class="log-entry">
            <span class="log-time">{timestamp}</span>
            <span class=format!("log-level {level_class}")>{level}</span>
            <span class="log-message">{message}</span>
        </div>
    }
}
