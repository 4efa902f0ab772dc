//! Battery grid component: one card per battery of the latest snapshot.

use leptos::prelude::*;
use zerofeed_app::views::BatteryCard;

/// The cards of the battery grid, in payload order.
#[component]
pub fn BatteryGrid(
    /// Cards to display.
    cards: Vec<BatteryCard>,
) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| view! { <BatteryPanel card/> })
        .collect_view()
}

/// A single battery card.
#[component]
fn BatteryPanel(
    /// The battery to display.
    card: BatteryCard,
) -> impl IntoView {
    let BatteryCard {
        title,
        soc,
        power,
        health_class,
        health_label,
        mode,
        ..
    } = card;

    view! {
        <div class="battery-card">
            <div class="battery-header">
                <div class="battery-name">{title}</div>
                <div class="battery-soc">{soc}"%"</div>
            </div>
            <div class="battery-power">{power}"W"</div>
            {mode.map(|mode| view! { <div class="battery-mode">{mode}</div> })}
            <div class="battery-health">
                <div class=format!("status-dot {health_class}")></div>
                {health_label}
            </div>
        </div>
    }
}
