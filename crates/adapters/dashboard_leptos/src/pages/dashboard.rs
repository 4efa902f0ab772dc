//! The dashboard page: system status, power values, batteries and logs.

use leptos::prelude::*;
use zerofeed_app::views::StatusView;

use crate::components::{BatteryGrid, Loading, LogList, PowerValue, StatusIndicator};
use crate::view::DashboardSignals;

/// Dashboard page rendering the latest snapshots.
///
/// Element ids and classes follow the controller's stylesheet.
#[component]
pub fn Dashboard(signals: DashboardSignals) -> impl IntoView {
    let DashboardSignals { status, logs } = signals;

    let status_field = move |field: fn(&StatusView) -> Option<String>| {
        Signal::derive(move || status.with(|s| s.as_ref().and_then(field)))
    };
    let grid_power = status_field(|s| Some(s.grid_power.clone()));
    let battery_power = status_field(|s| Some(s.battery_power.clone()));
    let resulting_power = status_field(|s| s.resulting_power.clone());
    let meter_type = status_field(|s| s.meter_type.clone());
    let controller_mode = status_field(|s| s.controller_mode.clone());
    let updated_at = status_field(|s| s.updated_at.clone());

    let log_count = move || logs.with(|l| l.as_ref().map_or(0, |l| l.total));

    view! {
        <div class="dashboard">
            <section class="card">
                <div class="card-header">
                    <h2>"System"</h2>
                    {move || updated_at.get().map(|t| view! { <span class="updated-at">"Stand: "{t}</span> })}
                </div>
                <div id="systemStatus">
                    {move || match status.get() {
                        Some(current) => view! { <StatusIndicator indicator=current.indicator/> }.into_any(),
                        None => view! { <Loading/> }.into_any(),
                    }}
                </div>
                {move || controller_mode.get().map(|mode| view! { <p class="controller-mode">"Regelung: "{mode}</p> })}
            </section>

            <section class="card power-cards">
                <PowerValue id="gridPower" label="Netz" watts=grid_power/>
                <PowerValue id="batteryPower" label="Akkus" watts=battery_power/>
                <Show when=move || resulting_power.with(Option::is_some)>
                    <PowerValue id="resultingPower" label="Ergebnis" watts=resulting_power/>
                </Show>
                {move || meter_type.get().map(|meter| view! { <span class="meter-type">{meter}</span> })}
            </section>

            <section class="card">
                <div class="card-header">
                    <h2>"Akkus"</h2>
                </div>
                <div id="batteryGrid" class="battery-grid">
                    {move || match status.get() {
                        Some(current) => view! { <BatteryGrid cards=current.batteries/> }.into_any(),
                        None => view! { <Loading/> }.into_any(),
                    }}
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h2>"Logs"</h2>
                    <span id="logCount" class="log-count">{log_count}</span>
                </div>
                <LogList logs/>
            </section>
        </div>
    }
}
