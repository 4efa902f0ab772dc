//! # zerofeed-dashboard
//!
//! Browser dashboard for the zero-feed battery controller, rendered client
//! side with Leptos.
//!
//! On load the dashboard fetches `/api/status` and `/api/logs` once, then
//! every `poll_interval_ms` (2 s by default) until the page unloads. Each
//! successful poll replaces its section; a failed poll is logged to the
//! browser console and leaves the section as it was.

use std::rc::Rc;

use leptos::prelude::*;
use zerofeed_app::services::dashboard_service::DashboardService;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod poller;
pub mod view;

use api::HttpDashboardApi;
use pages::Dashboard;
use poller::Poller;

/// Root application component.
///
/// Owns the poller for the lifetime of the page.
#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    let (signals, sink) = view::dashboard_signals();

    let service = Rc::new(DashboardService::new(
        HttpDashboardApi::new(&config),
        config.log_limit,
    ));
    let poller = Poller::start(service, sink, config.poll_interval_ms);
    let _poller = StoredValue::new_local(poller);

    view! {
        <main>
            <Dashboard signals/>
        </main>
    }
}
