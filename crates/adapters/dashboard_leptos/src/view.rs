//! Leptos signals as the render target of the dashboard service.

use leptos::prelude::*;
use zerofeed_app::ports::{DashboardView, RefreshKind};
use zerofeed_app::views::{LogView, StatusView};
use zerofeed_domain::error::FetchError;

/// Write half of the dashboard state.
///
/// Each successful refresh replaces the whole section signal; failed
/// refreshes only log to the browser console.
#[derive(Clone, Copy)]
pub struct SignalView {
    set_status: WriteSignal<Option<StatusView>>,
    set_logs: WriteSignal<Option<LogView>>,
}

/// Read half of the dashboard state. `None` until the first successful poll.
#[derive(Clone, Copy)]
pub struct DashboardSignals {
    pub status: ReadSignal<Option<StatusView>>,
    pub logs: ReadSignal<Option<LogView>>,
}

/// Create the signals backing the dashboard.
pub fn dashboard_signals() -> (DashboardSignals, SignalView) {
    let (status, set_status) = signal(None::<StatusView>);
    let (logs, set_logs) = signal(None::<LogView>);
    (
        DashboardSignals { status, logs },
        SignalView {
            set_status,
            set_logs,
        },
    )
}

impl DashboardView for SignalView {
    fn show_status(&self, view: StatusView) {
        self.set_status.set(Some(view));
    }

    fn show_logs(&self, view: LogView) {
        self.set_logs.set(Some(view));
    }

    fn report_error(&self, kind: RefreshKind, error: &FetchError) {
        leptos::logging::error!("{} {error}", kind.error_prefix());
    }
}
