//! Dashboard service — one refresh of the status or log section.

use zerofeed_domain::error::FetchError;

use crate::ports::{DashboardApi, DashboardView, RefreshKind};
use crate::views::{LogView, StatusView};

/// Application service refreshing the dashboard sections.
///
/// Refreshes are independent: the status and log sections are fetched and
/// rendered separately, and a failure in one never touches the other.
pub struct DashboardService<A> {
    api: A,
    log_limit: usize,
}

impl<A: DashboardApi> DashboardService<A> {
    /// Create a new service backed by the given API, showing at most
    /// `log_limit` log rows.
    pub fn new(api: A, log_limit: usize) -> Self {
        Self { api, log_limit }
    }

    /// Fetch the status snapshot and map it to its view model.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] reported by the API port.
    pub async fn load_status(&self) -> Result<StatusView, FetchError> {
        let snapshot = self.api.fetch_status().await?;
        Ok(StatusView::from(&snapshot))
    }

    /// Fetch the log snapshot and map it to its view model.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] reported by the API port.
    pub async fn load_logs(&self) -> Result<LogView, FetchError> {
        let snapshot = self.api.fetch_logs().await?;
        Ok(LogView::from_snapshot(&snapshot, self.log_limit))
    }

    /// Refresh the status section of `view`.
    ///
    /// On failure the error is reported and the section is left as it was.
    pub async fn refresh_status<V: DashboardView>(&self, view: &V) {
        match self.load_status().await {
            Ok(status) => view.show_status(status),
            Err(err) => view.report_error(RefreshKind::Status, &err),
        }
    }

    /// Refresh the log section of `view`.
    ///
    /// On failure the error is reported and the section is left as it was.
    pub async fn refresh_logs<V: DashboardView>(&self, view: &V) {
        match self.load_logs().await {
            Ok(logs) => view.show_logs(logs),
            Err(err) => view.report_error(RefreshKind::Logs, &err),
        }
    }
}
