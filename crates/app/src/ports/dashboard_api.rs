//! Dashboard API port — fetch the snapshots polled by the dashboard.

use std::future::Future;
use std::rc::Rc;

use zerofeed_domain::error::FetchError;
use zerofeed_domain::log::LogSnapshot;
use zerofeed_domain::status::StatusSnapshot;

/// Source of status and log snapshots (the controller's HTTP API).
pub trait DashboardApi {
    /// Fetch the current status snapshot.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>>;

    /// Fetch the current log snapshot.
    fn fetch_logs(&self) -> impl Future<Output = Result<LogSnapshot, FetchError>>;
}

impl<T: DashboardApi> DashboardApi for Rc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>> {
        (**self).fetch_status()
    }

    fn fetch_logs(&self) -> impl Future<Output = Result<LogSnapshot, FetchError>> {
        (**self).fetch_logs()
    }
}
