//! Dashboard view port — where refreshed view models end up.

use std::fmt;

use zerofeed_domain::error::FetchError;

use crate::views::{LogView, StatusView};

/// Which section of the dashboard a refresh belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Status,
    Logs,
}

impl RefreshKind {
    /// Prefix written in front of console error messages.
    #[must_use]
    pub fn error_prefix(self) -> &'static str {
        match self {
            Self::Status => "Status update error:",
            Self::Logs => "Log update error:",
        }
    }
}

impl fmt::Display for RefreshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => f.write_str("status"),
            Self::Logs => f.write_str("logs"),
        }
    }
}

/// Render target for the dashboard.
///
/// A successful refresh replaces the whole section with the new view model.
/// A failed refresh only reports the error; the section keeps what it showed.
pub trait DashboardView {
    /// Replace the status section (indicator, power values, battery grid).
    fn show_status(&self, view: StatusView);

    /// Replace the log section (counter and log list).
    fn show_logs(&self, view: LogView);

    /// Surface a failed refresh to the operator console.
    fn report_error(&self, kind: RefreshKind, error: &FetchError);
}
