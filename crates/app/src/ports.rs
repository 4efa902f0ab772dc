//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The dashboard runs on a single-threaded event loop, so none of the
//! futures returned by ports are required to be `Send`.

pub mod dashboard_api;
pub mod dashboard_view;

pub use dashboard_api::DashboardApi;
pub use dashboard_view::{DashboardView, RefreshKind};
