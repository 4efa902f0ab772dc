//! # zerofeed-app
//!
//! Application layer — use-cases, view models and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DashboardApi` — fetch the status and log snapshots
//!   - `DashboardView` — render view models, report failed refreshes
//! - Define the **use-case** driving a refresh: `DashboardService`
//! - Map domain snapshots to framework-free view models
//! - Own the dashboard configuration (defaults, overrides, validation)
//!
//! ## Dependency rule
//! Depends on `zerofeed-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod services;
pub mod views;
