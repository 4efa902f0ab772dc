//! # zerofeed-domain
//!
//! Pure domain model for the zerofeed battery dashboard.
//!
//! ## Responsibilities
//! - Define the **status snapshot** polled from `/api/status` (system status,
//!   grid and battery power, per-battery readings)
//! - Define the **log snapshot** polled from `/api/logs`
//! - Own the presentation rules that do not depend on a UI framework:
//!   watt formatting, battery health, the recent-log window, CSS class tokens
//! - Define the fetch error taxonomy shared by ports and adapters
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod battery;
pub mod class;
pub mod log;
pub mod power;
pub mod status;
