//! Application services (use-cases).

pub mod dashboard_service;
