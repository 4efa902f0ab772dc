//! Status snapshot — the payload of `GET /api/status`.

use serde::Deserialize;

use crate::battery::Batteries;
use crate::class;
use crate::error::FetchError;

/// Overall system state as computed by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    /// Severity keyword: `ok`, `warn`/`warning`, `error`, or anything else.
    pub status: String,
    /// Human readable summary (e.g. "System normal").
    pub message: String,
}

impl SystemStatus {
    /// Class of the status dot, `status-{status}`.
    #[must_use]
    pub fn dot_class(&self) -> String {
        class::prefixed("status", &self.status)
    }
}

/// Zero-feed controller state, included by controllers that expose it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerStatus {
    /// Current regulation mode (e.g. "Stop", "Laden", "Entladen").
    pub mode_text: Option<String>,
    /// Whether automatic regulation is active.
    pub enabled: Option<bool>,
}

/// One full poll of the status endpoint.
///
/// Each snapshot replaces the previous one entirely; nothing is merged.
/// `system_status` is the only mandatory field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    pub system_status: SystemStatus,
    /// Grid power in watts (positive = import).
    pub grid_power: Option<f64>,
    /// Total battery power in watts (positive = discharge).
    pub battery_power: Option<f64>,
    /// Grid power minus battery power.
    pub resulting_power: Option<f64>,
    /// Kind of energy meter feeding the controller.
    pub meter_type: Option<String>,
    /// Server time of the snapshot, ISO 8601 without offset.
    pub timestamp: Option<String>,
    pub controller: Option<ControllerStatus>,
    #[serde(default)]
    pub batteries: Batteries,
}

impl StatusSnapshot {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Parse`] if the body is not valid JSON or does not
    /// match the snapshot shape.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }
}
