//! View models — what each dashboard region shows, independent of the DOM.
//!
//! Numbers are pre-formatted without their unit; components append `W` or `%`.
//! View models compare by value, so rendering the same snapshot twice yields
//! equal views.

use zerofeed_domain::battery::BatteryReading;
use zerofeed_domain::log::{LogEntry, LogSnapshot};
use zerofeed_domain::power::{format_percent, format_watts};
use zerofeed_domain::status::StatusSnapshot;
use zerofeed_domain::time::clock_time;

/// Content of the system status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    /// Class of the status dot, e.g. `status-ok`.
    pub dot_class: String,
    pub message: String,
}

/// One card of the battery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryCard {
    pub id: String,
    /// Card title, `Akku {id}`.
    pub title: String,
    /// State of charge without the `%` sign.
    pub soc: String,
    /// Power in whole watts without the unit.
    pub power: String,
    /// Class of the health dot, `status-ok` or `status-error`.
    pub health_class: String,
    /// `Online` or `Fehler: {count}`.
    pub health_label: String,
    pub mode: Option<String>,
}

impl BatteryCard {
    fn new(id: &str, reading: &BatteryReading) -> Self {
        let health = reading.health();
        Self {
            id: id.to_string(),
            title: format!("Akku {id}"),
            soc: format_percent(reading.soc),
            power: format_watts(reading.power),
            health_class: format!("status-{}", health.token()),
            health_label: health.to_string(),
            mode: reading.mode_text.clone(),
        }
    }
}

/// Everything rendered from one status snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub indicator: Indicator,
    /// Grid power in whole watts.
    pub grid_power: String,
    /// Battery power in whole watts.
    pub battery_power: String,
    /// Net power after battery compensation, when the server reports it.
    pub resulting_power: Option<String>,
    pub meter_type: Option<String>,
    pub controller_mode: Option<String>,
    /// Time of the snapshot as `HH:MM:SS`.
    pub updated_at: Option<String>,
    /// One card per battery, in payload order.
    pub batteries: Vec<BatteryCard>,
}

impl From<&StatusSnapshot> for StatusView {
    fn from(snapshot: &StatusSnapshot) -> Self {
        Self {
            indicator: Indicator {
                dot_class: snapshot.system_status.dot_class(),
                message: snapshot.system_status.message.clone(),
            },
            grid_power: format_watts(snapshot.grid_power),
            battery_power: format_watts(snapshot.battery_power),
            resulting_power: snapshot.resulting_power.map(|p| format_watts(Some(p))),
            meter_type: snapshot.meter_type.clone(),
            controller_mode: snapshot
                .controller
                .as_ref()
                .and_then(|c| c.mode_text.clone()),
            updated_at: snapshot.timestamp.as_deref().and_then(clock_time),
            batteries: snapshot
                .batteries
                .iter()
                .map(|(id, reading)| BatteryCard::new(id, reading))
                .collect(),
        }
    }
}

/// One row of the log list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub timestamp: String,
    pub level: String,
    /// Class of the level badge, e.g. `log-info`.
    pub level_class: String,
    pub message: String,
}

impl From<&LogEntry> for LogRow {
    fn from(entry: &LogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.clone(),
            level: entry.level.clone(),
            level_class: entry.level_class(),
            message: entry.message.clone(),
        }
    }
}

/// Everything rendered from one log snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogView {
    /// Number of entries in the snapshot, not the number of rows shown.
    pub total: usize,
    /// The most recent entries, oldest first.
    pub rows: Vec<LogRow>,
}

impl LogView {
    /// Build the view keeping at most `limit` rows.
    #[must_use]
    pub fn from_snapshot(snapshot: &LogSnapshot, limit: usize) -> Self {
        Self {
            total: snapshot.len(),
            rows: snapshot.recent(limit).iter().map(LogRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerofeed_domain::log::DEFAULT_RECENT_LIMIT;

    const STATUS_EXAMPLE: &str = r#"{
        "system_status": {"status": "ok", "message": "Running"},
        "grid_power": 1523.7,
        "battery_power": -340.2,
        "batteries": {
            "A": {"soc": 87, "power": 120, "error_count": 0},
            "B": {"soc": 54, "power": -80, "error_count": 2}
        }
    }"#;

    fn status_view(body: &str) -> StatusView {
        StatusView::from(&StatusSnapshot::from_json(body).unwrap())
    }

    #[test]
    fn should_render_example_status() {
        let view = status_view(STATUS_EXAMPLE);

        assert_eq!(view.indicator.dot_class, "status-ok");
        assert_eq!(view.indicator.message, "Running");
        assert_eq!(view.grid_power, "1524");
        assert_eq!(view.battery_power, "-340");
        assert_eq!(view.batteries.len(), 2);

        let a = &view.batteries[0];
        assert_eq!(a.title, "Akku A");
        assert_eq!(a.soc, "87");
        assert_eq!(a.power, "120");
        assert_eq!(a.health_class, "status-ok");
        assert_eq!(a.health_label, "Online");

        let b = &view.batteries[1];
        assert_eq!(b.title, "Akku B");
        assert_eq!(b.soc, "54");
        assert_eq!(b.power, "-80");
        assert_eq!(b.health_class, "status-error");
        assert_eq!(b.health_label, "Fehler: 2");
    }

    #[test]
    fn should_render_absent_power_as_zero() {
        let view = status_view(r#"{"system_status": {"status": "error", "message": "x"}}"#);
        assert_eq!(view.grid_power, "0");
        assert_eq!(view.battery_power, "0");
        assert_eq!(view.resulting_power, None);
        assert!(view.batteries.is_empty());
    }

    #[test]
    fn should_render_one_card_per_battery_with_defaults() {
        let view = status_view(
            r#"{"system_status": {}, "batteries": {"1": {}, "2": {"error_count": 7}, "3": {"soc": null}}}"#,
        );
        let labels: Vec<&str> = view
            .batteries
            .iter()
            .map(|c| c.health_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Online", "Fehler: 7", "Online"]);
        assert!(view.batteries.iter().all(|c| c.soc == "0" && c.power == "0"));
    }

    #[test]
    fn should_render_supplementary_fields() {
        let view = status_view(
            r#"{
                "system_status": {"status": "ok", "message": "System normal"},
                "resulting_power": -3.6,
                "meter_type": "ecotracker",
                "timestamp": "2024-05-01T12:30:05.5",
                "controller": {"mode_text": "Entladen"},
                "batteries": {"1": {"soc": 61.5, "current_power": 300, "mode_text": "Entladen"}}
            }"#,
        );
        assert_eq!(view.resulting_power.as_deref(), Some("-4"));
        assert_eq!(view.meter_type.as_deref(), Some("ecotracker"));
        assert_eq!(view.controller_mode.as_deref(), Some("Entladen"));
        assert_eq!(view.updated_at.as_deref(), Some("12:30:05"));
        assert_eq!(view.batteries[0].soc, "61.5");
        assert_eq!(view.batteries[0].power, "300");
        assert_eq!(view.batteries[0].mode.as_deref(), Some("Entladen"));
    }

    #[test]
    fn should_sanitize_status_class() {
        let view = status_view(r#"{"system_status": {"status": "ok\" onclick=\"x", "message": "m"}}"#);
        assert_eq!(view.indicator.dot_class, "status-okonclickx");
    }

    #[test]
    fn should_produce_equal_views_for_identical_payloads() {
        assert_eq!(status_view(STATUS_EXAMPLE), status_view(STATUS_EXAMPLE));
    }

    #[test]
    fn should_count_all_entries_but_show_last_twenty() {
        let logs = (1..=25)
            .map(|n| {
                format!(r#"{{"timestamp": "12:00:{n:02}", "level": "INFO", "message": "entry {n}"}}"#)
            })
            .collect::<Vec<_>>()
            .join(",");
        let snapshot = LogSnapshot::from_json(&format!(r#"{{"logs": [{logs}]}}"#)).unwrap();

        let view = LogView::from_snapshot(&snapshot, DEFAULT_RECENT_LIMIT);

        assert_eq!(view.total, 25);
        assert_eq!(view.rows.len(), 20);
        let messages: Vec<String> = view.rows.iter().map(|r| r.message.clone()).collect();
        let expected: Vec<String> = (6..=25).map(|n| format!("entry {n}")).collect();
        assert_eq!(messages, expected);
    }

    #[test]
    fn should_show_all_rows_when_below_limit() {
        let snapshot = LogSnapshot::from_json(
            r#"{"logs": [
                {"timestamp": "08:00:00", "level": "WARNING", "message": "Setup-Modus aktiviert"},
                {"timestamp": "08:00:01", "level": "ERROR", "message": "<b>Modbus</b> timeout"}
            ]}"#,
        )
        .unwrap();

        let view = LogView::from_snapshot(&snapshot, DEFAULT_RECENT_LIMIT);

        assert_eq!(view.total, 2);
        assert_eq!(view.rows[0].level_class, "log-warning");
        assert_eq!(view.rows[1].level_class, "log-error");
        assert_eq!(view.rows[1].level, "ERROR");
        assert_eq!(view.rows[1].message, "<b>Modbus</b> timeout");
    }
}
