//! Battery readings as reported in the status snapshot.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Latest reading of a single battery.
///
/// Every field is optional on the wire; absent and `null` values render as 0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "WireReading")]
pub struct BatteryReading {
    /// State of charge in percent.
    pub soc: Option<f64>,
    /// Signed power in watts. The controller reports it as `current_power`.
    pub power: Option<f64>,
    /// Consecutive communication errors since the last successful exchange.
    pub error_count: Option<i64>,
    /// Human readable operating mode (e.g. "Laden", "Entladen").
    pub mode_text: Option<String>,
}

/// Battery object as sent by the server.
///
/// Counters arrive as any JSON number; `power` wins over `current_power`
/// when both are present.
#[derive(Deserialize, Default)]
#[serde(default)]
struct WireReading {
    soc: Option<f64>,
    power: Option<f64>,
    current_power: Option<f64>,
    error_count: Option<f64>,
    mode_text: Option<String>,
}

impl From<WireReading> for BatteryReading {
    #[allow(clippy::cast_possible_truncation)]
    fn from(wire: WireReading) -> Self {
        Self {
            soc: wire.soc,
            power: wire.power.or(wire.current_power),
            error_count: wire
                .error_count
                .filter(|count| count.is_finite())
                .map(|count| count.trunc() as i64),
            mode_text: wire.mode_text,
        }
    }
}

impl BatteryReading {
    /// Derive the health indicator from the error counter.
    #[must_use]
    pub fn health(&self) -> BatteryHealth {
        match self.error_count {
            Some(count) if count > 0 => BatteryHealth::Faulty(count),
            _ => BatteryHealth::Online,
        }
    }
}

/// Health indicator shown on each battery card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryHealth {
    /// No errors reported.
    Online,
    /// At least one error reported; carries the error count.
    Faulty(i64),
}

impl BatteryHealth {
    /// Status token used for the `status-{token}` dot class.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Online => "ok",
            Self::Faulty(_) => "error",
        }
    }
}

impl fmt::Display for BatteryHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => f.write_str("Online"),
            Self::Faulty(count) => write!(f, "Fehler: {count}"),
        }
    }
}

/// Battery readings keyed by battery id, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batteries(Vec<(String, BatteryReading)>);

impl Batteries {
    /// Number of batteries in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot contains no battery.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(id, reading)` pairs in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BatteryReading)> {
        self.0.iter().map(|(id, reading)| (id.as_str(), reading))
    }

    /// Look up a battery by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BatteryReading> {
        self.0.iter().find(|(key, _)| key == id).map(|(_, r)| r)
    }

    fn insert(&mut self, id: String, reading: BatteryReading) {
        match self.0.iter_mut().find(|(key, _)| *key == id) {
            Some(slot) => slot.1 = reading,
            None => self.0.push((id, reading)),
        }
    }
}

impl<'de> Deserialize<'de> for Batteries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BatteriesVisitor;

        impl<'de> Visitor<'de> for BatteriesVisitor {
            type Value = Batteries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of battery id to battery reading")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Batteries, E> {
                Ok(Batteries::default())
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Batteries, M::Error> {
                let mut batteries = Batteries(Vec::with_capacity(map.size_hint().unwrap_or(0)));
                while let Some((id, reading)) = map.next_entry::<String, BatteryReading>()? {
                    batteries.insert(id, reading);
                }
                Ok(batteries)
            }
        }

        deserializer.deserialize_any(BatteriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_online_when_error_count_is_zero() {
        let reading = BatteryReading {
            error_count: Some(0),
            ..Default::default()
        };
        assert_eq!(reading.health(), BatteryHealth::Online);
    }

    #[test]
    fn should_report_online_when_error_count_is_absent() {
        assert_eq!(BatteryReading::default().health(), BatteryHealth::Online);
    }

    #[test]
    fn should_report_faulty_with_count() {
        let reading = BatteryReading {
            error_count: Some(2),
            ..Default::default()
        };
        let health = reading.health();
        assert_eq!(health, BatteryHealth::Faulty(2));
        assert_eq!(health.token(), "error");
        assert_eq!(health.to_string(), "Fehler: 2");
    }

    #[test]
    fn should_display_online_label() {
        assert_eq!(BatteryHealth::Online.to_string(), "Online");
        assert_eq!(BatteryHealth::Online.token(), "ok");
    }

    #[test]
    fn should_accept_current_power_alias() {
        let reading: BatteryReading =
            serde_json::from_str(r#"{"soc": 40, "current_power": 250.0, "error_count": 0}"#)
                .unwrap();
        assert_eq!(reading.power, Some(250.0));
    }

    #[test]
    fn should_prefer_power_over_current_power() {
        let reading: BatteryReading = serde_json::from_str(
            r#"{"soc": 50, "power": 100, "current_power": 90, "error_count": 0}"#,
        )
        .unwrap();
        assert_eq!(reading.power, Some(100.0));
    }

    #[test]
    fn should_report_online_for_negative_error_count() {
        let reading: BatteryReading = serde_json::from_str(r#"{"error_count": -1}"#).unwrap();
        assert_eq!(reading.error_count, Some(-1));
        assert_eq!(reading.health(), BatteryHealth::Online);
    }

    #[test]
    fn should_accept_integral_float_error_count() {
        let reading: BatteryReading = serde_json::from_str(r#"{"error_count": 2.0}"#).unwrap();
        let health = reading.health();
        assert_eq!(health, BatteryHealth::Faulty(2));
        assert_eq!(health.to_string(), "Fehler: 2");
    }

    #[test]
    fn should_treat_null_fields_as_absent() {
        let reading: BatteryReading =
            serde_json::from_str(r#"{"soc": null, "power": null, "error_count": null}"#).unwrap();
        assert_eq!(reading, BatteryReading::default());
    }

    #[test]
    fn should_preserve_payload_order() {
        let batteries: Batteries =
            serde_json::from_str(r#"{"3": {"soc": 10}, "1": {"soc": 20}, "2": {"soc": 30}}"#)
                .unwrap();
        let ids: Vec<&str> = batteries.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn should_keep_last_value_for_duplicate_ids() {
        let batteries: Batteries =
            serde_json::from_str(r#"{"A": {"soc": 10}, "A": {"soc": 99}}"#).unwrap();
        assert_eq!(batteries.len(), 1);
        assert_eq!(batteries.get("A").and_then(|r| r.soc), Some(99.0));
    }

    #[test]
    fn should_treat_null_map_as_empty() {
        let batteries: Batteries = serde_json::from_str("null").unwrap();
        assert!(batteries.is_empty());
    }

    #[test]
    fn should_reject_non_map_batteries() {
        assert!(serde_json::from_str::<Batteries>("[1, 2]").is_err());
    }
}
