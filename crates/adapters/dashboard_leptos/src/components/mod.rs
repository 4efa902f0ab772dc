mod battery_panel;
mod loading;
mod log_list;
mod power_value;
mod status_indicator;

pub use battery_panel::BatteryGrid;
pub use loading::Loading;
pub use log_list::LogList;
pub use power_value::PowerValue;
pub use status_indicator::StatusIndicator;
