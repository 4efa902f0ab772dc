//! Dashboard configuration discovered from the host page.
//!
//! The page may embed a TOML block and `<meta>` overrides:
//!
//! ```html
//! <script type="text/toml" id="zerofeed-config">
//!     status_url = "/api/status"
//!     poll_interval_ms = 2000
//! </script>
//! <meta name="zerofeed:log-limit" content="50">
//! ```
//!
//! Anything invalid is logged to the console and the defaults are used.

use web_sys::Document;
use zerofeed_app::config::{DashboardConfig, OVERRIDE_KEYS};

/// Id of the element holding the TOML configuration block.
const CONFIG_BLOCK_ID: &str = "zerofeed-config";

/// Prefix of `<meta name="…">` override tags.
const META_PREFIX: &str = "zerofeed:";

/// Load the configuration from the current document.
pub fn load() -> DashboardConfig {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return DashboardConfig::default();
    };

    let mut config = from_block(&document);
    apply_meta_overrides(&document, &mut config);

    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            leptos::logging::warn!("{err}; falling back to default configuration");
            DashboardConfig::default()
        }
    }
}

fn from_block(document: &Document) -> DashboardConfig {
    let Some(content) = document
        .get_element_by_id(CONFIG_BLOCK_ID)
        .and_then(|el| el.text_content())
    else {
        return DashboardConfig::default();
    };
    DashboardConfig::from_toml(&content).unwrap_or_else(|err| {
        leptos::logging::warn!("ignoring #{CONFIG_BLOCK_ID}: {err}");
        DashboardConfig::default()
    })
}

fn apply_meta_overrides(document: &Document, config: &mut DashboardConfig) {
    for key in OVERRIDE_KEYS {
        let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
        let Some(value) = document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
        else {
            continue;
        };
        if let Err(err) = config.apply_override(key, &value) {
            leptos::logging::warn!("ignoring meta override: {err}");
        }
    }
}
