//! CSS class tokens derived from payload values.
//!
//! Status and log level strings come straight from the server and end up in
//! `class` attributes. They are reduced to a single safe token first so a
//! value like `"ok evil"` cannot smuggle extra classes into the page.

/// Token used when a payload value reduces to nothing.
pub const UNKNOWN_TOKEN: &str = "unknown";

/// Reduce `raw` to a lowercase token made of `[a-z0-9_-]`.
///
/// Returns [`UNKNOWN_TOKEN`] when nothing usable is left.
#[must_use]
pub fn css_token(raw: &str) -> String {
    let token: String = raw
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if token.is_empty() {
        UNKNOWN_TOKEN.to_string()
    } else {
        token
    }
}

/// Build a `{prefix}-{token}` class name, e.g. `status-ok` or `log-error`.
#[must_use]
pub fn prefixed(prefix: &str, raw: &str) -> String {
    format!("{prefix}-{}", css_token(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_lowercase_token() {
        assert_eq!(css_token("WARNING"), "warning");
    }

    #[test]
    fn should_keep_dashes_and_underscores() {
        assert_eq!(css_token("not_ready-yet"), "not_ready-yet");
    }

    #[test]
    fn should_strip_whitespace_and_markup() {
        assert_eq!(css_token("ok evil"), "okevil");
        assert_eq!(css_token("\"><script>"), "script");
    }

    #[test]
    fn should_fall_back_to_unknown_when_empty() {
        assert_eq!(css_token(""), UNKNOWN_TOKEN);
        assert_eq!(css_token("  <>  "), UNKNOWN_TOKEN);
    }

    #[test]
    fn should_prefix_token() {
        assert_eq!(prefixed("status", "ok"), "status-ok");
        assert_eq!(prefixed("log", "ERROR"), "log-error");
    }
}
