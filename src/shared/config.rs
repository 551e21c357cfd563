use std::env;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses `key` when set, falls back to `default` when absent.
pub fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

pub fn flag(key: &str) -> bool {
    optional(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_uses_default_when_unset() {
        let value: u64 = parse_or("PORTFOLIO_TEST_UNSET_NUMBER", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn parse_or_rejects_garbage() {
        env::set_var("PORTFOLIO_TEST_BAD_NUMBER", "fifty");
        let result: Result<u64, _> = parse_or("PORTFOLIO_TEST_BAD_NUMBER", 1);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "PORTFOLIO_TEST_BAD_NUMBER", .. })
        ));
    }

    #[test]
    fn blank_required_value_is_missing() {
        env::set_var("PORTFOLIO_TEST_BLANK", "   ");
        assert_eq!(
            required("PORTFOLIO_TEST_BLANK"),
            Err(ConfigError::Missing("PORTFOLIO_TEST_BLANK"))
        );
    }

    #[test]
    fn flag_accepts_common_truthy_values() {
        env::set_var("PORTFOLIO_TEST_FLAG", "TRUE");
        assert!(flag("PORTFOLIO_TEST_FLAG"));
        assert!(!flag("PORTFOLIO_TEST_FLAG_UNSET"));
    }
}
