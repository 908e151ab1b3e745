//! Application configuration.
//!
//! Everything the deployment can vary is read from the environment, with
//! compiled-in defaults for every value. There is
//! deliberately no default *address*: requests without one are rejected
//! rather than silently geocoding a fallback location.

/// Errors from configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Route used when a request does not name one.
const DEFAULT_ROUTE_ID: &str = "71";

/// Stop position within a trip treated as the boarding stop.
const DEFAULT_STOP_SEQUENCE: u32 = 1;

/// TCP port to listen on.
const DEFAULT_PORT: u16 = 8222;

/// Application configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Target route identifier (`ROUTE_ID`).
    pub route_id: String,

    /// Boarding stop position within a trip (`STOP_SEQUENCE`).
    ///
    /// Defaults to 1, assuming the provider numbers a trip's stops from 1
    /// in the rider's boarding direction.
    pub stop_sequence: u32,

    /// Override for the geocoder base URL (`GEOCODER_BASE_URL`).
    pub geocoder_base_url: Option<String>,

    /// Override for the predictions provider base URL (`TRANSIT_BASE_URL`).
    pub transit_base_url: Option<String>,

    /// Listening port (`PORT`).
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            route_id: DEFAULT_ROUTE_ID.to_string(),
            stop_sequence: DEFAULT_STOP_SEQUENCE,
            geocoder_base_url: None,
            transit_base_url: None,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("ROUTE_ID") {
            config.route_id = value;
        }

        if let Some(value) = lookup("STOP_SEQUENCE") {
            config.stop_sequence = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "STOP_SEQUENCE",
                value: value.clone(),
            })?;
        }

        config.geocoder_base_url = lookup("GEOCODER_BASE_URL");
        config.transit_base_url = lookup("TRANSIT_BASE_URL");

        if let Some(value) = lookup("PORT") {
            config.port = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.route_id, "71");
        assert_eq!(config.stop_sequence, 1);
        assert_eq!(config.geocoder_base_url, None);
        assert_eq!(config.transit_base_url, None);
        assert_eq!(config.port, 8222);
    }

    #[test]
    fn overrides_apply() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ROUTE_ID", "57"),
            ("STOP_SEQUENCE", "2"),
            ("GEOCODER_BASE_URL", "http://localhost:9001"),
            ("TRANSIT_BASE_URL", "http://localhost:9002"),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.route_id, "57");
        assert_eq!(config.stop_sequence, 2);
        assert_eq!(
            config.geocoder_base_url.as_deref(),
            Some("http://localhost:9001")
        );
        assert_eq!(
            config.transit_base_url.as_deref(),
            Some("http://localhost:9002")
        );
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn invalid_stop_sequence_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("STOP_SEQUENCE", "first")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "STOP_SEQUENCE",
                value: "first".to_string()
            }
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
    }
}
