use crate::domain::imports::{ImportFn, ImportMap};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{Result, SettingsError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fallback used when a settings value carries no port.
pub const DEFAULT_PORT: u16 = 8080;

/// Listening port as it appears in raw settings: already numeric, or still
/// textual (e.g. lifted from an environment variable before parsing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Port {
    Number(u16),
    Text(String),
}

impl Port {
    /// Normalizes either representation to a plain port number.
    pub fn normalize(&self) -> Result<u16> {
        match self {
            Port::Number(n) => Ok(*n),
            Port::Text(text) => {
                text.trim()
                    .parse::<u16>()
                    .map_err(|e| SettingsError::InvalidConfigValueError {
                        field: "port".to_string(),
                        value: text.clone(),
                        reason: format!("Port must be a number between 0 and 65535: {}", e),
                    })
            }
        }
    }
}

impl From<u16> for Port {
    fn from(n: u16) -> Self {
        Port::Number(n)
    }
}

impl From<&str> for Port {
    fn from(s: &str) -> Self {
        Port::Text(s.to_string())
    }
}

impl From<String> for Port {
    fn from(s: String) -> Self {
        Port::Text(s)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(n) => write!(f, "{}", n),
            Port::Text(s) => write!(f, "{}", s),
        }
    }
}

/// The settings value handed to the server bootstrap process.
///
/// `imports` is always present (possibly empty); `port` is optional and
/// falls back to [`DEFAULT_PORT`]; any field beyond the two lands in the
/// `extra` map so callers can extend the shape without breaking it.
///
/// Built once by the loading process and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerSettings {
    pub port: Option<Port>,
    pub imports: ImportMap,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ServerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(mut self, port: impl Into<Port>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Registers a callable under an import path, preserving per-path order.
    pub fn with_import(mut self, path: impl Into<String>, f: ImportFn) -> Self {
        self.imports.register(path, f);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Port to listen on once normalized, falling back to [`DEFAULT_PORT`]
    /// when none was configured.
    pub fn resolved_port(&self) -> Result<u16> {
        match &self.port {
            Some(port) => port.normalize(),
            None => Ok(DEFAULT_PORT),
        }
    }

    /// Looks up an extension field the base settings shape may require.
    pub fn require_extra(&self, key: &str) -> Result<&serde_json::Value> {
        self.extra
            .get(key)
            .ok_or_else(|| SettingsError::MissingConfigError {
                field: key.to_string(),
            })
    }
}

impl SettingsProvider for ServerSettings {
    fn port(&self) -> Option<&Port> {
        self.port.as_ref()
    }

    fn imports(&self) -> &ImportMap {
        &self.imports
    }

    fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_normalization() {
        assert_eq!(Port::Number(8080).normalize().unwrap(), 8080);
        assert_eq!(Port::Text("8080".to_string()).normalize().unwrap(), 8080);
        assert_eq!(Port::Text(" 443 ".to_string()).normalize().unwrap(), 443);
        assert!(Port::Text("".to_string()).normalize().is_err());
        assert!(Port::Text("-1".to_string()).normalize().is_err());
        assert!(Port::Text("65536".to_string()).normalize().is_err());
        assert!(Port::Text("eighty".to_string()).normalize().is_err());
    }

    #[test]
    fn test_port_json_forms() {
        let numeric: Port = serde_json::from_str("8080").unwrap();
        assert_eq!(numeric, Port::Number(8080));

        let textual: Port = serde_json::from_str("\"8080\"").unwrap();
        assert_eq!(textual, Port::Text("8080".to_string()));

        assert!(serde_json::from_str::<Port>("true").is_err());
        assert!(serde_json::from_str::<Port>("-1").is_err());
        assert!(serde_json::from_str::<Port>("8080.5").is_err());
    }

    #[test]
    fn test_minimal_settings_use_default_port() {
        let settings = ServerSettings::new();
        assert!(settings.port.is_none());
        assert!(settings.imports.is_empty());
        assert_eq!(settings.resolved_port().unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_builder_accepts_both_port_forms() {
        let numeric = ServerSettings::new().with_port(9090u16);
        assert_eq!(numeric.resolved_port().unwrap(), 9090);

        let textual = ServerSettings::new().with_port("9090");
        assert_eq!(textual.resolved_port().unwrap(), 9090);
    }

    #[test]
    fn test_extra_fields_are_retained() {
        let settings = ServerSettings::new()
            .with_extra("extraFlag", serde_json::json!(true))
            .with_extra("workers", serde_json::json!(4));

        assert_eq!(settings.extra("extraFlag"), Some(&serde_json::json!(true)));
        assert_eq!(
            settings.require_extra("workers").unwrap(),
            &serde_json::json!(4)
        );
        assert!(settings.require_extra("absent").is_err());
    }

    #[test]
    fn test_serialization_flattens_extras_and_lists_symbol_names() {
        let settings = ServerSettings::new()
            .with_port(8080u16)
            .with_import("a/b.ts", ImportFn::new("fn1", || Ok(())))
            .with_import("a/b.ts", ImportFn::new("fn2", || Ok(())))
            .with_extra("extraFlag", serde_json::json!(true));

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["port"], serde_json::json!(8080));
        assert_eq!(value["imports"]["a/b.ts"], serde_json::json!(["fn1", "fn2"]));
        assert_eq!(value["extraFlag"], serde_json::json!(true));
    }
}
