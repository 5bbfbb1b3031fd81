use crate::domain::model::Port;
use crate::utils::error::{Result, SettingsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_port(field_name: &str, port: &Port) -> Result<()> {
    match port.normalize() {
        Ok(_) => Ok(()),
        Err(SettingsError::InvalidConfigValueError { value, reason, .. }) => {
            Err(SettingsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value,
                reason,
            })
        }
        Err(other) => Err(other),
    }
}

pub fn validate_import_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SettingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Import path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SettingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Import path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_symbol_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SettingsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port() {
        assert!(validate_port("port", &Port::Number(8080)).is_ok());
        assert!(validate_port("port", &Port::Text("8080".to_string())).is_ok());
        assert!(validate_port("port", &Port::Text("".to_string())).is_err());
        assert!(validate_port("port", &Port::Text("-1".to_string())).is_err());
        assert!(validate_port("port", &Port::Text("not-a-port".to_string())).is_err());
        assert!(validate_port("port", &Port::Text("70000".to_string())).is_err());
    }

    #[test]
    fn test_validate_port_reports_field_name() {
        let err = validate_port("server.port", &Port::Text("abc".to_string())).unwrap_err();
        match err {
            SettingsError::InvalidConfigValueError { field, .. } => {
                assert_eq!(field, "server.port");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_import_path() {
        assert!(validate_import_path("imports", "routes/health.rs").is_ok());
        assert!(validate_import_path("imports", "a/b.ts").is_ok());
        assert!(validate_import_path("imports", "").is_err());
        assert!(validate_import_path("imports", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_symbol_name() {
        assert!(validate_symbol_name("imports.routes", "register_health").is_ok());
        assert!(validate_symbol_name("imports.routes", "   ").is_err());
    }
}
