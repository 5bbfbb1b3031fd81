use crate::domain::imports::{HookRegistry, ImportFn, ImportMap};
use crate::domain::model::{Port, ServerSettings, DEFAULT_PORT};
use crate::utils::error::{Result, SettingsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Declarative form of [`ServerSettings`]: callables are referred to by
/// exported-symbol name and bound later against a [`HookRegistry`].
///
/// `imports` carries no default on purpose: a document missing it does not
/// conform and fails to parse. Unknown fields are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsDoc {
    pub port: Option<Port>,
    pub imports: HashMap<String, Vec<String>>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SettingsDoc {
    /// Loads a settings document, picking the format by file extension
    /// (`.json` for JSON, TOML otherwise).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SettingsError::IoError)?;
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SettingsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        serde_json::from_str(&processed_content).map_err(SettingsError::SerializationError)
    }

    /// Substitutes `${VAR}` references; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Port the bootstrap process would listen on, after normalization.
    pub fn resolved_port(&self) -> Result<u16> {
        match &self.port {
            Some(port) => port.normalize(),
            None => Ok(DEFAULT_PORT),
        }
    }

    /// Binds every symbol name through `registry`, producing the runtime
    /// settings value. Per-path symbol order is preserved; a name missing
    /// from the registry fails with the offending path and symbol.
    pub fn resolve(&self, registry: &HookRegistry) -> Result<ServerSettings> {
        self.validate()?;

        let mut imports = ImportMap::new();
        for (path, symbols) in &self.imports {
            let mut fns = Vec::with_capacity(symbols.len());
            for symbol in symbols {
                let hook =
                    registry
                        .get(symbol)
                        .ok_or_else(|| SettingsError::UnresolvedImportError {
                            path: path.clone(),
                            symbol: symbol.clone(),
                        })?;
                fns.push(ImportFn::from_hook(symbol.clone(), hook.clone()));
            }
            imports.insert(path.clone(), fns);
        }

        Ok(ServerSettings {
            port: self.port.clone(),
            imports,
            extra: self.extra.clone(),
        })
    }
}

impl Validate for SettingsDoc {
    fn validate(&self) -> Result<()> {
        if let Some(port) = &self.port {
            validation::validate_port("port", port)?;
        }

        for (path, symbols) in &self.imports {
            validation::validate_import_path("imports", path)?;
            for symbol in symbols {
                validation::validate_symbol_name(&format!("imports.{}", path), symbol)?;
            }
        }

        Ok(())
    }
}
