use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::GetterError;
use crate::types::TypeRef;

/// File looked up by [`GetterConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "getterkit.toml";

/// Layout of `getterkit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    getter: GetterConfig,
}

/// Settings that influence accessor naming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetterConfig {
    /// Type names, besides primitive `boolean`, whose getters use the `is` prefix.
    #[serde(default)]
    pub boolean_carriers: Vec<String>,
}

impl GetterConfig {
    pub fn with_boolean_carrier(mut self, type_name: impl Into<String>) -> Self {
        self.boolean_carriers.push(type_name.into());
        self
    }

    /// Whether a field of this type is named like a boolean (`isX`).
    pub fn is_boolean(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Primitive(_) => ty.is_primitive_boolean(),
            TypeRef::Named(name) => self.boolean_carriers.iter().any(|carrier| carrier == name),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, GetterError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.getter)
    }

    pub fn load(path: &Path) -> Result<Self, GetterError> {
        let content = std::fs::read_to_string(path).map_err(|err| GetterError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    /// Loads `getterkit.toml` from `dir` when present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, GetterError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no {CONFIG_FILE_NAME} in {}, using defaults", dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}
