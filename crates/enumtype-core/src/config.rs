//! Startup configuration: separator, sealing, and the prefix map, loaded from
//! TOML and resolved against the enum types compiled into the binary.
use crate::{
    DEFAULT_SEPARATOR,
    codec::{CodecError, EnumCodec},
    error::ErrorClass,
    registry::{EnumRegistry, RegistryError},
    traits::EnumKind,
    types::EnumType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("invalid enum config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("prefix '{prefix}' names unknown enum type '{path}'")]
    UnknownType { prefix: String, path: String },
}

impl ConfigError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Codec(err) => err.class(),
            Self::Parse(_) => ErrorClass::InvalidInput,
            Self::Registry(err) => err.class(),
            Self::UnknownType { .. } => ErrorClass::NotFound,
        }
    }
}

///
/// EnumCatalog
///
/// The enum types a config file is allowed to name, keyed by path.
///

#[derive(Clone, Debug, Default)]
pub struct EnumCatalog {
    types: BTreeMap<&'static str, EnumType>,
}

impl EnumCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<K: EnumKind>(mut self) -> Self {
        self.add(EnumType::of::<K>());
        self
    }

    /// Add `ty` under its path. A different type already holding that path
    /// is kept, and `false` is returned.
    pub fn add(&mut self, ty: EnumType) -> bool {
        match self.types.get(ty.path()) {
            Some(existing) if existing.entries() != ty.entries() => {
                tracing::warn!(path = ty.path(), "enum path already taken by another type");

                false
            }
            Some(_) => true,
            None => {
                self.types.insert(ty.path(), ty);

                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<EnumType> {
        self.types.get(path).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

///
/// EnumConfig
///
/// ```toml
/// separator = "::"
/// seal = true
///
/// [enums]
/// status = "app::Status"
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnumConfig {
    pub separator: String,
    pub seal: bool,
    pub enums: BTreeMap<String, String>,
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            seal: true,
            enums: BTreeMap::new(),
        }
    }
}

impl EnumConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve every prefix against `catalog` and build the codec.
    pub fn build(&self, catalog: &EnumCatalog) -> Result<EnumCodec, ConfigError> {
        let mut registry = EnumRegistry::new();

        for (prefix, path) in &self.enums {
            let ty = catalog
                .get(path)
                .ok_or_else(|| ConfigError::UnknownType {
                    prefix: prefix.clone(),
                    path: path.clone(),
                })?;

            registry.register(prefix.as_str(), ty)?;
        }

        if self.seal {
            registry.seal();
        }

        let codec = EnumCodec::with_separator(registry, self.separator.as_str())?;
        tracing::debug!(
            enums = self.enums.len(),
            sealed = self.seal,
            "enum codec built from config"
        );

        Ok(codec)
    }
}

///
/// TESTS
///
