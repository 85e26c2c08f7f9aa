use crate::{
    error::ErrorClass,
    obs::sink::{self, MetricsEvent},
    traits::{AsAnyEnum, EnumKind},
    types::EnumType,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[remain::sorted]
#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("enum type '{path}' is registered under several prefixes: {}", prefixes.join(", "))]
    AmbiguousType { path: String, prefixes: Vec<String> },

    #[error("enum prefix cannot be empty")]
    EmptyPrefix,

    #[error("registry is sealed; cannot register prefix '{prefix}'")]
    Sealed { prefix: String },

    #[error("enum type for prefix '{prefix}' not found")]
    UnregisteredPrefix { prefix: String },

    #[error("no prefix registered for enum type '{path}'")]
    UnregisteredType { path: String },
}

impl RegistryError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::AmbiguousType { .. } => ErrorClass::InvariantViolation,
            Self::EmptyPrefix => ErrorClass::InvalidInput,
            Self::Sealed { .. } => ErrorClass::Conflict,
            Self::UnregisteredPrefix { .. } | Self::UnregisteredType { .. } => {
                ErrorClass::NotFound
            }
        }
    }
}

///
/// EnumRegistry
///
/// Prefix -> enum type map. Populated at startup, then sealed.
///
/// Uniqueness is not checked on write: a repeated prefix replaces the earlier
/// entry, and a type registered under two prefixes only fails when something
/// asks for its prefix.
///

#[derive(Clone, Debug, Default)]
pub struct EnumRegistry {
    map: BTreeMap<String, EnumType>,
    sealed: bool,
}

impl EnumRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `prefix` to `ty`. Last write for a prefix wins.
    pub fn register(&mut self, prefix: impl Into<String>, ty: EnumType) -> Result<(), RegistryError> {
        let prefix = prefix.into();

        if self.sealed {
            return Err(RegistryError::Sealed { prefix });
        }
        if prefix.is_empty() {
            return Err(RegistryError::EmptyPrefix);
        }

        if let Some(previous) = self.map.insert(prefix.clone(), ty)
            && previous != ty
        {
            tracing::warn!(
                prefix = %prefix,
                previous = previous.path(),
                current = ty.path(),
                "enum prefix re-registered; last registration wins"
            );
        }
        tracing::debug!(prefix = %prefix, path = ty.path(), "registered enum type");
        sink::record(MetricsEvent::Register {
            type_path: ty.path(),
        });

        Ok(())
    }

    pub fn register_kind<K: EnumKind>(
        &mut self,
        prefix: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.register(prefix, EnumType::of::<K>())
    }

    /// Register by instance; the value's type is what gets mapped.
    pub fn register_value<V: AsAnyEnum + ?Sized>(
        &mut self,
        prefix: impl Into<String>,
        value: &V,
    ) -> Result<(), RegistryError> {
        self.register(prefix, value.enum_type())
    }

    /// Register every entry in iteration order.
    pub fn register_all<I, P>(&mut self, entries: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = (P, EnumType)>,
        P: Into<String>,
    {
        for (prefix, ty) in entries {
            self.register(prefix, ty)?;
        }

        Ok(())
    }

    /// Freeze the registry; later registrations fail with `Sealed`.
    pub fn seal(&mut self) {
        if !self.sealed {
            tracing::debug!(entries = self.map.len(), "enum registry sealed");
        }
        self.sealed = true;
    }

    #[must_use]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Forward lookup: prefix -> type.
    pub fn type_for(&self, prefix: &str) -> Result<EnumType, RegistryError> {
        self.map
            .get(prefix)
            .copied()
            .ok_or_else(|| RegistryError::UnregisteredPrefix {
                prefix: prefix.to_string(),
            })
    }

    /// Reverse lookup: type path -> prefix. Fails if the type is missing or
    /// registered under more than one prefix.
    pub fn prefix_for(&self, path: &str) -> Result<&str, RegistryError> {
        let mut matches = self
            .map
            .iter()
            .filter(|(_, ty)| ty.path() == path)
            .map(|(prefix, _)| prefix.as_str());

        match (matches.next(), matches.next()) {
            (None, _) => Err(RegistryError::UnregisteredType {
                path: path.to_string(),
            }),
            (Some(prefix), None) => Ok(prefix),
            (Some(first), Some(second)) => {
                let prefixes = [first, second]
                    .into_iter()
                    .chain(matches)
                    .map(ToString::to_string)
                    .collect();

                Err(RegistryError::AmbiguousType {
                    path: path.to_string(),
                    prefixes,
                })
            }
        }
    }

    pub fn prefix_for_kind<K: EnumKind>(&self) -> Result<&str, RegistryError> {
        self.prefix_for(K::PATH)
    }

    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.map.contains_key(prefix)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries ordered by prefix.
    pub fn iter(&self) -> impl Iterator<Item = (&str, EnumType)> {
        self.map.iter().map(|(prefix, ty)| (prefix.as_str(), *ty))
    }
}

///
/// TESTS
///
