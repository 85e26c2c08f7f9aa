use crate::{
    traits::EnumKind,
    types::{AnyEnum, EnumEntry, EnumError},
};
use serde::Serialize;
use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

///
/// EnumType
///
/// Type-erased descriptor of one enum kind. This is what the registry maps
/// prefixes to. Identity is the path; the entries travel with it so decoded
/// values can answer value-set queries without knowing the concrete type.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct EnumType {
    path: &'static str,
    entries: &'static [EnumEntry],
}

impl EnumType {
    #[must_use]
    pub const fn new(path: &'static str, entries: &'static [EnumEntry]) -> Self {
        Self { path, entries }
    }

    #[must_use]
    pub const fn of<K: EnumKind>() -> Self {
        Self::new(K::PATH, K::ENTRIES)
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// The allowed value set, in declaration order.
    #[must_use]
    pub const fn entries(&self) -> &'static [EnumEntry] {
        self.entries
    }

    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&'static EnumEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    #[must_use]
    pub fn is_valid(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    #[must_use]
    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.entry(key).map(|entry| entry.label)
    }

    /// Build a value of this type; an out-of-range key yields an unset value.
    #[must_use]
    pub fn instance(self, key: &str) -> AnyEnum {
        AnyEnum::new(self, key)
    }

    /// Build a value of this type, rejecting out-of-range keys.
    pub fn try_instance(self, key: &str) -> Result<AnyEnum, EnumError> {
        AnyEnum::try_new(self, key)
    }

    /// The unset instance used for value-set queries.
    #[must_use]
    pub const fn default_instance(self) -> AnyEnum {
        AnyEnum::unset(self)
    }
}

impl Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl Eq for EnumType {}

impl Hash for EnumType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{Priority, Status};

    #[test]
    fn of_reads_the_static_declaration() {
        let ty = EnumType::of::<Status>();

        assert_eq!(ty.path(), "test::Status");
        assert_eq!(
            ty.entries(),
            &[
                EnumEntry::new("active", "active"),
                EnumEntry::new("closed", "closed"),
            ]
        );
    }

    #[test]
    fn identity_is_the_path() {
        let a = EnumType::of::<Status>();
        let b = EnumType::new("test::Status", &[]);

        assert_eq!(a, b);
        assert_ne!(a, EnumType::of::<Priority>());
    }

    #[test]
    fn label_lookup_uses_declared_labels() {
        let ty = EnumType::of::<Priority>();

        assert_eq!(ty.label("high"), Some("High"));
        assert_eq!(ty.label("urgent"), None);
        assert!(ty.is_valid("in_progress"));
    }
}
