use crate::{
    traits::{AsAnyEnum, EnumKind},
    types::{EnumEntry, EnumError, EnumType, EnumValue},
};

///
/// AnyEnum
///
/// Type-erased enum value, produced by polymorphic decode. Answers the same
/// queries as `EnumValue` through its descriptor, and downcasts back to the
/// typed form when the path matches.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AnyEnum {
    ty: EnumType,
    current: Option<&'static str>,
}

impl AnyEnum {
    /// Tolerant construction; an out-of-range key yields an unset value.
    #[must_use]
    pub fn new(ty: EnumType, initial: &str) -> Self {
        Self {
            ty,
            current: ty.entry(initial).map(|entry| entry.key),
        }
    }

    pub fn try_new(ty: EnumType, initial: &str) -> Result<Self, EnumError> {
        let entry = ty
            .entry(initial)
            .ok_or_else(|| EnumError::unknown_key(ty.path(), initial))?;

        Ok(Self {
            ty,
            current: Some(entry.key),
        })
    }

    #[must_use]
    pub const fn unset(ty: EnumType) -> Self {
        Self { ty, current: None }
    }

    #[must_use]
    pub const fn enum_type(&self) -> EnumType {
        self.ty
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.ty.path()
    }

    #[must_use]
    pub const fn values(&self) -> &'static [EnumEntry] {
        self.ty.entries()
    }

    #[must_use]
    pub fn is_valid(&self, key: &str) -> bool {
        self.ty.is_valid(key)
    }

    #[must_use]
    pub const fn current_value(&self) -> Option<&'static str> {
        self.current
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn display(&self) -> Option<&'static str> {
        self.current.and_then(|key| self.ty.label(key))
    }

    pub fn is(&self, key: &str) -> Result<bool, EnumError> {
        if !self.ty.is_valid(key) {
            return Err(EnumError::unknown_key(self.ty.path(), key));
        }

        Ok(self.current == Some(key))
    }

    /// Recover the typed value if this value belongs to `K`.
    #[must_use]
    pub fn downcast<K: EnumKind>(&self) -> Option<EnumValue<K>> {
        if self.ty.path() != K::PATH {
            return None;
        }

        Some(match self.current.and_then(K::from_key) {
            Some(kind) => EnumValue::from_kind(kind),
            None => EnumValue::unset(),
        })
    }
}

impl AsAnyEnum for AnyEnum {
    fn as_any_enum(&self) -> AnyEnum {
        *self
    }
}

impl<K: EnumKind> From<EnumValue<K>> for AnyEnum {
    fn from(value: EnumValue<K>) -> Self {
        Self {
            ty: EnumType::of::<K>(),
            current: value.current_value(),
        }
    }
}

impl<K: EnumKind> From<K> for AnyEnum {
    fn from(kind: K) -> Self {
        Self::from(EnumValue::from_kind(kind))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_fixtures::{Priority, Status},
        traits::Path,
    };

    #[test]
    fn typed_and_erased_forms_agree() {
        let typed = EnumValue::<Status>::new("closed");
        let erased = AnyEnum::from(typed);

        assert_eq!(erased.path(), Status::PATH);
        assert_eq!(erased.current_value(), Some("closed"));
        assert_eq!(erased.downcast::<Status>(), Some(typed));
    }

    #[test]
    fn downcast_to_another_kind_fails() {
        let erased = AnyEnum::from(Status::Active);

        assert_eq!(erased.downcast::<Priority>(), None);
    }

    #[test]
    fn erased_predicate_rejects_unknown_keys() {
        let erased = EnumType::of::<Priority>().instance("high");

        assert!(erased.is("high").unwrap());
        assert!(!erased.is("low").unwrap());
        assert!(erased.is("urgent").is_err());
        assert_eq!(erased.display(), Some("High"));
    }

    #[test]
    fn unset_downcast_stays_unset() {
        let erased = AnyEnum::unset(EnumType::of::<Status>());

        assert_eq!(
            erased.downcast::<Status>(),
            Some(EnumValue::<Status>::unset())
        );
    }
}
