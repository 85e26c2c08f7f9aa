use crate::{
    codec::{CodecError, EnumCodec, EnumOption},
    traits::{AsAnyEnum, EnumKind},
    types::{AnyEnum, EnumEntry, EnumError, EnumType},
};

///
/// EnumValue
///
/// One typed enum value. Either unset or holding a single variant of `K`;
/// never changes after construction.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EnumValue<K: EnumKind> {
    current: Option<K>,
}

impl<K: EnumKind> EnumValue<K> {
    /// Tolerant construction: an empty or out-of-range key yields an unset
    /// value rather than an error.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            current: K::from_key(initial),
        }
    }

    /// Strict construction: an out-of-range key is an `UnknownKey` error.
    pub fn try_new(initial: &str) -> Result<Self, EnumError> {
        K::from_key(initial)
            .map(Self::from_kind)
            .ok_or_else(|| EnumError::unknown_key(K::PATH, initial))
    }

    #[must_use]
    pub const fn from_kind(kind: K) -> Self {
        Self {
            current: Some(kind),
        }
    }

    #[must_use]
    pub const fn unset() -> Self {
        Self { current: None }
    }

    #[must_use]
    pub fn is_valid(key: &str) -> bool {
        K::from_key(key).is_some()
    }

    /// The allowed value set, in declaration order.
    #[must_use]
    pub const fn values() -> &'static [EnumEntry] {
        K::ENTRIES
    }

    #[must_use]
    pub const fn enum_type() -> EnumType {
        EnumType::of::<K>()
    }

    #[must_use]
    pub const fn current(&self) -> Option<K> {
        self.current
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// The stored key of the current variant.
    #[must_use]
    pub fn current_value(&self) -> Option<&'static str> {
        self.current.map(K::key)
    }

    /// The label of the current variant.
    #[must_use]
    pub fn display(&self) -> Option<&'static str> {
        self.current.map(K::label)
    }

    /// Does this value currently hold `key`?
    /// Fails with `UnknownKey` when `key` is outside the allowed value set.
    pub fn is(&self, key: &str) -> Result<bool, EnumError> {
        let kind = K::from_key(key).ok_or_else(|| EnumError::unknown_key(K::PATH, key))?;

        Ok(self.is_kind(kind))
    }

    #[must_use]
    pub fn is_kind(&self, kind: K) -> bool {
        self.current == Some(kind)
    }

    /// Render as `prefix<separator>key` through the given codec.
    pub fn encode(&self, codec: &EnumCodec) -> Result<String, CodecError> {
        codec.encode(self)
    }

    /// Selection options for `K`, keyed by encoded value.
    pub fn options(codec: &EnumCodec) -> Result<Vec<EnumOption>, CodecError> {
        codec.options_for::<K>()
    }
}

impl<K: EnumKind> AsAnyEnum for EnumValue<K> {
    fn as_any_enum(&self) -> AnyEnum {
        AnyEnum::from(*self)
    }

    fn enum_type(&self) -> EnumType {
        EnumType::of::<K>()
    }
}

impl<K: EnumKind> Default for EnumValue<K> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<K: EnumKind> From<K> for EnumValue<K> {
    fn from(kind: K) -> Self {
        Self::from_kind(kind)
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
    fn tolerant_construction_leaves_value_unset() {
        let value = EnumValue::<Status>::new("bogus");

        assert!(!value.is_set());
        assert_eq!(value.current_value(), None);
        assert_eq!(value.display(), None);
        assert_eq!(value, EnumValue::<Status>::default());
    }

    #[test]
    fn empty_initial_value_is_unset() {
        assert!(!EnumValue::<Status>::new("").is_set());
    }

    #[test]
    fn strict_construction_rejects_unknown_keys() {
        let err = EnumValue::<Status>::try_new("bogus").unwrap_err();

        assert_eq!(
            err,
            EnumError::UnknownKey {
                path: "test::Status",
                key: "bogus".to_string(),
            }
        );
        assert_eq!(
            EnumValue::<Status>::try_new("closed").unwrap(),
            EnumValue::from(Status::Closed)
        );
    }

    #[test]
    fn predicate_dispatch_checks_membership_first() {
        let value = EnumValue::<Status>::new("active");

        assert!(value.is("active").unwrap());
        assert!(!value.is("closed").unwrap());
        assert!(matches!(
            value.is("pending"),
            Err(EnumError::UnknownKey { .. })
        ));
    }

    #[test]
    fn unset_value_answers_false_for_known_keys() {
        let value = EnumValue::<Status>::unset();

        assert!(!value.is("active").unwrap());
        assert!(!value.is_kind(Status::Closed));
    }

    #[test]
    fn display_uses_the_label() {
        let value = EnumValue::<Priority>::from(Priority::InProgress);

        assert_eq!(value.current_value(), Some("in_progress"));
        assert_eq!(value.display(), Some("In progress"));
    }

    #[test]
    fn values_are_the_declared_entries() {
        assert_eq!(EnumValue::<Status>::values(), Status::ENTRIES);
        assert!(EnumValue::<Status>::is_valid("active"));
        assert!(!EnumValue::<Status>::is_valid("ACTIVE"));
    }
}
