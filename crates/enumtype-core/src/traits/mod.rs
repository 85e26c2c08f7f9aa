use crate::{
    types::{AnyEnum, EnumEntry, EnumType},
    visitor::VisitorContext,
};

///
/// Path
///
/// Stable type identifier. Registry reverse lookups compare paths, so two
/// distinct enum types must never share one.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// EnumKind
///
/// A unit enum with a fixed, ordered set of (key, label) entries.
/// `ENTRIES` and `VARIANTS` are index-aligned; `#[derive(EnumKind)]` keeps
/// them in sync.
///

pub trait EnumKind: Copy + Eq + Path + Sized + 'static {
    const ENTRIES: &'static [EnumEntry];
    const VARIANTS: &'static [Self];

    /// Stored key for this variant.
    fn key(self) -> &'static str;

    /// Human-facing label for this variant.
    fn label(self) -> &'static str {
        let key = self.key();

        Self::ENTRIES
            .iter()
            .find(|entry| entry.key == key)
            .map_or(key, |entry| entry.label)
    }

    /// Resolve a stored key back to its variant.
    fn from_key(key: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.key() == key)
    }

    #[must_use]
    fn enum_type() -> EnumType {
        EnumType::of::<Self>()
    }
}

///
/// AsAnyEnum
///
/// The enum capability: anything that can present itself as a type-erased
/// enum value can be registered by instance and encoded.
///

pub trait AsAnyEnum {
    fn as_any_enum(&self) -> AnyEnum;

    fn enum_type(&self) -> EnumType {
        self.as_any_enum().enum_type()
    }
}

///
/// Validator
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T, ctx: &mut dyn VisitorContext);
}
