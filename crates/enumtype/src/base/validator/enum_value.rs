use crate::{
    codec::EnumCodec,
    traits::{AsAnyEnum, EnumKind, Validator},
    visitor::VisitorContext,
};
use std::marker::PhantomData;

///
/// EnumKey
///
/// Encoded text must name a registered prefix and one of its keys.
///

#[derive(Clone, Copy, Debug)]
pub struct EnumKey<'a> {
    codec: &'a EnumCodec,
}

impl<'a> EnumKey<'a> {
    #[must_use]
    pub const fn new(codec: &'a EnumCodec) -> Self {
        Self { codec }
    }
}

impl Validator<str> for EnumKey<'_> {
    fn validate(&self, s: &str, ctx: &mut dyn VisitorContext) {
        if !self.codec.is_valid(s) {
            ctx.issue(format!("'{s}' is not a valid enum value"));
        }
    }
}

///
/// EnumOf
///
/// Like `EnumKey`, but the prefix must also resolve to `K`.
///

#[derive(Debug)]
pub struct EnumOf<'a, K> {
    codec: &'a EnumCodec,
    _marker: PhantomData<K>,
}

impl<'a, K: EnumKind> EnumOf<'a, K> {
    #[must_use]
    pub const fn new(codec: &'a EnumCodec) -> Self {
        Self {
            codec,
            _marker: PhantomData,
        }
    }
}

impl<K: EnumKind> Validator<str> for EnumOf<'_, K> {
    fn validate(&self, s: &str, ctx: &mut dyn VisitorContext) {
        match self.codec.decode_as::<K>(Some(s)) {
            Ok(Some(value)) if value.is_set() => {}
            Ok(_) => ctx.issue(format!("'{s}' is not a valid {} value", K::PATH)),
            Err(err) => ctx.issue(err.to_string()),
        }
    }
}

///
/// IsSet
///
/// The value must hold one of its type's keys.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IsSet;

impl<V: AsAnyEnum + ?Sized> Validator<V> for IsSet {
    fn validate(&self, v: &V, ctx: &mut dyn VisitorContext) {
        let value = v.as_any_enum();

        if !value.is_set() {
            let keys = value
                .values()
                .iter()
                .map(|entry| entry.key)
                .collect::<Vec<_>>()
                .join(", ");

            ctx.issue(format!("{} must be one of: {keys}", value.path()));
        }
    }
}

///
/// TESTS
///
