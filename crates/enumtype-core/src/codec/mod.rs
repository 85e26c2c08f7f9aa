mod split;


use crate::{
    DEFAULT_SEPARATOR,
    error::ErrorClass,
    obs::sink::{self, CodecOp, MetricsEvent},
    registry::{EnumRegistry, RegistryError},
    traits::{AsAnyEnum, EnumKind},
    types::{AnyEnum, EnumError, EnumType, EnumValue},
    value::Value,
};
use serde::{Serialize, Serializer, ser::Error as _};
use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock},
};
use thiserror::Error as ThisError;

///
/// CodecError
///

#[remain::sorted]
#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum CodecError {
    #[error("enum separator cannot be empty")]
    EmptySeparator,

    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error("value ({kind}) must be an enum value")]
    InvalidInput { kind: &'static str },

    #[error("enum prefix '{prefix}' contains the separator '{separator}'")]
    PrefixContainsSeparator { prefix: String, separator: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("expected enum type '{expected}', decoded '{found}'")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("enum type for prefix '{prefix}' not found")]
    UnregisteredPrefix { prefix: String },

    #[error("no enum prefix registered for type '{path}'")]
    UnregisteredType { path: String },

    #[error("prefix for enum type '{path}' could not be resolved")]
    UnresolvedPrefix { path: String },
}

impl CodecError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::EmptySeparator
            | Self::InvalidInput { .. }
            | Self::PrefixContainsSeparator { .. }
            | Self::TypeMismatch { .. } => ErrorClass::InvalidInput,
            Self::Enum(err) => err.class(),
            Self::Registry(err) => err.class(),
            Self::UnregisteredPrefix { .. }
            | Self::UnregisteredType { .. }
            | Self::UnresolvedPrefix { .. } => ErrorClass::NotFound,
        }
    }
}

///
/// EnumOption
/// One selectable option: the encoded value and its label.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EnumOption {
    pub value: String,
    pub label: &'static str,
}

///
/// EnumCodec
///
/// Converts enum values to and from `<prefix><separator><key>` strings using
/// an owned registry.
///
/// Configure (register, set the separator, seal) through `&mut self` at
/// startup, then share by reference or `Arc`. The only state touched through
/// `&self` is the memoized default instance per type, whose population is
/// idempotent.
///
/// No registered prefix may contain the separator; every constructor and
/// mutator checks it.
///

#[derive(Debug)]
pub struct EnumCodec {
    registry: EnumRegistry,
    separator: String,
    instances: RwLock<BTreeMap<&'static str, AnyEnum>>,
}

impl EnumCodec {
    /// Codec over `registry` with the default separator.
    pub fn new(registry: EnumRegistry) -> Result<Self, CodecError> {
        Self::with_separator(registry, DEFAULT_SEPARATOR)
    }

    pub fn with_separator(
        registry: EnumRegistry,
        separator: impl Into<String>,
    ) -> Result<Self, CodecError> {
        let separator = separator.into();
        check_separator(&registry, &separator)?;

        Ok(Self {
            registry,
            separator,
            instances: RwLock::new(BTreeMap::new()),
        })
    }

    #[must_use]
    pub const fn registry(&self) -> &EnumRegistry {
        &self.registry
    }

    /// Register `ty` under `prefix`; the prefix must not contain the
    /// current separator.
    pub fn register(&mut self, prefix: impl Into<String>, ty: EnumType) -> Result<(), CodecError> {
        let prefix = prefix.into();
        if prefix.contains(self.separator.as_str()) {
            return Err(CodecError::PrefixContainsSeparator {
                prefix,
                separator: self.separator.clone(),
            });
        }

        self.registry.register(prefix, ty)?;

        Ok(())
    }

    pub fn register_kind<K: EnumKind>(
        &mut self,
        prefix: impl Into<String>,
    ) -> Result<(), CodecError> {
        self.register(prefix, EnumType::of::<K>())
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Replace the separator for every later conversion.
    pub fn set_separator(&mut self, separator: impl Into<String>) -> Result<(), CodecError> {
        let separator = separator.into();
        check_separator(&self.registry, &separator)?;

        tracing::debug!(separator = %separator, "enum separator set");
        self.separator = separator;

        Ok(())
    }

    ///
    /// ENCODE
    ///

    /// Encode an enum value as `prefix<separator>key`.
    /// An unset value encodes with an empty key.
    pub fn encode<V: AsAnyEnum + ?Sized>(&self, value: &V) -> Result<String, CodecError> {
        let value = value.as_any_enum();
        let path = value.path();

        let prefix = self.registry.prefix_for(path).map_err(|err| {
            let err = match err {
                RegistryError::UnregisteredType { path } => CodecError::UnregisteredType { path },
                other => other.into(),
            };

            fail(CodecOp::Encode, err)
        })?;

        sink::record(MetricsEvent::Encode { type_path: path });

        Ok(split::join(
            prefix,
            &self.separator,
            value.current_value().unwrap_or_default(),
        ))
    }

    /// Encode an untyped column value; anything but an enum is `InvalidInput`.
    pub fn encode_value(&self, value: &Value) -> Result<String, CodecError> {
        match value.as_enum() {
            Some(value) => self.encode(value),
            None => Err(fail(
                CodecOp::Encode,
                CodecError::InvalidInput {
                    kind: value.kind_name(),
                },
            )),
        }
    }

    /// Serializable view of a value in its encoded form.
    #[must_use]
    pub fn encoded<V: AsAnyEnum + ?Sized>(&self, value: &V) -> Encoded<'_> {
        Encoded {
            codec: self,
            value: value.as_any_enum(),
        }
    }

    ///
    /// DECODE
    ///

    /// Decode a stored string. `None` is the storage "no value" and decodes to
    /// `None`; an out-of-range key decodes to an unset value of the
    /// prefix's type.
    pub fn decode(&self, raw: Option<&str>) -> Result<Option<AnyEnum>, CodecError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        self.parse(raw, CodecOp::Decode).map(Some)
    }

    /// Like `decode`, but an out-of-range key is an error.
    pub fn decode_strict(&self, raw: Option<&str>) -> Result<Option<AnyEnum>, CodecError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let (_, key) = split::split_encoded(raw, &self.separator);
        let value = self.parse(raw, CodecOp::Decode)?;
        if !value.is_set() {
            let err = EnumError::UnknownKey {
                path: value.path(),
                key: key.to_string(),
            };

            return Err(fail(CodecOp::Decode, err.into()));
        }

        Ok(Some(value))
    }

    /// Decode into a specific enum kind.
    pub fn decode_as<K: EnumKind>(
        &self,
        raw: Option<&str>,
    ) -> Result<Option<EnumValue<K>>, CodecError> {
        let Some(value) = self.decode(raw)? else {
            return Ok(None);
        };

        value.downcast::<K>().map(Some).ok_or_else(|| {
            fail(
                CodecOp::Decode,
                CodecError::TypeMismatch {
                    expected: K::PATH,
                    found: value.path(),
                },
            )
        })
    }

    /// Accept loosely typed external input: an enum passes through unchanged,
    /// empty input becomes `None`, anything else is stringified and decoded.
    pub fn marshal(&self, value: Value) -> Result<Option<AnyEnum>, CodecError> {
        sink::record(MetricsEvent::Marshal);

        if value.is_empty_input() {
            return Ok(None);
        }

        match value {
            Value::Enum(value) => Ok(Some(value)),
            other => {
                let text = other.to_text().unwrap_or_default();

                self.parse(&text, CodecOp::Marshal).map(Some)
            }
        }
    }

    fn parse(&self, raw: &str, op: CodecOp) -> Result<AnyEnum, CodecError> {
        let (prefix, key) = split::split_encoded(raw, &self.separator);

        let ty = self.registry.type_for(prefix).map_err(|_| {
            fail(
                op,
                CodecError::UnregisteredPrefix {
                    prefix: prefix.to_string(),
                },
            )
        })?;

        sink::record(MetricsEvent::Decode {
            type_path: ty.path(),
        });

        Ok(ty.instance(key))
    }

    ///
    /// VALIDATE
    ///

    /// Validation rule predicate. Total: every malformed input is `false`.
    #[must_use]
    pub fn is_valid(&self, raw: &str) -> bool {
        let accepted = split::split_complete(raw, &self.separator).is_some_and(|(prefix, key)| {
            self.registry
                .type_for(prefix)
                .is_ok_and(|ty| ty.is_valid(key))
        });

        sink::record(MetricsEvent::Validate { accepted });

        accepted
    }

    ///
    /// OPTIONS
    ///

    /// Selection options for `K`, in declaration order.
    pub fn options_for<K: EnumKind>(&self) -> Result<Vec<EnumOption>, CodecError> {
        self.options_for_type(EnumType::of::<K>())
    }

    pub fn options_for_type(&self, ty: EnumType) -> Result<Vec<EnumOption>, CodecError> {
        let instance = self.default_instance(ty);

        let prefix = self.registry.prefix_for(ty.path()).map_err(|err| {
            let err = match err {
                RegistryError::UnregisteredType { path } => CodecError::UnresolvedPrefix { path },
                other => other.into(),
            };

            fail(CodecOp::Options, err)
        })?;

        sink::record(MetricsEvent::Options {
            type_path: ty.path(),
        });

        Ok(instance
            .values()
            .iter()
            .map(|entry| EnumOption {
                value: split::join(prefix, &self.separator, entry.key),
                label: entry.label,
            })
            .collect())
    }

    /// Memoized unset instance of `ty`, built once per codec.
    pub fn default_instance(&self, ty: EnumType) -> AnyEnum {
        let cached = self
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(ty.path())
            .copied();
        if let Some(instance) = cached {
            return instance;
        }

        let mut instances = self
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        *instances.entry(ty.path()).or_insert_with(|| {
            tracing::trace!(path = ty.path(), "built default enum instance");
            sink::record(MetricsEvent::InstanceBuilt {
                type_path: ty.path(),
            });

            ty.default_instance()
        })
    }
}

impl Default for EnumCodec {
    fn default() -> Self {
        Self {
            registry: EnumRegistry::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            instances: RwLock::new(BTreeMap::new()),
        }
    }
}

// check_separator
// a separator must be non-empty and absent from every registered prefix
fn check_separator(registry: &EnumRegistry, separator: &str) -> Result<(), CodecError> {
    if separator.is_empty() {
        return Err(CodecError::EmptySeparator);
    }

    if let Some((prefix, _)) = registry
        .iter()
        .find(|(prefix, _)| prefix.contains(separator))
    {
        return Err(CodecError::PrefixContainsSeparator {
            prefix: prefix.to_string(),
            separator: separator.to_string(),
        });
    }

    Ok(())
}

// fail
// records and traces a codec failure before handing it back
fn fail(op: CodecOp, err: CodecError) -> CodecError {
    tracing::debug!(op = ?op, error = %err, "enum codec failure");
    sink::record(MetricsEvent::Failure { op });

    err
}

///
/// Encoded
/// Serializes an enum value as its encoded string.
///

#[derive(Clone, Copy, Debug)]
pub struct Encoded<'a> {
    codec: &'a EnumCodec,
    value: AnyEnum,
}

impl Encoded<'_> {
    pub fn try_to_string(&self) -> Result<String, CodecError> {
        self.codec.encode(&self.value)
    }
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self.try_to_string().map_err(S::Error::custom)?;

        serializer.serialize_str(&encoded)
    }
}
