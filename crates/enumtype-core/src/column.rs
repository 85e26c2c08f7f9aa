//! Persistence boundary: the column type the host ORM dispatches to.
use crate::{
    ENUM_TYPE_NAME,
    codec::EnumCodec,
    error::{Error, ErrorClass, ErrorOrigin},
    value::Value,
};
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// Driver
///
/// Opaque connection/dialect handle passed through by the host. The enum
/// column only reads its name for tracing.
///

pub trait Driver {
    fn name(&self) -> &str;
}

///
/// ColumnType
///

pub trait ColumnType: Send + Sync {
    /// Name the type is mapped under.
    fn name(&self) -> &'static str;

    /// Application value -> stored text.
    fn to_database(&self, value: &Value, driver: &dyn Driver) -> Result<String, Error>;

    /// Stored text (or NULL) -> application value.
    fn to_native(&self, raw: Option<&str>, driver: &dyn Driver) -> Result<Value, Error>;

    /// Loosely typed request input -> application value.
    fn marshal(&self, value: Value) -> Result<Value, Error>;
}

///
/// EnumColumn
///

#[derive(Clone, Debug)]
pub struct EnumColumn {
    codec: Arc<EnumCodec>,
}

impl EnumColumn {
    #[must_use]
    pub const fn new(codec: Arc<EnumCodec>) -> Self {
        Self { codec }
    }

    #[must_use]
    pub fn codec(&self) -> &EnumCodec {
        &self.codec
    }
}

impl ColumnType for EnumColumn {
    fn name(&self) -> &'static str {
        ENUM_TYPE_NAME
    }

    fn to_database(&self, value: &Value, driver: &dyn Driver) -> Result<String, Error> {
        tracing::trace!(driver = driver.name(), value = %value, "enum column to_database");

        Ok(self.codec.encode_value(value)?)
    }

    fn to_native(&self, raw: Option<&str>, driver: &dyn Driver) -> Result<Value, Error> {
        tracing::trace!(driver = driver.name(), raw = ?raw, "enum column to_native");

        let value = self.codec.decode(raw)?;

        Ok(value.map_or(Value::Null, Value::Enum))
    }

    fn marshal(&self, value: Value) -> Result<Value, Error> {
        let value = self.codec.marshal(value)?;

        Ok(value.map_or(Value::Null, Value::Enum))
    }
}

///
/// TypeMap
///
/// Name -> column type table, the host side of `Type::map`.
///

#[derive(Clone, Default)]
pub struct TypeMap {
    types: BTreeMap<&'static str, Arc<dyn ColumnType>>,
}

impl TypeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a column type under its own name, replacing any earlier mapping.
    pub fn map(&mut self, column: Arc<dyn ColumnType>) {
        let name = column.name();

        if self.types.insert(name, column).is_some() {
            tracing::warn!(name, "column type re-mapped");
        }
    }

    #[must_use]
    pub fn build(&self, name: &str) -> Option<Arc<dyn ColumnType>> {
        self.types.get(name).cloned()
    }

    /// Like `build`, but a missing name is a `NotFound` error.
    pub fn require(&self, name: &str) -> Result<Arc<dyn ColumnType>, Error> {
        self.build(name).ok_or_else(|| {
            Error::new(
                ErrorClass::NotFound,
                ErrorOrigin::Column,
                format!("column type '{name}' is not mapped"),
            )
        })
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.types.keys().copied().collect()
    }
}

impl fmt::Debug for TypeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMap")
            .field("types", &self.names())
            .finish()
    }
}

///
/// TESTS
///
