//! Host wiring: one shared codec behind the `"enum"` column type and the
//! `"enum"` validation provider.
use crate::{
    codec::EnumCodec,
    column::{EnumColumn, TypeMap},
    config::{EnumCatalog, EnumConfig},
    error::Error,
    validate::ProviderSet,
};
use std::sync::Arc;

///
/// Bootstrap
///

#[derive(Clone, Debug)]
pub struct Bootstrap {
    pub codec: Arc<EnumCodec>,
    pub types: TypeMap,
    pub providers: ProviderSet,
}

impl Bootstrap {
    /// Load `source` as TOML config and wire the resulting codec.
    pub fn from_toml(source: &str, catalog: &EnumCatalog) -> Result<Self, Error> {
        let codec = EnumConfig::from_toml_str(source)?.build(catalog)?;

        Ok(bootstrap(codec))
    }
}

/// Map the enum column type and validation provider over `codec`.
#[must_use]
pub fn bootstrap(codec: EnumCodec) -> Bootstrap {
    let codec = Arc::new(codec);
    let column = Arc::new(EnumColumn::new(Arc::clone(&codec)));

    let mut types = TypeMap::new();
    types.map(column.clone());

    let mut providers = ProviderSet::new();
    providers.provider(column);

    tracing::info!(
        prefixes = codec.registry().len(),
        sealed = codec.registry().is_sealed(),
        "enum column type and validation provider mapped"
    );

    Bootstrap {
        codec,
        types,
        providers,
    }
}

///
/// TESTS
///
