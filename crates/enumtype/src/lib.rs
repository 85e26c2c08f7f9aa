//! ## Crate layout
//! - `base`: builtin validators over encoded enum text and enum values.
//! - `bootstrap`: wires the enum column type and validation provider into
//!   host-side tables under the `"enum"` name.
//! - core modules (`codec`, `registry`, `types`, ...) are re-exported from
//!   `enumtype-core` at the same paths so derived code resolves either way.
//!
//! The `prelude` module carries the vocabulary most callers need.

pub use enumtype_core::{
    DEFAULT_SEPARATOR, ENUM_TYPE_NAME, codec, column, config, error, obs, registry, traits,
    types, validate, value, visitor,
};
pub use enumtype_derive::EnumKind;

pub mod base;
pub mod bootstrap;

// derived code names `::enumtype`, including inside this crate's own tests
extern crate self as enumtype;

pub use bootstrap::{Bootstrap, bootstrap};
pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        EnumKind,
        codec::{EnumCodec, EnumOption},
        config::{EnumCatalog, EnumConfig},
        registry::EnumRegistry,
        traits::{AsAnyEnum as _, EnumKind as _, Path as _, Validator as _},
        types::{AnyEnum, EnumEntry, EnumType, EnumValue},
        value::Value,
    };
}
