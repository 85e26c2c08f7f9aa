pub mod enum_value;

pub use enum_value::{EnumKey, EnumOf, IsSet};
