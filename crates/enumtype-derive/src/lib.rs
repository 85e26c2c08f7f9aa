use proc_macro::TokenStream;

mod enum_kind;

/// Derive `Path` and `EnumKind` for a unit-only enum.
///
/// Keys default to the snake_case variant name and labels default to the key.
/// Both can be overridden per variant with `#[enum_value(key = "..", label = "..")]`,
/// and the type path with `#[enum_kind(path = "..")]`.
#[proc_macro_derive(EnumKind, attributes(enum_kind, enum_value))]
pub fn derive_enum_kind(input: TokenStream) -> TokenStream {
    enum_kind::derive_enum_kind(input.into()).into()
}
