use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Variant};

// derive_enum_kind
pub fn derive_enum_kind(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

///
/// VariantSpec
///

struct VariantSpec {
    ident: Ident,
    key: String,
    label: String,
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "EnumKind cannot be derived for generic enums",
        ));
    }

    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "EnumKind can only be derived for enums",
        ));
    };

    if data.variants.is_empty() {
        return Err(Error::new_spanned(
            ident,
            "EnumKind requires at least one variant",
        ));
    }

    let path = parse_path(&input.attrs)?;
    let path_expr = match path {
        Some(path) => quote!(#path),
        None => {
            let name = ident.to_string();
            quote!(concat!(module_path!(), "::", #name))
        }
    };

    let mut seen = HashSet::new();
    let mut specs = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let spec = parse_variant(variant)?;
        if !seen.insert(spec.key.clone()) {
            return Err(Error::new_spanned(
                variant,
                format!("duplicate enum key '{}'", spec.key),
            ));
        }
        specs.push(spec);
    }

    let entries = specs.iter().map(|spec| {
        let key = &spec.key;
        let label = &spec.label;

        quote!(::enumtype::types::EnumEntry::new(#key, #label))
    });
    let variants = specs.iter().map(|spec| {
        let variant = &spec.ident;

        quote!(Self::#variant)
    });
    let key_arms = specs.iter().map(|spec| {
        let variant = &spec.ident;
        let key = &spec.key;

        quote!(Self::#variant => #key,)
    });

    Ok(quote! {
        impl ::enumtype::traits::Path for #ident {
            const PATH: &'static str = #path_expr;
        }

        impl ::enumtype::traits::EnumKind for #ident {
            const ENTRIES: &'static [::enumtype::types::EnumEntry] = &[#(#entries),*];
            const VARIANTS: &'static [Self] = &[#(#variants),*];

            fn key(self) -> &'static str {
                match self {
                    #(#key_arms)*
                }
            }
        }
    })
}

// parse_path
// reads #[enum_kind(path = "..")] from the enum attributes
fn parse_path(attrs: &[Attribute]) -> Result<Option<String>, Error> {
    let mut path = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("enum_kind")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("path") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("enum path cannot be empty"));
                }
                path = Some(lit.value());

                Ok(())
            } else {
                Err(meta.error("unsupported enum_kind attribute"))
            }
        })?;
    }

    Ok(path)
}

fn parse_variant(variant: &Variant) -> Result<VariantSpec, Error> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(Error::new_spanned(
            variant,
            "EnumKind variants cannot carry data",
        ));
    }

    let mut key = None;
    let mut label = None;

    for attr in variant
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("enum_value"))
    {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("enum key cannot be empty"));
                }
                key = Some(lit.value());
            } else if meta.path.is_ident("label") {
                let lit: LitStr = meta.value()?.parse()?;
                label = Some(lit.value());
            } else {
                return Err(meta.error("unsupported enum_value attribute"));
            }

            Ok(())
        })?;
    }

    let key = key.unwrap_or_else(|| variant.ident.to_string().to_case(Case::Snake));
    let label = label.unwrap_or_else(|| key.clone());

    Ok(VariantSpec {
        ident: variant.ident.clone(),
        key,
        label,
    })
}
