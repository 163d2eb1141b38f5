use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr};

pub fn derive_keyed_entity(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let args = extract_entity_args(input)?;
    let key = args.key;
    let name = args.name.unwrap_or_else(|| ident.to_string());

    Ok(quote! {
        impl #impl_generics feed_router::KeyedEntity for #ident #ty_generics #where_clause {
            const KEY: feed_router::EntityKey = #key;
            const NAME: &'static str = #name;
        }
    })
}

struct EntityArgs {
    key: u32,
    name: Option<String>,
}

/// Reads `#[entity(key = N, name = "...")]` from the struct-level attributes.
fn extract_entity_args(input: &DeriveInput) -> syn::Result<EntityArgs> {
    let mut key = None;
    let mut name = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("entity") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let lit: LitInt = meta.value()?.parse()?;
                let value = lit.base10_parse::<u32>()?;
                if value == 0 {
                    return Err(syn::Error::new_spanned(lit, "entity key must be positive"));
                }
                key = Some(value);
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported entity attribute, expected `key` or `name`"))
            }
        })?;
    }

    match key {
        Some(key) => Ok(EntityArgs { key, name }),
        None => Err(syn::Error::new_spanned(
            &input.ident,
            "KeyedEntity derive: missing #[entity(key = N)] attribute",
        )),
    }
}
