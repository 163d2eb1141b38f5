mod entity;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(KeyedEntity)]
// ============================================================================

/// Derive macro that binds an entity shape to its wire key.
///
/// The key is the integer carried in `Header.Type` of every envelope whose
/// body has this shape. It must be a positive integer literal.
///
/// # Usage
///
/// ```ignore
/// #[derive(Debug, Default, Serialize, Deserialize, KeyedEntity)]
/// #[entity(key = 32)]
/// pub struct HeartbeatUpdate {}
/// ```
///
/// With an explicit display name (defaults to the struct name):
/// ```ignore
/// #[derive(Debug, Default, Serialize, Deserialize, KeyedEntity)]
/// #[entity(key = 3, name = "Market")]
/// pub struct MarketUpdate { /* ... */ }
/// ```
#[proc_macro_derive(KeyedEntity, attributes(entity))]
pub fn derive_keyed_entity(input: TokenStream) -> TokenStream {
    entity::derive_keyed_entity(input)
}
