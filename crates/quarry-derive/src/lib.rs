use proc_macro::TokenStream;

mod attr;
mod object;
mod persistable_enum;

/// Generates typed `Field` constants plus the `Object`, `FieldValues` and
/// capability impls for a struct with named fields.
#[proc_macro_derive(Object, attributes(quarry))]
pub fn derive_object(input: TokenStream) -> TokenStream {
    object::derive_object(input.into()).into()
}

/// Stores a fieldless enum through its `#[repr]` integer or its variant
/// name (overridable per variant with `#[quarry(raw = "...")]`).
#[proc_macro_derive(PersistableEnum, attributes(quarry))]
pub fn derive_persistable_enum(input: TokenStream) -> TokenStream {
    persistable_enum::derive_persistable_enum(input.into()).into()
}
