//! Provide some tools for parsing `#[jsonic(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::{FieldAttributes, FieldDefault};
pub(crate) use type_attributes::TypeAttributes;

/// Returns an iterator over the `#[jsonic(...)]` attributes in `attrs`.
fn jsonic_attributes(attrs: &[syn::Attribute]) -> impl Iterator<Item = &syn::Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(crate::JSONIC_ATTRIBUTE_NAME))
}
