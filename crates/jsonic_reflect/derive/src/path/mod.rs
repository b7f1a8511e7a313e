//! This independent module is used to provide the required path.
//! So as to minimize changes when the `jsonic_reflect` structure is modified.
//!
//! The only special feature is the path of jsonic_reflect itself,
//! See [`jsonic_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `jsonic_reflect` crate.
///
/// Not all crates can access the reflection crate through `jsonic_reflect`,
/// we have to scan the builder's `cargo.toml`.
///
/// 1. For crates that depend on `jsonic_reflect`, `::jsonic_reflect` is returned.
/// 2. For crates that depend on `jsonic`, `::jsonic::reflect` is returned.
/// 3. For other situations, `::jsonic_reflect` is returned, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining
/// read-write lock permissions, querying content...), so the crate path is
/// obtained once per macro invocation and passed around.
pub(crate) fn jsonic_reflect() -> syn::Path {
    jsonic_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jsonic_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn reflect_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn from_dynamic_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::FromDynamic
    }
}

#[inline(always)]
pub(crate) fn serializable_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::Serializable
    }
}

#[inline(always)]
pub(crate) fn init_args_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::InitArgs
    }
}

#[inline(always)]
pub(crate) fn dynamic_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::value::Dynamic
    }
}

#[inline(always)]
pub(crate) fn deserialize_error_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::serde::DeserializeError
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::__macro_exports::auto_register
    }
}

// -----------------------------------------------------------------------------
// Core Items

#[inline(always)]
pub(crate) fn option_(span: proc_macro2::Span) -> TokenStream {
    quote::quote_spanned! { span => ::core::option::Option }
}

#[inline(always)]
pub(crate) fn result_(span: proc_macro2::Span) -> TokenStream {
    quote::quote_spanned! { span => ::core::result::Result }
}

#[inline(always)]
pub(crate) fn default_fn_(span: proc_macro2::Span) -> TokenStream {
    quote::quote_spanned! { span => ::core::default::Default::default }
}
