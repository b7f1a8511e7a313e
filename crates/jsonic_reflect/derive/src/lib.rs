//! See following macros:
//!
//! - [`Serializable`]
//! - [`impl_auto_register`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static JSONIC_ATTRIBUTE_NAME: &str = "jsonic";

/// Must match `jsonic_reflect::SERIALIZED_TYPE_KEY`.
static SERIALIZED_TYPE_KEY: &str = "_serialized_type";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Serializable Derivation
///
/// `#[derive(Serializable)]` implements the following traits for a struct
/// with named fields:
///
/// - `TypePath`
/// - `Reflect`
/// - `Struct`
/// - `FromDynamic`
/// - `Serializable`
///
/// Every field type must implement `Reflect` and `FromDynamic`. Generic
/// structs, tuple structs, unit structs, enums and unions are rejected.
///
/// ## Constructor
///
/// The generated `Serializable::construct` takes one parameter per field,
/// named after the field. A tagged mapping is rebuilt by resolving every
/// parameter from the attribute of the same name, then assigning the
/// remaining attributes with `Struct::set_field`.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// The qualified name defaults to `concat!(module_path!(), "::", Ident)`.
/// It is the registry key and the value of the `_serialized_type` tag, so
/// types that must stay readable across refactorings should pin it:
///
/// ```rust, ignore
/// #[derive(Serializable)]
/// #[jsonic(type_path = "shop::Order")]
/// struct Order { /* ... */ }
/// ```
///
/// ### Auto Registration
///
/// With the `auto_register` feature, derived types are collected in a
/// link-time catalogue that `TypeRegistry::new` applies. Opt out with:
///
/// ```rust, ignore
/// #[derive(Serializable)]
/// #[jsonic(auto_register = false)]
/// struct Scratch { /* ... */ }
/// ```
///
/// ## Field Attributes
///
/// - `rename = "name"`: the attribute name used on the wire and by
///   `Struct::field`. A name starting with `_` is private.
/// - `transient`: the field never reaches the wire and is filled with its
///   default on construction.
/// - `skip_param`: the field is not a constructor parameter. It is still
///   serialized and assigned after construction.
/// - `param = "name"`: the constructor parameter reading this attribute has
///   a different name, e.g. a mapping `{"latitude": ..}` built through a
///   constructor taking `lat`.
/// - `default`, `default = "path::to::fn"`: fallback used when the parameter
///   is skipped as private, and for `transient` and `skip_param` fields.
///   Without a path, `Default::default` is used.
///
/// ```rust, ignore
/// #[derive(Serializable)]
/// struct Coordinate {
///     #[jsonic(param = "lat")]
///     latitude: f64,
///     #[jsonic(param = "lon")]
///     longitude: f64,
///     #[jsonic(rename = "_source", default = "unknown_source")]
///     source: String,
///     #[jsonic(transient)]
///     cached_label: Option<String>,
/// }
/// ```
#[proc_macro_derive(Serializable, attributes(jsonic))]
pub fn derive_serializable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::SerializableStruct::from_derive_input(&ast) {
        Ok(info) => impls::impl_serializable_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Submits a type to the auto-registration catalogue.
///
/// Use this for types implementing `Serializable` by hand. The type must
/// not be generic.
///
/// ```rust, ignore
/// impl_auto_register!(weather::Celsius);
/// ```
///
/// This macro expands to nothing when the `auto_register` feature is
/// disabled.
#[proc_macro]
pub fn impl_auto_register(_input: TokenStream) -> TokenStream {
    #[cfg(not(feature = "auto_register"))]
    return utils::empty().into();

    #[cfg(feature = "auto_register")]
    {
        let ty = parse_macro_input!(_input as syn::Type);

        let jsonic_reflect_path = path::jsonic_reflect();
        let register_tokens = impls::get_auto_register_tokens(&jsonic_reflect_path, &ty);

        TokenStream::from(quote::quote! {
            const _: () = {
                #register_tokens
            };
        })
    }
}
