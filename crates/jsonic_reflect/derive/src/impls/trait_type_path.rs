use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SerializableMeta;

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &SerializableMeta) -> TokenStream {
    let trait_type_path_ = crate::path::type_path_(meta.jsonic_reflect_path());
    let type_ident = meta.type_ident();

    let type_path = meta.type_path_expression();
    let type_name = meta.type_name_literal();
    let module_path = meta.module_path_expression();

    quote! {
        impl #trait_type_path_ for #type_ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
