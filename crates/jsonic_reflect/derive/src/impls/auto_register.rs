use proc_macro2::TokenStream;

use crate::derive_data::SerializableMeta;

/// Generate the catalogue entry of `ty`.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_tokens(jsonic_reflect_path: &syn::Path, ty: &syn::Type) -> TokenStream {
    let auto_register_ = crate::path::auto_register_(jsonic_reflect_path);

    quote::quote! {
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ty as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &SerializableMeta) -> TokenStream {
    if let Some(span) = meta.attrs().auto_register {
        let jsonic_reflect_path = meta.jsonic_reflect_path();
        let auto_register_ = crate::path::auto_register_(jsonic_reflect_path);
        let type_ident = meta.type_ident();

        quote::quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::__AutoRegisterFunc(
                    <#type_ident as #auto_register_::__RegisterType>::__register
                )
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &SerializableMeta) -> TokenStream {
    crate::utils::empty()
}
