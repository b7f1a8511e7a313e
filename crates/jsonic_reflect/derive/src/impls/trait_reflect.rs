use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::SerializableMeta;

/// Generate implementation codes for `Reflect`
pub(crate) fn impl_trait_reflect(meta: &SerializableMeta) -> TokenStream {
    let jsonic_reflect_path = meta.jsonic_reflect_path();
    let reflect_ = crate::path::reflect_(jsonic_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(jsonic_reflect_path);
    let type_path_ = crate::path::type_path_(jsonic_reflect_path);
    let type_ident = meta.type_ident();

    quote! {
        impl #reflect_ for #type_ident {
            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                <Self as #type_path_>::type_path()
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }
        }
    }
}

/// Generate implementation codes for `FromDynamic`
///
/// A struct can only come out of a deserialized tree as a constructed
/// object, so this moves it out of `Dynamic::Object`.
pub(crate) fn impl_trait_from_dynamic(meta: &SerializableMeta) -> TokenStream {
    let jsonic_reflect_path = meta.jsonic_reflect_path();
    let from_dynamic_ = crate::path::from_dynamic_(jsonic_reflect_path);
    let dynamic_ = crate::path::dynamic_(jsonic_reflect_path);
    let result_ = crate::path::result_(meta.type_ident().span());
    let type_ident = meta.type_ident();

    quote! {
        impl #from_dynamic_ for #type_ident {
            #[inline]
            fn from_dynamic(value: #dynamic_) -> #result_<Self, #dynamic_> {
                value.take_object::<Self>()
            }
        }
    }
}
