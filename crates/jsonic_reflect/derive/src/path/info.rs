use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_path_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn struct_info_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn param_info_(jsonic_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jsonic_reflect_path::info::ParamInfo
    }
}
