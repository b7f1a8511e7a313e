use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::derive_data::{FieldDefault, SerializableStruct, StructField};

/// The fallback of a field as a callable expression.
fn default_fn(field: &StructField) -> TokenStream {
    match &field.attrs.default {
        Some(FieldDefault::Func(path)) => quote!(#path),
        Some(FieldDefault::Trait(span)) => crate::path::default_fn_(*span),
        None => crate::path::default_fn_(field.ident.span()),
    }
}

/// Generate implementation codes for `Serializable`
///
/// `construct` takes every parameter out of the `InitArgs`. Fields that are
/// not parameters are filled with their fallback.
///
/// Similar to following:
///
/// ```ignore
/// fn construct(args: &mut _path_::InitArgs) -> Result<Self, _path_::DeserializeError> {
///     Ok(Self {
///         latitude: args.take::<f64>("lat")?,
///         source: args.take_or_else::<String>("_source", unknown_source)?,
///         cached_label: ::core::default::Default::default(),
///     })
/// }
/// ```
pub(crate) fn impl_trait_serializable(info: &SerializableStruct, info_ident: &Ident) -> TokenStream {
    let meta = info.meta();
    let jsonic_reflect_path = meta.jsonic_reflect_path();
    let serializable_ = crate::path::serializable_(jsonic_reflect_path);
    let struct_info_ = crate::path::struct_info_(jsonic_reflect_path);
    let init_args_ = crate::path::init_args_(jsonic_reflect_path);
    let deserialize_error_ = crate::path::deserialize_error_(jsonic_reflect_path);

    let type_ident = meta.type_ident();
    let result_ = crate::path::result_(type_ident.span());

    let has_params = info.fields().iter().any(|field| field.attrs.is_param());
    let args_ident = if has_params {
        Ident::new("args", type_ident.span())
    } else {
        Ident::new("_args", type_ident.span())
    };

    let inits = info.fields().iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let default_fn = default_fn(field);
        match field.param_name() {
            Some(param) if field.attrs.default.is_some() => quote! {
                #ident: #args_ident.take_or_else::<#ty>(#param, #default_fn)?
            },
            Some(param) => quote! {
                #ident: #args_ident.take::<#ty>(#param)?
            },
            None => quote! {
                #ident: #default_fn()
            },
        }
    });

    quote! {
        impl #serializable_ for #type_ident {
            #[inline]
            fn struct_info() -> &'static #struct_info_ {
                &#info_ident
            }

            fn construct(#args_ident: &mut #init_args_) -> #result_<Self, #deserialize_error_> {
                #result_::Ok(Self {
                    #(#inits,)*
                })
            }
        }
    }
}
