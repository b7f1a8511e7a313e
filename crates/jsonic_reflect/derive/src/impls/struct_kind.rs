use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_from_dynamic, impl_trait_reflect};
use super::{impl_trait_serializable, impl_trait_type_path};

use crate::derive_data::SerializableStruct;

/// Implement `Serializable` and its supertraits for a struct type.
pub(crate) fn impl_serializable_struct(info: &SerializableStruct) -> TokenStream {
    let meta = info.meta();
    let info_ident = Ident::new("INFO", meta.type_ident().span());

    let struct_info_tokens = get_struct_info_static(info, &info_ident);
    let type_path_trait_tokens = impl_trait_type_path(meta);
    let reflect_trait_tokens = impl_trait_reflect(meta);
    let struct_trait_tokens = impl_trait_struct(info, &info_ident);
    let from_dynamic_trait_tokens = impl_trait_from_dynamic(meta);
    let serializable_trait_tokens = impl_trait_serializable(info, &info_ident);
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        const _: () = {
            #struct_info_tokens

            #type_path_trait_tokens

            #reflect_trait_tokens

            #struct_trait_tokens

            #from_dynamic_trait_tokens

            #serializable_trait_tokens

            #auto_register_tokens
        };
    }
}

/// Generate the static descriptor.
///
/// Similar to following:
///
/// ```ignore
/// static INFO: _path_::StructInfo = _path_::StructInfo::new(
///     "demo::Coordinate",
///     "Coordinate",
///     &[ _path_::FieldInfo::new("latitude"), ... ],
///     &[ _path_::ParamInfo::new("lat").with_attribute("latitude"), ... ],
/// );
/// ```
fn get_struct_info_static(info: &SerializableStruct, info_ident: &Ident) -> TokenStream {
    let meta = info.meta();
    let jsonic_reflect_path = meta.jsonic_reflect_path();
    let struct_info_ = crate::path::struct_info_(jsonic_reflect_path);
    let field_info_ = crate::path::field_info_(jsonic_reflect_path);
    let param_info_ = crate::path::param_info_(jsonic_reflect_path);

    let type_path = meta.type_path_expression();
    let type_name = meta.type_name_literal();

    let fields = info.fields().iter().map(|field| {
        let name = &field.name;
        let transient = field.is_transient().then(|| quote!(.transient()));
        quote! {
            #field_info_::new(#name) #transient
        }
    });

    let params = info.fields().iter().filter_map(|field| {
        let param = field.param_name()?;
        let attribute = &field.name;
        let with_attribute = (param.value() != attribute.value())
            .then(|| quote!(.with_attribute(#attribute)));
        let with_default = field.attrs.default.is_some().then(|| quote!(.with_default()));
        Some(quote! {
            #param_info_::new(#param) #with_attribute #with_default
        })
    });

    quote! {
        static #info_ident: #struct_info_ = #struct_info_::new(
            #type_path,
            #type_name,
            &[ #(#fields,)* ],
            &[ #(#params,)* ],
        );
    }
}

/// Generate implementation codes for `Struct`
fn impl_trait_struct(info: &SerializableStruct, info_ident: &Ident) -> TokenStream {
    let meta = info.meta();
    let jsonic_reflect_path = meta.jsonic_reflect_path();
    let struct_ = crate::path::struct_(jsonic_reflect_path);
    let struct_info_ = crate::path::struct_info_(jsonic_reflect_path);
    let reflect_ = crate::path::reflect_(jsonic_reflect_path);
    let dynamic_ = crate::path::dynamic_(jsonic_reflect_path);
    let type_path_ = crate::path::type_path_(jsonic_reflect_path);
    let deserialize_error_ = crate::path::deserialize_error_(jsonic_reflect_path);

    let type_ident = meta.type_ident();
    let option_ = crate::path::option_(type_ident.span());
    let result_ = crate::path::result_(type_ident.span());

    let field_at_body = if info.active_fields().next().is_none() {
        quote! {
            let _ = index;
            #option_::None
        }
    } else {
        let arms = info.active_fields().map(|field| {
            let index = field.index;
            let ident = field.ident;
            quote! {
                #index => #option_::Some(&self.#ident as &dyn #reflect_),
            }
        });
        quote! {
            match index {
                #(#arms)*
                _ => #option_::None,
            }
        }
    };

    let set_field_body = if info.active_fields().next().is_none() {
        quote! {
            let _ = (name, value);
            #result_::Ok(false)
        }
    } else {
        let arms = info.active_fields().map(|field| {
            let ident = field.ident;
            let name = &field.name;
            quote! {
                #name => self.#ident = value.extract(<Self as #type_path_>::type_path(), name)?,
            }
        });
        quote! {
            match name {
                #(#arms)*
                _ => return #result_::Ok(false),
            }
            #result_::Ok(true)
        }
    };

    quote! {
        impl #struct_ for #type_ident {
            #[inline]
            fn reflect_struct_info(&self) -> &'static #struct_info_ {
                &#info_ident
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                #field_at_body
            }

            fn set_field(
                &mut self,
                name: &str,
                value: #dynamic_,
            ) -> #result_<bool, #deserialize_error_> {
                #set_field_body
            }
        }
    }
}
