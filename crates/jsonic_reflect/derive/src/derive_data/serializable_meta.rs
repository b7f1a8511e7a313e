use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Path};

use super::TypeAttributes;

/// Type level information shared by all generated impls.
pub(crate) struct SerializableMeta<'a> {
    jsonic_reflect_path: Path,
    attrs: TypeAttributes,
    type_ident: &'a Ident,
}

impl core::fmt::Debug for SerializableMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SerializableMeta")
            .field("jsonic_reflect_path", &self.jsonic_reflect_path.to_token_stream())
            .field("type_ident", &self.type_ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> SerializableMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, type_ident: &'a Ident) -> Self {
        Self {
            jsonic_reflect_path: crate::path::jsonic_reflect(),
            attrs,
            type_ident,
        }
    }

    #[inline]
    pub fn jsonic_reflect_path(&self) -> &Path {
        &self.jsonic_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn type_ident(&self) -> &Ident {
        self.type_ident
    }

    /// The qualified name as a `&'static str` expression, usable in const
    /// context.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// ::core::concat!(::core::module_path!(), "::", "Foo")
    /// ```
    pub fn type_path_expression(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => lit.to_token_stream(),
            None => {
                let name = self.type_name_literal();
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #name)
                }
            }
        }
    }

    /// The short type name literal.
    ///
    /// With a custom `type_path`, this is its last segment.
    pub fn type_name_literal(&self) -> syn::LitStr {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                let name = value.rsplit("::").next().unwrap_or(&value);
                crate::utils::lit_str(name, lit.span())
            }
            None => crate::utils::lit_str(&self.type_ident.to_string(), self.type_ident.span()),
        }
    }

    /// The module path as an `Option<&'static str>` expression.
    pub fn module_path_expression(&self) -> TokenStream {
        let option_ = crate::path::option_(self.type_ident.span());
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                match value.rsplit_once("::") {
                    Some((module, _)) => {
                        let module = crate::utils::lit_str(module, lit.span());
                        quote! { #option_::Some(#module) }
                    }
                    None => quote! { #option_::None },
                }
            }
            None => quote! { #option_::Some(::core::module_path!()) },
        }
    }
}
