use proc_macro2::Span;
use syn::{Attribute, LitBool, LitStr, spanned::Spanned};

/// Type level `#[jsonic(...)]` attributes.
#[derive(Debug)]
pub(crate) struct TypeAttributes {
    /// `#[jsonic(type_path = "...")]`
    pub type_path: Option<LitStr>,
    /// `None` after `#[jsonic(auto_register = false)]`, otherwise the span
    /// the registration is reported at.
    pub auto_register: Option<Span>,
}

impl Default for TypeAttributes {
    fn default() -> Self {
        Self {
            type_path: None,
            auto_register: Some(Span::call_site()),
        }
    }
}

impl TypeAttributes {
    /// Parse all `#[jsonic(...)]` attributes on a type.
    ///
    /// Examples:
    /// - `#[jsonic(type_path = "shop::Order")]`
    /// - `#[jsonic(auto_register = false)]`
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in super::jsonic_attributes(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    let value = lit.value();
                    if value.is_empty() {
                        return Err(syn::Error::new(lit.span(), "`type_path` cannot be empty"));
                    }
                    if value.starts_with("::") {
                        return Err(syn::Error::new(
                            lit.span(),
                            "did not expect a leading double colon (`::`)",
                        ));
                    }
                    this.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    let span = meta.path.span();
                    let enabled = if meta.input.peek(syn::Token![=]) {
                        meta.value()?.parse::<LitBool>()?.value()
                    } else {
                        true
                    };
                    this.auto_register = enabled.then_some(span);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unknown type attribute, expected `type_path` or `auto_register`",
                    ))
                }
            })?;
        }

        Ok(this)
    }
}
