use proc_macro2::Span;
use syn::{Attribute, ExprPath, LitStr, spanned::Spanned};

/// The fallback of a field, see [`FieldAttributes::default`].
#[derive(Debug, Clone)]
pub(crate) enum FieldDefault {
    /// `#[jsonic(default)]`, uses `Default::default`.
    Trait(Span),
    /// `#[jsonic(default = "path::to::fn")]`
    Func(ExprPath),
}

/// Field level `#[jsonic(...)]` attributes.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[jsonic(rename = "...")]`
    pub rename: Option<LitStr>,
    /// `#[jsonic(param = "...")]`
    pub param: Option<LitStr>,
    /// `#[jsonic(transient)]`
    pub transient: Option<Span>,
    /// `#[jsonic(skip_param)]`
    pub skip_param: Option<Span>,
    /// `#[jsonic(default)]` or `#[jsonic(default = "...")]`
    pub default: Option<FieldDefault>,
}

impl FieldAttributes {
    /// Parse all `#[jsonic(...)]` attributes on a field.
    ///
    /// Examples:
    /// - `#[jsonic(rename = "_token", default)]`
    /// - `#[jsonic(param = "lat")]`
    /// - `#[jsonic(transient, default = "empty_cache")]`
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in super::jsonic_attributes(attrs) {
            attr.parse_nested_meta(|meta| {
                let span = meta.path.span();
                if meta.path.is_ident("rename") {
                    set_once(&mut this.rename, meta.value()?.parse()?, span, "rename")
                } else if meta.path.is_ident("param") {
                    set_once(&mut this.param, meta.value()?.parse()?, span, "param")
                } else if meta.path.is_ident("transient") {
                    set_once(&mut this.transient, span, span, "transient")
                } else if meta.path.is_ident("skip_param") {
                    set_once(&mut this.skip_param, span, span, "skip_param")
                } else if meta.path.is_ident("default") {
                    let default = if meta.input.peek(syn::Token![=]) {
                        let lit: LitStr = meta.value()?.parse()?;
                        FieldDefault::Func(lit.parse()?)
                    } else {
                        FieldDefault::Trait(span)
                    };
                    set_once(&mut this.default, default, span, "default")
                } else {
                    Err(meta.error(
                        "unknown field attribute, expected one of `rename`, `param`, `transient`, `skip_param`, `default`",
                    ))
                }
            })?;
        }

        this.validate()?;
        Ok(this)
    }

    fn validate(&self) -> syn::Result<()> {
        if let Some(param) = &self.param {
            if self.transient.is_some() {
                return Err(syn::Error::new(
                    param.span(),
                    "a `transient` field is not a constructor parameter",
                ));
            }
            if self.skip_param.is_some() {
                return Err(syn::Error::new(
                    param.span(),
                    "`param` conflicts with `skip_param`",
                ));
            }
            if param.value().is_empty() {
                return Err(syn::Error::new(param.span(), "`param` cannot be empty"));
            }
        }
        if let Some(rename) = &self.rename
            && rename.value().is_empty()
        {
            return Err(syn::Error::new(rename.span(), "`rename` cannot be empty"));
        }
        Ok(())
    }

    /// Returns `true` if the field is a constructor parameter.
    #[inline]
    pub fn is_param(&self) -> bool {
        self.transient.is_none() && self.skip_param.is_none()
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, span: Span, name: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(span, format!("duplicate `{name}` attribute")));
    }
    *slot = Some(value);
    Ok(())
}
