use std::collections::BTreeSet;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use super::{FieldAttributes, SerializableMeta, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// One named field of the deriving struct.
#[derive(Debug)]
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    /// Position in the field list of the descriptor.
    pub index: usize,
    /// The attribute name, `rename` or the unraw identifier.
    pub name: LitStr,
}

impl StructField<'_> {
    /// The constructor parameter name, `None` if the field is not a parameter.
    pub fn param_name(&self) -> Option<LitStr> {
        if !self.attrs.is_param() {
            return None;
        }
        Some(self.attrs.param.clone().unwrap_or_else(|| self.name.clone()))
    }

    #[inline]
    pub fn is_transient(&self) -> bool {
        self.attrs.transient.is_some()
    }
}

// -----------------------------------------------------------------------------
// SerializableStruct

/// A parsed `#[derive(Serializable)]` input.
#[derive(Debug)]
pub(crate) struct SerializableStruct<'a> {
    meta: SerializableMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> SerializableStruct<'a> {
    pub fn from_derive_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`Serializable` cannot be derived for generic types",
            ));
        }

        let named = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        input.ident.span(),
                        "`Serializable` requires a struct with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Serializable` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Serializable` cannot be derived for unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = SerializableMeta::new(attrs, &input.ident);

        let mut fields = Vec::with_capacity(named.named.len());
        for (index, field) in named.named.iter().enumerate() {
            // Fields::Named always carries identifiers.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            let name = match &attrs.rename {
                Some(lit) => lit.clone(),
                None => crate::utils::lit_str(&ident.unraw().to_string(), ident.span()),
            };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                attrs,
                index,
                name,
            });
        }

        let this = Self { meta, fields };
        this.check_names()?;
        Ok(this)
    }

    /// Rejects duplicate attribute or parameter names and the reserved key.
    fn check_names(&self) -> syn::Result<()> {
        let mut names = BTreeSet::new();
        let mut params = BTreeSet::new();

        for field in &self.fields {
            let name = field.name.value();
            if name == crate::SERIALIZED_TYPE_KEY {
                return Err(syn::Error::new(
                    field.name.span(),
                    format!("`{name}` is reserved for the type tag"),
                ));
            }
            if !names.insert(name.clone()) {
                return Err(syn::Error::new(
                    field.name.span(),
                    format!("duplicate attribute name `{name}`"),
                ));
            }
            if let Some(param) = field.param_name() {
                let value = param.value();
                if !params.insert(value.clone()) {
                    return Err(syn::Error::new(
                        param.span(),
                        format!("duplicate constructor parameter `{value}`"),
                    ));
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn meta(&self) -> &SerializableMeta<'a> {
        &self.meta
    }

    /// All fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// Fields reachable through `field_at` and `set_field`.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| !field.is_transient())
    }
}
