use crate::is_private;

// -----------------------------------------------------------------------------
// FieldInfo

/// Static information of one struct field, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    transient: bool,
}

impl FieldInfo {
    /// Creates a serialized field with the given attribute name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            transient: false,
        }
    }

    /// Marks the field as transient: it never reaches the wire.
    #[inline]
    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Returns the attribute name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the field was declared transient.
    #[inline]
    pub const fn is_transient(&self) -> bool {
        self.transient
    }

    /// Returns `true` if the attribute name is private.
    #[inline]
    pub fn is_private(&self) -> bool {
        is_private(self.name)
    }
}

// -----------------------------------------------------------------------------
// ParamInfo

/// Static information of one constructor parameter.
///
/// A parameter reads its value from the attribute with the same name,
/// unless an alias maps it to another attribute. Parameters with a default
/// may be left unresolved when they are filtered out as private.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    name: &'static str,
    attribute: &'static str,
    has_default: bool,
}

impl ParamInfo {
    /// Creates a parameter reading the attribute of the same name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            attribute: name,
            has_default: false,
        }
    }

    /// Declares the attribute this parameter reads from.
    #[inline]
    pub const fn with_attribute(mut self, attribute: &'static str) -> Self {
        self.attribute = attribute;
        self
    }

    /// Declares that the constructor can fill this parameter itself.
    #[inline]
    pub const fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Returns the parameter name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the attribute name declared for this parameter.
    #[inline]
    pub const fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// Returns `true` if the constructor has a fallback for this parameter.
    #[inline]
    pub const fn has_default(&self) -> bool {
        self.has_default
    }

    /// Returns `true` if the parameter name is private.
    #[inline]
    pub fn is_private(&self) -> bool {
        is_private(self.name)
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// Static descriptor of a serializable struct.
///
/// This replaces runtime attribute and constructor-signature introspection:
/// `fields` lists the attributes in declaration order, `params` lists the
/// constructor parameters consumed by [`Serializable::construct`].
///
/// # Examples
///
/// ```
/// use jsonic_reflect::info::{FieldInfo, ParamInfo, StructInfo};
///
/// static INFO: StructInfo = StructInfo::new(
///     "demo::Coordinate",
///     "Coordinate",
///     &[FieldInfo::new("longitude"), FieldInfo::new("latitude")],
///     &[
///         ParamInfo::new("lon").with_attribute("longitude"),
///         ParamInfo::new("lat").with_attribute("latitude"),
///     ],
/// );
///
/// assert_eq!(INFO.index_of("latitude"), Some(1));
/// assert_eq!(
///     INFO.declared_aliases().collect::<Vec<_>>(),
///     [("lon", "longitude"), ("lat", "latitude")],
/// );
/// ```
///
/// [`Serializable::construct`]: crate::Serializable::construct
#[derive(Debug, Clone, Copy)]
pub struct StructInfo {
    type_path: &'static str,
    type_name: &'static str,
    fields: &'static [FieldInfo],
    params: &'static [ParamInfo],
}

impl StructInfo {
    /// Creates a descriptor.
    #[inline]
    pub const fn new(
        type_path: &'static str,
        type_name: &'static str,
        fields: &'static [FieldInfo],
        params: &'static [ParamInfo],
    ) -> Self {
        Self {
            type_path,
            type_name,
            fields,
            params,
        }
    }

    /// Returns the qualified name.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the short type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    /// Returns the constructor parameters in declaration order.
    #[inline]
    pub const fn params(&self) -> &'static [ParamInfo] {
        self.params
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the field named `name`.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the index of the field named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Returns the names of the fields declared transient.
    pub fn declared_transient(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|field| field.transient)
            .map(FieldInfo::name)
    }

    /// Returns `(parameter, attribute)` for every parameter reading an
    /// attribute of a different name.
    pub fn declared_aliases(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.params
            .iter()
            .filter(|param| param.name != param.attribute)
            .map(|param| (param.name, param.attribute))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FieldInfo, ParamInfo, StructInfo};

    static INFO: StructInfo = StructInfo::new(
        "tests::Session",
        "Session",
        &[
            FieldInfo::new("user_id"),
            FieldInfo::new("_token"),
            FieldInfo::new("cache").transient(),
        ],
        &[ParamInfo::new("user_id"), ParamInfo::new("_token").with_default()],
    );

    #[test]
    fn field_lookup() {
        assert_eq!(INFO.field_len(), 3);
        assert_eq!(INFO.index_of("cache"), Some(2));
        assert!(INFO.field("_token").unwrap().is_private());
        assert!(INFO.field("missing").is_none());
    }

    #[test]
    fn declared_sets() {
        assert_eq!(INFO.declared_transient().collect::<Vec<_>>(), ["cache"]);
        assert_eq!(INFO.declared_aliases().count(), 0);
        assert!(INFO.params()[1].has_default());
        assert!(INFO.params()[1].is_private());
    }
}
