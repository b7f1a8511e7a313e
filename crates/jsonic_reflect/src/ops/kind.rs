use crate::ops::{List, Map, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the shapes a reflected value can take.
///
/// The variants mirror the JSON data model: the serializer turns every value
/// into a tree by matching on this enum, recursing into lists, maps, struct
/// fields and wrapped values.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::{Reflect, ops::ReflectRef};
///
/// let value = vec![1_u8, 2, 3];
/// match value.reflect_ref() {
///     ReflectRef::List(list) => assert_eq!(list.len(), 3),
///     _ => unreachable!(),
/// }
///
/// assert!(matches!(None::<i32>.reflect_ref(), ReflectRef::Null));
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    /// `null`, produced by `()`, `None` and [`Dynamic::Null`].
    ///
    /// [`Dynamic::Null`]: crate::value::Dynamic::Null
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    String(&'a str),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Struct(&'a dyn Struct),
    /// A transparent wrapper (`Box<T>`, `Some(T)`, a deserialized object)
    /// that is serialized as the inner value.
    Inner(&'a dyn crate::Reflect),
    /// A value without structural reflection. Only a serialize hook can
    /// turn it into a tree.
    Opaque,
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind name used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) | Self::Float(_) => "number",
            Self::Char(_) | Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
            Self::Inner(_) => "wrapper",
            Self::Opaque => "opaque",
        }
    }

    /// Returns the list, if this is [`ReflectRef::List`].
    #[inline]
    pub fn as_list(self) -> Option<&'a dyn List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the map, if this is [`ReflectRef::Map`].
    #[inline]
    pub fn as_map(self) -> Option<&'a dyn Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the struct, if this is [`ReflectRef::Struct`].
    #[inline]
    pub fn as_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }
}

impl core::fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "Bool({v})"),
            Self::Int(v) => write!(f, "Int({v})"),
            Self::UInt(v) => write!(f, "UInt({v})"),
            Self::Float(v) => write!(f, "Float({v})"),
            Self::Char(v) => write!(f, "Char({v:?})"),
            Self::String(v) => write!(f, "String({v:?})"),
            Self::Struct(v) => write!(f, "Struct({})", v.reflect_type_path()),
            Self::Inner(v) => write!(f, "Inner({})", v.reflect_type_path()),
            other => f.write_str(other.kind()),
        }
    }
}
