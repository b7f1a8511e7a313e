use alloc::borrow::Cow;

use crate::info::TypePath;

// -----------------------------------------------------------------------------
// ExpectedType

/// The shape a deserialized top-level value must have.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::serde::ExpectedType;
///
/// assert_eq!(ExpectedType::of::<String>(), ExpectedType::Type("alloc::string::String".into()));
/// assert_eq!(ExpectedType::Sequence.to_string(), "a sequence");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedType {
    /// A JSON array.
    Sequence,
    /// A plain mapping without type tag.
    Mapping,
    /// A JSON scalar: `null`, a boolean, a number or a string.
    Scalar,
    /// A tagged mapping whose tag is the given qualified name.
    Type(Cow<'static, str>),
}

impl ExpectedType {
    /// Expects a tagged mapping of type `T`.
    #[inline]
    pub fn of<T: TypePath>() -> Self {
        Self::Type(Cow::Borrowed(T::type_path()))
    }
}

impl core::fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sequence => f.write_str("a sequence"),
            Self::Mapping => f.write_str("a mapping"),
            Self::Scalar => f.write_str("a scalar"),
            Self::Type(name) => write!(f, "an instance of `{name}`"),
        }
    }
}
