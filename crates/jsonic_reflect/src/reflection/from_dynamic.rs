use crate::value::Dynamic;

/// A trait for types that can be extracted from a deserialized [`Dynamic`] tree.
///
/// The deserializer produces untyped values; struct constructors and
/// [`Struct::set_field`] use this trait to turn them into field types.
///
/// On mismatch the value is handed back, so the caller can report what was
/// found. For containers this is the offending element, not the whole
/// container.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::{FromDynamic, value::Dynamic};
///
/// let value = Dynamic::from(vec![Dynamic::from(1_u8), Dynamic::from(2_u8)]);
/// assert_eq!(Vec::<u16>::from_dynamic(value).unwrap(), [1, 2]);
///
/// let value = Dynamic::from("text");
/// assert!(i32::from_dynamic(value).is_err());
/// ```
///
/// [`Struct::set_field`]: crate::ops::Struct::set_field
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromDynamic` so cannot be deserialized",
    note = "consider annotating `{Self}` with `#[derive(Serializable)]`"
)]
pub trait FromDynamic: Sized {
    /// Extracts `Self` from the given value.
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic>;
}
