use crate::Reflect;
use crate::info::{FieldInfo, StructInfo};
use crate::serde::DeserializeError;
use crate::value::Dynamic;

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via reflection.
///
/// Field access goes through the static [`StructInfo`] of the type: fields
/// keep their declaration order and are addressed by the attribute name they
/// use on the wire.
///
/// This trait is implemented by `#[derive(Serializable)]`. Declared transient
/// fields are listed in the descriptor, but [`field_at`] returns `None` for
/// them and [`set_field`] does not accept them.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::{derive::Serializable, ops::Struct};
///
/// #[derive(Serializable)]
/// #[jsonic(auto_register = false)]
/// struct Token {
///     owner: String,
///     #[jsonic(rename = "_secret")]
///     secret: String,
/// }
///
/// let token = Token { owner: "ops".into(), secret: "hunter2".into() };
/// let value: &dyn Struct = &token;
///
/// assert_eq!(value.field_len(), 2);
/// assert_eq!(value.name_at(1), Some("_secret"));
/// assert_eq!(
///     value.field("owner").and_then(|v| v.downcast_ref::<String>()).map(String::as_str),
///     Some("ops"),
/// );
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
/// [`field_at`]: Struct::field_at
/// [`set_field`]: Struct::set_field
pub trait Struct: Reflect {
    /// Returns the static descriptor of this struct.
    fn reflect_struct_info(&self) -> &'static StructInfo;

    /// Returns a reference to the value of the field at `index`.
    ///
    /// Returns `None` if out of bounds or the field is declared transient.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Assigns a deserialized value to the field with the given attribute name.
    ///
    /// Returns `Ok(false)` if no assignable field has that name.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError::MismatchedValue`] if the value does not
    /// fit the field type.
    fn set_field(&mut self, name: &str, value: Dynamic) -> Result<bool, DeserializeError>;

    /// Returns a reference to the value of the field named `name`.
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        match self.reflect_struct_info().index_of(name) {
            Some(index) => self.field_at(index),
            None => None,
        }
    }

    /// Returns the attribute name of the field at `index`.
    #[inline]
    fn name_at(&self, index: usize) -> Option<&'static str> {
        self.reflect_struct_info().field_at(index).map(FieldInfo::name)
    }

    /// Returns the number of fields in the struct.
    #[inline]
    fn field_len(&self) -> usize {
        self.reflect_struct_info().field_len()
    }
}

impl dyn Struct {
    /// Returns an iterator over the fields, transient ones included.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the fields of a [`Struct`], yielding the static field
/// information together with the value when one is reachable.
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    index: usize,
}

impl StructFieldIter<'_> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &dyn Struct) -> StructFieldIter<'_> {
        StructFieldIter { value, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'static FieldInfo, Option<&'a dyn Reflect>);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.value.reflect_struct_info().field_at(self.index)?;
        let value = self.value.field_at(self.index);
        self.index += 1;
        Some((info, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.value.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
