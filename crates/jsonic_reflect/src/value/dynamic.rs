use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use serde_json::{Number, Value};

use crate::info::TypePath;
use crate::ops::ReflectRef;
use crate::serde::DeserializeError;
use crate::value::DynamicMap;
use crate::{FromDynamic, Reflect};

// -----------------------------------------------------------------------------
// Dynamic

/// A deserialized value.
///
/// This is the output of the deserializer: JSON scalars, lists and plain
/// mappings stay untyped, while tagged mappings become [`Dynamic::Object`]
/// holding the constructed instance.
///
/// `Dynamic` implements [`Reflect`], so a deserialized tree can be
/// serialized again, and [`FromDynamic`], so it can be a field type of a
/// registered struct.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::value::{Dynamic, DynamicMap};
///
/// let mut map = DynamicMap::new();
/// map.insert("tags".into(), Dynamic::from(vec![Dynamic::from("a")]));
/// let value = Dynamic::from(map);
///
/// assert_eq!(value.kind(), "map");
/// assert_eq!(value.get("tags").and_then(|tags| tags.index(0)).and_then(Dynamic::as_str), Some("a"));
/// ```
#[derive(Debug, Default)]
pub enum Dynamic {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Dynamic>),
    Map(DynamicMap),
    /// An instance built from a tagged mapping, by a constructor or a hook.
    Object(Box<dyn Reflect>),
}

impl Dynamic {
    /// Returns the kind name used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Dynamic]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&DynamicMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&dyn Reflect> {
        match self {
            Self::Object(obj) => Some(&**obj),
            _ => None,
        }
    }

    /// Returns the entry of a map value.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns the element of a list value.
    #[inline]
    pub fn index(&self, index: usize) -> Option<&Dynamic> {
        self.as_list().and_then(|items| items.get(index))
    }

    /// Downcasts an object value to type `T` by reference.
    ///
    /// Returns `None` for non-object values and objects of other types.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_object().and_then(<dyn Reflect>::downcast_ref::<T>)
    }

    /// Downcasts an object value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        match self {
            Self::Object(obj) => obj.downcast_mut(),
            _ => None,
        }
    }

    /// Moves the instance out of an object value of type `T`.
    ///
    /// Returns the value unchanged if it is not such an object.
    pub fn take_object<T: Any>(self) -> Result<T, Dynamic> {
        match self {
            Self::Object(obj) => obj.take::<T>().map_err(Self::Object),
            other => Err(other),
        }
    }

    /// Extracts a typed value, see [`FromDynamic`].
    #[inline]
    pub fn take<T: FromDynamic>(self) -> Result<T, Dynamic> {
        T::from_dynamic(self)
    }

    /// Extracts a typed value for the attribute `field` of `type_path`.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError::MismatchedValue`] naming the type, the
    /// attribute, the expected Rust type and the kind of value found.
    pub fn extract<T: FromDynamic>(
        self,
        type_path: &'static str,
        field: &str,
    ) -> Result<T, DeserializeError> {
        T::from_dynamic(self).map_err(|found| DeserializeError::MismatchedValue {
            type_path,
            field: field.into(),
            expected: core::any::type_name::<T>(),
            found: found.kind(),
        })
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl From<()> for Dynamic {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Dynamic {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Dynamic {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<f64> for Dynamic {
    /// Non-finite floats have no JSON representation and become [`Dynamic::Null`].
    #[inline]
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<f32> for Dynamic {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<&str> for Dynamic {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Dynamic {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Dynamic>> for Dynamic {
    #[inline]
    fn from(value: Vec<Dynamic>) -> Self {
        Self::List(value)
    }
}

impl From<DynamicMap> for Dynamic {
    #[inline]
    fn from(value: DynamicMap) -> Self {
        Self::Map(value)
    }
}

impl From<Box<dyn Reflect>> for Dynamic {
    #[inline]
    fn from(value: Box<dyn Reflect>) -> Self {
        Self::Object(value)
    }
}

impl From<Value> for Dynamic {
    /// Converts a JSON tree without interpreting type tags.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(v) => Self::Bool(v),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
        }
    }
}

// -----------------------------------------------------------------------------
// Reflection

impl TypePath for Dynamic {
    #[inline]
    fn type_path() -> &'static str {
        "jsonic_reflect::value::Dynamic"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Dynamic"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("jsonic_reflect::value")
    }
}

impl Reflect for Dynamic {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Self::Null => ReflectRef::Null,
            Self::Bool(v) => ReflectRef::Bool(*v),
            Self::Number(n) => {
                if let Some(v) = n.as_u64() {
                    ReflectRef::UInt(v)
                } else if let Some(v) = n.as_i64() {
                    ReflectRef::Int(v)
                } else {
                    n.as_f64().map_or(ReflectRef::Null, ReflectRef::Float)
                }
            }
            Self::String(s) => ReflectRef::String(s),
            Self::List(items) => ReflectRef::List(items),
            Self::Map(map) => ReflectRef::Map(map),
            Self::Object(obj) => ReflectRef::Inner(&**obj),
        }
    }
}

impl FromDynamic for Dynamic {
    #[inline]
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        Ok(value)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::Dynamic;
    use crate::Reflect;
    use crate::ops::ReflectRef;
    use crate::serde::DeserializeError;

    #[test]
    fn from_json_keeps_order() {
        let value = Dynamic::from(json!({ "b": 1, "a": [true, null] }));
        let keys: Vec<_> = value.as_map().unwrap().keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(value.get("a").and_then(|a| a.index(0)).and_then(Dynamic::as_bool), Some(true));
    }

    #[test]
    fn number_shapes() {
        assert!(matches!(Dynamic::from(7_u8).reflect_ref(), ReflectRef::UInt(7)));
        assert!(matches!(Dynamic::from(-7_i8).reflect_ref(), ReflectRef::Int(-7)));
        assert!(matches!(Dynamic::from(0.5).reflect_ref(), ReflectRef::Float(v) if v == 0.5));
        assert!(Dynamic::from(f64::NAN).is_null());
    }

    #[test]
    fn object_downcast() {
        let value = Dynamic::Object(String::from("boxed").into_boxed_reflect());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("boxed"));
        assert!(value.downcast_ref::<i32>().is_none());

        let back = value.take_object::<i32>().unwrap_err();
        assert_eq!(back.take_object::<String>().unwrap(), "boxed");
    }

    #[test]
    fn extract_reports_mismatch() {
        let err = Dynamic::from("oops").extract::<u32>("demo::Counter", "count").unwrap_err();
        match err {
            DeserializeError::MismatchedValue { type_path, field, expected, found } => {
                assert_eq!(type_path, "demo::Counter");
                assert_eq!(field, "count");
                assert_eq!(expected, "u32");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
