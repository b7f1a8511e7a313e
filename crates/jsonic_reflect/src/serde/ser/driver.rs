use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::{Map, Number, Value};

use super::struct_serializer::{serialize_struct, serialize_with_hook};

use crate::ops::ReflectRef;
use crate::registry::Registry;
use crate::serde::{SerializeError, SerializeOptions};
use crate::{Reflect, SERIALIZED_TYPE_KEY};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Converts an object graph to a JSON tree.
///
/// # Serialization Rules
///
/// Every value is handled by the first matching rule:
///
/// 1. **Hook Priority**: if a serialize hook is registered for the exact
///    runtime type, its mapping is used and tagged with the type name.
/// 2. **Registered Structs**: a [`Struct`] whose type is registered becomes
///    a tagged mapping of its fields, in declaration order. Private fields
///    (name starting with `_`) are kept only with
///    [`include_private`](SerializeOptions::include_private); transient
///    fields are never kept. The tag is the last key.
/// 3. **Structural Default**: scalars, lists and string-keyed maps are
///    converted as is. `Option` and `Box` are transparent.
///
/// Opaque values without hook, and structs whose type is not registered,
/// fail with [`SerializeError::UnregisteredType`]. The value is never
/// mutated.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::derive::Serializable;
/// use jsonic_reflect::registry::Registry;
/// use jsonic_reflect::serde::{SerializeDriver, SerializeOptions};
///
/// #[derive(Serializable)]
/// #[jsonic(type_path = "shop::Item", auto_register = false)]
/// struct Item {
///     name: String,
///     #[jsonic(rename = "_cost")]
///     cost: u32,
/// }
///
/// let mut registry = Registry::empty();
/// registry.register_type::<Item>();
///
/// let item = Item { name: "pen".into(), cost: 3 };
/// let driver = SerializeDriver::new(&registry, SerializeOptions::new());
///
/// assert_eq!(
///     driver.to_string(&item).unwrap(),
///     r#"{"name":"pen","_serialized_type":"shop::Item"}"#,
/// );
/// ```
///
/// [`Struct`]: crate::ops::Struct
pub struct SerializeDriver<'a> {
    registry: &'a Registry,
    options: SerializeOptions,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a serializer over `registry`.
    #[inline]
    pub const fn new(registry: &'a Registry, options: SerializeOptions) -> Self {
        Self { registry, options }
    }

    #[inline]
    pub const fn registry(&self) -> &'a Registry {
        self.registry
    }

    #[inline]
    pub const fn options(&self) -> &SerializeOptions {
        &self.options
    }

    /// Serializes `value` to a JSON tree.
    ///
    /// With [`as_string`](SerializeOptions::as_string) the tree is encoded
    /// and returned as a [`Value::String`].
    pub fn serialize(&self, value: &dyn Reflect) -> Result<Value, SerializeError> {
        let tree = self.serialize_at(value, 0)?;
        if self.options.is_string() {
            Ok(Value::String(serde_json::to_string(&tree)?))
        } else {
            Ok(tree)
        }
    }

    /// Serializes `value` to JSON text.
    pub fn to_string(&self, value: &dyn Reflect) -> Result<String, SerializeError> {
        let tree = self.serialize_at(value, 0)?;
        Ok(serde_json::to_string(&tree)?)
    }

    pub(super) fn serialize_at(&self, value: &dyn Reflect, depth: usize) -> Result<Value, SerializeError> {
        let limit = self.options.depth_limit();
        if depth > limit {
            return Err(SerializeError::DepthLimitExceeded { limit });
        }

        if let Some(hook) = self.registry.hooks().serialize_hook(value) {
            return serialize_with_hook(hook, value);
        }

        match value.reflect_ref() {
            ReflectRef::Null => Ok(Value::Null),
            ReflectRef::Bool(v) => Ok(Value::Bool(v)),
            ReflectRef::Int(v) => Ok(Value::from(v)),
            ReflectRef::UInt(v) => Ok(Value::from(v)),
            ReflectRef::Float(v) => Number::from_f64(v)
                .map(Value::Number)
                .ok_or(SerializeError::NonFiniteFloat { value: v }),
            ReflectRef::Char(v) => Ok(Value::String(v.to_string())),
            ReflectRef::String(v) => Ok(Value::String(v.into())),
            ReflectRef::List(list) => list
                .iter()
                .map(|item| self.serialize_at(item, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            ReflectRef::Map(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, item) in map.iter() {
                    if key == SERIALIZED_TYPE_KEY {
                        return Err(SerializeError::ReservedKey);
                    }
                    out.insert(key.into(), self.serialize_at(item, depth + 1)?);
                }
                Ok(Value::Object(out))
            }
            ReflectRef::Struct(value) => serialize_struct(self, value, depth),
            ReflectRef::Inner(inner) => self.serialize_at(inner, depth + 1),
            ReflectRef::Opaque => Err(SerializeError::UnregisteredType {
                type_path: value.reflect_type_path(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::SerializeDriver;
    use crate::derive::Serializable;
    use crate::registry::{Registry, TypeOptions};
    use crate::serde::{SerializeError, SerializeOptions};
    use crate::value::{Dynamic, DynamicMap};

    #[derive(Serializable)]
    #[jsonic(type_path = "ser_tests::Account", auto_register = false)]
    struct Account {
        owner: String,
        #[jsonic(rename = "_pin")]
        pin: u16,
        #[jsonic(transient)]
        session: Option<String>,
        cache: Vec<u8>,
    }

    #[derive(Serializable)]
    #[jsonic(type_path = "ser_tests::Stray", auto_register = false)]
    struct Stray {
        id: u8,
    }

    fn account() -> Account {
        Account {
            owner: "kim".into(),
            pin: 1234,
            session: Some("abc".into()),
            cache: vec![1, 2],
        }
    }

    fn registry() -> Registry {
        let mut registry = Registry::empty();
        registry.register_type_with::<Account>(TypeOptions::new().transient("cache"));
        registry
    }

    #[test]
    fn privacy_and_transient_filters() {
        let registry = registry();

        let public = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&account())
            .unwrap();
        assert_eq!(public, json!({ "owner": "kim", "_serialized_type": "ser_tests::Account" }));

        let private = SerializeDriver::new(&registry, SerializeOptions::new().include_private(true))
            .serialize(&account())
            .unwrap();
        assert_eq!(
            private,
            json!({ "owner": "kim", "_pin": 1234, "_serialized_type": "ser_tests::Account" })
        );
    }

    #[test]
    fn tag_comes_last() {
        let registry = registry();
        let text = SerializeDriver::new(&registry, SerializeOptions::new().include_private(true))
            .to_string(&account())
            .unwrap();
        assert_eq!(text, r#"{"owner":"kim","_pin":1234,"_serialized_type":"ser_tests::Account"}"#);
    }

    #[test]
    fn string_mode() {
        let registry = Registry::empty();
        let tree = SerializeDriver::new(&registry, SerializeOptions::new().as_string(true))
            .serialize(&vec![Some(1_i8), None])
            .unwrap();
        assert_eq!(tree, json!("[1,null]"));
    }

    #[test]
    fn plain_maps_stay_untagged() {
        let registry = Registry::empty();
        let mut map = BTreeMap::new();
        map.insert(String::from("b"), vec![0.5_f64]);
        map.insert(String::from("a"), vec![]);
        let tree = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&map)
            .unwrap();
        assert_eq!(tree, json!({ "a": [], "b": [0.5] }));
    }

    #[test]
    fn reserved_key_in_plain_map() {
        let registry = Registry::empty();
        let mut map = DynamicMap::new();
        map.insert("_serialized_type".into(), Dynamic::from("evil::Type"));
        let err = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&map)
            .unwrap_err();
        assert!(matches!(err, SerializeError::ReservedKey));
    }

    #[test]
    fn unregistered_struct() {
        let registry = registry();
        let err = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&vec![Stray { id: 1 }])
            .unwrap_err();
        match err {
            SerializeError::UnregisteredType { type_path } => assert_eq!(type_path, "ser_tests::Stray"),
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn non_finite_float() {
        let registry = Registry::empty();
        let err = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&f64::INFINITY)
            .unwrap_err();
        assert!(matches!(err, SerializeError::NonFiniteFloat { .. }));
    }

    #[test]
    fn depth_bound() {
        let registry = Registry::empty();
        let nested = vec![vec![vec![1_u8]]];
        let driver = SerializeDriver::new(&registry, SerializeOptions::new().max_depth(2));
        assert!(matches!(
            driver.serialize(&nested),
            Err(SerializeError::DepthLimitExceeded { limit: 2 })
        ));

        let driver = SerializeDriver::new(&registry, SerializeOptions::new().max_depth(3));
        assert_eq!(driver.serialize(&nested).unwrap(), json!([[[1]]]));
    }

    #[test]
    fn wrapped_objects_count_toward_depth() {
        let registry = Registry::empty();
        let mut chain = Dynamic::from(1_u8);
        for _ in 0..10 {
            chain = Dynamic::Object(Box::new(chain));
        }

        let driver = SerializeDriver::new(&registry, SerializeOptions::new().max_depth(5));
        assert!(matches!(
            driver.serialize(&chain),
            Err(SerializeError::DepthLimitExceeded { limit: 5 })
        ));

        let driver = SerializeDriver::new(&registry, SerializeOptions::new().max_depth(10));
        assert_eq!(driver.serialize(&chain).unwrap(), json!(1));
        assert_eq!(driver.serialize(&Some(Box::new(2_u8))).unwrap(), json!(2));
    }
}
