use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::TypeId;

use jsonic_utils::TypeIdMap;
use jsonic_utils::hash::{FixedHashState, HashMap};
use serde_core::{Deserialize, Serialize};
use serde_core::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Reflect;
use crate::info::TypePath;
use crate::serde::HookError;

/// A serialize hook: turns a value into an untagged JSON object.
pub type SerializeHookFn = dyn Fn(&dyn Reflect) -> Result<Map<String, Value>, HookError> + Send + Sync;

/// A deserialize hook: rebuilds a value from a JSON object without its tag.
pub type DeserializeHookFn = dyn Fn(Map<String, Value>) -> Result<Box<dyn Reflect>, HookError> + Send + Sync;

// -----------------------------------------------------------------------------
// SerializeHook

/// A registered serialize hook together with the qualified name it tags.
#[derive(Clone)]
pub struct SerializeHook {
    type_path: &'static str,
    func: Arc<SerializeHookFn>,
}

impl SerializeHook {
    /// Returns the qualified name stamped into the hook output.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Invokes the hook.
    #[inline]
    pub fn call(&self, value: &dyn Reflect) -> Result<Map<String, Value>, HookError> {
        log::trace!("invoking serialize hook of `{}`", self.type_path);
        (self.func)(value)
    }
}

// -----------------------------------------------------------------------------
// HookRegistry

/// Custom (de)serialization functions for types the engine cannot walk.
///
/// Serialize hooks are keyed by the exact runtime type, deserialize hooks
/// by the qualified name found in the `_serialized_type` tag. Both tables
/// are last-registration-wins.
///
/// A serialize hook returns an untagged mapping; the serializer appends the
/// tag. A deserialize hook receives the mapping with the tag removed and
/// must return a fully built instance.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::info::TypePath;
/// use jsonic_reflect::registry::HookRegistry;
/// use jsonic_reflect::ops::ReflectRef;
/// use jsonic_reflect::Reflect;
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f64);
///
/// impl TypePath for Celsius {
///     fn type_path() -> &'static str { "weather::Celsius" }
///     fn type_name() -> &'static str { "Celsius" }
/// }
///
/// impl Reflect for Celsius {
///     fn reflect_type_path(&self) -> &'static str { Self::type_path() }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque }
/// }
///
/// let mut hooks = HookRegistry::empty();
/// hooks.register_serialize_hook::<Celsius>(|value| {
///     let mut map = serde_json::Map::new();
///     map.insert("degrees".into(), value.0.into());
///     Ok(map)
/// });
/// hooks.register_deserialize_hook_for::<Celsius>(|map| {
///     let degrees = map.get("degrees").and_then(|v| v.as_f64()).ok_or("no degrees")?;
///     Ok(Celsius(degrees))
/// });
///
/// let map = hooks.serialize_hook(&Celsius(21.5)).unwrap().call(&Celsius(21.5)).unwrap();
/// let back = hooks.deserialize_hook("weather::Celsius").unwrap()(map).unwrap();
/// assert_eq!(back.downcast_ref::<Celsius>(), Some(&Celsius(21.5)));
/// ```
pub struct HookRegistry {
    serialize: TypeIdMap<SerializeHook>,
    deserialize: HashMap<String, Arc<DeserializeHookFn>>,
}

impl Default for HookRegistry {
    /// See [`HookRegistry::with_builtin`] .
    #[inline]
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl HookRegistry {
    /// Creates a registry without any hook.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            serialize: TypeIdMap::new(),
            deserialize: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry holding the hooks of the enabled optional
    /// integrations:
    ///
    /// - "chrono" feature: `NaiveDateTime`, `DateTime<Utc>`
    /// - "complex" feature: `Complex64`
    pub fn with_builtin() -> Self {
        let mut hooks = Self::empty();
        crate::impls::register_builtin_hooks(&mut hooks);
        hooks
    }

    /// Registers the serialize hook of `T`, replacing any previous one.
    pub fn register_serialize_hook<T: Reflect + TypePath>(
        &mut self,
        f: impl Fn(&T) -> Result<Map<String, Value>, HookError> + Send + Sync + 'static,
    ) {
        let type_path = T::type_path();
        let func = move |value: &dyn Reflect| match value.downcast_ref::<T>() {
            Some(value) => f(value),
            None => Err(HookError::from(alloc::format!(
                "serialize hook of `{type_path}` received `{}`",
                value.reflect_type_path()
            ))),
        };
        let hook = SerializeHook {
            type_path,
            func: Arc::new(func),
        };
        if self.serialize.insert(TypeId::of::<T>(), hook).is_some() {
            log::debug!("replacing the serialize hook of `{type_path}`");
        }
    }

    /// Registers the deserialize hook for the qualified name `type_path`,
    /// replacing any previous one.
    pub fn register_deserialize_hook(
        &mut self,
        type_path: impl Into<String>,
        f: impl Fn(Map<String, Value>) -> Result<Box<dyn Reflect>, HookError> + Send + Sync + 'static,
    ) {
        let type_path = type_path.into();
        if self.deserialize.contains_key(&type_path) {
            log::debug!("replacing the deserialize hook of `{type_path}`");
        }
        self.deserialize.insert(type_path, Arc::new(f));
    }

    /// Registers the deserialize hook of `T` under its qualified name.
    #[inline]
    pub fn register_deserialize_hook_for<T: Reflect + TypePath>(
        &mut self,
        f: impl Fn(Map<String, Value>) -> Result<T, HookError> + Send + Sync + 'static,
    ) {
        self.register_deserialize_hook(T::type_path(), move |map| {
            f(map).map(Reflect::into_boxed_reflect)
        });
    }

    /// Registers both hooks of `T` from its `serde` implementation.
    ///
    /// Values that `serde` writes as JSON objects are used as the mapping
    /// directly; any other output is wrapped as `{"value": output}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonic_reflect::info::TypePath;
    /// use jsonic_reflect::ops::ReflectRef;
    /// use jsonic_reflect::registry::HookRegistry;
    /// use jsonic_reflect::Reflect;
    ///
    /// #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    /// struct Version(u32, u32);
    ///
    /// impl TypePath for Version {
    ///     fn type_path() -> &'static str { "demo::Version" }
    ///     fn type_name() -> &'static str { "Version" }
    /// }
    ///
    /// impl Reflect for Version {
    ///     fn reflect_type_path(&self) -> &'static str { Self::type_path() }
    ///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque }
    /// }
    ///
    /// let mut hooks = HookRegistry::empty();
    /// hooks.register_serde::<Version>();
    ///
    /// let map = hooks.serialize_hook(&Version(1, 2)).unwrap().call(&Version(1, 2)).unwrap();
    /// assert_eq!(map["value"], serde_json::json!([1, 2]));
    ///
    /// let back = hooks.deserialize_hook("demo::Version").unwrap()(map).unwrap();
    /// assert_eq!(back.downcast_ref::<Version>(), Some(&Version(1, 2)));
    /// ```
    pub fn register_serde<T>(&mut self)
    where
        T: Reflect + TypePath + Serialize + DeserializeOwned,
    {
        self.register_serialize_hook::<T>(|value| match serde_json::to_value(value)? {
            Value::Object(map) => Ok(map),
            other => {
                let mut map = Map::new();
                map.insert(String::from(SERDE_VALUE_KEY), other);
                Ok(map)
            }
        });
        self.register_deserialize_hook_for::<T>(|map| {
            // A lone `value` entry is the wrapped form, unless `T` itself
            // is an object with a single `value` field.
            if map.len() == 1
                && let Some(inner) = map.get(SERDE_VALUE_KEY)
                && let Ok(value) = T::deserialize(inner)
            {
                return Ok(value);
            }
            Ok(serde_json::from_value(Value::Object(map))?)
        });
    }

    /// Returns the serialize hook for the exact runtime type of `value`.
    #[inline]
    pub fn serialize_hook(&self, value: &dyn Reflect) -> Option<&SerializeHook> {
        self.serialize.get(&value.ty_id())
    }

    /// Returns the deserialize hook registered for `type_path`.
    #[inline]
    pub fn deserialize_hook(&self, type_path: &str) -> Option<&DeserializeHookFn> {
        self.deserialize.get(type_path).map(|f| &**f)
    }

    /// Returns `true` if a serialize hook is registered for `T`.
    #[inline]
    pub fn has_serialize_hook<T: 'static>(&self) -> bool {
        self.serialize.contains_type::<T>()
    }

    /// Returns `true` if a deserialize hook is registered for `type_path`.
    #[inline]
    pub fn has_deserialize_hook(&self, type_path: &str) -> bool {
        self.deserialize.contains_key(type_path)
    }
}

impl core::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("serialize", &self.serialize.values().map(SerializeHook::type_path).collect::<alloc::vec::Vec<_>>())
            .field("deserialize", &self.deserialize.keys().collect::<alloc::vec::Vec<_>>())
            .finish()
    }
}

const SERDE_VALUE_KEY: &str = "value";

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use serde_json::{Map, Value, json};

    use super::HookRegistry;
    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::ReflectRef;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Rgb {
        r: u8,
        g: u8,
        b: u8,
    }

    impl TypePath for Rgb {
        fn type_path() -> &'static str {
            "hook_tests::Rgb"
        }

        fn type_name() -> &'static str {
            "Rgb"
        }
    }

    impl Reflect for Rgb {
        fn reflect_type_path(&self) -> &'static str {
            Self::type_path()
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque
        }
    }

    fn entry(key: &str, value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key.into(), value);
        map
    }

    #[test]
    fn second_hook_replaces_first() {
        let mut hooks = HookRegistry::empty();
        hooks.register_serialize_hook::<Rgb>(|_| Ok(entry("v", json!(1))));
        hooks.register_serialize_hook::<Rgb>(|_| Ok(entry("v", json!(2))));

        let color = Rgb { r: 0, g: 0, b: 0 };
        let map = hooks.serialize_hook(&color).unwrap().call(&color).unwrap();
        assert_eq!(map["v"], 2);
        assert!(hooks.has_serialize_hook::<Rgb>());
        assert!(!hooks.has_serialize_hook::<String>());
    }

    #[test]
    fn serde_object_form() {
        let mut hooks = HookRegistry::empty();
        hooks.register_serde::<Rgb>();

        let color = Rgb { r: 1, g: 2, b: 3 };
        let map = hooks.serialize_hook(&color).unwrap().call(&color).unwrap();
        assert_eq!(Value::Object(map.clone()), json!({ "r": 1, "g": 2, "b": 3 }));

        let back = hooks.deserialize_hook("hook_tests::Rgb").unwrap()(map).unwrap();
        assert_eq!(back.take::<Rgb>().unwrap(), color);
    }

    #[test]
    fn deserialize_errors_are_reported() {
        let mut hooks = HookRegistry::empty();
        hooks.register_serde::<Rgb>();
        assert!(hooks.has_deserialize_hook("hook_tests::Rgb"));

        let result = hooks.deserialize_hook("hook_tests::Rgb").unwrap()(entry("value", json!("red")));
        assert!(result.is_err());
    }
}
