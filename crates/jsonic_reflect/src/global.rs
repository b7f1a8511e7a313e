//! Entry points over the process-wide [`global`] registry.
//!
//! Serialization and deserialization take the read lock; registration takes
//! the write lock.

use alloc::boxed::Box;
use alloc::string::String;

use serde_core::Serialize;
use serde_core::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::info::TypePath;
use crate::registry::{TypeOptions, global};
use crate::serde::{DeserializeError, DeserializeOptions, HookError};
use crate::serde::{SerializeError, SerializeOptions};
use crate::value::Dynamic;
use crate::{FromDynamic, Reflect, Serializable};

// -----------------------------------------------------------------------------
// Serialization

/// Serializes `value` with the global registry.
///
/// See [`SerializeDriver`](crate::serde::SerializeDriver).
///
/// # Examples
///
/// ```
/// use jsonic_reflect::serde::SerializeOptions;
///
/// let tags: Vec<String> = vec!["a".into(), "b".into()];
/// let tree = jsonic_reflect::serialize(&tags, SerializeOptions::new()).unwrap();
/// assert_eq!(tree, serde_json::json!(["a", "b"]));
/// ```
pub fn serialize(value: &dyn Reflect, options: SerializeOptions) -> Result<Value, SerializeError> {
    global().read().serialize(value, options)
}

/// Serializes `value` to JSON text with the global registry.
pub fn to_string(value: &dyn Reflect, options: SerializeOptions) -> Result<String, SerializeError> {
    global().read().to_string(value, options)
}

// -----------------------------------------------------------------------------
// Deserialization

/// Deserializes `input` with the global registry.
///
/// See [`DeserializeDriver`](crate::serde::DeserializeDriver).
pub fn deserialize(input: Value, options: DeserializeOptions) -> Result<Dynamic, DeserializeError> {
    global().read().deserialize(input, options)
}

/// Parses JSON text and deserializes it with the global registry.
pub fn deserialize_str(input: &str, options: DeserializeOptions) -> Result<Dynamic, DeserializeError> {
    global().read().deserialize_str(input, options)
}

/// Deserializes `input` as a `T` with the global registry.
pub fn deserialize_as<T: FromDynamic>(input: Value, options: DeserializeOptions) -> Result<T, DeserializeError> {
    global().read().deserialize_as(input, options)
}

// -----------------------------------------------------------------------------
// Registration

/// Registers `T` in the global registry.
///
/// Derived types are already registered through the `auto_register`
/// catalogue; call this for types that opted out, or to reset their options.
pub fn register_type<T: Serializable>() {
    global().write().register_type::<T>();
}

/// Registers `T` in the global registry with additional options.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::derive::Serializable;
/// use jsonic_reflect::registry::TypeOptions;
/// use jsonic_reflect::serde::{DeserializeOptions, SerializeOptions};
///
/// #[derive(Serializable, Debug, PartialEq)]
/// #[jsonic(type_path = "docs::Cached", auto_register = false)]
/// struct Cached {
///     key: String,
///     #[jsonic(skip_param)]
///     hits: u32,
/// }
///
/// jsonic_reflect::register_type_with::<Cached>(TypeOptions::new().transient("hits"));
///
/// let tree = jsonic_reflect::serialize(&Cached { key: "k".into(), hits: 9 }, SerializeOptions::new()).unwrap();
/// assert_eq!(tree, serde_json::json!({ "key": "k", "_serialized_type": "docs::Cached" }));
///
/// let back: Cached = jsonic_reflect::deserialize_as(tree, DeserializeOptions::new()).unwrap();
/// assert_eq!(back, Cached { key: "k".into(), hits: 0 });
/// ```
pub fn register_type_with<T: Serializable>(options: TypeOptions) {
    global().write().register_type_with::<T>(options);
}

/// Registers the serialize hook of `T` in the global registry.
pub fn register_serialize_hook<T: Reflect + TypePath>(
    f: impl Fn(&T) -> Result<Map<String, Value>, HookError> + Send + Sync + 'static,
) {
    global().write().register_serialize_hook::<T>(f);
}

/// Registers a deserialize hook for `type_path` in the global registry.
pub fn register_deserialize_hook(
    type_path: impl Into<String>,
    f: impl Fn(Map<String, Value>) -> Result<Box<dyn Reflect>, HookError> + Send + Sync + 'static,
) {
    global().write().register_deserialize_hook(type_path, f);
}

/// Registers the deserialize hook of `T` in the global registry.
pub fn register_deserialize_hook_for<T: Reflect + TypePath>(
    f: impl Fn(Map<String, Value>) -> Result<T, HookError> + Send + Sync + 'static,
) {
    global().write().register_deserialize_hook_for::<T>(f);
}

/// Registers both hooks of `T` from its `serde` implementation in the
/// global registry.
pub fn register_serde<T>()
where
    T: Reflect + TypePath + Serialize + DeserializeOwned,
{
    global().write().register_serde::<T>();
}
