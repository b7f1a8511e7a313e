//! Reflection for foreign types, and the built-in hooks.
//!
//! ## Implemented Menu
//!
//! - `()`, `bool`, `char`, `f32`, `f64`
//! - `i8`-`i64`, `u8`-`u64`, `isize`, `usize`
//! - `String`
//! - `Option<T>`, `Box<T>`: serialized as the inner value, `None` as `null`
//! - `Vec<T>`, `VecDeque<T>`
//! - `BTreeMap<String, V>`, `std::collections::HashMap<String, V, S>`,
//!   `hashbrown::HashMap<String, V, S>`
//! - "chrono" feature: `NaiveDateTime`, `DateTime<Utc>` (hooks)
//! - "complex" feature: `num_complex::Complex64` (hooks)
//!
//! Hook-backed types are opaque to reflection; [`HookRegistry::with_builtin`]
//! installs their hooks.
//!
//! [`HookRegistry::with_builtin`]: crate::registry::HookRegistry::with_builtin

// -----------------------------------------------------------------------------
// Modules

mod list;
mod map;
mod native;
mod wrapper;

#[cfg(feature = "chrono")]
mod chrono;

#[cfg(feature = "complex")]
mod complex;

// -----------------------------------------------------------------------------
// Internal API

use alloc::format;
use alloc::string::String;

use serde_json::{Map, Value};

use crate::registry::HookRegistry;
use crate::serde::HookError;

/// Implement [`Reflect`](crate::Reflect) and [`FromDynamic`](crate::FromDynamic)
/// for a type that only (de)serializes through hooks.
///
/// The type must implement [`TypePath`](crate::info::TypePath).
#[cfg_attr(not(any(feature = "chrono", feature = "complex")), expect(unused_macros))]
macro_rules! impl_reflect_opaque {
    ($ty:ty) => {
        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                <Self as $crate::info::TypePath>::type_path()
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque
            }
        }

        impl $crate::FromDynamic for $ty {
            #[inline]
            fn from_dynamic(
                value: $crate::value::Dynamic,
            ) -> Result<Self, $crate::value::Dynamic> {
                value.take_object()
            }
        }
    };
}

#[cfg_attr(not(any(feature = "chrono", feature = "complex")), expect(unused_imports))]
pub(crate) use impl_reflect_opaque;

/// Builds the mapping `{key: value}`.
#[cfg_attr(not(any(feature = "chrono", feature = "complex")), expect(dead_code))]
pub(crate) fn single_entry(key: &str, value: String) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.into(), Value::String(value));
    map
}

/// Returns the string stored under `key`.
#[cfg_attr(not(any(feature = "chrono", feature = "complex")), expect(dead_code))]
pub(crate) fn string_entry<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str, HookError> {
    match map.get(key) {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(format!("entry `{key}` must be a string, found {other}").into()),
        None => Err(format!("missing entry `{key}`").into()),
    }
}

/// Installs the hooks of the enabled optional integrations.
#[cfg_attr(not(any(feature = "chrono", feature = "complex")), expect(unused_variables))]
pub(crate) fn register_builtin_hooks(hooks: &mut HookRegistry) {
    #[cfg(feature = "chrono")]
    self::chrono::register_hooks(hooks);
    #[cfg(feature = "complex")]
    self::complex::register_hooks(hooks);
}
