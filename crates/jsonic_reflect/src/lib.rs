//! Registry-driven conversion between object graphs and tagged JSON trees.
//!
//! Values are walked through the reflection surface in [`ops`] and
//! [`reflection`]. Struct instances become *tagged mappings*: JSON objects
//! whose reserved [`SERIALIZED_TYPE_KEY`] entry names the type, so the
//! [`DeserializeDriver`] can find the matching [`TypeRecord`] and rebuild the
//! instance through its declared constructor.
//!
//! ```
//! use jsonic_reflect::derive::Serializable;
//! use jsonic_reflect::registry::Registry;
//! use jsonic_reflect::serde::{DeserializeDriver, DeserializeOptions};
//! use jsonic_reflect::serde::{SerializeDriver, SerializeOptions};
//!
//! #[derive(Serializable, Debug, PartialEq)]
//! #[jsonic(type_path = "demo::Coordinate")]
//! struct Coordinate {
//!     #[jsonic(param = "lon")]
//!     longitude: f64,
//!     #[jsonic(param = "lat")]
//!     latitude: f64,
//! }
//!
//! let mut registry = Registry::new();
//! registry.register_type::<Coordinate>();
//!
//! let point = Coordinate { longitude: 34.78, latitude: 32.08 };
//! let tree = SerializeDriver::new(&registry, SerializeOptions::new())
//!     .serialize(&point)
//!     .unwrap();
//!
//! assert_eq!(tree["_serialized_type"], "demo::Coordinate");
//! assert_eq!(tree["latitude"], 32.08);
//!
//! let back = DeserializeDriver::new(&registry, DeserializeOptions::new())
//!     .deserialize(tree)
//!     .unwrap();
//! assert_eq!(back.downcast_ref::<Coordinate>(), Some(&point));
//! ```
//!
//! [`DeserializeDriver`]: crate::serde::DeserializeDriver
//! [`TypeRecord`]: crate::registry::TypeRecord
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names `::jsonic_reflect`, which must also resolve inside
// this crate (unit tests and doc tests derive `Serializable` too).
extern crate self as jsonic_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod global;
mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod serde;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use global::{deserialize, deserialize_as, deserialize_str};
pub use global::{register_deserialize_hook, register_deserialize_hook_for};
pub use global::{register_serde, register_serialize_hook};
pub use global::{register_type, register_type_with};
pub use global::{serialize, to_string};

pub use reflection::{FromDynamic, InitArgs, Reflect, Serializable};
pub use jsonic_reflect_derive as derive;

/// The JSON tree types produced and consumed by the drivers and hooks.
pub use serde_json;

/// The reserved key carrying the qualified type name of a tagged mapping.
pub const SERIALIZED_TYPE_KEY: &str = "_serialized_type";

/// Attribute names starting with this prefix are private.
pub const PRIVATE_PREFIX: char = '_';

/// Returns `true` if `name` follows the private-attribute naming convention.
///
/// ```
/// assert!(jsonic_reflect::is_private("_token"));
/// assert!(!jsonic_reflect::is_private("token"));
/// ```
#[inline]
pub fn is_private(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX)
}
