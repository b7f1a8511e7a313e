//! Conversion between object graphs and tagged JSON trees.
//!
//! # Overview
//!
//! ## Serialization
//!
//! - [`SerializeDriver`]: walks a value through its [`ReflectRef`] and builds a
//!   [`serde_json::Value`], following a priority-based dispatch strategy.
//!     - First looks up a serialize hook for the exact runtime type.
//!     - Then serializes registered structs as tagged mappings.
//!     - Finally converts scalars, lists and maps structurally.
//! - [`SerializeOptions`]: private attributes, string output, depth bound.
//!
//! ## Deserialization
//!
//! - [`DeserializeDriver`]: rebuilds a [`Dynamic`] tree from a JSON tree.
//!     - Tagged mappings are handed to the deserialize hook registered for
//!       the tag, or rebuilt through the [`TypeRecord`] of the tag.
//!     - Everything else is converted structurally.
//! - [`DeserializeOptions`]: private attributes, string input, expected
//!   top-level shape ([`ExpectedType`]), depth bound.
//!
//! ## Tagged Mappings
//!
//! ```text
//! {
//!   "lat": 32.08,
//!   "lon": 34.78,
//!   "_serialized_type": "demo::Coordinate"
//! }
//! ```
//!
//! The reserved key [`SERIALIZED_TYPE_KEY`] is always written last. A plain
//! mapping that already contains it cannot be serialized.
//!
//! [`ReflectRef`]: crate::ops::ReflectRef
//! [`Dynamic`]: crate::value::Dynamic
//! [`TypeRecord`]: crate::registry::TypeRecord
//! [`SERIALIZED_TYPE_KEY`]: crate::SERIALIZED_TYPE_KEY

// -----------------------------------------------------------------------------
// Modules

mod de;
mod expected;
mod options;
mod ser;

pub(crate) mod error;

// -----------------------------------------------------------------------------
// Exports

pub use de::DeserializeDriver;
pub use error::{DeserializeError, HookError, SerializeError};
pub use expected::ExpectedType;
pub use options::{DEFAULT_MAX_DEPTH, DeserializeOptions, SerializeOptions};
pub use ser::SerializeDriver;
