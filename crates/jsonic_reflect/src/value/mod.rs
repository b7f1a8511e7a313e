//! The deserialized value tree.
//!
//! [`Dynamic`] is what the deserializer returns: untyped JSON data with
//! constructed instances in place of tagged mappings.

// -----------------------------------------------------------------------------
// Modules

mod dynamic;
mod dynamic_map;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic::Dynamic;
pub use dynamic_map::DynamicMap;
