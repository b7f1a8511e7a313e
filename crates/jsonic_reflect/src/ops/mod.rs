//! Interfaces for walking reflected data.
//!
//! - [`ReflectRef`]: the shape of one value, matched on by the serializer.
//! - [`List`]: for list-like values (e.g. `Vec<T>`).
//! - [`Map`]: for string-keyed maps (e.g. `HashMap<String, T>`).
//! - [`Struct`]: for structs deriving `Serializable`.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;
pub use list_ops::List;
pub use map_ops::Map;
pub use struct_ops::{Struct, StructFieldIter};
