//! Static type descriptors.
//!
//! - [`TypePath`]: qualified name of a type, used as registry key and wire tag.
//! - [`StructInfo`]: the field list and constructor parameters of a struct,
//!   generated by `#[derive(Serializable)]` or written by hand.

// -----------------------------------------------------------------------------
// Modules

mod struct_info;
mod type_path;

// -----------------------------------------------------------------------------
// Exports

pub use struct_info::{FieldInfo, ParamInfo, StructInfo};
pub use type_path::TypePath;

pub(crate) use type_path::impl_type_path;
