//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod serializable_meta;
mod serializable_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, FieldDefault, TypeAttributes};

pub(crate) use serializable_meta::SerializableMeta;
pub(crate) use serializable_struct::{SerializableStruct, StructField};
