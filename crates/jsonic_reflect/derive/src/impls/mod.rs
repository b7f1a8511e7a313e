// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod struct_kind;
mod trait_reflect;
mod trait_serializable;
mod trait_type_path;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use struct_kind::impl_serializable_struct;

#[cfg(feature = "auto_register")]
pub(crate) use auto_register::get_auto_register_tokens;

use auto_register::get_auto_register_impl;
use trait_reflect::{impl_trait_from_dynamic, impl_trait_reflect};
use trait_serializable::impl_trait_serializable;
use trait_type_path::impl_trait_type_path;
