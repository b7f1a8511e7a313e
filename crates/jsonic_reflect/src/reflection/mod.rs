// -----------------------------------------------------------------------------
// Modules

mod from_dynamic;
mod reflect;
mod serializable;

// -----------------------------------------------------------------------------
// Exports

pub use from_dynamic::FromDynamic;
pub use reflect::Reflect;
pub use serializable::{InitArgs, Serializable};
