//! Registries that drive (de)serialization.
//!
//! ## Menu
//!
//! - [`TypeRecord`]: the registration of one serializable type, with its
//!   transient attributes and init parameter aliases.
//! - [`TypeOptions`]: registration options merged into a [`TypeRecord`].
//! - [`TypeRegistry`]: records keyed by qualified name.
//! - [`HookRegistry`]: custom serialize and deserialize functions.
//! - [`Registry`]: both registries, as used by the drivers.
//! - [`RegistryArc`], [`global`]: a shared registry and the process-wide one.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! We use the [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//! On unsupported platforms the catalogue is simply empty.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod hook_registry;
mod registry;
mod type_record;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use hook_registry::{DeserializeHookFn, HookRegistry, SerializeHook, SerializeHookFn};
pub use registry::{Registry, RegistryArc, global};
pub use type_record::{ConstructFn, TypeOptions, TypeRecord};
pub use type_registry::TypeRegistry;
