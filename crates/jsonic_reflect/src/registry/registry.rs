use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use std::sync::{LazyLock, PoisonError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_core::Serialize;
use serde_core::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::info::TypePath;
use crate::registry::{HookRegistry, TypeOptions, TypeRegistry};
use crate::serde::{DeserializeDriver, DeserializeError, DeserializeOptions, HookError};
use crate::serde::{SerializeDriver, SerializeError, SerializeOptions};
use crate::value::Dynamic;
use crate::{FromDynamic, Reflect, Serializable};

// -----------------------------------------------------------------------------
// Registry

/// The type registry and the hook registry that drive one (de)serialization
/// pass.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::registry::Registry;
/// use jsonic_reflect::serde::{DeserializeOptions, SerializeOptions};
///
/// let registry = Registry::new();
/// let text = registry.to_string(&vec![1_u8, 2], SerializeOptions::new()).unwrap();
/// assert_eq!(text, "[1,2]");
///
/// let back: Vec<u8> = registry.deserialize_as(text.as_str().into(), DeserializeOptions::new().as_string(true)).unwrap();
/// assert_eq!(back, [1, 2]);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    types: TypeRegistry,
    hooks: HookRegistry,
}

impl Registry {
    /// Creates a registry holding the auto-registered types and the
    /// built-in hooks.
    pub fn new() -> Self {
        Self {
            types: TypeRegistry::new(),
            hooks: HookRegistry::with_builtin(),
        }
    }

    /// Creates a registry without any type or hook.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            types: TypeRegistry::empty(),
            hooks: HookRegistry::empty(),
        }
    }

    #[inline]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    #[inline]
    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    #[inline]
    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    #[inline]
    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// See [`TypeRegistry::register`].
    #[inline]
    pub fn register_type<T: Serializable>(&mut self) {
        self.types.register::<T>();
    }

    /// See [`TypeRegistry::register_with`].
    #[inline]
    pub fn register_type_with<T: Serializable>(&mut self, options: TypeOptions) {
        self.types.register_with::<T>(options);
    }

    /// See [`HookRegistry::register_serialize_hook`].
    #[inline]
    pub fn register_serialize_hook<T: Reflect + TypePath>(
        &mut self,
        f: impl Fn(&T) -> Result<Map<String, Value>, HookError> + Send + Sync + 'static,
    ) {
        self.hooks.register_serialize_hook::<T>(f);
    }

    /// See [`HookRegistry::register_deserialize_hook`].
    #[inline]
    pub fn register_deserialize_hook(
        &mut self,
        type_path: impl Into<String>,
        f: impl Fn(Map<String, Value>) -> Result<Box<dyn Reflect>, HookError> + Send + Sync + 'static,
    ) {
        self.hooks.register_deserialize_hook(type_path, f);
    }

    /// See [`HookRegistry::register_deserialize_hook_for`].
    #[inline]
    pub fn register_deserialize_hook_for<T: Reflect + TypePath>(
        &mut self,
        f: impl Fn(Map<String, Value>) -> Result<T, HookError> + Send + Sync + 'static,
    ) {
        self.hooks.register_deserialize_hook_for::<T>(f);
    }

    /// See [`HookRegistry::register_serde`].
    #[inline]
    pub fn register_serde<T>(&mut self)
    where
        T: Reflect + TypePath + Serialize + DeserializeOwned,
    {
        self.hooks.register_serde::<T>();
    }

    /// See [`SerializeDriver::serialize`].
    #[inline]
    pub fn serialize(&self, value: &dyn Reflect, options: SerializeOptions) -> Result<Value, SerializeError> {
        SerializeDriver::new(self, options).serialize(value)
    }

    /// See [`SerializeDriver::to_string`].
    #[inline]
    pub fn to_string(&self, value: &dyn Reflect, options: SerializeOptions) -> Result<String, SerializeError> {
        SerializeDriver::new(self, options).to_string(value)
    }

    /// See [`DeserializeDriver::deserialize`].
    #[inline]
    pub fn deserialize(&self, input: Value, options: DeserializeOptions) -> Result<Dynamic, DeserializeError> {
        DeserializeDriver::new(self, options).deserialize(input)
    }

    /// See [`DeserializeDriver::deserialize_str`].
    #[inline]
    pub fn deserialize_str(&self, input: &str, options: DeserializeOptions) -> Result<Dynamic, DeserializeError> {
        DeserializeDriver::new(self, options).deserialize_str(input)
    }

    /// See [`DeserializeDriver::deserialize_as`].
    #[inline]
    pub fn deserialize_as<T: FromDynamic>(
        &self,
        input: Value,
        options: DeserializeOptions,
    ) -> Result<T, DeserializeError> {
        DeserializeDriver::new(self, options).deserialize_as(input)
    }
}

// -----------------------------------------------------------------------------
// RegistryArc

/// A shared [`Registry`] behind a read-write lock.
///
/// (De)serialization only takes the read lock; registration takes the write
/// lock. A poisoned lock is recovered.
#[derive(Clone, Default)]
pub struct RegistryArc {
    /// The wrapped [`Registry`].
    pub internal: Arc<RwLock<Registry>>,
}

impl RegistryArc {
    /// Wraps `registry`.
    #[inline]
    pub fn new(registry: Registry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }

    /// Takes a read lock on the underlying [`Registry`].
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`Registry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for RegistryArc {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&*self.read(), f)
    }
}

static GLOBAL: LazyLock<RegistryArc> = LazyLock::new(|| RegistryArc::new(Registry::new()));

/// Returns the process-wide registry used by the free functions at the
/// crate root.
///
/// It is created on first use with [`Registry::new`].
#[inline]
pub fn global() -> &'static RegistryArc {
    &GLOBAL
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::thread;

    use super::{Registry, RegistryArc};
    use crate::derive::Serializable;
    use crate::serde::SerializeOptions;

    #[derive(Serializable)]
    #[jsonic(type_path = "arc_tests::Counter", auto_register = false)]
    struct Counter {
        hits: u64,
    }

    #[test]
    fn shared_reads() {
        let shared = RegistryArc::new(Registry::empty());
        shared.write().register_type::<Counter>();

        let handles: Vec<_> = (0..4_u64)
            .map(|hits| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let tree = shared
                        .read()
                        .serialize(&Counter { hits }, SerializeOptions::new())
                        .unwrap();
                    tree["hits"].as_u64()
                })
            })
            .collect();

        let mut seen: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        seen.sort();
        assert_eq!(seen, [Some(0), Some(1), Some(2), Some(3)]);
    }
}
