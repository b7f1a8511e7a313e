use alloc::string::String;
use core::any::TypeId;

use jsonic_utils::hash::{FixedHashState, HashMap};

use crate::Serializable;
use crate::registry::{TypeOptions, TypeRecord};
use crate::serde::DeserializeError;

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of [serializable] types, keyed by qualified name.
///
/// The deserializer resolves the `_serialized_type` tag of a mapping through
/// [`lookup`], and the serializer checks that a struct it meets has been
/// registered.
///
/// Registration is an upsert: registering a second record under the same
/// qualified name replaces the first one.
///
/// # Example
///
/// ```
/// use jsonic_reflect::derive::Serializable;
/// use jsonic_reflect::registry::{TypeOptions, TypeRegistry};
///
/// #[derive(Serializable)]
/// #[jsonic(type_path = "demo::Session", auto_register = false)]
/// struct Session {
///     user: String,
///     token: String,
/// }
///
/// let mut registry = TypeRegistry::empty();
/// registry.register_with::<Session>(TypeOptions::new().transient("token"));
///
/// let record = registry.lookup("demo::Session").unwrap();
/// assert!(record.is_transient("token"));
/// assert!(registry.lookup("demo::Missing").is_err());
/// ```
///
/// [serializable]: crate::Serializable
/// [`lookup`]: TypeRegistry::lookup
pub struct TypeRegistry {
    records: HashMap<String, TypeRecord>,
    type_id_to_path: HashMap<TypeId, String>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            records: HashMap::with_hasher(FixedHashState),
            type_id_to_path: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Create a type registry holding every auto-registered type.
    ///
    /// See [`auto_register`](Self::auto_register).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.auto_register();
        registry
    }

    /// Registers the type `T` with its declared descriptor.
    ///
    /// Any prior record with the same qualified name is replaced.
    #[inline]
    pub fn register<T: Serializable>(&mut self) {
        self.insert_record(TypeRecord::of::<T>(TypeOptions::new()));
    }

    /// Registers the type `T`, merging `options` into its declared descriptor.
    ///
    /// Any prior record with the same qualified name is replaced.
    #[inline]
    pub fn register_with<T: Serializable>(&mut self, options: TypeOptions) {
        self.insert_record(TypeRecord::of::<T>(options));
    }

    /// Inserts or **overwrites** a record.
    pub fn insert_record(&mut self, record: TypeRecord) {
        let type_path = record.type_path();
        let type_id = record.type_id();

        if let Some(old) = self.records.insert(type_path.into(), record) {
            log::debug!("replacing the type record of `{type_path}`");
            if old.type_id() != type_id {
                self.type_id_to_path.remove(&old.type_id());
            }
        }
        self.type_id_to_path.insert(type_id, type_path.into());
    }

    /// Returns the record registered under the qualified name `type_path`.
    #[inline]
    pub fn get(&self, type_path: &str) -> Option<&TypeRecord> {
        self.records.get(type_path)
    }

    /// Returns the record of the type with the given [`TypeId`].
    #[inline]
    pub fn get_by_id(&self, type_id: TypeId) -> Option<&TypeRecord> {
        self.type_id_to_path
            .get(&type_id)
            .and_then(|path| self.records.get(path))
    }

    /// Returns the record registered under `type_path`.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError::UnknownType`] if no such record exists.
    pub fn lookup(&self, type_path: &str) -> Result<&TypeRecord, DeserializeError> {
        self.records
            .get(type_path)
            .ok_or_else(|| DeserializeError::UnknownType {
                type_path: type_path.into(),
            })
    }

    /// Returns `true` if a record is registered under `type_path`.
    #[inline]
    pub fn contains(&self, type_path: &str) -> bool {
        self.records.contains_key(type_path)
    }

    /// Returns `true` if the type `T` is registered.
    #[inline]
    pub fn contains_type<T: 'static>(&self) -> bool {
        self.type_id_to_path.contains_key(&TypeId::of::<T>())
    }

    /// Returns an iterator over the registered records.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeRecord> {
        self.records.values()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registers every non-generic type derived with `#[derive(Serializable)]`
    /// (unless opted out with `#[jsonic(auto_register = false)]`) or declared
    /// via `impl_auto_register!`.
    ///
    /// Returns the number of catalogue entries that were applied. Repeated
    /// calls re-register the same types, which leaves the registry unchanged
    /// except for records that were overwritten with different options.
    ///
    /// ## Feature Dependency
    ///
    /// This method requires the `auto_register` feature. When disabled, it
    /// does nothing and returns `0`.
    ///
    /// ## Platform Support
    ///
    /// The catalogue is built by the `inventory` crate, which supports Linux,
    /// macOS, Windows, iOS, Android and Web. On other platforms this method
    /// finds no entries.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use jsonic_reflect::{derive::Serializable, registry::TypeRegistry};
    /// #[derive(Serializable)]
    /// struct Foo {
    ///     name: Option<String>,
    ///     value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// assert!(registry.auto_register() > 0);
    /// assert!(registry.contains_type::<Foo>());
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> usize {
        #[cfg(feature = "auto_register")]
        {
            let count = crate::__macro_exports::auto_register::__register_types(self);
            log::debug!("auto-registered {count} serializable types");
            count
        }

        #[cfg(not(feature = "auto_register"))]
        0
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.records.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeRegistry;
    use crate::derive::Serializable;
    use crate::registry::TypeOptions;
    use crate::serde::DeserializeError;

    #[derive(Serializable)]
    #[jsonic(type_path = "registry_tests::Probe", auto_register = false)]
    struct Probe {
        #[jsonic(param = "v")]
        value: u32,
    }

    #[derive(Serializable)]
    #[jsonic(type_path = "registry_tests::Probe", auto_register = false)]
    struct Impostor {
        other: u32,
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Probe>();
        registry.register_with::<Probe>(TypeOptions::new().transient("value"));
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("registry_tests::Probe").unwrap().is_transient("value"));

        registry.register::<Impostor>();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains_type::<Impostor>());
        assert!(!registry.contains_type::<Probe>());
    }

    #[test]
    fn option_aliases_override_declared() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Probe>();
        assert_eq!(registry.get("registry_tests::Probe").unwrap().attribute_for("v"), "value");

        registry.register_with::<Probe>(TypeOptions::new().alias("v", "legacy_value"));
        let record = registry.get_by_id(core::any::TypeId::of::<Probe>()).unwrap();
        assert_eq!(record.attribute_for("v"), "legacy_value");
        assert_eq!(record.attribute_for("other"), "other");
    }

    #[test]
    fn unknown_lookup() {
        let registry = TypeRegistry::empty();
        assert!(registry.is_empty());
        match registry.lookup("nowhere::Ghost") {
            Err(DeserializeError::UnknownType { type_path }) => assert_eq!(type_path, "nowhere::Ghost"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
