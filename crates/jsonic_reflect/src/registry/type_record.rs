use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::any::TypeId;

use jsonic_utils::hash::{HashMap, HashSet};

use crate::info::StructInfo;
use crate::ops::Struct;
use crate::serde::DeserializeError;
use crate::{InitArgs, Serializable};

/// Erased form of [`Serializable::construct`].
pub type ConstructFn = fn(&mut InitArgs) -> Result<Box<dyn Struct>, DeserializeError>;

fn construct_erased<T: Serializable>(args: &mut InitArgs) -> Result<Box<dyn Struct>, DeserializeError> {
    T::construct(args).map(|value| Box::new(value) as Box<dyn Struct>)
}

// -----------------------------------------------------------------------------
// TypeOptions

/// Registration options that complete the declared descriptor of a type.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::registry::TypeOptions;
///
/// let options = TypeOptions::new()
///     .transient("cache")
///     .alias("lat", "latitude");
///
/// assert!(options.transient_attributes().any(|name| name == "cache"));
/// assert_eq!(options.init_parameter_aliases().next(), Some(("lat", "latitude")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeOptions {
    transient: HashSet<String>,
    aliases: HashMap<String, String>,
}

impl TypeOptions {
    /// Creates empty options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Excludes the attribute `name` from (de)serialization.
    pub fn transient(mut self, name: impl Into<String>) -> Self {
        self.transient.insert(name.into());
        self
    }

    /// Reads the constructor parameter `param` from `attribute`.
    pub fn alias(mut self, param: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.aliases.insert(param.into(), attribute.into());
        self
    }

    /// Returns the transient attribute names.
    pub fn transient_attributes(&self) -> impl Iterator<Item = &str> {
        self.transient.iter().map(String::as_str)
    }

    /// Returns the `(parameter, attribute)` alias pairs.
    pub fn init_parameter_aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }
}

// -----------------------------------------------------------------------------
// TypeRecord

/// The registration of one serializable type.
///
/// A record combines the static [`StructInfo`] of the type with the
/// [`TypeOptions`] given at registration: transient sets are unioned and
/// option aliases take precedence over declared ones.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::derive::Serializable;
/// use jsonic_reflect::registry::{TypeOptions, TypeRecord};
///
/// #[derive(Serializable)]
/// #[jsonic(auto_register = false)]
/// struct Place {
///     #[jsonic(param = "lat")]
///     latitude: f64,
///     #[jsonic(transient)]
///     label: String,
/// }
///
/// let record = TypeRecord::of::<Place>(TypeOptions::new().transient("notes"));
///
/// assert!(record.is_transient("label"));
/// assert!(record.is_transient("notes"));
/// assert_eq!(record.attribute_for("lat"), "latitude");
/// ```
#[derive(Clone)]
pub struct TypeRecord {
    type_path: &'static str,
    type_id: TypeId,
    info: &'static StructInfo,
    construct: ConstructFn,
    transient: HashSet<String>,
    aliases: HashMap<String, String>,
}

impl TypeRecord {
    /// Creates the record of `T`, merged with `options`.
    pub fn of<T: Serializable>(options: TypeOptions) -> Self {
        let info = T::struct_info();
        let TypeOptions {
            mut transient,
            aliases: extra,
        } = options;

        transient.extend(info.declared_transient().map(ToString::to_string));

        let mut aliases: HashMap<String, String> = info
            .declared_aliases()
            .map(|(param, attribute)| (param.to_string(), attribute.to_string()))
            .collect();
        aliases.extend(extra);

        Self {
            type_path: T::type_path(),
            type_id: TypeId::of::<T>(),
            info,
            construct: construct_erased::<T>,
            transient,
            aliases,
        }
    }

    /// Returns the qualified name of the type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the [`TypeId`] of the type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the static descriptor of the type.
    #[inline]
    pub fn info(&self) -> &'static StructInfo {
        self.info
    }

    /// Returns `true` if the attribute `name` is excluded from (de)serialization.
    #[inline]
    pub fn is_transient(&self, name: &str) -> bool {
        self.transient.contains(name)
    }

    /// Returns the transient attribute names.
    pub fn transient_attributes(&self) -> impl Iterator<Item = &str> {
        self.transient.iter().map(String::as_str)
    }

    /// Returns the effective `(parameter, attribute)` alias pairs.
    pub fn init_parameter_aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    /// Returns the attribute that supplies the constructor parameter `param`.
    #[inline]
    pub fn attribute_for<'a>(&'a self, param: &'a str) -> &'a str {
        self.aliases.get(param).map_or(param, String::as_str)
    }

    /// Builds an instance from resolved constructor parameters.
    #[inline]
    pub fn construct(&self, args: &mut InitArgs) -> Result<Box<dyn Struct>, DeserializeError> {
        (self.construct)(args)
    }
}

impl core::fmt::Debug for TypeRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeRecord")
            .field("type_path", &self.type_path)
            .field("transient", &self.transient)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}
