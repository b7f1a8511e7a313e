use alloc::string::ToString;

use jsonic_utils::hash::HashMap;

use crate::FromDynamic;
use crate::info::{StructInfo, TypePath};
use crate::ops::Struct;
use crate::serde::DeserializeError;
use crate::value::Dynamic;

// -----------------------------------------------------------------------------
// Serializable

/// A struct that can be registered in a [`TypeRegistry`] and rebuilt from a
/// tagged mapping.
///
/// The constructor is declared as data: [`struct_info`] lists the parameters
/// and the attributes they read, and [`construct`] receives the resolved
/// values through [`InitArgs`]. Attributes that are not constructor
/// parameters are assigned afterwards with [`Struct::set_field`].
///
/// This trait is implemented by `#[derive(Serializable)]`.
///
/// # Manual implementation
///
/// ```
/// use jsonic_reflect::info::{FieldInfo, ParamInfo, StructInfo, TypePath};
/// use jsonic_reflect::ops::{ReflectRef, Struct};
/// use jsonic_reflect::serde::DeserializeError;
/// use jsonic_reflect::value::Dynamic;
/// use jsonic_reflect::{FromDynamic, InitArgs, Reflect, Serializable};
///
/// struct Celsius {
///     degrees: f64,
/// }
///
/// static INFO: StructInfo = StructInfo::new(
///     "weather::Celsius",
///     "Celsius",
///     &[FieldInfo::new("degrees")],
///     &[ParamInfo::new("value").with_attribute("degrees")],
/// );
///
/// impl TypePath for Celsius {
///     fn type_path() -> &'static str { "weather::Celsius" }
///     fn type_name() -> &'static str { "Celsius" }
/// }
///
/// impl Reflect for Celsius {
///     fn reflect_type_path(&self) -> &'static str { Self::type_path() }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
/// }
///
/// impl Struct for Celsius {
///     fn reflect_struct_info(&self) -> &'static StructInfo { &INFO }
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         (index == 0).then_some(&self.degrees as &dyn Reflect)
///     }
///     fn set_field(&mut self, name: &str, value: Dynamic) -> Result<bool, DeserializeError> {
///         match name {
///             "degrees" => self.degrees = value.extract(Self::type_path(), name)?,
///             _ => return Ok(false),
///         }
///         Ok(true)
///     }
/// }
///
/// impl FromDynamic for Celsius {
///     fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
///         value.take_object()
///     }
/// }
///
/// impl Serializable for Celsius {
///     fn struct_info() -> &'static StructInfo { &INFO }
///     fn construct(args: &mut InitArgs) -> Result<Self, DeserializeError> {
///         Ok(Self { degrees: args.take("value")? })
///     }
/// }
/// ```
///
/// [`TypeRegistry`]: crate::registry::TypeRegistry
/// [`struct_info`]: Serializable::struct_info
/// [`construct`]: Serializable::construct
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Serializable` so cannot be registered",
    note = "consider annotating `{Self}` with `#[derive(Serializable)]`"
)]
pub trait Serializable: Struct + TypePath + FromDynamic {
    /// Returns the static descriptor of this type.
    fn struct_info() -> &'static StructInfo;

    /// Builds an instance from resolved constructor parameters.
    fn construct(args: &mut InitArgs) -> Result<Self, DeserializeError>;
}

// -----------------------------------------------------------------------------
// InitArgs

/// Resolved constructor parameters, keyed by parameter name.
///
/// Parameters that were skipped (private names while private attributes are
/// excluded) are absent; constructors fall back to a default for them with
/// [`take_or_else`](InitArgs::take_or_else).
///
/// # Examples
///
/// ```
/// use jsonic_reflect::{InitArgs, value::Dynamic};
///
/// let mut args = InitArgs::new("demo::Coordinate");
/// args.insert("lat", Dynamic::from(32.08));
///
/// let lat: f64 = args.take("lat").unwrap();
/// let lon: f64 = args.take_or_else("lon", || 0.0).unwrap();
/// assert_eq!((lat, lon), (32.08, 0.0));
/// assert!(args.take::<f64>("lat").is_err());
/// ```
#[derive(Debug)]
pub struct InitArgs {
    type_path: &'static str,
    values: HashMap<&'static str, Dynamic>,
}

impl InitArgs {
    /// Creates an empty parameter set for the given type.
    #[inline]
    pub fn new(type_path: &'static str) -> Self {
        Self {
            type_path,
            values: HashMap::default(),
        }
    }

    /// Returns the qualified name of the type being constructed.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Sets the value of a parameter, returning the previous one.
    #[inline]
    pub fn insert(&mut self, param: &'static str, value: Dynamic) -> Option<Dynamic> {
        self.values.insert(param, value)
    }

    /// Returns `true` if a value was resolved for `param`.
    #[inline]
    pub fn contains(&self, param: &str) -> bool {
        self.values.contains_key(param)
    }

    /// Returns the number of resolved parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no parameter was resolved.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes the value of `param` and extracts it as `T`.
    ///
    /// # Errors
    ///
    /// - [`DeserializeError::MissingAttribute`] if no value was resolved.
    /// - [`DeserializeError::MismatchedValue`] if the value does not fit `T`.
    pub fn take<T: FromDynamic>(&mut self, param: &'static str) -> Result<T, DeserializeError> {
        match self.values.remove(param) {
            Some(value) => value.extract(self.type_path, param),
            None => Err(DeserializeError::MissingAttribute {
                type_path: self.type_path,
                parameter: param,
                attribute: param.to_string(),
            }),
        }
    }

    /// Removes the value of `param` and extracts it as `T`, or calls `f`
    /// if no value was resolved.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError::MismatchedValue`] if the value does not fit `T`.
    pub fn take_or_else<T: FromDynamic>(
        &mut self,
        param: &'static str,
        f: impl FnOnce() -> T,
    ) -> Result<T, DeserializeError> {
        match self.values.remove(param) {
            Some(value) => value.extract(self.type_path, param),
            None => Ok(f()),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Serializable;
    use crate::info::{ParamInfo, TypePath};
    use crate::ops::Struct;
    use crate::value::Dynamic;
    use crate::{InitArgs, Serializable};

    fn unnamed() -> String {
        String::from("unnamed")
    }

    #[derive(Serializable, Debug, PartialEq)]
    #[jsonic(type_path = "derive_tests::shapes::Label", auto_register = false)]
    struct Label {
        r#type: String,
        #[jsonic(rename = "_title", default = "unnamed")]
        title: String,
        #[jsonic(skip_param)]
        width: u32,
        #[jsonic(transient, default = "unnamed")]
        rendered: String,
    }

    #[derive(Serializable)]
    #[jsonic(auto_register = false)]
    struct Empty {}

    #[test]
    fn type_path_and_names() {
        assert_eq!(Label::type_path(), "derive_tests::shapes::Label");
        assert_eq!(Label::type_name(), "Label");
        assert_eq!(Label::module_path(), Some("derive_tests::shapes"));

        assert_eq!(Empty::type_name(), "Empty");
        assert!(Empty::type_path().ends_with("::Empty"));
        assert_eq!(Empty::module_path(), Some(module_path!()));
    }

    #[test]
    fn generated_descriptor() {
        let info = Label::struct_info();
        let names: Vec<_> = info.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["type", "_title", "width", "rendered"]);
        assert_eq!(info.declared_transient().collect::<Vec<_>>(), ["rendered"]);
        assert_eq!(
            info.params(),
            [ParamInfo::new("type"), ParamInfo::new("_title").with_default()],
        );
        assert!(Empty::struct_info().fields().is_empty());
    }

    #[test]
    fn construct_uses_defaults() {
        let mut args = InitArgs::new(Label::type_path());
        args.insert("type", Dynamic::from("h1"));

        let label = Label::construct(&mut args).unwrap();
        assert_eq!(
            label,
            Label {
                r#type: "h1".into(),
                title: "unnamed".into(),
                width: 0,
                rendered: "unnamed".into(),
            }
        );
        assert!(args.is_empty());

        assert!(Label::construct(&mut InitArgs::new(Label::type_path())).is_err());
    }

    #[test]
    fn field_access_skips_transient() {
        let mut label = Label {
            r#type: "h2".into(),
            title: "intro".into(),
            width: 3,
            rendered: "<h2>".into(),
        };

        assert!(label.field_at(3).is_none());
        assert!(label.field("rendered").is_none());
        assert_eq!(label.field("width").and_then(|v| v.downcast_ref::<u32>()), Some(&3));

        assert!(label.set_field("width", Dynamic::from(8_u32)).unwrap());
        assert!(!label.set_field("rendered", Dynamic::from("x")).unwrap());
        assert!(label.set_field("width", Dynamic::from("wide")).is_err());
        assert_eq!(label.width, 8);

        let mut empty = Empty {};
        assert!(!empty.set_field("any", Dynamic::Null).unwrap());
        assert!(empty.field_at(0).is_none());
    }
}
