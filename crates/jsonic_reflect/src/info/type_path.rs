// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// [`type_path`](TypePath::type_path) is the *qualified name* of a type: it
/// keys the [`TypeRegistry`](crate::registry::TypeRegistry) and the hook
/// tables, and is written into every tagged mapping. It must not be shared
/// by two different types registered in the same registry.
///
/// `#[derive(Serializable)]` implements this trait with
/// `concat!(module_path!(), "::", Ident)`, or with the path given by
/// `#[jsonic(type_path = "...")]`. Names never start with `::`.
///
/// # Manual implementation
///
/// ```
/// use jsonic_reflect::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
///
/// assert_eq!(Foo::type_path(), "my_crate::foo::Foo");
/// ```
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the type.
    fn type_path() -> &'static str;

    /// Returns the short name of the type, without module path.
    fn type_name() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive built-in types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

/// Implement [`TypePath`] for a foreign type.
///
/// `impl_type_path!(u8 => "u8")` uses the name as is,
/// `impl_type_path!((in "chrono") NaiveDateTime => "NaiveDateTime")` prefixes it
/// with the given module.
macro_rules! impl_type_path {
    ((in $module:literal) $ty:ty => $name:literal) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                concat!($module, "::", $name)
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }
    };
    ($ty:ty => $name:literal) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $name
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }
    };
}

pub(crate) use impl_type_path;
