use alloc::boxed::Box;
use core::any::{Any, TypeId};

use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`jsonic_reflect`].
///
/// A `Reflect` value can report its qualified type name and expose its
/// [shape](ReflectRef), which is all the serializer needs to walk an object
/// graph without knowing the concrete types.
///
/// It's recommended to use `#[derive(Serializable)]` for structs. The crate
/// implements this trait for primitives, strings, `Option`, `Box` and the
/// common collections.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type ID,
/// not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```
/// # use jsonic_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Type Casting
///
/// ```
/// # use jsonic_reflect::Reflect;
/// let x: Box<dyn Reflect> = String::from("hi").into_boxed_reflect();
///
/// assert_eq!(x.downcast_ref::<String>().map(String::as_str), Some("hi"));
/// assert_eq!(x.take::<String>().unwrap(), "hi");
/// ```
///
/// [`jsonic_reflect`]: crate
pub trait Reflect: Send + Sync + Any {
    /// Returns the qualified type name of the underlying value.
    ///
    /// For registered structs and hooked types this is the name used as
    /// the `_serialized_type` tag.
    fn reflect_type_path(&self) -> &'static str;

    /// Returns an immutable enumeration of the shape of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Moves this value into a boxed reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl core::fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Reflect({})", self.reflect_type_path())
    }
}
