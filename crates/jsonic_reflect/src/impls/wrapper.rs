use alloc::boxed::Box;

use crate::ops::ReflectRef;
use crate::value::Dynamic;
use crate::{FromDynamic, Reflect};

// -----------------------------------------------------------------------------
// Option

impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => ReflectRef::Inner(value),
            None => ReflectRef::Null,
        }
    }
}

/// `null` becomes `None`; anything else must fit `T`.
impl<T: FromDynamic> FromDynamic for Option<T> {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        match value {
            Dynamic::Null => Ok(None),
            other => T::from_dynamic(other).map(Some),
        }
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: Reflect> Reflect for Box<T> {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Inner(&**self)
    }
}

impl<T: FromDynamic> FromDynamic for Box<T> {
    #[inline]
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        T::from_dynamic(value).map(Box::new)
    }
}
