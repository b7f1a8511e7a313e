use alloc::string::String;

use crate::info::{TypePath, impl_type_path};
use crate::ops::ReflectRef;
use crate::value::Dynamic;
use crate::{FromDynamic, Reflect};

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($variant:ident($wide:ty), $get:ident: $($ty:ty => $name:literal),+ $(,)?) => {$(
        impl_type_path!($ty => $name);

        impl Reflect for $ty {
            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                $name
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::$variant(*self as $wide)
            }
        }

        impl FromDynamic for $ty {
            fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
                match value.$get().and_then(|v| <$ty>::try_from(v).ok()) {
                    Some(v) => Ok(v),
                    None => Err(value),
                }
            }
        }
    )+};
}

impl_integer!(UInt(u64), as_u64:
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    usize => "usize",
);

impl_integer!(Int(i64), as_i64:
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    isize => "isize",
);

// -----------------------------------------------------------------------------
// Floats

impl_type_path!(f64 => "f64");
impl_type_path!(f32 => "f32");

impl Reflect for f64 {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        "f64"
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Float(*self)
    }
}

impl FromDynamic for f64 {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        value.as_f64().ok_or(value)
    }
}

impl Reflect for f32 {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        "f32"
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Float(f64::from(*self))
    }
}

impl FromDynamic for f32 {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        // Finite values outside the f32 range do not fit.
        match value.as_f64() {
            Some(v) if v.is_finite() && !(v as f32).is_finite() => Err(value),
            Some(v) => Ok(v as f32),
            None => Err(value),
        }
    }
}

// -----------------------------------------------------------------------------
// Others

impl_type_path!(() => "()");
impl_type_path!(bool => "bool");
impl_type_path!(char => "char");
impl_type_path!((in "alloc::string") String => "String");

impl Reflect for () {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        "()"
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Null
    }
}

impl FromDynamic for () {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        match value {
            Dynamic::Null => Ok(()),
            other => Err(other),
        }
    }
}

impl Reflect for bool {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        "bool"
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Bool(*self)
    }
}

impl FromDynamic for bool {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        value.as_bool().ok_or(value)
    }
}

impl Reflect for char {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        "char"
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Char(*self)
    }
}

impl FromDynamic for char {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        let single = value.as_str().and_then(|s| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        });
        single.ok_or(value)
    }
}

impl Reflect for String {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        <Self as TypePath>::type_path()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::String(self)
    }
}

impl FromDynamic for String {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        match value {
            Dynamic::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::FromDynamic;
    use crate::info::TypePath;
    use crate::value::Dynamic;

    #[test]
    fn integer_ranges() {
        assert_eq!(u8::from_dynamic(Dynamic::from(255_u32)).unwrap(), 255);
        assert!(u8::from_dynamic(Dynamic::from(256_u32)).is_err());
        assert!(u32::from_dynamic(Dynamic::from(-1_i32)).is_err());
        assert_eq!(i16::from_dynamic(Dynamic::from(-300_i64)).unwrap(), -300);
        assert!(i64::from_dynamic(Dynamic::from(1.5)).is_err());
    }

    #[test]
    fn floats_accept_integers() {
        assert_eq!(f64::from_dynamic(Dynamic::from(3_u8)).unwrap(), 3.0);
        assert_eq!(f32::from_dynamic(Dynamic::from(0.5)).unwrap(), 0.5);
    }

    #[test]
    fn f32_range() {
        assert_eq!(f32::from_dynamic(Dynamic::from(f64::from(f32::MAX))).unwrap(), f32::MAX);
        assert_eq!(f32::from_dynamic(Dynamic::from(f64::from(-2.5e38_f32))).unwrap(), -2.5e38_f32);

        let err = f32::from_dynamic(Dynamic::from(1e300)).unwrap_err();
        assert_eq!(err.as_f64(), Some(1e300));
        assert!(f32::from_dynamic(Dynamic::from(-1e39)).is_err());
    }

    #[test]
    fn char_requires_one_scalar() {
        assert_eq!(char::from_dynamic(Dynamic::from("x")).unwrap(), 'x');
        assert!(char::from_dynamic(Dynamic::from("xy")).is_err());
        assert!(char::from_dynamic(Dynamic::from("")).is_err());
    }

    #[test]
    fn type_paths() {
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::module_path(), Some("alloc::string"));
        assert_eq!(<()>::type_path(), "()");
    }
}
