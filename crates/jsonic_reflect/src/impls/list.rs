use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::ops::{List, ReflectRef};
use crate::value::Dynamic;
use crate::{FromDynamic, Reflect};

macro_rules! impl_reflect_list {
    ($($ty:ident),+) => {$(
        impl<T: Reflect> Reflect for $ty<T> {
            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                core::any::type_name::<Self>()
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }
        }

        impl<T: FromDynamic> FromDynamic for $ty<T> {
            fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
                match value {
                    Dynamic::List(items) => items.into_iter().map(T::from_dynamic).collect(),
                    other => Err(other),
                }
            }
        }
    )+};
}

impl_reflect_list!(Vec, VecDeque);

impl<T: Reflect> List for Vec<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Reflect> List for VecDeque<T> {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::ops::{List, ReflectRef};
    use crate::value::Dynamic;
    use crate::{FromDynamic, Reflect};

    #[test]
    fn list_access() {
        let deque: VecDeque<i32> = [4, 5].into_iter().collect();
        let list = deque.reflect_ref().as_list().unwrap();
        assert_eq!(list.len(), 2);
        assert!(matches!(list.get(1).unwrap().reflect_ref(), ReflectRef::Int(5)));
        assert!(List::get(&deque, 2).is_none());
    }

    #[test]
    fn nested_extraction() {
        let value = Dynamic::from(vec![
            Dynamic::from(vec![Dynamic::from(1_u8)]),
            Dynamic::from(Vec::new()),
        ]);
        let nested = Vec::<Vec<u8>>::from_dynamic(value).unwrap();
        assert_eq!(nested, [vec![1], vec![]]);

        let bad = Dynamic::from(vec![Dynamic::from(1_u8), Dynamic::from("two")]);
        assert_eq!(Vec::<u8>::from_dynamic(bad).unwrap_err().as_str(), Some("two"));
    }
}
