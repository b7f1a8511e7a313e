use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::hash::BuildHasher;
use std::collections::HashMap;

use jsonic_utils::hash::hashbrown::HashMap as HashbrownMap;

use crate::ops::{Map, ReflectRef};
use crate::value::Dynamic;
use crate::{FromDynamic, Reflect};

macro_rules! impl_reflect_map {
    ($ty:ident $(<$s:ident: $($bound:path),+>)?) => {
        impl<V: Reflect $(, $s: $($bound +)+ Send + Sync + 'static)?> Reflect for $ty<String, V $(, $s)?> {
            #[inline]
            fn reflect_type_path(&self) -> &'static str {
                core::any::type_name::<Self>()
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }
        }

        impl<V: Reflect $(, $s: $($bound +)+ Send + Sync + 'static)?> Map for $ty<String, V $(, $s)?> {
            #[inline]
            fn get(&self, key: &str) -> Option<&dyn Reflect> {
                <$ty<String, V $(, $s)?>>::get(self, key).map(|value| value as &dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<String, V $(, $s)?>>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
                Box::new(
                    <$ty<String, V $(, $s)?>>::iter(self)
                        .map(|(key, value)| (key.as_str(), value as &dyn Reflect)),
                )
            }
        }

        impl<V: FromDynamic $(, $s: $($bound +)+ Default)?> FromDynamic for $ty<String, V $(, $s)?> {
            fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
                match value {
                    Dynamic::Map(entries) => entries
                        .into_iter()
                        .map(|(key, value)| V::from_dynamic(value).map(|value| (key, value)))
                        .collect(),
                    other => Err(other),
                }
            }
        }
    };
}

impl_reflect_map!(BTreeMap);
impl_reflect_map!(HashMap<S: BuildHasher>);
impl_reflect_map!(HashbrownMap<S: BuildHasher>);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use serde_json::json;

    use crate::FromDynamic;
    use crate::ops::Map;
    use crate::value::Dynamic;

    #[test]
    fn map_access() {
        let mut scores = jsonic_utils::hash::HashMap::<String, u32>::default();
        scores.insert("alice".into(), 3);
        let map: &dyn Map = &scores;
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("alice").and_then(|v| v.downcast_ref::<u32>()), Some(&3));
        assert!(map.get("bob").is_none());
    }

    #[test]
    fn extraction() {
        let value = Dynamic::from(json!({ "b": [1.5], "a": [] }));
        let map = BTreeMap::<String, Vec<f64>>::from_dynamic(value).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(map["b"], [1.5]);

        let value = Dynamic::from(json!({ "a": "x" }));
        assert!(BTreeMap::<String, u8>::from_dynamic(value).is_err());
    }
}
