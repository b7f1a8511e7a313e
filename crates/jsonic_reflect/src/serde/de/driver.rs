use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use serde_json::Value;

use super::struct_visitor::deserialize_struct;

use crate::registry::Registry;
use crate::serde::error::json_kind;
use crate::serde::{DeserializeError, DeserializeOptions, ExpectedType};
use crate::value::{Dynamic, DynamicMap};
use crate::{FromDynamic, SERIALIZED_TYPE_KEY};

// -----------------------------------------------------------------------------
// DeserializeDriver

/// Rebuilds an object graph from a JSON tree.
///
/// # Deserialization Rules
///
/// - Arrays become [`Dynamic::List`], element by element.
/// - Mappings without `_serialized_type` become [`Dynamic::Map`], value by
///   value.
/// - Tagged mappings become [`Dynamic::Object`]: through the deserialize
///   hook registered for the tag if there is one, otherwise through the
///   [`TypeRecord`] found under the tag. Attribute values are rebuilt
///   recursively at every depth before they reach the constructor.
/// - Scalars are returned unchanged.
///
/// Attributes whose name starts with `_` are read only with
/// [`include_private`](DeserializeOptions::include_private). The
/// [expected type](DeserializeOptions::expect_type) applies to the
/// top-level value.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::derive::Serializable;
/// use jsonic_reflect::registry::{Registry, TypeOptions};
/// use jsonic_reflect::serde::{DeserializeDriver, DeserializeOptions, ExpectedType};
/// use serde_json::json;
///
/// #[derive(Serializable, Debug, PartialEq)]
/// #[jsonic(type_path = "geo::Point", auto_register = false)]
/// struct Point {
///     lat: f64,
///     lon: f64,
/// }
///
/// let mut registry = Registry::empty();
/// // Older documents store the coordinates under long names.
/// registry.register_type_with::<Point>(
///     TypeOptions::new().alias("lat", "latitude").alias("lon", "longitude"),
/// );
///
/// let input = json!({ "latitude": 1.5, "longitude": -2.0, "_serialized_type": "geo::Point" });
/// let driver = DeserializeDriver::new(
///     &registry,
///     DeserializeOptions::new().expect_type(ExpectedType::Type("geo::Point".into())),
/// );
///
/// let point: Point = driver.deserialize_as(input).unwrap();
/// assert_eq!(point, Point { lat: 1.5, lon: -2.0 });
/// ```
///
/// [`TypeRecord`]: crate::registry::TypeRecord
pub struct DeserializeDriver<'a> {
    registry: &'a Registry,
    options: DeserializeOptions,
}

impl<'a> DeserializeDriver<'a> {
    /// Creates a deserializer over `registry`.
    #[inline]
    pub const fn new(registry: &'a Registry, options: DeserializeOptions) -> Self {
        Self { registry, options }
    }

    #[inline]
    pub const fn registry(&self) -> &'a Registry {
        self.registry
    }

    #[inline]
    pub const fn options(&self) -> &DeserializeOptions {
        &self.options
    }

    /// Rebuilds the object graph described by `input`.
    ///
    /// With [`as_string`](DeserializeOptions::as_string) the input must be
    /// a [`Value::String`] holding JSON text.
    pub fn deserialize(&self, input: Value) -> Result<Dynamic, DeserializeError> {
        let input = if self.options.is_string() {
            match input {
                Value::String(text) => serde_json::from_str(&text)?,
                other => {
                    return Err(DeserializeError::InputType {
                        found: json_kind(&other),
                    });
                }
            }
        } else {
            input
        };
        self.deserialize_root(input)
    }

    /// Parses JSON text and rebuilds the object graph it describes.
    pub fn deserialize_str(&self, input: &str) -> Result<Dynamic, DeserializeError> {
        self.deserialize_root(serde_json::from_str(input)?)
    }

    /// Rebuilds the object graph described by `input` as a `T`.
    pub fn deserialize_as<T: FromDynamic>(&self, input: Value) -> Result<T, DeserializeError> {
        T::from_dynamic(self.deserialize(input)?).map_err(|found| DeserializeError::ExpectedType {
            expected: ExpectedType::Type(Cow::Borrowed(core::any::type_name::<T>())),
            found: String::from(found.kind()),
        })
    }

    fn deserialize_root(&self, input: Value) -> Result<Dynamic, DeserializeError> {
        if let Some(expected) = self.options.expected() {
            check_expected(expected, &input)?;
        }
        self.deserialize_at(input, 0)
    }

    pub(super) fn deserialize_at(&self, input: Value, depth: usize) -> Result<Dynamic, DeserializeError> {
        let limit = self.options.depth_limit();
        if depth > limit {
            return Err(DeserializeError::DepthLimitExceeded { limit });
        }

        match input {
            Value::Null => Ok(Dynamic::Null),
            Value::Bool(v) => Ok(Dynamic::Bool(v)),
            Value::Number(v) => Ok(Dynamic::Number(v)),
            Value::String(v) => Ok(Dynamic::String(v)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.deserialize_at(item, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(Dynamic::List),
            Value::Object(mut map) => match map.shift_remove(SERIALIZED_TYPE_KEY) {
                None => map
                    .into_iter()
                    .map(|(key, value)| Ok((key, self.deserialize_at(value, depth + 1)?)))
                    .collect::<Result<DynamicMap, DeserializeError>>()
                    .map(Dynamic::Map),
                Some(Value::String(type_path)) => {
                    if let Some(hook) = self.registry.hooks().deserialize_hook(&type_path) {
                        log::trace!("invoking deserialize hook of `{type_path}`");
                        return hook(map)
                            .map(Dynamic::Object)
                            .map_err(|source| DeserializeError::Hook { type_path, source });
                    }
                    let record = self.registry.types().lookup(&type_path)?;
                    deserialize_struct(self, record, map, depth)
                }
                Some(other) => Err(DeserializeError::InvalidTag {
                    found: json_kind(&other),
                }),
            },
        }
    }
}

fn check_expected(expected: &ExpectedType, input: &Value) -> Result<(), DeserializeError> {
    let (matched, found) = match input {
        Value::Array(_) => (*expected == ExpectedType::Sequence, Cow::Borrowed("a sequence")),
        Value::Object(map) => match map.get(SERIALIZED_TYPE_KEY) {
            None => (*expected == ExpectedType::Mapping, Cow::Borrowed("a mapping")),
            Some(Value::String(tag)) => (
                matches!(expected, ExpectedType::Type(name) if name.as_ref() == tag.as_str()),
                Cow::Owned(format!("an instance of `{tag}`")),
            ),
            Some(other) => {
                return Err(DeserializeError::InvalidTag {
                    found: json_kind(other),
                });
            }
        },
        _ => (*expected == ExpectedType::Scalar, Cow::Borrowed("a scalar")),
    };

    if matched {
        Ok(())
    } else {
        Err(DeserializeError::ExpectedType {
            expected: expected.clone(),
            found: found.into_owned(),
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::{Map, Value, json};

    use super::DeserializeDriver;
    use crate::derive::Serializable;
    use crate::info::TypePath;
    use crate::ops::ReflectRef;
    use crate::registry::{Registry, TypeOptions};
    use crate::serde::{DeserializeError, DeserializeOptions, ExpectedType};
    use crate::serde::{SerializeDriver, SerializeOptions};
    use crate::value::Dynamic;
    use crate::Reflect;

    #[derive(Serializable, Debug, PartialEq)]
    #[jsonic(type_path = "de_tests::Product", auto_register = false)]
    struct Product {
        name: String,
        price: f64,
        #[jsonic(rename = "_stock", default)]
        stock: u32,
        tags: Vec<String>,
        parent: Option<Box<Product>>,
    }

    #[derive(Serializable, Debug, PartialEq)]
    #[jsonic(type_path = "de_tests::Order", auto_register = false)]
    struct Order {
        #[jsonic(param = "id")]
        order_id: u64,
        products: Vec<Product>,
        #[jsonic(skip_param, default)]
        note: Option<String>,
        #[jsonic(transient)]
        cached_total: f64,
    }

    #[derive(Serializable, Debug, PartialEq)]
    #[jsonic(type_path = "de_tests::Secret", auto_register = false)]
    struct Secret {
        #[jsonic(rename = "_key")]
        key: String,
    }

    fn product(name: &str) -> Product {
        Product {
            name: name.into(),
            price: 9.5,
            stock: 4,
            tags: vec!["new".into()],
            parent: None,
        }
    }

    fn registry() -> Registry {
        let mut registry = Registry::empty();
        registry.register_type::<Product>();
        registry.register_type::<Order>();
        registry.register_type::<Secret>();
        registry
    }

    fn round_trip<T: Reflect + crate::FromDynamic>(registry: &Registry, value: &T, private: bool) -> T {
        let tree = SerializeDriver::new(registry, SerializeOptions::new().include_private(private))
            .serialize(value)
            .unwrap();
        DeserializeDriver::new(registry, DeserializeOptions::new().include_private(private))
            .deserialize_as(tree)
            .unwrap()
    }

    #[test]
    fn nested_round_trip() {
        let registry = registry();
        let mut child = product("refill");
        child.parent = Some(Box::new(product("pen")));
        let order = Order {
            order_id: 7,
            products: vec![product("ink"), child],
            note: Some("gift".into()),
            cached_total: 19.0,
        };

        let back = round_trip(&registry, &order, true);
        assert_eq!(back.order_id, 7);
        assert_eq!(back.products, order.products);
        assert_eq!(back.note.as_deref(), Some("gift"));
        // Transient fields come back with their default.
        assert_eq!(back.cached_total, 0.0);
    }

    #[test]
    fn private_attributes_fall_back_to_default() {
        let registry = registry();
        let back = round_trip(&registry, &product("ink"), false);
        assert_eq!(back.stock, 0);
        assert_eq!(back.name, "ink");

        let back = round_trip(&registry, &product("ink"), true);
        assert_eq!(back.stock, 4);
    }

    #[test]
    fn private_parameter_without_default() {
        let registry = registry();
        let tree = json!({ "_key": "k", "_serialized_type": "de_tests::Secret" });

        let err = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(tree.clone())
            .unwrap_err();
        assert!(matches!(err, DeserializeError::MissingAttribute { parameter: "_key", .. }));

        let secret: Secret = DeserializeDriver::new(&registry, DeserializeOptions::new().include_private(true))
            .deserialize_as(tree)
            .unwrap();
        assert_eq!(secret.key, "k");
    }

    #[test]
    fn declared_alias() {
        let registry = registry();
        let tree = json!({ "order_id": 3, "products": [], "_serialized_type": "de_tests::Order" });
        let order: Order = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize_as(tree)
            .unwrap();
        assert_eq!(order.order_id, 3);
        assert!(order.products.is_empty());
        assert_eq!(order.note, None);
    }

    #[test]
    fn missing_attribute_suggests_alias() {
        let mut registry = registry();
        registry.register_type_with::<Order>(TypeOptions::new().alias("id", "number"));

        let tree = json!({ "order_id": 3, "products": [], "_serialized_type": "de_tests::Order" });
        let err = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(tree)
            .unwrap_err();

        match &err {
            DeserializeError::MissingAttribute { type_path, parameter, attribute } => {
                assert_eq!(*type_path, "de_tests::Order");
                assert_eq!(*parameter, "id");
                assert_eq!(attribute, "number");
            }
            other => panic!("unexpected: {other}"),
        }
        assert!(err.to_string().contains("alias"));
    }

    #[derive(Serializable, Debug, PartialEq)]
    #[jsonic(type_path = "de_tests::Pair", auto_register = false)]
    struct Pair {
        a: u32,
        b: u32,
    }

    #[derive(Serializable, Debug, PartialEq)]
    #[jsonic(type_path = "de_tests::Twin", auto_register = false)]
    struct Twin {
        left: Product,
        right: Product,
    }

    #[test]
    fn attribute_shared_by_two_parameters() {
        let mut registry = registry();
        registry.register_type_with::<Pair>(TypeOptions::new().alias("a", "x").alias("b", "x"));
        registry.register_type_with::<Twin>(TypeOptions::new().alias("left", "item").alias("right", "item"));
        let driver = DeserializeDriver::new(&registry, DeserializeOptions::new());

        let pair: Pair = driver
            .deserialize_as(json!({ "x": 1, "_serialized_type": "de_tests::Pair" }))
            .unwrap();
        assert_eq!(pair, Pair { a: 1, b: 1 });

        let item = json!({
            "name": "ink",
            "price": 9.5,
            "tags": ["new"],
            "parent": null,
            "_serialized_type": "de_tests::Product",
        });
        let twin: Twin = driver
            .deserialize_as(json!({ "item": item, "_serialized_type": "de_tests::Twin" }))
            .unwrap();
        let expected = Product { stock: 0, ..product("ink") };
        assert_eq!(twin.left, expected);
        assert_eq!(twin.right, expected);
    }

    #[test]
    fn unknown_attributes_are_dropped() {
        let registry = registry();
        let tree = json!({
            "id": 1,
            "order_id": 1,
            "products": [],
            "legacy": true,
            "_serialized_type": "de_tests::Order",
        });
        let order: Order = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize_as(tree)
            .unwrap();
        assert_eq!(order.order_id, 1);
    }

    #[test]
    fn mismatched_value() {
        let registry = registry();
        let tree = json!({ "order_id": "three", "products": [], "_serialized_type": "de_tests::Order" });
        let err = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(tree)
            .unwrap_err();
        match err {
            DeserializeError::MismatchedValue { type_path, field, found, .. } => {
                assert_eq!(type_path, "de_tests::Order");
                assert_eq!(field, "id");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn unknown_type_and_invalid_tag() {
        let registry = registry();
        let driver = DeserializeDriver::new(&registry, DeserializeOptions::new());

        let err = driver.deserialize(json!([{ "_serialized_type": "de_tests::Ghost" }])).unwrap_err();
        assert!(matches!(err, DeserializeError::UnknownType { ref type_path } if type_path == "de_tests::Ghost"));

        let err = driver.deserialize(json!({ "_serialized_type": 5 })).unwrap_err();
        assert!(matches!(err, DeserializeError::InvalidTag { found: "number" }));
    }

    #[test]
    fn expected_types() {
        let registry = registry();
        let expect = |expected| DeserializeOptions::new().include_private(true).expect_type(expected);
        let tagged = || {
            SerializeDriver::new(&registry, SerializeOptions::new().include_private(true))
                .serialize(&product("ink"))
                .unwrap()
        };

        let ok = DeserializeDriver::new(&registry, expect(ExpectedType::Sequence)).deserialize(json!([1]));
        assert_eq!(ok.unwrap().index(0).and_then(Dynamic::as_u64), Some(1));
        assert!(DeserializeDriver::new(&registry, expect(ExpectedType::Mapping)).deserialize(json!({})).is_ok());
        assert!(DeserializeDriver::new(&registry, expect(ExpectedType::Scalar)).deserialize(json!("x")).is_ok());
        assert!(DeserializeDriver::new(&registry, expect(ExpectedType::of::<Product>())).deserialize(tagged()).is_ok());

        let err = DeserializeDriver::new(&registry, expect(ExpectedType::Sequence))
            .deserialize(json!({ "a": 1 }))
            .unwrap_err();
        assert!(matches!(err, DeserializeError::ExpectedType { .. }));
        assert!(DeserializeDriver::new(&registry, expect(ExpectedType::Mapping)).deserialize(json!([])).is_err());
        assert!(DeserializeDriver::new(&registry, expect(ExpectedType::Mapping)).deserialize(tagged()).is_err());
        assert!(DeserializeDriver::new(&registry, expect(ExpectedType::of::<Order>())).deserialize(tagged()).is_err());
        assert!(DeserializeDriver::new(&registry, expect(ExpectedType::Sequence)).deserialize(json!(1)).is_err());
    }

    #[test]
    fn string_mode() {
        let registry = registry();
        let text = SerializeDriver::new(&registry, SerializeOptions::new().as_string(true).include_private(true))
            .serialize(&product("ink"))
            .unwrap();
        assert!(text.is_string());

        let options = DeserializeOptions::new().as_string(true).include_private(true);
        let back: Product = DeserializeDriver::new(&registry, options.clone())
            .deserialize_as(text)
            .unwrap();
        assert_eq!(back, product("ink"));

        let err = DeserializeDriver::new(&registry, options)
            .deserialize(json!({ "a": 1 }))
            .unwrap_err();
        assert!(matches!(err, DeserializeError::InputType { found: "map" }));
    }

    #[test]
    fn plain_values_pass_through() {
        let registry = Registry::empty();
        let driver = DeserializeDriver::new(&registry, DeserializeOptions::new());

        let value = driver.deserialize_str(r#"{"b": [true, null], "a": {"_x": 1}}"#).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(value.get("a").and_then(|a| a.get("_x")).and_then(Dynamic::as_i64), Some(1));

        assert!(driver.deserialize(json!([])).unwrap().as_list().unwrap().is_empty());
        assert_eq!(driver.deserialize(json!(2.5)).unwrap().as_f64(), Some(2.5));
    }

    #[test]
    fn large_plain_mapping() {
        let registry = Registry::empty();
        let input: Map<String, Value> = (0..100_000_u32)
            .map(|i| (alloc::format!("key{i}"), Value::from(i)))
            .collect();

        let value = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(Value::Object(input))
            .unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 100_000);
        assert_eq!(map.keys().next(), Some("key0"));
        assert_eq!(map.get("key99999").and_then(Dynamic::as_u64), Some(99_999));
    }

    #[test]
    fn depth_bound() {
        let registry = Registry::empty();
        let driver = DeserializeDriver::new(&registry, DeserializeOptions::new().max_depth(2));
        assert!(matches!(
            driver.deserialize(json!([[[1]]])),
            Err(DeserializeError::DepthLimitExceeded { limit: 2 })
        ));
        assert!(driver.deserialize(json!([[1]])).is_ok());
    }

    // -------------------------------------------------------------------------
    // Hooks

    #[derive(Debug, Clone, PartialEq)]
    struct Stamp(u64);

    impl TypePath for Stamp {
        fn type_path() -> &'static str {
            "de_tests::Stamp"
        }

        fn type_name() -> &'static str {
            "Stamp"
        }
    }

    impl Reflect for Stamp {
        fn reflect_type_path(&self) -> &'static str {
            Self::type_path()
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque
        }
    }

    impl crate::FromDynamic for Stamp {
        fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
            value.take_object()
        }
    }

    #[derive(Serializable, Debug, PartialEq)]
    #[jsonic(type_path = "de_tests::User", auto_register = false)]
    struct User {
        name: String,
        joined: Stamp,
    }

    fn hooked_registry() -> Registry {
        let mut registry = registry();
        registry.register_type::<User>();
        registry.register_serialize_hook::<Stamp>(|stamp| {
            let mut map = Map::new();
            map.insert("epoch".into(), Value::from(stamp.0));
            Ok(map)
        });
        registry.register_deserialize_hook_for::<Stamp>(|map| {
            map.get("epoch").and_then(Value::as_u64).map(Stamp).ok_or_else(|| "missing epoch".into())
        });
        registry
    }

    #[test]
    fn hook_round_trip() {
        let registry = hooked_registry();
        let user = User {
            name: "ada".into(),
            joined: Stamp(1_600_000_000),
        };

        let tree = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&user)
            .unwrap();
        assert_eq!(
            tree,
            json!({
                "name": "ada",
                "joined": { "epoch": 1_600_000_000_u64, "_serialized_type": "de_tests::Stamp" },
                "_serialized_type": "de_tests::User",
            })
        );

        let back: User = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize_as(tree)
            .unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn hook_failure_names_the_type() {
        let registry = hooked_registry();
        let err = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(json!({ "_serialized_type": "de_tests::Stamp" }))
            .unwrap_err();
        match err {
            DeserializeError::Hook { type_path, source } => {
                assert_eq!(type_path, "de_tests::Stamp");
                assert_eq!(source.to_string(), "missing epoch");
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn opaque_without_hook_is_unregistered() {
        let registry = registry();
        let err = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&Stamp(1))
            .unwrap_err();
        assert!(err.to_string().contains("de_tests::Stamp"));
    }

    #[test]
    fn mixed_mapping_scenario() {
        use crate::value::DynamicMap;

        let registry = hooked_registry();
        let user = User {
            name: "ada".into(),
            joined: Stamp(1),
        };

        let mut input = DynamicMap::new();
        input.insert("user".into(), Dynamic::Object(Box::new(user)));
        input.insert("ts".into(), Dynamic::Object(Box::new(Stamp(42))));
        input.insert("tags".into(), Dynamic::from(vec![Dynamic::from("a"), Dynamic::from("b")]));

        let tree = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&input)
            .unwrap();
        assert!(tree.get("_serialized_type").is_none());
        assert_eq!(tree["user"]["_serialized_type"], "de_tests::User");
        assert_eq!(tree["ts"], json!({ "epoch": 42, "_serialized_type": "de_tests::Stamp" }));
        assert_eq!(tree["tags"], json!(["a", "b"]));

        let back = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(tree)
            .unwrap();
        let user = back.get("user").and_then(Dynamic::downcast_ref::<User>).unwrap();
        assert_eq!(user.name, "ada");
        assert_eq!(back.get("ts").and_then(Dynamic::downcast_ref::<Stamp>), Some(&Stamp(42)));
        let tags: Vec<_> = back.get("tags").unwrap().as_list().unwrap().iter().filter_map(Dynamic::as_str).collect();
        assert_eq!(tags, ["a", "b"]);
    }
}
