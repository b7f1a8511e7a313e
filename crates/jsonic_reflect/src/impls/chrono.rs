//! Timestamps from [`chrono`](::chrono).
//!
//! Both types serialize through hooks to `{"datetime": "<text>"}`:
//!
//! - `NaiveDateTime` as `2020-01-01 10:05:35`, with fractional seconds when present.
//! - `DateTime<Utc>` as RFC 3339, e.g. `2020-01-01T10:05:35+00:00`.

use alloc::string::ToString;

use ::chrono::{DateTime, NaiveDateTime, Utc};

use super::{impl_reflect_opaque, single_entry, string_entry};
use crate::info::impl_type_path;
use crate::registry::HookRegistry;

const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

impl_type_path!((in "chrono") NaiveDateTime => "NaiveDateTime");
impl_type_path!((in "chrono") DateTime<Utc> => "DateTime<Utc>");

impl_reflect_opaque!(NaiveDateTime);
impl_reflect_opaque!(DateTime<Utc>);

pub(super) fn register_hooks(hooks: &mut HookRegistry) {
    hooks.register_serialize_hook::<NaiveDateTime>(|value| {
        Ok(single_entry("datetime", value.format(NAIVE_FORMAT).to_string()))
    });
    hooks.register_deserialize_hook_for::<NaiveDateTime>(|map| {
        let text = string_entry(&map, "datetime")?;
        Ok(NaiveDateTime::parse_from_str(text, NAIVE_FORMAT)?)
    });

    hooks.register_serialize_hook::<DateTime<Utc>>(|value| {
        Ok(single_entry("datetime", value.to_rfc3339()))
    });
    hooks.register_deserialize_hook_for::<DateTime<Utc>>(|map| {
        let text = string_entry(&map, "datetime")?;
        Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
    });
}

#[cfg(test)]
mod tests {
    use ::chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde_json::json;

    use crate::info::TypePath;
    use crate::registry::Registry;
    use crate::serde::{DeserializeDriver, DeserializeOptions, SerializeDriver, SerializeOptions};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|date| date.and_hms_opt(10, 5, 35))
            .unwrap()
    }

    #[test]
    fn naive_round_trip() {
        let registry = Registry::new();
        let tree = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&sample())
            .unwrap();
        assert_eq!(
            tree,
            json!({ "datetime": "2020-01-01 10:05:35", "_serialized_type": "chrono::NaiveDateTime" })
        );

        let back = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(tree)
            .unwrap();
        assert_eq!(back.downcast_ref::<NaiveDateTime>(), Some(&sample()));
    }

    #[test]
    fn utc_round_trip() {
        let registry = Registry::new();
        let value = sample().and_utc();
        let tree = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&value)
            .unwrap();
        assert_eq!(tree["_serialized_type"], <DateTime<Utc>>::type_path());

        let back = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(tree)
            .unwrap();
        assert_eq!(back.downcast_ref::<DateTime<Utc>>(), Some(&value));
    }

    #[test]
    fn malformed_text_is_a_hook_error() {
        let registry = Registry::new();
        let err = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(json!({ "datetime": "yesterday", "_serialized_type": "chrono::NaiveDateTime" }))
            .unwrap_err();
        assert!(err.to_string().contains("chrono::NaiveDateTime"));
    }
}
