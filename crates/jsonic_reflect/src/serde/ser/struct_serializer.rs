use alloc::string::String;

use serde_json::{Map, Value};

use super::SerializeDriver;

use crate::ops::Struct;
use crate::registry::SerializeHook;
use crate::serde::SerializeError;
use crate::{Reflect, SERIALIZED_TYPE_KEY};

/// Appends the type tag to a mapping.
///
/// The tag is inserted last, after every data key.
#[inline]
fn stamp(mut map: Map<String, Value>, type_path: &str) -> Value {
    map.insert(SERIALIZED_TYPE_KEY.into(), Value::String(type_path.into()));
    Value::Object(map)
}

/// Serializes a value through its hook and tags the result.
pub(super) fn serialize_with_hook(hook: &SerializeHook, value: &dyn Reflect) -> Result<Value, SerializeError> {
    let map = hook.call(value).map_err(|source| SerializeError::Hook {
        type_path: hook.type_path(),
        source,
    })?;

    if map.contains_key(SERIALIZED_TYPE_KEY) {
        return Err(SerializeError::ReservedKey);
    }

    Ok(stamp(map, hook.type_path()))
}

/// Serializes a registered struct to a tagged mapping.
///
/// Fields keep their declaration order. Private fields are dropped unless
/// the driver includes them; transient fields are always dropped.
pub(super) fn serialize_struct(
    driver: &SerializeDriver<'_>,
    value: &dyn Struct,
    depth: usize,
) -> Result<Value, SerializeError> {
    let type_path = value.reflect_type_path();
    let record = match driver.registry().types().get(type_path) {
        Some(record) if record.type_id() == value.ty_id() => record,
        _ => return Err(SerializeError::UnregisteredType { type_path }),
    };

    let include_private = driver.options().includes_private();
    let mut map = Map::with_capacity(value.field_len() + 1);

    for (info, field) in value.iter_fields() {
        let name = info.name();
        if record.is_transient(name) || (!include_private && info.is_private()) {
            continue;
        }
        // `None` for declared transient fields.
        let Some(field) = field else {
            continue;
        };
        if name == SERIALIZED_TYPE_KEY {
            return Err(SerializeError::ReservedKey);
        }
        map.insert(name.into(), driver.serialize_at(field, depth + 1)?);
    }

    Ok(stamp(map, type_path))
}
