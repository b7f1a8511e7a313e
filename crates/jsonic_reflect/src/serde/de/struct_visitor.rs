use alloc::boxed::Box;
use alloc::string::String;

use jsonic_utils::hash::HashMap;
use serde_json::{Map, Value};

use super::DeserializeDriver;

use crate::info::ParamInfo;
use crate::registry::TypeRecord;
use crate::serde::DeserializeError;
use crate::value::{Dynamic, DynamicMap};
use crate::{InitArgs, Reflect, is_private};

/// Rebuilds a registered struct from a tagged mapping whose tag was
/// already removed.
///
/// 1. Every data key is deserialized, except private keys (unless included)
///    and the transient attributes of the record.
/// 2. Each constructor parameter takes the value of its source attribute:
///    the alias registered for it, or the attribute of the same name. An
///    attribute claimed by several parameters is rebuilt once per claimant.
/// 3. The remaining attributes are assigned to the built instance.
pub(super) fn deserialize_struct(
    driver: &DeserializeDriver<'_>,
    record: &TypeRecord,
    map: Map<String, Value>,
    depth: usize,
) -> Result<Dynamic, DeserializeError> {
    let type_path = record.type_path();
    let include_private = driver.options().includes_private();

    // Skipped parameters are left to the constructor's default.
    let is_skipped = |param: &ParamInfo| !include_private && param.is_private();

    let mut claims: HashMap<&str, usize> = HashMap::default();
    for param in record.info().params().iter().filter(|p| !is_skipped(*p)) {
        *claims.entry(record.attribute_for(param.name())).or_default() += 1;
    }

    let mut attributes = DynamicMap::with_capacity(map.len());
    let mut shared = Map::new();
    for (key, value) in map {
        if record.is_transient(&key) || (!include_private && is_private(&key)) {
            continue;
        }
        if claims.get(key.as_str()).is_some_and(|&count| count > 1) {
            shared.insert(key, value);
            continue;
        }
        let value = driver.deserialize_at(value, depth + 1)?;
        attributes.insert(key, value);
    }

    let mut args = InitArgs::new(type_path);
    for param in record.info().params() {
        let name = param.name();
        let attribute = record.attribute_for(name);

        let skipped = is_skipped(param);
        let value = if skipped {
            None
        } else if let Some(raw) = shared.get(attribute) {
            Some(driver.deserialize_at(raw.clone(), depth + 1)?)
        } else {
            attributes.remove(attribute)
        };

        match value {
            Some(value) => {
                args.insert(name, value);
            }
            None if skipped && param.has_default() => {}
            None => {
                return Err(DeserializeError::MissingAttribute {
                    type_path,
                    parameter: name,
                    attribute: attribute.into(),
                });
            }
        }
    }

    let mut instance = record.construct(&mut args)?;

    for (name, value) in attributes {
        if !instance.set_field(&name, value)? {
            log::warn!("dropping attribute `{name}` of `{type_path}`, no field accepts it");
        }
    }

    let instance: Box<dyn Reflect> = instance;
    Ok(Dynamic::Object(instance))
}
