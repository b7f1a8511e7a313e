//! Complex numbers from [`num_complex`].
//!
//! `Complex64` serializes through hooks to `{"value": "complex(re,im)"}`.

use alloc::format;

use num_complex::Complex64;

use super::{impl_reflect_opaque, single_entry, string_entry};
use crate::info::impl_type_path;
use crate::registry::HookRegistry;
use crate::serde::HookError;

impl_type_path!((in "num_complex") Complex64 => "Complex64");

impl_reflect_opaque!(Complex64);

fn parse(text: &str) -> Result<Complex64, HookError> {
    let inner = text
        .strip_prefix("complex(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| format!("`{text}` is not of the form `complex(re,im)`"))?;
    let (re, im) = inner
        .split_once(',')
        .ok_or_else(|| format!("`{text}` has no `,` between the parts"))?;
    Ok(Complex64::new(re.trim().parse()?, im.trim().parse()?))
}

pub(super) fn register_hooks(hooks: &mut HookRegistry) {
    hooks.register_serialize_hook::<Complex64>(|value| {
        Ok(single_entry("value", format!("complex({:?},{:?})", value.re, value.im)))
    });
    hooks.register_deserialize_hook_for::<Complex64>(|map| parse(string_entry(&map, "value")?));
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use serde_json::json;

    use super::parse;
    use crate::registry::Registry;
    use crate::serde::{DeserializeDriver, DeserializeOptions, SerializeDriver, SerializeOptions};

    #[test]
    fn text_form() {
        assert_eq!(parse("complex(1.5,-2.0)").unwrap(), Complex64::new(1.5, -2.0));
        assert_eq!(parse("complex( 3 , 4 )").unwrap(), Complex64::new(3.0, 4.0));
        assert!(parse("complex(1.5)").is_err());
        assert!(parse("(1,2)").is_err());
    }

    #[test]
    fn round_trip() {
        let registry = Registry::new();
        let value = Complex64::new(1.0, -0.5);
        let tree = SerializeDriver::new(&registry, SerializeOptions::new())
            .serialize(&value)
            .unwrap();
        assert_eq!(
            tree,
            json!({ "value": "complex(1.0,-0.5)", "_serialized_type": "num_complex::Complex64" })
        );

        let back = DeserializeDriver::new(&registry, DeserializeOptions::new())
            .deserialize(tree)
            .unwrap();
        assert_eq!(back.downcast_ref::<Complex64>(), Some(&value));
    }
}
