#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use jsonic_reflect as reflect;
pub use jsonic_utils as utils;

pub use jsonic_reflect::{deserialize, deserialize_as, deserialize_str};
pub use jsonic_reflect::{register_deserialize_hook, register_deserialize_hook_for};
pub use jsonic_reflect::{register_serde, register_serialize_hook};
pub use jsonic_reflect::{register_type, register_type_with};
pub use jsonic_reflect::{serialize, to_string};

/// Commonly used items.
pub mod prelude {
    pub use jsonic_reflect::derive::Serializable;
    pub use jsonic_reflect::registry::{Registry, TypeOptions};
    pub use jsonic_reflect::serde::{DeserializeOptions, ExpectedType, SerializeOptions};
    pub use jsonic_reflect::value::Dynamic;
    pub use jsonic_reflect::{FromDynamic, Reflect, Serializable};
}
