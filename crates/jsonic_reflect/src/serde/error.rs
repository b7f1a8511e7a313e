use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::serde::ExpectedType;

/// The error type returned by user hooks.
pub type HookError = Box<dyn core::error::Error + Send + Sync>;

// -----------------------------------------------------------------------------
// SerializeError

/// An error raised while converting an object graph to a JSON tree.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// A struct or opaque value whose type has no record and no hook.
    #[error("type `{type_path}` is neither registered nor handled by a serialize hook")]
    UnregisteredType { type_path: &'static str },

    /// A plain mapping or hook output that already carries the type tag.
    #[error("mapping already contains the reserved key `{key}`", key = crate::SERIALIZED_TYPE_KEY)]
    ReservedKey,

    /// NaN and infinities have no JSON representation.
    #[error("cannot serialize non-finite float `{value}`")]
    NonFiniteFloat { value: f64 },

    #[error("serialize hook for `{type_path}` failed: {source}")]
    Hook {
        type_path: &'static str,
        #[source]
        source: HookError,
    },

    #[error("object graph is nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// -----------------------------------------------------------------------------
// DeserializeError

/// An error raised while rebuilding an object graph from a JSON tree.
#[derive(Debug, Error)]
pub enum DeserializeError {
    /// String mode received something other than a JSON string.
    #[error("expected a JSON string as input, found {found}")]
    InputType { found: &'static str },

    #[error("expected {expected}, found {found}")]
    ExpectedType { expected: ExpectedType, found: String },

    /// A constructor parameter has no attribute to read from.
    #[error(
        "missing attribute `{attribute}` for parameter `{parameter}` of `{type_path}`; \
         if the value is stored under another attribute, register an init parameter alias \
         (`TypeOptions::alias(\"{parameter}\", ..)` or `#[jsonic(param = \"{parameter}\")]`)"
    )]
    MissingAttribute {
        type_path: &'static str,
        parameter: &'static str,
        attribute: String,
    },

    #[error("unknown type `{type_path}`, it was never registered")]
    UnknownType { type_path: String },

    /// A value whose shape does not fit the Rust type of the attribute.
    #[error("attribute `{field}` of `{type_path}` expects `{expected}`, found {found}")]
    MismatchedValue {
        type_path: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("type tag must be a string, found {found}")]
    InvalidTag { found: &'static str },

    #[error("deserialize hook for `{type_path}` failed: {source}")]
    Hook {
        type_path: String,
        #[source]
        source: HookError,
    },

    #[error("JSON tree is nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Returns the kind name of a JSON value, as used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
