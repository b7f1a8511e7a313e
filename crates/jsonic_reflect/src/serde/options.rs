use crate::serde::ExpectedType;

/// The nesting bound applied when no other is configured.
///
/// Matches the recursion limit of the `serde_json` parser.
pub const DEFAULT_MAX_DEPTH: usize = 128;

// -----------------------------------------------------------------------------
// SerializeOptions

/// Configuration of a [`SerializeDriver`](crate::serde::SerializeDriver).
///
/// # Examples
///
/// ```
/// use jsonic_reflect::serde::SerializeOptions;
///
/// let options = SerializeOptions::new().include_private(true).max_depth(16);
/// assert!(options.includes_private());
/// assert!(!options.is_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    include_private: bool,
    as_string: bool,
    max_depth: usize,
}

impl Default for SerializeOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SerializeOptions {
    /// Private attributes excluded, tree output, default depth bound.
    #[inline]
    pub const fn new() -> Self {
        Self {
            include_private: false,
            as_string: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Keeps attributes whose name starts with `_`.
    #[inline]
    pub const fn include_private(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }

    /// Returns the JSON text instead of the tree.
    #[inline]
    pub const fn as_string(mut self, as_string: bool) -> Self {
        self.as_string = as_string;
        self
    }

    /// Sets the maximal nesting depth of the object graph.
    ///
    /// Lists, mappings, struct fields and wrappers such as `Option`, `Box`
    /// or a [`Dynamic::Object`](crate::value::Dynamic::Object) each add one
    /// level.
    #[inline]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn includes_private(&self) -> bool {
        self.include_private
    }

    #[inline]
    pub const fn is_string(&self) -> bool {
        self.as_string
    }

    #[inline]
    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }
}

// -----------------------------------------------------------------------------
// DeserializeOptions

/// Configuration of a [`DeserializeDriver`](crate::serde::DeserializeDriver).
///
/// # Examples
///
/// ```
/// use jsonic_reflect::serde::{DeserializeOptions, ExpectedType};
///
/// let options = DeserializeOptions::new().expect_type(ExpectedType::Sequence);
/// assert_eq!(options.expected(), Some(&ExpectedType::Sequence));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializeOptions {
    include_private: bool,
    as_string: bool,
    expected: Option<ExpectedType>,
    max_depth: usize,
}

impl Default for DeserializeOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DeserializeOptions {
    /// Private attributes excluded, tree input, no expectation, default
    /// depth bound.
    #[inline]
    pub const fn new() -> Self {
        Self {
            include_private: false,
            as_string: false,
            expected: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Reads attributes and constructor parameters whose name starts with `_`.
    #[inline]
    pub const fn include_private(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }

    /// Accepts JSON text, carried as a [`Value::String`](serde_json::Value::String).
    #[inline]
    pub const fn as_string(mut self, as_string: bool) -> Self {
        self.as_string = as_string;
        self
    }

    /// Requires the top-level value to have the given shape.
    #[inline]
    pub fn expect_type(mut self, expected: ExpectedType) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Sets the maximal nesting depth of the input tree.
    #[inline]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub const fn includes_private(&self) -> bool {
        self.include_private
    }

    #[inline]
    pub const fn is_string(&self) -> bool {
        self.as_string
    }

    #[inline]
    pub const fn expected(&self) -> Option<&ExpectedType> {
        self.expected.as_ref()
    }

    #[inline]
    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }
}
