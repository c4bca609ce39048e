//! Runtime variable store

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::Int;

/// The variable mapping of one execution: name → integer.
///
/// Keys are unique and keep the order in which they were first assigned,
/// so listings are deterministic. A name that was never assigned reads as
/// `0` through [`lookup`](Variables::lookup).
///
/// # Example
///
/// ```
/// use sapling::Variables;
///
/// let mut vars = Variables::new();
/// vars.set("x", 1);
/// vars.set("x", 10); // Overwrites
///
/// assert_eq!(vars.get("x"), Some(10));
/// assert_eq!(vars.get("y"), None);
/// assert_eq!(vars.lookup("y"), 0); // Unbound names default to zero
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Variables {
    bindings: IndexMap<String, Int>,
}

impl Variables {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// The value bound to `name`, or `None` if it was never assigned.
    pub fn get(&self, name: &str) -> Option<Int> {
        self.bindings.get(name).copied()
    }

    /// The value bound to `name`, or `0` if it was never assigned.
    pub fn lookup(&self, name: &str) -> Int {
        self.get(name).unwrap_or(0)
    }

    /// Whether `name` has been assigned.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value`, returning the previous value if any.
    ///
    /// Overwriting keeps the name's original position.
    pub fn set(&mut self, name: impl Into<String>, value: Int) -> Option<Int> {
        self.bindings.insert(name.into(), value)
    }

    /// Remove every binding.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing has been bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Int)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Bound names in first-assignment order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, Int)> for Variables {
    fn from_iter<I: IntoIterator<Item = (S, Int)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, Int)> for Variables {
    fn extend<I: IntoIterator<Item = (S, Int)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
