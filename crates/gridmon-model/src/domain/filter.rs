use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Set of element tag names an extraction pass is restricted to.
///
/// Membership is the only thing that matters; an empty filter means "no
/// restriction" rather than "nothing".
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldFilter(pub HashSet<String>);

impl FieldFilter {
    /// Create a filter with no restriction.
    pub fn none() -> Self {
        Self(HashSet::new())
    }

    /// Returns `true` when every field name passes.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a field name to the allowed set.
    ///
    /// Returns `self` for chaining.
    pub fn insert<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.0.insert(name.into());
        self
    }

    /// Membership test: `true` when the filter is unrestricted or `name`
    /// is in the allowed set.
    pub fn allows(&self, name: &str) -> bool {
        self.0.is_empty() || self.0.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
