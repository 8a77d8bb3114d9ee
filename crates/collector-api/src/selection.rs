//! Source selection with implicit "all" semantics.
//!
//! Infrastructure and audit inputs list the sub-sources they collect from.
//! An empty list does not mean "nothing": it means every sub-source is
//! collected. `SourceSelection` makes that rule a variant instead of an
//! emptiness check at each call site.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which sub-sources an input collects from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "Vec<T>",
    into = "Vec<T>",
    bound(
        serialize = "T: Ord + Clone + Serialize",
        deserialize = "T: Ord + Deserialize<'de>"
    )
)]
pub enum SourceSelection<T> {
    /// No explicit sources were listed; every sub-source is included.
    All,
    /// Only the listed sub-sources are included.
    Only(BTreeSet<T>),
}

impl<T: Ord> SourceSelection<T> {
    /// Check whether `source` is collected by this selection.
    pub fn includes(&self, source: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(sources) => sources.contains(source),
        }
    }

    /// True when no explicit sources were listed.
    pub fn is_implicit_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> Default for SourceSelection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Ord> From<Vec<T>> for SourceSelection<T> {
    fn from(sources: Vec<T>) -> Self {
        if sources.is_empty() {
            Self::All
        } else {
            Self::Only(sources.into_iter().collect())
        }
    }
}

impl<T> From<SourceSelection<T>> for Vec<T> {
    fn from(selection: SourceSelection<T>) -> Self {
        match selection {
            SourceSelection::All => Vec::new(),
            SourceSelection::Only(sources) => sources.into_iter().collect(),
        }
    }
}

impl<T: Ord> FromIterator<T> for SourceSelection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
