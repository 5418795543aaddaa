use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single Beeste record. `id` is the document key (the animal's number)
/// and is compared as a string, never as a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeesRecord {
    pub id: String,
    pub weight: String,
}

impl BeesRecord {
    pub fn new(id: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: weight.into(),
        }
    }

    /// Ordering used for every displayed list: ascending string order on id.
    pub fn cmp_by_id(a: &Self, b: &Self) -> Ordering {
        a.id.cmp(&b.id)
    }
}

impl fmt::Display for BeesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {} KG", self.id, self.weight)
    }
}
