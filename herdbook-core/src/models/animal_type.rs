use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::camelize;

/// An entry in the animal-type list.
///
/// `id` is derived from `name` by [`camelize`] and is what duplicate
/// detection compares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimalType {
    pub id: String,
    pub name: String,
}

impl AnimalType {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: camelize(&name),
            name,
        }
    }

    /// Case-insensitive substring match on the display name.
    pub fn matches(&self, search: &str) -> bool {
        self.name.to_lowercase().contains(&search.to_lowercase())
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_id() {
        let animal = AnimalType::new("Red Angus");
        assert_eq!(animal.id, "redAngus");
        assert_eq!(animal.name, "Red Angus");
    }

    #[test]
    fn test_matches_ignores_case() {
        let animal = AnimalType::new("Bonsmara");
        assert!(animal.matches("bons"));
        assert!(animal.matches("MARA"));
        assert!(animal.matches(""));
        assert!(!animal.matches("angus"));
    }

    #[test]
    fn test_json_shape() {
        let animal = AnimalType::new("Nguni");
        let json = serde_json::to_value(&animal).unwrap();
        assert_eq!(json, serde_json::json!({"id": "nguni", "name": "Nguni"}));
    }
}
