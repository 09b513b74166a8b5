use serde::{Deserialize, Serialize};

/// The stored record. `name` is the natural key; uniqueness is enforced by
/// the orchestration layer with the collection's unique index as backstop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub color: String,
    pub tail_length: i64,
    pub weight: i64,
}

impl Dog {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        tail_length: i64,
        weight: i64,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            tail_length,
            weight,
        }
    }

    /// Field-level validity, independent of storage state: non-blank name and
    /// color, tail_length >= 0, weight >= 1.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.color.trim().is_empty()
            && self.tail_length >= 0
            && self.weight >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dog_passes_all_constraints() {
        assert!(Dog::new("Neo", "red & amber", 22, 32).is_valid());
    }

    #[test]
    fn zero_tail_length_is_valid() {
        assert!(Dog::new("Stub", "brown", 0, 5).is_valid());
    }

    #[test]
    fn blank_name_is_invalid() {
        assert!(!Dog::new("", "brown", 2, 5).is_valid());
        assert!(!Dog::new("   ", "brown", 2, 5).is_valid());
    }

    #[test]
    fn blank_color_is_invalid() {
        assert!(!Dog::new("Rex", "", 2, 5).is_valid());
        assert!(!Dog::new("Rex", "  ", 2, 5).is_valid());
    }

    #[test]
    fn negative_tail_length_is_invalid() {
        assert!(!Dog::new("Rex", "brown", -1, 5).is_valid());
    }

    #[test]
    fn non_positive_weight_is_invalid() {
        assert!(!Dog::new("Rex", "brown", 2, 0).is_valid());
        assert!(!Dog::new("Rex", "brown", 2, -1).is_valid());
    }
}
