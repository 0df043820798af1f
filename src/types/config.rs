//! Machine configuration

use crate::types::error::VendingError;

/// Default number of shelves of the demonstration machine
pub const DEFAULT_MAX_SHELVES: i32 = 20;

/// Default capacity of a single shelf
pub const DEFAULT_SHELF_CAPACITY: i32 = 10;

/// Fixed dimensions of a machine
///
/// Both values are set once at construction and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Upper bound on distinct occupied slots
    pub max_shelves: i32,

    /// Upper bound on units held by any one shelf
    pub shelf_capacity: i32,
}

impl MachineConfig {
    /// Create a configuration without validating it
    pub fn new(max_shelves: i32, shelf_capacity: i32) -> Self {
        MachineConfig {
            max_shelves,
            shelf_capacity,
        }
    }

    /// Check that both dimensions are positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidConstruction` if either value is zero or negative.
    pub fn validate(&self) -> Result<(), VendingError> {
        if self.max_shelves < 1 || self.shelf_capacity < 1 {
            return Err(VendingError::invalid_construction(
                self.max_shelves,
                self.shelf_capacity,
            ));
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig::new(DEFAULT_MAX_SHELVES, DEFAULT_SHELF_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::minimal(1, 1)]
    #[case::demo(20, 10)]
    #[case::large(1000, 500)]
    fn test_validate_accepts_positive_dimensions(#[case] max_shelves: i32, #[case] capacity: i32) {
        assert!(MachineConfig::new(max_shelves, capacity).validate().is_ok());
    }

    #[rstest]
    #[case::zero_shelves(0, 10)]
    #[case::negative_shelves(-1, 10)]
    #[case::zero_capacity(10, 0)]
    #[case::negative_capacity(10, -1)]
    #[case::both_invalid(0, 0)]
    fn test_validate_rejects_non_positive_dimensions(
        #[case] max_shelves: i32,
        #[case] capacity: i32,
    ) {
        let result = MachineConfig::new(max_shelves, capacity).validate();
        assert_eq!(
            result,
            Err(VendingError::InvalidConstruction {
                max_shelves,
                shelf_capacity: capacity,
            })
        );
    }

    #[test]
    fn test_default_matches_demo_machine() {
        let config = MachineConfig::default();
        assert_eq!(config.max_shelves, 20);
        assert_eq!(config.shelf_capacity, 10);
    }
}
