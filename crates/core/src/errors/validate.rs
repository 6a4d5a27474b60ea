//! Small validation helpers shared by the configuration layer

use super::types::{Error, Result};

/// Field checks used by configuration validation
pub struct Validate;

impl Validate {
    /// Validate that a string is not blank
    pub fn not_empty(value: &str, field_name: &str) -> Result<()> {
        if value.trim().is_empty() {
            Err(Error::Configuration {
                message: format!("Field '{field_name}' cannot be empty"),
            })
        } else {
            Ok(())
        }
    }
}
