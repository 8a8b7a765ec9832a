//! Argument guards shared by every public operation
//!
//! All checks run before any side effect so a failed call never leaves a
//! half-decorated document behind.

use crate::core::error::{HypermediaError, Result};

/// Reject empty and whitespace-only identifiers
pub fn require_non_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HypermediaError::null_or_empty(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_rejected() {
        for value in ["", " ", "\t\n"] {
            let err = require_non_blank("key", value).unwrap_err();
            assert_eq!(err.to_string(), "Parameter 'key' must not be null or empty.");
        }
    }

    #[test]
    fn test_non_blank_value_passes() {
        assert!(require_non_blank("key", " a ").is_ok());
    }
}
