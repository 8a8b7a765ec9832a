//! Typed error handling for hal-links
//!
//! Every fallible operation in the crate returns [`HypermediaError`] so that
//! callers can match on the failure instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`HypermediaError::InvalidArgument`]: a blank identifier, an empty parameter map or an unsafe path value
//! - [`HypermediaError::InvalidCast`]: typed retrieval of a request parameter failed
//! - [`HypermediaError::Serialization`]: request parameters could not be serialized
//! - [`HypermediaError::UnknownRoute`] / [`HypermediaError::MissingParameter`]: link resolution failures
//! - [`HypermediaError::Config`] / [`HypermediaError::Io`]: route configuration could not be loaded
//!
//! # Example
//!
//! ```rust
//! use hal_links::prelude::*;
//!
//! match Link::new("   ") {
//!     Err(HypermediaError::InvalidArgument { name, .. }) => assert_eq!(name, "href"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HypermediaError>;

/// The error type for all hal-links operations
#[derive(Debug, Error)]
pub enum HypermediaError {
    /// An argument was blank, or a required collection was empty
    #[error("{message}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Human-readable message
        message: String,
    },

    /// A stored request parameter could not be converted to the requested type
    #[error("Value stored under '{key}' cannot be read as {expected}: {source}")]
    InvalidCast {
        key: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Request parameters could not be turned into a JSON value
    #[error("Request parameters could not be serialized: {0}")]
    Serialization(#[source] serde_json::Error),

    /// No route is registered under the requested key
    #[error("No route '{key}' is registered")]
    UnknownRoute { key: String },

    /// A route placeholder had no matching request parameter
    #[error("Route '{route}' requires parameter '{parameter}'")]
    MissingParameter { route: String, parameter: String },

    /// Route configuration failed to parse or validate
    #[error("Invalid route configuration: {0}")]
    Config(String),

    /// Route configuration file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HypermediaError {
    /// Build the error raised for a blank or empty parameter
    pub fn null_or_empty(name: &'static str) -> Self {
        HypermediaError::InvalidArgument {
            name,
            message: format!("Parameter '{}' must not be null or empty.", name),
        }
    }

    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HypermediaError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            HypermediaError::InvalidCast { .. } => "INVALID_CAST",
            HypermediaError::Serialization(_) => "SERIALIZATION_ERROR",
            HypermediaError::UnknownRoute { .. } => "UNKNOWN_ROUTE",
            HypermediaError::MissingParameter { .. } => "MISSING_PARAMETER",
            HypermediaError::Config(_) => "CONFIG_ERROR",
            HypermediaError::Io(_) => "IO_ERROR",
        }
    }

    /// Whether this error was caused by the caller's arguments
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, HypermediaError::InvalidArgument { .. })
    }
}

impl From<serde_yaml::Error> for HypermediaError {
    fn from(err: serde_yaml::Error) -> Self {
        HypermediaError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_or_empty_message() {
        let err = HypermediaError::null_or_empty("rel");
        assert_eq!(err.to_string(), "Parameter 'rel' must not be null or empty.");
        assert!(err.is_invalid_argument());
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_invalid_cast_keeps_source() {
        let source = serde_json::from_value::<String>(serde_json::json!(1)).unwrap_err();
        let err = HypermediaError::InvalidCast {
            key: "id".to_string(),
            expected: "alloc::string::String",
            source,
        };

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Value stored under 'id'"));
        assert_eq!(err.error_code(), "INVALID_CAST");
    }

    #[test]
    fn test_yaml_error_converts_to_config() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{ not: [a list").unwrap_err();
        let err: HypermediaError = yaml_err.into();
        assert!(matches!(err, HypermediaError::Config(_)));
    }
}
