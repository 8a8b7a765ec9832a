//! Route table configuration loading and management

use crate::core::error::{HypermediaError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// A single named route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteConfig {
    /// Route name used as the resolution key (e.g., "get-order")
    pub name: String,

    /// Path template with `{param}` placeholders (e.g., "/orders/{id}")
    pub path: String,

    /// HTTP method advertised on resolved links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Keep placeholders and emit a templated link instead of substituting
    #[serde(default)]
    pub templated: bool,
}

impl RouteConfig {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            method: None,
            templated: false,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn templated(mut self) -> Self {
        self.templated = true;
        self
    }

    /// Placeholder names in the order they appear in the path
    ///
    /// ```
    /// use hal_links::config::RouteConfig;
    ///
    /// let route = RouteConfig::new("order-item", "/orders/{id}/items/{item_id}");
    /// assert_eq!(route.placeholders(), vec!["id", "item_id"]);
    /// ```
    pub fn placeholders(&self) -> Vec<&str> {
        placeholder_regex()
            .captures_iter(&self.path)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}

/// Matches `{name}` placeholders; names are identifiers
pub(crate) fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Complete route table configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoutesConfig {
    /// Prefix prepended to every resolved path (e.g., "https://api.example.com")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Named routes
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

impl RoutesConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        tracing::debug!(path = %path.display(), "Loading route configuration");
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check names, paths and placeholders
    ///
    /// Route names must be non-blank and unique, paths must start with `/`,
    /// braces must balance, and on non-templated routes every `{...}` segment
    /// must be a well-formed placeholder.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for route in &self.routes {
            if route.name.trim().is_empty() {
                return Err(HypermediaError::Config(format!(
                    "route with path '{}' has a blank name",
                    route.path
                )));
            }
            if !seen.insert(route.name.as_str()) {
                return Err(HypermediaError::Config(format!(
                    "route '{}' is defined more than once",
                    route.name
                )));
            }
            if route.path.trim().is_empty() {
                return Err(HypermediaError::Config(format!(
                    "route '{}' has a blank path",
                    route.name
                )));
            }
            if !route.path.starts_with('/') {
                return Err(HypermediaError::Config(format!(
                    "route '{}' path '{}' must start with '/'",
                    route.name, route.path
                )));
            }

            let braces = route.path.matches('{').count();
            let balanced = braces == route.path.matches('}').count();
            // templated routes may carry URI template expressions like `{?page}`
            if !balanced || (!route.templated && braces != route.placeholders().len()) {
                return Err(HypermediaError::Config(format!(
                    "route '{}' has a malformed placeholder in '{}'",
                    route.name, route.path
                )));
            }
        }

        Ok(())
    }

    /// Find a route by name
    pub fn find_route(&self, name: &str) -> Option<&RouteConfig> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Merge multiple configurations into one
    ///
    /// Routes are combined in order; a route defined again in a later config
    /// replaces the earlier definition. The last `base_url` set wins.
    pub fn merge(configs: Vec<RoutesConfig>) -> Self {
        let mut merged = RoutesConfig::default();

        for config in configs {
            if config.base_url.is_some() {
                merged.base_url = config.base_url;
            }

            for route in config.routes {
                match merged.routes.iter_mut().find(|r| r.name == route.name) {
                    Some(existing) => {
                        tracing::debug!(route = %route.name, "Route overridden during merge");
                        *existing = route;
                    }
                    None => merged.routes.push(route),
                }
            }
        }

        merged
    }

    /// Create a small configuration for testing and demos
    pub fn default_config() -> Self {
        Self {
            base_url: Some("https://api.example.com".to_string()),
            routes: vec![
                RouteConfig::new("list-orders", "/orders").with_method("GET"),
                RouteConfig::new("get-order", "/orders/{id}").with_method("GET"),
                RouteConfig::new("cancel-order", "/orders/{id}/cancel").with_method("POST"),
                RouteConfig::new("get-customer", "/customers/{customer_id}").with_method("GET"),
                RouteConfig::new("find-orders", "/orders{?status,page}").templated(),
            ],
        }
    }
}
