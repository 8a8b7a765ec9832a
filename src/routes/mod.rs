//! Route table backed link resolution
//!
//! Resolves route names from a [`RoutesConfig`] to concrete links by
//! substituting `{param}` placeholders with values from a [`LinkRequest`].

use crate::config::{RouteConfig, RoutesConfig, placeholder_regex};
use crate::core::guard::require_non_blank;
use crate::core::{HypermediaError, HypermediaService, Link, LinkRequest, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Registry resolving route names to links
///
/// Built once from configuration and shared; per-request state lives in
/// [`RequestLinks`].
#[derive(Debug, Clone)]
pub struct RouteTable {
    config: RoutesConfig,
    /// Maps route name -> index into `config.routes`
    index: HashMap<String, usize>,
}

impl RouteTable {
    /// Create a new table from a validated configuration
    pub fn new(config: RoutesConfig) -> Result<Self> {
        config.validate()?;

        let index = config
            .routes
            .iter()
            .enumerate()
            .map(|(position, route)| (route.name.clone(), position))
            .collect();

        tracing::debug!(routes = config.routes.len(), "Route table built");

        Ok(Self { config, index })
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(RoutesConfig::from_yaml_file(path)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::new(RoutesConfig::from_yaml_str(yaml)?)
    }

    /// Look up a route by name
    pub fn route(&self, name: &str) -> Result<&RouteConfig> {
        self.index
            .get(name)
            .map(|&position| &self.config.routes[position])
            .ok_or_else(|| HypermediaError::UnknownRoute {
                key: name.to_string(),
            })
    }

    /// Route names in configuration order
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.config.routes.iter().map(|route| route.name.as_str())
    }

    /// Get the underlying configuration
    pub fn config(&self) -> &RoutesConfig {
        &self.config
    }

    /// Resolve `key` to a link
    ///
    /// Templated routes come back untouched with `templated: true`. For the
    /// others every placeholder must be present in `args`; strings are
    /// inserted as-is, other JSON values by their JSON text. A value that is
    /// empty or contains `/`, `?`, `#`, `%` or `..` is rejected with
    /// [`InvalidArgument`](HypermediaError::InvalidArgument).
    ///
    /// ```
    /// use hal_links::prelude::*;
    ///
    /// let table = RouteTable::new(RoutesConfig::default_config())?;
    /// let args = LinkRequest::new([("id", 42)])?;
    ///
    /// let link = table.resolve("get-order", Some(&args))?;
    /// assert_eq!(link.href(), "https://api.example.com/orders/42");
    /// assert_eq!(link.method(), Some("GET"));
    /// # Ok::<(), HypermediaError>(())
    /// ```
    pub fn resolve(&self, key: &str, args: Option<&LinkRequest>) -> Result<Link> {
        require_non_blank("key", key)?;
        let route = self.route(key)?;

        let path = if route.templated {
            route.path.clone()
        } else {
            expand_path(route, args)?
        };
        let href = match &self.config.base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path,
        };

        tracing::trace!(route = %key, href = %href, "Route resolved");

        let mut link = match &route.method {
            Some(method) => Link::with_method(href, method.as_str())?,
            None => Link::new(href)?,
        };
        if route.templated {
            link.set_templated(true);
        }
        Ok(link)
    }

    /// Bind the route serving the current request
    ///
    /// The returned service resolves `get_link()` to `current` with `args`.
    /// Fails with [`UnknownRoute`](HypermediaError::UnknownRoute) when
    /// `current` is not registered.
    pub fn for_request(
        &self,
        current: impl Into<String>,
        args: Option<LinkRequest>,
    ) -> Result<RequestLinks<'_>> {
        let current = current.into();
        require_non_blank("current", &current)?;
        self.route(&current)?;

        Ok(RequestLinks {
            table: self,
            current,
            args,
        })
    }
}

/// Substitute every `{param}` of a non-templated route
fn expand_path(route: &RouteConfig, args: Option<&LinkRequest>) -> Result<String> {
    let mut expanded = String::with_capacity(route.path.len());
    let mut last = 0;

    for caps in placeholder_regex().captures_iter(&route.path) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let value = args
            .map(|request| request.get_value_or_default(name.as_str()))
            .transpose()?
            .filter(|value| !value.is_null())
            .ok_or_else(|| HypermediaError::MissingParameter {
                route: route.name.clone(),
                parameter: name.as_str().to_string(),
            })?;

        let segment = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        check_segment(route, name.as_str(), &segment)?;

        expanded.push_str(&route.path[last..whole.start()]);
        expanded.push_str(&segment);
        last = whole.end();
    }

    expanded.push_str(&route.path[last..]);
    Ok(expanded)
}

/// Reject values that would escape their path segment
fn check_segment(route: &RouteConfig, parameter: &str, segment: &str) -> Result<()> {
    let unsafe_value = segment.is_empty()
        || segment.contains(['/', '?', '#', '%'])
        || segment.contains("..");

    if unsafe_value {
        return Err(HypermediaError::InvalidArgument {
            name: "args",
            message: format!(
                "Parameter '{}' of route '{}' has an invalid path value '{}'.",
                parameter, route.name, segment
            ),
        });
    }

    Ok(())
}

/// Link resolution bound to one incoming request
///
/// Implements [`HypermediaService`]: `get_link()` is the link to the route
/// currently being served, `get_link_for()` any other registered route.
#[derive(Debug, Clone)]
pub struct RequestLinks<'a> {
    table: &'a RouteTable,
    current: String,
    args: Option<LinkRequest>,
}

impl RequestLinks<'_> {
    /// Name of the route being served
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Parameters of the current request
    pub fn args(&self) -> Option<&LinkRequest> {
        self.args.as_ref()
    }
}

impl HypermediaService for RequestLinks<'_> {
    fn get_link(&self) -> Result<Link> {
        self.table.resolve(&self.current, self.args.as_ref())
    }

    fn get_link_for(&self, key: &str, args: Option<&LinkRequest>) -> Result<Link> {
        self.table.resolve(key, args)
    }
}
