//! Link value object carried under a relation name in a hypermedia document

use crate::core::error::{HypermediaError, Result};
use crate::core::guard::require_non_blank;
use serde::{Deserialize, Serialize};

/// A single hypermedia reference
///
/// Serializes as a HAL link object: `{"href": "...", "method": "GET"}`.
/// Unset optional members are omitted from the output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawLink")]
pub struct Link {
    href: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<String>,

    /// Set when `href` is a URI template rather than a concrete URL
    #[serde(skip_serializing_if = "Option::is_none")]
    templated: Option<bool>,
}

/// Wire form, validated on the way in so deserialized links keep the
/// non-blank `href` invariant
#[derive(Deserialize)]
struct RawLink {
    href: String,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    templated: Option<bool>,
}

impl TryFrom<RawLink> for Link {
    type Error = HypermediaError;

    fn try_from(raw: RawLink) -> Result<Self> {
        let mut link = Link::new(raw.href)?;
        link.method = raw.method;
        link.templated = raw.templated;
        Ok(link)
    }
}

impl Link {
    /// Create a link pointing at `href`
    ///
    /// Fails with [`InvalidArgument`](crate::core::HypermediaError::InvalidArgument)
    /// when `href` is empty or whitespace-only.
    ///
    /// ```
    /// use hal_links::core::Link;
    ///
    /// let link = Link::new("https://api.example.com/orders/1").unwrap();
    /// assert_eq!(link.href(), "https://api.example.com/orders/1");
    /// assert!(Link::new("  ").is_err());
    /// ```
    pub fn new(href: impl Into<String>) -> Result<Self> {
        let href = href.into();
        require_non_blank("href", &href)?;

        Ok(Self {
            href,
            method: None,
            templated: None,
        })
    }

    /// Create a link that also advertises the HTTP method to use
    pub fn with_method(href: impl Into<String>, method: impl Into<String>) -> Result<Self> {
        let mut link = Self::new(href)?;
        link.method = Some(method.into());
        Ok(link)
    }

    /// Mark the link as templated (or explicitly not)
    pub fn templated(mut self, templated: bool) -> Self {
        self.templated = Some(templated);
        self
    }

    pub fn set_templated(&mut self, templated: bool) {
        self.templated = Some(templated);
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// The templated flag, `None` when it was never set
    pub fn is_templated(&self) -> Option<bool> {
        self.templated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_HREF: &str = "https://hal-links.example.com";

    #[test]
    fn test_blank_href_is_rejected() {
        for href in ["", " ", "   "] {
            let err = Link::new(href).unwrap_err();
            match err {
                HypermediaError::InvalidArgument { name, message } => {
                    assert_eq!(name, "href");
                    assert_eq!(message, "Parameter 'href' must not be null or empty.");
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[test]
    fn test_blank_href_with_method_is_rejected() {
        assert!(Link::with_method("", "GET").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_link_creation() {
        let link = Link::new(TEST_HREF).unwrap();

        assert_eq!(link.href(), TEST_HREF);
        assert_eq!(link.method(), None);
        assert_eq!(link.is_templated(), None);
    }

    #[test]
    fn test_link_with_method() {
        let link = Link::with_method(TEST_HREF, "POST").unwrap();

        assert_eq!(link.href(), TEST_HREF);
        assert_eq!(link.method(), Some("POST"));
    }

    #[test]
    fn test_templated_can_be_set_after_construction() {
        let mut link = Link::new("/orders/{id}").unwrap();
        link.set_templated(true);
        assert_eq!(link.is_templated(), Some(true));

        let link = Link::new(TEST_HREF).unwrap().templated(false);
        assert_eq!(link.is_templated(), Some(false));
    }

    #[test]
    fn test_link_serializes_as_hal_object() {
        let link = Link::new(TEST_HREF).unwrap();
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            serde_json::json!({ "href": TEST_HREF })
        );

        let link = Link::with_method("/orders/{id}", "GET").unwrap().templated(true);
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            serde_json::json!({ "href": "/orders/{id}", "method": "GET", "templated": true })
        );
    }

    #[test]
    fn test_deserialize_rejects_blank_href() {
        let parsed: std::result::Result<Link, _> =
            serde_json::from_value(serde_json::json!({ "href": " " }));
        assert!(parsed.is_err());

        let parsed: Link =
            serde_json::from_value(serde_json::json!({ "href": TEST_HREF, "method": "GET" }))
                .unwrap();
        assert_eq!(parsed, Link::with_method(TEST_HREF, "GET").unwrap());
    }
}
