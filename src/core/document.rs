//! Documents that can carry hypermedia links

use crate::core::link::Link;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// A response object holding named links alongside its own data
///
/// Implementations own the relation → link map. Adding a link under an
/// existing relation replaces the previous one; links are never removed.
pub trait HypermediaDocument {
    /// All links currently attached, keyed by relation name
    fn links(&self) -> &IndexMap<String, Link>;

    /// Attach `link` under `rel`, replacing any existing entry
    fn add_link(&mut self, rel: &str, link: Link);
}

/// Ready-made HAL envelope around any serializable payload
///
/// The payload is flattened into the top-level object and links are
/// emitted under `_links`. Because of the flattening, `T` must serialize as
/// a struct or map; a scalar or sequence payload such as `HalDocument<u8>`
/// still works as a [`HypermediaDocument`] but fails when serialized.
///
/// ```
/// use hal_links::core::{HalDocument, HypermediaDocument, Link};
///
/// #[derive(serde::Serialize)]
/// struct Order { id: u32 }
///
/// let mut doc = HalDocument::new(Order { id: 1 });
/// doc.add_link("self", Link::new("/orders/1").unwrap());
///
/// assert_eq!(
///     serde_json::to_value(&doc).unwrap(),
///     serde_json::json!({ "id": 1, "_links": { "self": { "href": "/orders/1" } } })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HalDocument<T> {
    #[serde(flatten)]
    data: T,

    #[serde(rename = "_links", default, skip_serializing_if = "IndexMap::is_empty")]
    links: IndexMap<String, Link>,
}

impl<T> HalDocument<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            links: IndexMap::new(),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Unwrap the payload, dropping the links
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> HypermediaDocument for HalDocument<T> {
    fn links(&self) -> &IndexMap<String, Link> {
        &self.links
    }

    fn add_link(&mut self, rel: &str, link: Link) {
        self.links.insert(rel.to_string(), link);
    }
}

impl<T> Deref for HalDocument<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for HalDocument<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T> From<T> for HalDocument<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}
