//! Entry points that start a builder chain from a resolution service

use super::hypermedia::HypermediaBuilder;
use crate::core::{HypermediaDocument, HypermediaService, Result};

/// Relation name used for the link to the resource itself
pub const SELF_REL: &str = "self";

/// Starts builder chains from any [`HypermediaService`]
pub trait HypermediaServiceExt: HypermediaService {
    /// Wrap `document` in a builder without resolving anything
    fn prepare<'a, D>(&'a self, document: &'a mut D) -> HypermediaBuilder<'a, D, Self>
    where
        D: HypermediaDocument,
    {
        HypermediaBuilder::new(self, document)
    }

    /// Add the `"self"` link for the current resource, then start a chain
    ///
    /// If the service cannot produce the current link the error is returned
    /// and the document is not modified.
    fn add_self<'a, D>(&'a self, document: &'a mut D) -> Result<HypermediaBuilder<'a, D, Self>>
    where
        D: HypermediaDocument,
    {
        let link = self.get_link()?;

        tracing::trace!(href = %link.href(), "Adding self link to document");
        document.add_link(SELF_REL, link);

        Ok(HypermediaBuilder::new(self, document))
    }
}

impl<S: HypermediaService + ?Sized> HypermediaServiceExt for S {}
