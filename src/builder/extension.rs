//! Chainable operations available on every [`LinkBuilder`]

use super::hypermedia::LinkBuilder;
use crate::core::guard::require_non_blank;
use crate::core::{Link, Result};

/// Convenience operations layered over [`LinkBuilder::add_link`]
///
/// Blanket-implemented for every builder. Each operation validates its
/// arguments before touching the document and returns the same builder so
/// calls can be chained with `?`.
pub trait LinkBuilderExt: LinkBuilder {
    /// Attach a plain link built from `href`
    fn add_href(&mut self, rel: &str, href: &str) -> Result<&mut Self> {
        require_non_blank("rel", rel)?;
        let link = Link::new(href)?;

        self.add_link(rel, link)
    }

    /// Attach a link only when `predicate` holds for the current document
    ///
    /// Arguments are validated even when the predicate turns out false.
    fn add_href_if<P>(&mut self, rel: &str, href: &str, predicate: P) -> Result<&mut Self>
    where
        P: FnOnce(&Self::Document) -> bool,
    {
        require_non_blank("rel", rel)?;
        require_non_blank("href", href)?;

        if !predicate(self.document()) {
            tracing::trace!(rel = %rel, "Condition not met, skipping link");
            return Ok(self);
        }

        let link = Link::new(href)?;
        self.add_link(rel, link)
    }

    /// Let a handler decorate the document directly with the builder's service
    ///
    /// Used for nested resources that know how to link themselves: the
    /// handler typically calls [`prepare`](super::HypermediaServiceExt::prepare)
    /// on a child field. Errors from the handler propagate unchanged.
    fn add_links_to_child<F>(&mut self, handler: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self::Document, &Self::Service) -> Result<()>,
    {
        let (document, service) = self.parts_mut();
        handler(document, service)?;

        Ok(self)
    }

    /// Run a block of further builder calls only when `predicate` holds
    fn add_links_per_condition<P, F>(&mut self, predicate: P, handler: F) -> Result<&mut Self>
    where
        P: FnOnce(&Self::Document) -> bool,
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if predicate(self.document()) {
            handler(&mut *self)?;
        }

        Ok(self)
    }
}

impl<B: LinkBuilder + ?Sized> LinkBuilderExt for B {}
