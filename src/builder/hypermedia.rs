//! The builder that threads one service and one document through a chain

use crate::core::guard::require_non_blank;
use crate::core::{HypermediaDocument, HypermediaService, Link, Result};

/// Receiver for fluent link decoration
///
/// [`HypermediaBuilder`] is the implementation handed out by
/// [`HypermediaServiceExt`](super::HypermediaServiceExt); the operations in
/// [`LinkBuilderExt`](super::LinkBuilderExt) work against any implementor.
pub trait LinkBuilder {
    type Document: HypermediaDocument;
    type Service: HypermediaService + ?Sized;

    /// The document being decorated
    fn document(&self) -> &Self::Document;

    /// The service links are resolved through
    fn service(&self) -> &Self::Service;

    /// Mutable document and shared service at the same time
    fn parts_mut(&mut self) -> (&mut Self::Document, &Self::Service);

    /// Attach `link` under `rel` and hand the same builder back
    ///
    /// Fails with [`InvalidArgument`](crate::core::HypermediaError::InvalidArgument)
    /// when `rel` is blank; the document is left untouched in that case.
    fn add_link(&mut self, rel: &str, link: Link) -> Result<&mut Self>;
}

/// Borrows a resolution service and a document for the length of a chain
///
/// Neither is owned: the caller keeps the document and gets it back, fully
/// decorated, once the builder is dropped.
///
/// ```
/// use hal_links::prelude::*;
///
/// struct Current;
///
/// impl HypermediaService for Current {
///     fn get_link(&self) -> Result<Link> {
///         Link::new("/orders/1")
///     }
///
///     fn get_link_for(&self, key: &str, _args: Option<&LinkRequest>) -> Result<Link> {
///         Link::new(format!("/{}", key))
///     }
/// }
///
/// let mut doc = HalDocument::new(serde_json::json!({ "id": 1 }));
///
/// Current
///     .add_self(&mut doc)?
///     .add_href("collection", "/orders")?
///     .add_href_if("cancel", "/orders/1/cancel", |d| d["id"] == 1)?;
///
/// assert_eq!(doc.links()["self"].href(), "/orders/1");
/// assert_eq!(doc.links().len(), 3);
/// # Ok::<(), HypermediaError>(())
/// ```
pub struct HypermediaBuilder<'a, D, S: ?Sized> {
    service: &'a S,
    document: &'a mut D,
}

impl<'a, D, S> HypermediaBuilder<'a, D, S>
where
    D: HypermediaDocument,
    S: HypermediaService + ?Sized,
{
    pub fn new(service: &'a S, document: &'a mut D) -> Self {
        Self { service, document }
    }

    /// End the chain, keeping the mutable borrow of the document
    pub fn into_document(self) -> &'a mut D {
        self.document
    }
}

impl<D, S> LinkBuilder for HypermediaBuilder<'_, D, S>
where
    D: HypermediaDocument,
    S: HypermediaService + ?Sized,
{
    type Document = D;
    type Service = S;

    fn document(&self) -> &D {
        &*self.document
    }

    fn service(&self) -> &S {
        self.service
    }

    fn parts_mut(&mut self) -> (&mut D, &S) {
        (&mut *self.document, self.service)
    }

    fn add_link(&mut self, rel: &str, link: Link) -> Result<&mut Self> {
        require_non_blank("rel", rel)?;

        tracing::trace!(rel = %rel, href = %link.href(), "Adding link to document");
        self.document.add_link(rel, link);

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HalDocument, HypermediaError, LinkRequest};

    const TEST_REL: &str = "link";
    const TEST_HREF: &str = "https://hal-links.example.com";

    struct NoopService;

    impl HypermediaService for NoopService {
        fn get_link(&self) -> Result<Link> {
            Link::new(TEST_HREF)
        }

        fn get_link_for(&self, _key: &str, _args: Option<&LinkRequest>) -> Result<Link> {
            Link::new(TEST_HREF)
        }
    }

    #[test]
    fn test_add_link_blank_rel_leaves_document_untouched() {
        let mut doc = HalDocument::new(());
        let mut builder = HypermediaBuilder::new(&NoopService, &mut doc);

        for rel in ["", " "] {
            let err = builder
                .add_link(rel, Link::new(TEST_HREF).unwrap())
                .err()
                .unwrap();
            match err {
                HypermediaError::InvalidArgument { name, message } => {
                    assert_eq!(name, "rel");
                    assert_eq!(message, "Parameter 'rel' must not be null or empty.");
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }

        assert!(doc.links().is_empty());
    }

    #[test]
    fn test_add_link_delegates_to_document() {
        let mut doc = HalDocument::new(());
        let mut builder = HypermediaBuilder::new(&NoopService, &mut doc);

        builder
            .add_link(TEST_REL, Link::new(TEST_HREF).unwrap())
            .unwrap();

        assert_eq!(doc.links().len(), 1);
        assert_eq!(doc.links()[TEST_REL].href(), TEST_HREF);
    }

    #[test]
    fn test_add_link_returns_same_builder() {
        let mut doc = HalDocument::new(());
        let mut builder = HypermediaBuilder::new(&NoopService, &mut doc);
        let before: *const _ = &builder;

        let returned = builder
            .add_link(TEST_REL, Link::new(TEST_HREF).unwrap())
            .unwrap();

        assert!(std::ptr::eq(before, returned));
    }

    #[test]
    fn test_accessors_expose_borrowed_parts() {
        let service = NoopService;
        let mut doc = HalDocument::new(5u8);
        let mut builder = HypermediaBuilder::new(&service, &mut doc);

        assert!(std::ptr::eq(builder.service(), &service));
        assert_eq!(**builder.document(), 5);

        let (document, _) = builder.parts_mut();
        **document = 6;

        assert_eq!(**builder.into_document(), 6);
    }
}
