//! Link resolution contract consumed by the builder

use crate::core::error::Result;
use crate::core::link::Link;
use crate::core::request::LinkRequest;
use std::sync::Arc;

/// Resolves links for the current request or for a named target
///
/// The builder only ever calls into this trait; how a key becomes a URL
/// (routing table, reverse proxy prefix, ...) is up to the implementation.
/// [`RouteTable`](crate::routes::RouteTable) is one such implementation.
pub trait HypermediaService {
    /// Link to the resource currently being served
    fn get_link(&self) -> Result<Link>;

    /// Link to the target registered under `key`, optionally parameterized
    fn get_link_for(&self, key: &str, args: Option<&LinkRequest>) -> Result<Link>;
}

impl<S: HypermediaService + ?Sized> HypermediaService for &S {
    fn get_link(&self) -> Result<Link> {
        (**self).get_link()
    }

    fn get_link_for(&self, key: &str, args: Option<&LinkRequest>) -> Result<Link> {
        (**self).get_link_for(key, args)
    }
}

impl<S: HypermediaService + ?Sized> HypermediaService for Box<S> {
    fn get_link(&self) -> Result<Link> {
        (**self).get_link()
    }

    fn get_link_for(&self, key: &str, args: Option<&LinkRequest>) -> Result<Link> {
        (**self).get_link_for(key, args)
    }
}

impl<S: HypermediaService + ?Sized> HypermediaService for Arc<S> {
    fn get_link(&self) -> Result<Link> {
        (**self).get_link()
    }

    fn get_link_for(&self, key: &str, args: Option<&LinkRequest>) -> Result<Link> {
        (**self).get_link_for(key, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HypermediaError;

    struct FixedService;

    impl HypermediaService for FixedService {
        fn get_link(&self) -> Result<Link> {
            Link::new("/current")
        }

        fn get_link_for(&self, key: &str, _args: Option<&LinkRequest>) -> Result<Link> {
            match key {
                "known" => Link::new("/known"),
                _ => Err(HypermediaError::UnknownRoute {
                    key: key.to_string(),
                }),
            }
        }
    }

    fn current_href<S: HypermediaService>(service: S) -> String {
        service.get_link().unwrap().href().to_string()
    }

    #[test]
    fn test_service_usable_through_pointers() {
        assert_eq!(current_href(&FixedService), "/current");
        assert_eq!(current_href(Box::new(FixedService)), "/current");
        assert_eq!(current_href(Arc::new(FixedService)), "/current");

        let shared: Arc<dyn HypermediaService> = Arc::new(FixedService);
        assert_eq!(current_href(shared), "/current");
    }

    #[test]
    fn test_trait_object_forwards_named_lookup() {
        let service: Box<dyn HypermediaService> = Box::new(FixedService);

        assert_eq!(service.get_link_for("known", None).unwrap().href(), "/known");
        assert!(matches!(
            service.get_link_for("other", None),
            Err(HypermediaError::UnknownRoute { .. })
        ));
    }
}
