//! Fluent API for decorating documents with links
//!
//! A chain starts from a [`HypermediaService`](crate::core::HypermediaService)
//! via [`HypermediaServiceExt::prepare`] or [`HypermediaServiceExt::add_self`]
//! and continues with the [`LinkBuilderExt`] operations:
//!
//! ```rust,ignore
//! service
//!     .add_self(&mut order)?
//!     .add_href("collection", "/orders")?
//!     .add_href_if("cancel", "/orders/7/cancel", |o| o.is_open())?
//!     .add_links_to_child(|order, service| {
//!         service.prepare(&mut order.customer).add_href("self", "/customers/3")?;
//!         Ok(())
//!     })?;
//! ```

pub mod extension;
pub mod hypermedia;
pub mod service;

pub use extension::LinkBuilderExt;
pub use hypermedia::{HypermediaBuilder, LinkBuilder};
pub use service::{HypermediaServiceExt, SELF_REL};
