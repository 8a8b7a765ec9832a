//! # hal-links
//!
//! A fluent API for attaching HAL hypermedia links to REST API response documents.
//!
//! ## Features
//!
//! - **Fluent Builder**: Chain `self`, literal, conditional and nested-child links
//! - **Pluggable Resolution**: Links come from any [`HypermediaService`](core::HypermediaService)
//! - **Eager Validation**: Blank relations and hrefs are rejected before the document changes
//! - **Typed Parameters**: [`LinkRequest`](core::LinkRequest) snapshots route parameters
//! - **Route Table**: YAML-configured reference resolver with `{param}` substitution
//! - **HAL Output**: [`HalDocument`](core::HalDocument) serializes links under `_links`
//!
//! ## Quick Start
//!
//! ```rust
//! use hal_links::prelude::*;
//!
//! #[derive(Serialize)]
//! struct Order {
//!     id: u32,
//!     status: String,
//! }
//!
//! let table = RouteTable::new(RoutesConfig::default_config())?;
//! let service = table.for_request("get-order", Some(LinkRequest::new([("id", 7)])?))?;
//!
//! let mut order = HalDocument::new(Order { id: 7, status: "open".to_string() });
//!
//! service
//!     .add_self(&mut order)?
//!     .add_href("collection", "/orders")?
//!     .add_href_if("cancel", "/orders/7/cancel", |o| o.status == "open")?;
//!
//! let json = serde_json::to_value(&order).unwrap();
//! assert_eq!(json["_links"]["self"]["href"], "https://api.example.com/orders/7");
//! assert_eq!(json["_links"]["cancel"]["href"], "/orders/7/cancel");
//! # Ok::<(), HypermediaError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod routes;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        HalDocument, HypermediaDocument, HypermediaError, HypermediaService, Link, LinkRequest,
        Result,
    };

    // === Builder ===
    pub use crate::builder::{
        HypermediaBuilder, HypermediaServiceExt, LinkBuilder, LinkBuilderExt, SELF_REL,
    };

    // === Config & Routes ===
    pub use crate::config::{RouteConfig, RoutesConfig};
    pub use crate::routes::{RequestLinks, RouteTable};

    // === External dependencies ===
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
}
