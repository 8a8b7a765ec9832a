//! Core module containing the link value types and the two collaborator traits

pub mod document;
pub mod error;
pub mod guard;
pub mod link;
pub mod request;
pub mod service;

pub use document::{HalDocument, HypermediaDocument};
pub use error::{HypermediaError, Result};
pub use link::Link;
pub use request::LinkRequest;
pub use service::HypermediaService;
