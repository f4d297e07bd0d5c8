//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. The service
//! layer owns orchestration; entities only expose intrinsic facts such as
//! whether a link's expiry has passed.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A stored short code to URL mapping
//! - [`NewShortLink`] - Insert payload for creating a [`ShortLink`]

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
