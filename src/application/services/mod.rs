//! Business logic services coordinating domain collaborators.

pub mod link_service;

pub use link_service::LinkService;
