//! `solicred-core` — foundation types shared by every portal crate.
//!
//! Identifiers, route paths, and the domain error model. No infrastructure
//! concerns live here.

pub mod error;
pub mod id;
pub mod route;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use route::Route;
