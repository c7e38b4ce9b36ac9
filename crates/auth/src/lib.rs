//! `solicred-auth` — pure authorization boundary for the portal.
//!
//! This crate is intentionally decoupled from HTTP, rendering, and storage:
//! it answers "may this role set open this route?" over already-available
//! state and nothing else.

pub mod authorize;
pub mod login;
pub mod policy;
pub mod principal;
pub mod roles;
pub mod routes;

pub use authorize::{default_landing_route, is_route_permitted, permitted_routes};
pub use login::{LoginResponse, RoleDescriptor};
pub use policy::RoutePermissionTable;
pub use principal::{AuthToken, Principal};
pub use roles::Role;
