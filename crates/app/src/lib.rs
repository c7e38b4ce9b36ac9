//! `solicred-app` — portal wiring.
//!
//! Assembles the session store, the route-permission policy, and the
//! navigation tree into the services an interactive shell consumes: the
//! pre-navigation guard, login/logout flows, and the per-principal menu.

pub mod guard;
pub mod portal;
pub mod telemetry;

pub use guard::{GuardDecision, NavigationGuard};
pub use portal::Portal;
