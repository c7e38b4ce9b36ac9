//! Pre-navigation authorization guard.

use std::sync::Arc;

use solicred_auth::{RoutePermissionTable, default_landing_route, is_route_permitted, routes};
use solicred_core::Route;
use solicred_session::SessionStore;

/// Outcome of a guard check.
///
/// A denied navigation always carries the route the shell must redirect to
/// instead; denial is a regular decision, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny { redirect: Route },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Runs before the navigation substrate commits a route change.
///
/// The check is synchronous and fails closed: no view renders unless it
/// returned [`GuardDecision::Allow`]. A navigation superseded by a newer one
/// simply discards the previous decision; checks are cheap and idempotent.
pub struct NavigationGuard {
    store: Arc<SessionStore>,
    table: Arc<RoutePermissionTable>,
}

impl NavigationGuard {
    pub fn new(store: Arc<SessionStore>, table: Arc<RoutePermissionTable>) -> Self {
        Self { store, table }
    }

    pub fn check(&self, target: &Route) -> GuardDecision {
        let Some(principal) = self.store.session() else {
            tracing::debug!(route = %target, "navigation denied: unauthenticated");
            return GuardDecision::Deny {
                redirect: routes::LOGIN,
            };
        };

        if !is_route_permitted(&principal.roles, target, &self.table) {
            let redirect = default_landing_route(&principal.roles);
            tracing::debug!(
                route = %target,
                user = %principal.id,
                redirect = %redirect,
                "navigation denied: route not permitted"
            );
            return GuardDecision::Deny { redirect };
        }

        tracing::debug!(route = %target, user = %principal.id, "navigation allowed");
        GuardDecision::Allow
    }
}
