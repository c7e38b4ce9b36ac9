//! Pure authorization evaluation over already-available state.
//!
//! - No IO
//! - No panics
//! - No policy beyond the supplied [`RoutePermissionTable`]
//!
//! Denials are not errors anywhere in this module: callers turn a `false`
//! into a redirect, never into an exception.

use std::collections::HashSet;

use solicred_core::Route;

use crate::{Role, RoutePermissionTable, routes};

/// True iff `route` is listed verbatim for at least one of `roles`.
///
/// Matching is exact string equality, not prefix matching: a child route
/// under a permitted parent is still denied unless listed itself. An empty
/// role set permits nothing.
pub fn is_route_permitted(roles: &[Role], route: &Route, table: &RoutePermissionTable) -> bool {
    roles
        .iter()
        .any(|role| table.routes_for(*role).contains(route))
}

/// Union of the permitted-route sets of all `roles`, duplicates collapsed.
pub fn permitted_routes(roles: &[Role], table: &RoutePermissionTable) -> HashSet<Route> {
    let mut permitted = HashSet::new();
    for role in roles {
        permitted.extend(table.routes_for(*role).iter().cloned());
    }
    permitted
}

/// Landing route for a role set.
///
/// This is a two-way branch, not a lookup: analysts land on the dashboard,
/// everyone else (applicants, empty role sets) on the request form.
pub fn default_landing_route(roles: &[Role]) -> Route {
    if roles.contains(&Role::Analista) {
        routes::STARTER
    } else {
        routes::SOLICITUD
    }
}
