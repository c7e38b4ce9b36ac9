use std::collections::HashMap;

use solicred_core::Route;

use crate::{Role, routes};

/// Static mapping from a role to the routes it may open.
///
/// Built once at startup from configuration and never mutated afterwards.
/// Lookups never fail: a role without an entry simply has no permitted
/// routes.
#[derive(Debug, Clone)]
pub struct RoutePermissionTable {
    entries: HashMap<Role, Vec<Route>>,
}

impl RoutePermissionTable {
    /// An empty table (nothing is permitted for anyone).
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The policy the portal ships with.
    ///
    /// Applicants see the dashboard and the request form; analysts
    /// additionally get request search and user maintenance.
    pub fn portal_defaults() -> Self {
        let mut table = Self::new();
        table.grant(Role::Solicitante, routes::STARTER);
        table.grant(Role::Solicitante, routes::SOLICITUD);
        table.grant(Role::Analista, routes::STARTER);
        table.grant(Role::Analista, routes::SOLICITUD);
        table.grant(Role::Analista, routes::CONSULTA);
        table.grant(Role::Analista, routes::USUARIOS);
        table
    }

    /// Add `route` to `role`'s permitted set. Duplicate grants collapse.
    pub fn grant(&mut self, role: Role, route: Route) {
        let permitted = self.entries.entry(role).or_default();
        if !permitted.contains(&route) {
            permitted.push(route);
        }
    }

    /// The permitted routes of `role`, in grant order.
    ///
    /// A role the table knows nothing about gets the empty slice.
    pub fn routes_for(&self, role: Role) -> &[Route] {
        self.entries.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for RoutePermissionTable {
    fn default() -> Self {
        Self::portal_defaults()
    }
}
