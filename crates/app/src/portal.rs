//! Portal shell wiring: session lifecycle, login/logout, menu state.

use std::sync::Arc;

use anyhow::Context;

use solicred_auth::{
    LoginResponse, Principal, Role, RoutePermissionTable, default_landing_route, permitted_routes,
    routes,
};
use solicred_core::Route;
use solicred_nav::{NavItem, active_group, filter_menu, portal_menu, visible_for_session};
use solicred_session::{FileBackend, SessionBackend, SessionError, SessionStore};

use crate::guard::NavigationGuard;

/// Application-level access services, built once at bootstrap.
///
/// Owns the session store, the route policy, and the navigation tree, and
/// hands them to the guard, the sidebar, and visibility checks so every
/// consumer answers from the same state.
pub struct Portal {
    store: Arc<SessionStore>,
    table: Arc<RoutePermissionTable>,
    menu: Vec<NavItem>,
}

impl Portal {
    /// Bootstrap with the portal's shipped policy, menu, and a durable
    /// session record under the OS data directory.
    pub fn bootstrap() -> anyhow::Result<Self> {
        let backend = FileBackend::portal_default().context("failed to prepare session storage")?;
        Ok(Self::with_parts(
            Box::new(backend),
            RoutePermissionTable::portal_defaults(),
            portal_menu(),
        ))
    }

    /// Assemble from explicit parts (tests, embedded shells, alternative
    /// policies supplied as configuration).
    pub fn with_parts(
        backend: Box<dyn SessionBackend>,
        table: RoutePermissionTable,
        menu: Vec<NavItem>,
    ) -> Self {
        Self {
            store: Arc::new(SessionStore::open(backend)),
            table: Arc::new(table),
            menu,
        }
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }

    /// Guard instance for the navigation substrate.
    pub fn guard(&self) -> NavigationGuard {
        NavigationGuard::new(Arc::clone(&self.store), Arc::clone(&self.table))
    }

    /// Consume a successful login response and open the session.
    ///
    /// Returns the landing route for the new principal's roles.
    pub fn login(&self, response: LoginResponse) -> Result<Route, SessionError> {
        let principal = Principal::from(response);
        let landing = default_landing_route(&principal.roles);
        self.store.set_session(principal)?;
        tracing::info!(route = %landing, "login complete");
        Ok(landing)
    }

    /// Close the session. Idempotent; returns the login route so the shell
    /// can redirect.
    pub fn logout(&self) -> Result<Route, SessionError> {
        self.store.clear_session()?;
        tracing::info!("logout complete");
        Ok(routes::LOGIN)
    }

    /// The sidebar as the current principal sees it. Empty without a
    /// session; always a fresh copy of the configured tree.
    pub fn visible_menu(&self) -> Vec<NavItem> {
        match self.store.session() {
            Some(principal) => filter_menu(
                &self.menu,
                &permitted_routes(&principal.roles, &self.table),
            ),
            None => Vec::new(),
        }
    }

    /// Which top-level menu group should render expanded for `current`.
    pub fn active_group(&self, current: &Route) -> Option<&str> {
        active_group(&self.menu, current)
    }

    /// Capability check for a guarded UI fragment (render iff the current
    /// principal holds at least one of `required`).
    pub fn can_render(&self, required: &[Role]) -> bool {
        visible_for_session(&self.store, required)
    }
}
