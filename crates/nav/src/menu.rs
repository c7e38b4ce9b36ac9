//! Navigation tree model and role-driven filtering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use solicred_auth::routes;
use solicred_core::Route;

/// One entry of the sidebar navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub path: Route,
    #[serde(default)]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// A top-level group whose children are the navigable entries.
    pub fn group(title: impl Into<String>, path: Route, children: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            path,
            children,
        }
    }

    /// A navigable leaf entry.
    pub fn leaf(title: impl Into<String>, path: Route) -> Self {
        Self {
            title: title.into(),
            path,
            children: Vec::new(),
        }
    }
}

/// The portal's full navigation tree, before any role filtering.
pub fn portal_menu() -> Vec<NavItem> {
    vec![
        NavItem::group(
            "Inicio",
            routes::STARTER,
            vec![NavItem::leaf("Dashboard", routes::STARTER)],
        ),
        NavItem::group(
            "Solicitudes",
            routes::SOLICITUD,
            vec![
                NavItem::leaf("Nueva solicitud", routes::SOLICITUD),
                NavItem::leaf("Consulta de solicitudes", routes::CONSULTA),
            ],
        ),
        NavItem::group(
            "Mantenimiento",
            routes::USUARIOS,
            vec![NavItem::leaf("Usuarios", routes::USUARIOS)],
        ),
    ]
}

/// Keep only the parts of `tree` the permitted-route set can open.
///
/// The rule is shallow: only direct children of top-level items are checked
/// against `permitted`, and a top-level item with no surviving children is
/// dropped entirely. Relative ordering is preserved and `tree` itself is
/// never modified; the result is a fresh copy.
pub fn filter_menu(tree: &[NavItem], permitted: &HashSet<Route>) -> Vec<NavItem> {
    tree.iter()
        .filter_map(|item| {
            let children: Vec<NavItem> = item
                .children
                .iter()
                .filter(|child| permitted.contains(&child.path))
                .cloned()
                .collect();

            if children.is_empty() {
                None
            } else {
                Some(NavItem {
                    title: item.title.clone(),
                    path: item.path.clone(),
                    children,
                })
            }
        })
        .collect()
}

/// Title of the top-level group owning `current`, used to render that group
/// expanded after a navigation. Exact path match, first group wins.
pub fn active_group<'a>(tree: &'a [NavItem], current: &Route) -> Option<&'a str> {
    tree.iter()
        .find(|item| item.children.iter().any(|child| &child.path == current))
        .map(|item| item.title.as_str())
}

#[cfg(test)]
mod tests {
    use solicred_auth::{Role, RoutePermissionTable, permitted_routes};

    use super::*;

    fn applicant_view() -> HashSet<Route> {
        permitted_routes(&[Role::Solicitante], &RoutePermissionTable::portal_defaults())
    }

    #[test]
    fn filter_drops_unpermitted_children_and_empty_groups() {
        let menu = portal_menu();
        let filtered = filter_menu(&menu, &applicant_view());

        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Inicio", "Solicitudes"]);

        let solicitudes = &filtered[1];
        assert_eq!(solicitudes.children.len(), 1);
        assert_eq!(solicitudes.children[0].path, routes::SOLICITUD);
    }

    #[test]
    fn filter_never_yields_children_outside_the_permitted_set() {
        let permitted = applicant_view();
        for item in filter_menu(&portal_menu(), &permitted) {
            assert!(!item.children.is_empty());
            for child in &item.children {
                assert!(permitted.contains(&child.path));
            }
        }
    }

    #[test]
    fn filter_leaves_the_source_tree_untouched() {
        let menu = portal_menu();
        let before = menu.clone();

        let _ = filter_menu(&menu, &HashSet::new());

        assert_eq!(menu, before);
    }

    #[test]
    fn empty_permitted_set_empties_the_menu() {
        assert!(filter_menu(&portal_menu(), &HashSet::new()).is_empty());
    }

    #[test]
    fn filter_preserves_relative_order() {
        let analyst = permitted_routes(&[Role::Analista], &RoutePermissionTable::portal_defaults());
        let filtered = filter_menu(&portal_menu(), &analyst);

        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Inicio", "Solicitudes", "Mantenimiento"]);

        let paths: Vec<&Route> = filtered[1].children.iter().map(|c| &c.path).collect();
        assert_eq!(paths, [&routes::SOLICITUD, &routes::CONSULTA]);
    }

    #[test]
    fn active_group_resolves_by_exact_child_path() {
        let menu = portal_menu();
        assert_eq!(active_group(&menu, &routes::CONSULTA), Some("Solicitudes"));
        assert_eq!(active_group(&menu, &routes::USUARIOS), Some("Mantenimiento"));
        assert_eq!(active_group(&menu, &routes::LOGIN), None);
    }
}
