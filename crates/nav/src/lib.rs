//! `solicred-nav` — navigation tree and role-driven rendering decisions.
//!
//! The sidebar tree is static configuration; per-principal views are always
//! fresh copies produced by [`filter_menu`], never mutations of the source.

pub mod menu;
pub mod visibility;

pub use menu::{NavItem, active_group, filter_menu, portal_menu};
pub use visibility::{has_any_role, visible_for_session};
