//! Well-known portal routes.
//!
//! These are the paths the route-permission policy and the navigation guard
//! speak about. The authentication area is reachable without a session; all
//! others are gated.

use solicred_core::Route;

/// Login screen.
pub const LOGIN: Route = Route::from_static("/auth/login");

/// Analyst dashboard.
pub const STARTER: Route = Route::from_static("/starter");

/// New loan request form.
pub const SOLICITUD: Route = Route::from_static("/solicitudes/solicitud");

/// Loan request search.
pub const CONSULTA: Route = Route::from_static("/solicitudes/consulta");

/// User maintenance.
pub const USUARIOS: Route = Route::from_static("/mantenimiento/usuario");
