//! Conditional rendering capability checks.
//!
//! Views call these before constructing a guarded UI fragment. A `false`
//! answer means the fragment is omitted from the rendered tree entirely,
//! not merely hidden.

use solicred_auth::Role;
use solicred_session::SessionStore;

/// True when at least one required role is held (logical OR).
pub fn has_any_role(required: &[Role], held: &[Role]) -> bool {
    required.iter().any(|role| held.contains(role))
}

/// Same check against the current principal. Nothing is visible without a
/// session.
pub fn visible_for_session(store: &SessionStore, required: &[Role]) -> bool {
    match store.session() {
        Some(principal) => has_any_role(required, &principal.roles),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_when_role_sets_intersect() {
        assert!(has_any_role(
            &[Role::Analista, Role::Solicitante],
            &[Role::Solicitante]
        ));
        assert!(!has_any_role(&[Role::Analista], &[Role::Solicitante]));
        assert!(!has_any_role(&[], &[Role::Analista]));
        assert!(!has_any_role(&[Role::Analista], &[]));
    }
}
