use serde::{Deserialize, Serialize};

use solicred_core::UserId;

use crate::Role;

/// Opaque bearer token issued by the authentication collaborator.
///
/// The portal never inspects the token; verification belongs to the network
/// layer. `Debug` hides the value so tokens do not leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// The authenticated user's identity and role set, held for the session.
///
/// Construction is decoupled from transport: the login flow derives one from
/// the collaborator's response, the session store keeps it until logout or
/// invalidation. The principal is trusted as issued; nothing here validates
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub token: AuthToken,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_debug_is_redacted() {
        let token = AuthToken::new("eyJhbGciOiJIUzI1NiJ9.secret");
        assert_eq!(format!("{token:?}"), "AuthToken(..)");
    }
}
