//! Decoding of the authentication collaborator's login response.
//!
//! The user service answers a successful credential submission with the
//! payload modeled here; anything non-successful never reaches this module
//! and simply means "no session".

use serde::Deserialize;

use solicred_core::UserId;

use crate::{AuthToken, Principal, Role};

/// Successful login payload, field names as the user service emits them.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub id: i64,
    pub token: String,
    pub correo: String,
    pub nombre: String,
    #[serde(default)]
    pub rol: Vec<RoleDescriptor>,
}

/// One role entry of the login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleDescriptor {
    pub id: i64,
    pub descripcion: String,
}

impl From<LoginResponse> for Principal {
    /// Unknown role descriptors grant nothing and are dropped with a
    /// warning; duplicates collapse to a single entry.
    fn from(response: LoginResponse) -> Self {
        let mut roles = Vec::new();
        for descriptor in &response.rol {
            match Role::from_name(&descriptor.descripcion) {
                Some(role) if !roles.contains(&role) => roles.push(role),
                Some(_) => {}
                None => {
                    tracing::warn!(
                        role = %descriptor.descripcion,
                        "discarding unknown role from login response"
                    );
                }
            }
        }

        Self {
            id: UserId::new(response.id),
            name: response.nombre,
            email: response.correo,
            token: AuthToken::new(response.token),
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_payload() {
        let raw = r#"{
            "id": 7,
            "token": "tok-123",
            "correo": "ana@example.com",
            "nombre": "Ana Pérez",
            "rol": [
                { "id": 1, "descripcion": "ANALISTA" },
                { "id": 2, "descripcion": "SOLICITANTE" }
            ]
        }"#;

        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        let principal = Principal::from(response);

        assert_eq!(principal.id, UserId::new(7));
        assert_eq!(principal.email, "ana@example.com");
        assert_eq!(principal.name, "Ana Pérez");
        assert_eq!(principal.roles, vec![Role::Analista, Role::Solicitante]);
    }

    #[test]
    fn unknown_roles_are_discarded() {
        let raw = r#"{
            "id": 3,
            "token": "tok-456",
            "correo": "luis@example.com",
            "nombre": "Luis",
            "rol": [
                { "id": 9, "descripcion": "AUDITOR" },
                { "id": 2, "descripcion": "SOLICITANTE" },
                { "id": 2, "descripcion": "SOLICITANTE" }
            ]
        }"#;

        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        let principal = Principal::from(response);

        assert_eq!(principal.roles, vec![Role::Solicitante]);
    }

    #[test]
    fn missing_role_array_yields_no_roles() {
        let raw = r#"{ "id": 1, "token": "t", "correo": "c@x.com", "nombre": "C" }"#;

        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        let principal = Principal::from(response);

        assert!(principal.roles.is_empty());
    }
}
