//! User account models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Role;

use super::active_default;

/// A user account as returned by the backend.
///
/// The login response embeds a trimmed variant of this object (id, email,
/// name, role only); the optional fields default accordingly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account id.
    pub id: u64,
    /// Account email; also the login identifier.
    pub email: String,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Account role.
    #[serde(rename = "rol")]
    pub role: Role,
    /// Contact phone number.
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    /// Delivery address.
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    /// Whether the account is enabled.
    #[serde(rename = "estado", default = "active_default")]
    pub active: bool,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "ultimo_ingreso", default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Partial update for the authenticated user's own profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_profile() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "id": 7,
                "email": "ana@example.com",
                "nombre": "Ana",
                "rol": "proveedor",
                "telefono": "3001234567",
                "direccion": "Calle 10 #4-20",
                "estado": true,
                "fecha_creacion": "2025-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.role, Role::Provider);
        assert!(profile.active);
    }

    #[test]
    fn deserializes_trimmed_login_user() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": 1, "email": "c@example.com", "nombre": "Cli", "rol": "cliente"}"#,
        )
        .unwrap();
        assert_eq!(profile.role, Role::Client);
        assert!(profile.active);
        assert!(profile.phone.is_none());
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            phone: Some("3000000000".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"telefono": "3000000000"}));
    }
}
