//! User role type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The role assigned to a PREXCOL account.
///
/// Roles determine which backend endpoints an account may call; the backend
/// enforces this, the client only transports the value. Wire values are the
/// backend's Spanish identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Platform administrator.
    #[serde(rename = "admin")]
    Admin,
    /// Purchasing agent for a store.
    #[serde(rename = "comprador")]
    Buyer,
    /// Product provider.
    #[serde(rename = "proveedor")]
    Provider,
    /// Logistics operator.
    #[serde(rename = "logistica")]
    Logistics,
    /// End customer.
    #[serde(rename = "cliente")]
    Client,
}

impl Role {
    /// Returns the wire value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Buyer => "comprador",
            Role::Provider => "proveedor",
            Role::Logistics => "logistica",
            Role::Client => "cliente",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "comprador" => Ok(Role::Buyer),
            "proveedor" => Ok(Role::Provider),
            "logistica" => Ok(Role::Logistics),
            "cliente" => Ok(Role::Client),
            other => Err(InvalidInputError::Role {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_value() {
        let json = serde_json::to_string(&Role::Provider).unwrap();
        assert_eq!(json, "\"proveedor\"");
    }

    #[test]
    fn deserializes_from_wire_value() {
        let role: Role = serde_json::from_str("\"logistica\"").unwrap();
        assert_eq!(role, Role::Logistics);
    }

    #[test]
    fn rejects_unknown_value() {
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn display_matches_wire_value() {
        assert_eq!(Role::Client.to_string(), "cliente");
    }
}
