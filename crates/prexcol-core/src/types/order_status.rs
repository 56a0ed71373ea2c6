//! Order status type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The lifecycle state of an order.
///
/// Which transitions are permitted for which role is a backend rule; the
/// client submits the requested state and surfaces the backend's verdict.
/// Wire values are the backend's Spanish identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Created, awaiting acceptance.
    #[serde(rename = "pendiente")]
    Pending,
    /// Accepted and being prepared.
    #[serde(rename = "preparando")]
    Preparing,
    /// Handed to logistics.
    #[serde(rename = "en_transito")]
    InTransit,
    /// Delivered to the customer.
    #[serde(rename = "entregado")]
    Delivered,
    /// Cancelled.
    #[serde(rename = "cancelado")]
    Cancelled,
}

impl OrderStatus {
    /// Returns the wire value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pendiente",
            OrderStatus::Preparing => "preparando",
            OrderStatus::InTransit => "en_transito",
            OrderStatus::Delivered => "entregado",
            OrderStatus::Cancelled => "cancelado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendiente" => Ok(OrderStatus::Pending),
            "preparando" => Ok(OrderStatus::Preparing),
            "en_transito" => Ok(OrderStatus::InTransit),
            "entregado" => Ok(OrderStatus::Delivered),
            "cancelado" => Ok(OrderStatus::Cancelled),
            other => Err(InvalidInputError::OrderStatus {
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
        let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
        assert_eq!(json, "\"en_transito\"");
    }

    #[test]
    fn deserializes_from_wire_value() {
        let status: OrderStatus = serde_json::from_str("\"preparando\"").unwrap();
        assert_eq!(status, OrderStatus::Preparing);
    }

    #[test]
    fn parses_cli_argument() {
        assert_eq!(
            "entregado".parse::<OrderStatus>().unwrap(),
            OrderStatus::Delivered
        );
        assert!("enviado".parse::<OrderStatus>().is_err());
    }
}
