//! Order models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::OrderStatus;

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u64,
    #[serde(rename = "pedido", default)]
    pub order_id: Option<u64>,
    #[serde(rename = "producto")]
    pub product_id: u64,
    /// Product name, denormalized by the backend for display.
    #[serde(rename = "producto_nombre", default)]
    pub product_name: Option<String>,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// Unit price captured at order time, a decimal string.
    #[serde(rename = "precio_unitario")]
    pub unit_price: String,
    /// Line subtotal, a decimal string.
    #[serde(default)]
    pub subtotal: Option<String>,
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    #[serde(rename = "cliente", default)]
    pub client_id: Option<u64>,
    #[serde(rename = "tienda", default)]
    pub store_id: Option<u64>,
    /// Store name, denormalized by the backend for display.
    #[serde(rename = "tienda_nombre", default)]
    pub store_name: Option<String>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    /// Order total, a decimal string.
    #[serde(default)]
    pub total: Option<String>,
    /// Lines, inlined by the backend on detail payloads.
    #[serde(rename = "detalles", default)]
    pub lines: Vec<OrderLine>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating an order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    #[serde(rename = "tienda_id")]
    pub store_id: u64,
    #[serde(rename = "detalles")]
    pub lines: Vec<NewOrderLine>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One requested line of a new order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderLine {
    #[serde(rename = "producto")]
    pub product_id: u64,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_order_with_lines() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 12,
                "cliente": 4,
                "tienda": 2,
                "tienda_nombre": "Tienda Centro",
                "estado": "pendiente",
                "total": "7500.00",
                "detalles": [
                    {
                        "id": 31,
                        "pedido": 12,
                        "producto": 3,
                        "producto_nombre": "Arroz 500g",
                        "cantidad": 3,
                        "precio_unitario": "2500.00",
                        "subtotal": "7500.00"
                    }
                ],
                "fecha_creacion": "2025-04-02T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 3);
    }

    #[test]
    fn serializes_new_order_wire_shape() {
        let order = NewOrder {
            store_id: 2,
            lines: vec![NewOrderLine {
                product_id: 3,
                quantity: 1,
            }],
            notes: None,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tienda_id": 2,
                "detalles": [{"producto": 3, "cantidad": 1}]
            })
        );
    }
}
