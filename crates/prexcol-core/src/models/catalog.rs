//! Store and product models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::active_default;

/// A store on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    /// Id of the buyer account administering this store.
    #[serde(rename = "administrador", default)]
    pub manager_id: Option<u64>,
    #[serde(rename = "activa", default = "active_default")]
    pub active: bool,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A product in a store's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Unit price, a decimal string as serialized by the backend.
    #[serde(rename = "precio")]
    pub price: String,
    pub stock: u32,
    #[serde(rename = "tienda", default)]
    pub store_id: Option<u64>,
    #[serde(rename = "proveedor", default)]
    pub provider_id: Option<u64>,
    /// Marked as a basic-basket product.
    #[serde(rename = "es_basico", default)]
    pub essential: bool,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "activo", default = "active_default")]
    pub active: bool,
    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOperation {
    #[serde(rename = "aumentar")]
    Increase,
    #[serde(rename = "reducir")]
    Decrease,
}

/// Result of a stock adjustment.
#[derive(Debug, Clone, Deserialize)]
pub struct StockAdjustment {
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
    #[serde(rename = "nuevo_stock")]
    pub new_stock: u32,
    #[serde(rename = "producto_id")]
    pub product_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_product_with_string_price() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 3,
                "nombre": "Arroz 500g",
                "descripcion": "Grano largo",
                "precio": "2500.00",
                "stock": 40,
                "tienda": 1,
                "proveedor": 9,
                "es_basico": true,
                "categoria": "granos",
                "activo": true
            }"#,
        )
        .unwrap();
        assert_eq!(product.price, "2500.00");
        assert!(product.essential);
        assert_eq!(product.store_id, Some(1));
    }

    #[test]
    fn stock_operation_wire_values() {
        assert_eq!(
            serde_json::to_string(&StockOperation::Increase).unwrap(),
            "\"aumentar\""
        );
        assert_eq!(
            serde_json::to_string(&StockOperation::Decrease).unwrap(),
            "\"reducir\""
        );
    }

    #[test]
    fn deserializes_stock_adjustment() {
        let adjustment: StockAdjustment = serde_json::from_str(
            r#"{"mensaje": "Stock aumentado a 45", "nuevo_stock": 45, "producto_id": 3}"#,
        )
        .unwrap();
        assert_eq!(adjustment.new_stock, 45);
    }
}
