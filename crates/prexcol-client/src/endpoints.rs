//! API endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use prexcol_core::models::{StockOperation, UserProfile};
use prexcol_core::types::{OrderStatus, Role};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST auth/login/
pub(crate) const LOGIN: &str = "auth/login/";

/// POST auth/token/refresh/
pub(crate) const REFRESH_TOKEN: &str = "auth/token/refresh/";

/// POST auth/register/
pub(crate) const REGISTER: &str = "auth/register/";

/// POST auth/forgot-password/
pub(crate) const FORGOT_PASSWORD: &str = "auth/forgot-password/";

/// GET/PUT usuarios/me/
pub(crate) const ME: &str = "usuarios/me/";

/// GET usuarios/
pub(crate) const USERS: &str = "usuarios/";

/// GET usuarios/proveedores/
pub(crate) const PROVIDERS: &str = "usuarios/proveedores/";

/// GET productos/
pub(crate) const PRODUCTS: &str = "productos/";

/// GET productos/mis_productos/
pub(crate) const MY_PRODUCTS: &str = "productos/mis_productos/";

/// GET productos/por_tienda/
pub(crate) const PRODUCTS_BY_STORE: &str = "productos/por_tienda/";

/// GET tiendas/
pub(crate) const STORES: &str = "tiendas/";

/// GET tiendas/mis_tiendas/
pub(crate) const MY_STORES: &str = "tiendas/mis_tiendas/";

/// POST pedidos/crear_pedido/
pub(crate) const CREATE_ORDER: &str = "pedidos/crear_pedido/";

/// GET pedidos/mis_pedidos/
pub(crate) const MY_ORDERS: &str = "pedidos/mis_pedidos/";

/// GET pedidos/pendientes/
pub(crate) const PENDING_ORDERS: &str = "pedidos/pendientes/";

/// GET pedidos/en_preparacion/
pub(crate) const ORDERS_IN_PREPARATION: &str = "pedidos/en_preparacion/";

/// GET detalles-pedido/por_pedido/
pub(crate) const ORDER_LINES: &str = "detalles-pedido/por_pedido/";

/// POST auth/reset-password/{uid}/{token}/
pub(crate) fn reset_password_path(uid: &str, token: &str) -> String {
    format!("auth/reset-password/{}/{}/", uid, token)
}

/// GET productos/{id}/
pub(crate) fn product_path(id: u64) -> String {
    format!("productos/{}/", id)
}

/// POST productos/{id}/ajustar_stock/
pub(crate) fn adjust_stock_path(id: u64) -> String {
    format!("productos/{}/ajustar_stock/", id)
}

/// POST pedidos/{id}/cambiar_estado/
pub(crate) fn change_order_status_path(id: u64) -> String {
    format!("pedidos/{}/cambiar_estado/", id)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from login.
///
/// The token fields are required where the protocol requires them; there is
/// deliberately no fallback chain over alternative key spellings.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: UserProfile,
}

/// Request body for the token refresh call.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from the token refresh call.
///
/// The backend may rotate the refresh token; when it does not, the stored
/// one stays valid.
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Request body for account registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub password: String,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Response from account registration.
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponse {
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
    pub user: UserProfile,
}

/// Request body for the forgot-password call.
#[derive(Debug, Serialize)]
pub(crate) struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

/// Request body for the reset-password call.
#[derive(Debug, Serialize)]
pub(crate) struct ResetPasswordRequest<'a> {
    pub password: &'a str,
}

/// A `{"message": ...}` acknowledgement body.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

/// Request body for a stock adjustment.
#[derive(Debug, Serialize)]
pub(crate) struct StockAdjustRequest {
    #[serde(rename = "operacion")]
    pub operation: StockOperation,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Request body for an order status change.
#[derive(Debug, Serialize)]
pub(crate) struct ChangeOrderStatusRequest {
    #[serde(rename = "estado")]
    pub status: OrderStatus,
}

/// Error body shape used across backend views.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub detail: Option<String>,
    pub message: Option<String>,
}

// ============================================================================
// List Envelopes
// ============================================================================

/// One page of a paginated list response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A list response from the backend.
///
/// List endpoints answer with either a bare array or a page envelope,
/// depending on whether pagination is active for the view.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    /// Extract the items, discarding any pagination envelope.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paged(page) => page.results,
            ListResponse::Plain(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_accepts_bare_array() {
        let list: ListResponse<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(list.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn list_response_accepts_page_envelope() {
        let list: ListResponse<u32> = serde_json::from_str(
            r#"{"count": 3, "next": null, "previous": null, "results": [1, 2, 3]}"#,
        )
        .unwrap();
        assert_eq!(list.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn refresh_response_requires_access_token() {
        let result: Result<RefreshResponse, _> =
            serde_json::from_str(r#"{"token": "not-the-right-key"}"#);
        assert!(result.is_err());
    }
}
