// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Contrato: las tres operaciones públicas nunca fallan hacia fuera; todo
// error de red/status/parseo se convierte en carta vacía o en un outcome
// con success=false, y se registra con log::error!.
// ============================================================================

use gloo_net::http::Request;

use crate::models::auth::{
    CheckoutOutcome, CheckoutRequest, LoginOutcome, LoginRequest, ServerMessage,
};
use crate::models::cart::CartItem;
use crate::models::menu::{self, MenuItem};

/// Cliente API - SOLO comunicación HTTP (stateless).
/// La URL base se inyecta al construir; no hay estado global mutable.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Obtener la carta. Nunca falla: ante cualquier error devuelve
    /// una lista vacía y deja el error en el log.
    pub async fn fetch_menu(&self) -> Vec<MenuItem> {
        match self.request_menu().await {
            Ok(items) => {
                log::info!("🍕 Carta recibida: {} artículos", items.len());
                items
            }
            Err(e) => {
                log::error!("❌ Error obteniendo la carta: {}", e);
                Vec::new()
            }
        }
    }

    /// Iniciar sesión. El fallo se expresa como outcome, nunca como Err.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        match self.request_login(email, password).await {
            Ok(body) => {
                log::info!("✅ Login exitoso: {}", email);
                LoginOutcome::from_server(body)
            }
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                LoginOutcome::failed()
            }
        }
    }

    /// Finalizar la compra con el contenido actual del carrito.
    /// Un solo intento, sin reintentos.
    pub async fn checkout(&self, cart: &[CartItem]) -> CheckoutOutcome {
        match self.request_checkout(cart).await {
            Ok(body) => {
                log::info!("🛒 Checkout aceptado ({} líneas)", cart.len());
                CheckoutOutcome::from_server(body)
            }
            Err(e) => {
                log::error!("❌ Error en checkout: {}", e);
                CheckoutOutcome::failed()
            }
        }
    }

    async fn request_menu(&self) -> Result<Vec<MenuItem>, String> {
        let url = format!("{}/menu", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        // El backend puede envolver la carta en {"menu": [...]} o no
        let body = response
            .text()
            .await
            .map_err(|e| format!("Body error: {}", e))?;

        menu::parse_menu_body(&body)
    }

    async fn request_login(&self, email: &str, password: &str) -> Result<ServerMessage, String> {
        let url = format!("{}/login", self.base_url);
        let request_body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&url)
            .json(&request_body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json::<ServerMessage>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    async fn request_checkout(&self, cart: &[CartItem]) -> Result<ServerMessage, String> {
        let url = format!("{}/checkout", self.base_url);
        let request_body = CheckoutRequest {
            cart: cart.to_vec(),
        };

        let response = Request::post(&url)
            .json(&request_body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json::<ServerMessage>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_inyectada() {
        let client = ApiClient::new("https://api.ejemplo.com");
        assert_eq!(client.base_url(), "https://api.ejemplo.com");
    }

    #[test]
    fn test_checkout_request_envuelve_el_carrito() {
        // El wire format es { "cart": [...] }
        let body = CheckoutRequest { cart: Vec::new() };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["cart"].is_array());
    }
}
