use serde::{Deserialize, Serialize};

use crate::models::cart::CartItem;

/// Body de `POST /login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body de `POST /checkout`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub cart: Vec<CartItem>,
}

/// Respuesta genérica del backend para login y checkout:
/// `{ "message": ..., "token"?: ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Resultado del login ya aplanado para la vista.
/// Nunca es un error: el fallo se expresa con `success: false`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
}

impl LoginOutcome {
    /// Respuesta 2xx: mensaje del servidor o uno por defecto
    pub fn from_server(body: ServerMessage) -> Self {
        Self {
            success: true,
            message: body
                .message
                .unwrap_or_else(|| "Sesión iniciada correctamente".to_string()),
            token: body.token,
        }
    }

    /// Error de red, status no-2xx o body inválido
    pub fn failed() -> Self {
        Self {
            success: false,
            message: "No se pudo iniciar sesión".to_string(),
            token: None,
        }
    }
}

/// Resultado del checkout ya aplanado para la vista
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub success: bool,
    pub message: String,
}

impl CheckoutOutcome {
    pub fn from_server(body: ServerMessage) -> Self {
        Self {
            success: true,
            message: body
                .message
                .unwrap_or_else(|| "Compra finalizada con éxito".to_string()),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: "No se pudo finalizar la compra".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_outcome_con_mensaje_del_servidor() {
        let body = ServerMessage {
            message: Some("Bienvenido".to_string()),
            token: Some("abc123".to_string()),
        };
        let outcome = LoginOutcome::from_server(body);

        assert!(outcome.success);
        assert_eq!(outcome.message, "Bienvenido");
        assert_eq!(outcome.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_login_outcome_sin_mensaje_usa_default() {
        let outcome = LoginOutcome::from_server(ServerMessage::default());

        assert!(outcome.success);
        assert_eq!(outcome.message, "Sesión iniciada correctamente");
        assert!(outcome.token.is_none());
    }

    #[test]
    fn test_login_outcome_fallido_es_generico() {
        let outcome = LoginOutcome::failed();

        assert!(!outcome.success);
        assert!(outcome.token.is_none());
        assert!(!outcome.message.is_empty());
    }

    #[test]
    fn test_checkout_outcome_mapeo() {
        let ok = CheckoutOutcome::from_server(ServerMessage {
            message: Some("Pedido 42 confirmado".to_string()),
            token: None,
        });
        assert!(ok.success);
        assert_eq!(ok.message, "Pedido 42 confirmado");

        let err = CheckoutOutcome::failed();
        assert!(!err.success);
    }

    #[test]
    fn test_server_message_tolera_campos_ausentes() {
        let body: ServerMessage = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
        assert!(body.token.is_none());

        let body: ServerMessage =
            serde_json::from_str(r#"{"message":"ok","extra":1}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("ok"));
    }
}
