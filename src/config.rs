use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.carta.nexuslabs.one".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            ui: UiConfig::default(),
        }
    }
}

/// Retardos de UI en milisegundos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub toast_duration_ms: u32,
    pub login_close_delay_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 2500,
            login_close_delay_ms: 1200,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.carta.nexuslabs.one").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            ui: UiConfig {
                toast_duration_ms: option_env!("TOAST_DURATION_MS")
                    .unwrap_or("2500").parse().unwrap_or(2500),
                login_close_delay_ms: option_env!("LOGIN_CLOSE_DELAY_MS")
                    .unwrap_or("1200").parse().unwrap_or(1200),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática (solo lectura)
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
