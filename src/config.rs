// ============================================================================
// CONFIG - Configuración de la app (variables en tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::utils::constants::{DEFAULT_DEV_API_URL, DEFAULT_PROD_API_URL, DEFAULT_TOKEN_HEADER};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Header donde viaja el access token en las llamadas autenticadas
    pub token_header: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_DEV_API_URL.to_string(),
            backend_url_production: DEFAULT_PROD_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            token_header: option_env!("TOKEN_HEADER")
                .map(str::to_string)
                .unwrap_or(defaults.token_header),
        }
    }

    /// URL base del API según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
