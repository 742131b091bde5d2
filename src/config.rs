use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub slots: SlotsConfig,
    pub auth_cookie_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotsConfig {
    /// Ruta del endpoint de horarios, relativa a la URL del backend
    pub time_slots_path: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8000".to_string(),
            backend_url_production: "https://api.homekitchen.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            slots: SlotsConfig::default(),
            auth_cookie_name: "auth_token".to_string(),
        }
    }
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            time_slots_path: "api/orders/time-slots/".to_string(),
        }
    }
}

impl StorefrontConfig {
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
            slots: SlotsConfig {
                time_slots_path: option_env!("TIME_SLOTS_PATH")
                    .map(str::to_string)
                    .unwrap_or(defaults.slots.time_slots_path),
            },
            auth_cookie_name: option_env!("AUTH_COOKIE_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.auth_cookie_name),
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

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: StorefrontConfig = StorefrontConfig::from_env();
}
