use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub ui_config: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Splash inicial de la app (ms) antes de montar el shell completo
    pub splash_delay_ms: u32,
    /// Loader breve por navegación (ms)
    pub page_loader_delay_ms: u32,
    /// Límite de inactividad antes del logout forzado (ms)
    pub inactivity_limit_ms: u32,
    /// Auto-descarte de mensajes de estado en formularios (ms)
    pub status_dismiss_ms: u32,
    /// Ancho de viewport bajo el cual el sidebar pasa a modo móvil (px)
    pub mobile_breakpoint_px: f64,
    pub sidebar_width_px: u32,
    pub sidebar_collapsed_width_px: u32,
    pub items_per_page: usize,
    /// Política del status override: true = se limpia al navegar,
    /// false = persiste hasta un clear explícito
    pub clear_status_on_navigation: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: 2000,
            page_loader_delay_ms: 500,
            inactivity_limit_ms: 15 * 60 * 1000,
            status_dismiss_ms: 5000,
            mobile_breakpoint_px: 768.0,
            sidebar_width_px: 256,
            sidebar_collapsed_width_px: 64,
            items_per_page: 5,
            clear_status_on_navigation: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: "http://localhost:5000".to_string(),
            api_base_url_production: "https://api.hms.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            ui_config: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            api_base_url_development: option_env!("API_BASE_URL")
                .unwrap_or("http://localhost:5000").to_string(),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .unwrap_or("https://api.hms.example.com").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            ui_config: UiConfig {
                splash_delay_ms: option_env!("SPLASH_DELAY_MS")
                    .unwrap_or("2000").parse().unwrap_or(2000),
                page_loader_delay_ms: option_env!("PAGE_LOADER_DELAY_MS")
                    .unwrap_or("500").parse().unwrap_or(500),
                inactivity_limit_ms: option_env!("INACTIVITY_LIMIT_MS")
                    .unwrap_or("900000").parse().unwrap_or(900_000),
                status_dismiss_ms: option_env!("STATUS_DISMISS_MS")
                    .unwrap_or("5000").parse().unwrap_or(5000),
                mobile_breakpoint_px: option_env!("MOBILE_BREAKPOINT_PX")
                    .unwrap_or("768").parse().unwrap_or(768.0),
                sidebar_width_px: option_env!("SIDEBAR_WIDTH_PX")
                    .unwrap_or("256").parse().unwrap_or(256),
                sidebar_collapsed_width_px: option_env!("SIDEBAR_COLLAPSED_WIDTH_PX")
                    .unwrap_or("64").parse().unwrap_or(64),
                items_per_page: option_env!("ITEMS_PER_PAGE")
                    .unwrap_or("5").parse().unwrap_or(5),
                clear_status_on_navigation: option_env!("CLEAR_STATUS_ON_NAVIGATION")
                    .unwrap_or("true").parse().unwrap_or(true),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
