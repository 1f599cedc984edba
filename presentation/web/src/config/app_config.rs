use super::{
    branding_config::BrandingConfig, cors_config, groq_config::GroqConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub groq: GroqConfig,
    pub branding: BrandingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            groq: GroqConfig::from_env(),
            branding: BrandingConfig::from_env(),
        }
    }
}
