pub mod app_config;
pub mod branding_config;
pub mod cors_config;
pub mod groq_config;
pub mod server_config;
