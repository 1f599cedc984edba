use std::sync::Arc;

use logger::TracingLogger;

use groq::client::GroqClient;
use groq::content_rewriter::ContentRewriterGroq;

use business::application::humanizer::humanize::HumanizeContentUseCaseImpl;
use business::domain::humanizer::services::ContentRewriterService;
use business::domain::logger::Logger;

use crate::api::page::routes::IndexPage;
use crate::config::app_config::AppConfig;
use crate::config::groq_config::MISSING_KEY_WARNING;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub humanizer_api: crate::api::humanizer::routes::HumanizerApi,
    pub index_page: IndexPage,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let credential_configured = config.groq.has_credential();

        // Infrastructure adapters
        let rewriter: Option<Arc<dyn ContentRewriterService>> = match &config.groq.api_key {
            Some(api_key) => {
                let client = GroqClient::new(api_key.clone(), config.groq.settings.clone())
                    .with_base_url(&config.groq.base_url);
                Some(Arc::new(ContentRewriterGroq::new(client, logger.clone())))
            }
            None => {
                logger.warn(MISSING_KEY_WARNING);
                None
            }
        };

        // Humanizer use cases
        let humanize_use_case = Arc::new(HumanizeContentUseCaseImpl { rewriter, logger });

        let health_api = crate::api::health::routes::Api::new(credential_configured);
        let humanizer_api = crate::api::humanizer::routes::HumanizerApi::new(humanize_use_case);
        let index_page = IndexPage::render(
            credential_configured,
            config.branding.logo_data_uri.as_deref(),
        );

        Self {
            health_api,
            humanizer_api,
            index_page,
        }
    }
}
