use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, get, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::api::page::routes::index;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(container, &addr, config.cors);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Page at `/`, JSON API under `/api`, docs at `/docs`.
    ///
    /// The returned endpoint owns everything it needs; `addr` is only copied
    /// into the OpenAPI server URL.
    pub fn build_app(
        container: DependencyContainer,
        addr: &str,
        cors: Cors,
    ) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.humanizer_api),
            "AI Content Humanizer API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .at("/", get(index).data(container.index_page))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}
