// File: services/accurus_backend/src/main.rs
use accurus_backend::{app_state::AppState, routes::api_router};
use accurus_common::logging;
use accurus_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = Arc::new(load_config()?);
    let state = AppState::new(config.clone());

    let mut app = api_router(&state);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use accurus_contact::doc::ContactApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "AccurusBill API",
                version = "0.1.0",
                description = "AccurusBill contact page API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "AccurusBill", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(ContactApiDoc::openapi());
        info!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    // Serve the built frontend in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from dist");
        app = app.fallback_service(ServeDir::new("dist"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
