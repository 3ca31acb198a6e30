use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{load_catalog, JsonFileUsageRepository};
use application::PromptService;
use config::Config;
use prompt_optimizer::Catalog;
use routes::index::IndexPage;

/// Application service with the concrete repository implementation
pub type AppPromptService = PromptService<JsonFileUsageRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub index_page: Arc<IndexPage>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Prompt Optimizer is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with shared state
fn app(state: AppState, static_dir: &Path) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::index::router())
        .merge(routes::generate::router())
        .merge(routes::templates::router())
        .merge(routes::stats::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn build_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)
            .await
            .with_context(|| format!("Failed to load catalog from {:?}", path))?,
        None => Catalog::builtin(),
    };

    for issue in catalog.lint() {
        tracing::warn!("Catalog: {}", issue);
    }

    Ok(catalog)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to read configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .init();

    tracing::info!(
        "Prompt Optimizer initializing ({} mode)...",
        config.environment
    );
    if config.is_development() {
        tracing::warn!("Development mode: debug logging enabled, do not expose publicly");
    }

    let catalog = build_catalog(&config).await?;
    tracing::info!(
        "Catalog ready: {} categories, {} templates",
        catalog.categories().len(),
        catalog.templates().count()
    );

    let repo = Arc::new(JsonFileUsageRepository::new(&config.data_dir));
    tracing::info!("Usage stats file: {:?}", repo.path());

    let prompt_service = PromptService::load(Arc::new(catalog), repo)
        .await
        .context("Failed to load usage statistics")?;
    let index_page = IndexPage::new().context("Failed to compile index page template")?;

    let state = AppState {
        prompt_service: Arc::new(prompt_service),
        index_page: Arc::new(index_page),
    };

    let router = app(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Prompt Optimizer ready on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
