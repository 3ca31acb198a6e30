//! Index Route - HTML overview of the catalog, ranking and stats

use axum::{extract::State, response::Html, routing::get, Router};
use handlebars::Handlebars;
use serde::Serialize;

use prompt_optimizer::{Category, PopularTemplate, UsageStats, DEFAULT_POPULAR_LIMIT};

use crate::routes::ApiError;
use crate::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.hbs");

/// Handlebars renderer for the index page
pub struct IndexPage {
    hbs: Handlebars<'static>,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    categories: &'a [Category],
    popular: Vec<PopularTemplate>,
    stats: UsageStats,
}

impl IndexPage {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut hbs = Handlebars::new();
        hbs.register_template_string("index", INDEX_TEMPLATE)?;
        Ok(Self { hbs })
    }

    fn render(&self, context: &IndexContext<'_>) -> Result<String, handlebars::RenderError> {
        self.hbs.render("index", context)
    }
}

/// Overview page
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let context = IndexContext {
        categories: state.prompt_service.catalog().categories(),
        popular: state.prompt_service.popular(DEFAULT_POPULAR_LIMIT).await,
        stats: state.prompt_service.stats().await,
    };

    let html = state.index_page.render(&context).map_err(|e| {
        tracing::error!("Failed to render index page: {}", e);
        ApiError::internal("Failed to render page")
    })?;

    Ok(Html(html))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
