//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CategoryResponse,
    ErrorResponse,
    ExamplesResponse,
    GenerateMetadata,
    // Generate models
    GenerateRequest,
    GenerateResponse,
    PopularTemplateResponse,
    TemplateInfo,
    // Catalog models
    TemplateResponse,
    UsageEntryResponse,
    // Stats models
    UsageStatsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::generate::generate_prompt,
        super::templates::get_templates,
        super::templates::get_examples,
        super::stats::get_stats,
        super::stats::get_popular,
    ),
    components(schemas(
        GenerateRequest,
        GenerateResponse,
        TemplateInfo,
        GenerateMetadata,
        CategoryResponse,
        TemplateResponse,
        ExamplesResponse,
        UsageStatsResponse,
        UsageEntryResponse,
        PopularTemplateResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Prompt", description = "Render catalog templates"),
        (name = "Catalog", description = "Categories, templates and examples"),
        (name = "Stats", description = "Usage statistics and popularity")
    ),
    info(
        title = "Prompt Optimizer API",
        description = "Catalog of parameterized prompt templates with usage statistics"
    )
)]
pub struct ApiDoc;
