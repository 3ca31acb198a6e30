//! Catalog Routes - Read-only access to categories and templates

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::models::{CategoryResponse, ErrorResponse, ExamplesResponse};
use crate::routes::ApiError;
use crate::AppState;

/// Get a category with all of its templates
#[utoipa::path(
    get,
    path = "/api/templates/{category}",
    params(
        ("category" = String, Path, description = "Category key")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_templates(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state.prompt_service.catalog().category(&category)?;
    Ok(Json(CategoryResponse::from(category)))
}

/// Get example bindings and variable names of a template
#[utoipa::path(
    get,
    path = "/api/examples/{category}/{template}",
    params(
        ("category" = String, Path, description = "Category key"),
        ("template" = String, Path, description = "Template key")
    ),
    responses(
        (status = 200, description = "Template examples", body = ExamplesResponse),
        (status = 404, description = "Category or template not found", body = ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_examples(
    State(state): State<AppState>,
    Path((category, template)): Path<(String, String)>,
) -> Result<Json<ExamplesResponse>, ApiError> {
    let (_, template) = state
        .prompt_service
        .catalog()
        .lookup(&category, &template)?;
    Ok(Json(ExamplesResponse::from(template)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/templates/:category", get(get_templates))
        .route("/api/examples/:category/:template", get(get_examples))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::ServiceExt;

    use crate::test_support::{body_json, test_app};

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_get_templates() {
        let temp = tempdir().unwrap();
        let app = test_app(temp.path()).await;

        let response = app.oneshot(get("/api/templates/deployment")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["name"], "Deploy & DevOps");
        let templates = body["templates"].as_object().unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates["deploy_render"]["name"], "Deploy Render.com");
        assert_eq!(
            templates["setup_cicd"]["variables"],
            serde_json::json!(["platform", "environments", "test_types"])
        );
    }

    #[tokio::test]
    async fn test_get_templates_unknown_category() {
        let temp = tempdir().unwrap();
        let app = test_app(temp.path()).await;

        let response = app.oneshot(get("/api/templates/marketing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_examples() {
        let temp = tempdir().unwrap();
        let app = test_app(temp.path()).await;

        let response = app
            .oneshot(get("/api/examples/development/create_project"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["variables"],
            serde_json::json!(["project_name", "project_type", "framework"])
        );
        assert_eq!(body["examples"].as_array().unwrap().len(), 2);
        assert_eq!(body["examples"][0]["project_name"], "meu-app");
    }

    #[tokio::test]
    async fn test_get_examples_not_found() {
        let temp = tempdir().unwrap();
        let app = test_app(temp.path()).await;

        for uri in [
            "/api/examples/marketing/create_project",
            "/api/examples/development/setup_cicd",
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }
}
