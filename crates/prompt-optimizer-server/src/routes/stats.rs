//! Stats Routes - Usage statistics and popularity ranking

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use prompt_optimizer::DEFAULT_POPULAR_LIMIT;

use crate::models::{PopularQuery, PopularTemplateResponse, UsageStatsResponse};
use crate::AppState;

/// Get the full usage statistics document
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Usage statistics", body = UsageStatsResponse)
    ),
    tag = "Stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> Json<UsageStatsResponse> {
    Json(state.prompt_service.stats().await.into())
}

/// Rank templates by their use in the recent history
///
/// GET /api/popular?limit=5
#[utoipa::path(
    get,
    path = "/api/popular",
    params(PopularQuery),
    responses(
        (status = 200, description = "Ranked templates", body = Vec<PopularTemplateResponse>),
        (status = 400, description = "Invalid limit")
    ),
    tag = "Stats"
)]
pub async fn get_popular(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Json<Vec<PopularTemplateResponse>> {
    let limit = query.limit.unwrap_or(DEFAULT_POPULAR_LIMIT);
    let popular = state.prompt_service.popular(limit).await;
    Json(popular.into_iter().map(Into::into).collect())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stats", get(get_stats))
        .route("/api/popular", get(get_popular))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::ServiceExt;

    use crate::test_support::{body_json, test_app};

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn generate_setup_cicd() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({
                    "category": "deployment",
                    "template": "setup_cicd",
                    "variables": {"platform": "GitLab CI", "environments": "test,prod", "test_types": "unit"}
                })
                .to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_empty_stats_document() {
        let temp = tempdir().unwrap();
        let app = test_app(temp.path()).await;

        let response = app.oneshot(get("/api/stats")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "total_prompts": 0,
                "categories": {},
                "popular_templates": [],
                "last_used": []
            })
        );
    }

    #[tokio::test]
    async fn test_popular_default_limit_and_order() {
        let temp = tempdir().unwrap();
        let app = test_app(temp.path()).await;

        for _ in 0..2 {
            let response = app.clone().oneshot(generate_setup_cicd()).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let body = body_json(app.oneshot(get("/api/popular")).await.unwrap()).await;
        let ranked = body.as_array().unwrap();
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0]["template_key"], "setup_cicd");
        assert_eq!(ranked[0]["usage_count"], 2);
        assert_eq!(ranked[1]["template_key"], "create_project");
        assert_eq!(ranked[1]["usage_count"], 0);
    }

    #[tokio::test]
    async fn test_popular_limit() {
        let temp = tempdir().unwrap();
        let app = test_app(temp.path()).await;

        let body = body_json(app.clone().oneshot(get("/api/popular?limit=2")).await.unwrap()).await;
        assert_eq!(body.as_array().unwrap().len(), 2);

        let response = app.oneshot(get("/api/popular?limit=many")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
