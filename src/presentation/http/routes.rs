// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::{delete, get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/create_articles", post(articles::create_article))
        .route(
            "/api/delete_articles/{id}",
            delete(articles::delete_article),
        )
        .route(
            "/api/delete_articles",
            delete(articles::missing_article_id),
        )
        .route("/api/get_articles/{id}", get(articles::get_article_by_id))
        .route("/api/get_articles", get(articles::missing_article_id))
        .route("/api/articles", get(articles::list_articles))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
