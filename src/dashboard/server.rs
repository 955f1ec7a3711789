use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;

use crate::BrokerMe;

#[derive(Debug, Deserialize)]
pub struct ChildrenQuery {
    #[serde(default)]
    pub path: String,
}

/// Read-only JSON views of the server tree and status bar
pub fn router(app: BrokerMe) -> Router {
    Router::new()
        .route("/api/tree", get(get_tree))
        .route("/api/tree/children", get(get_children))
        .route("/api/status", get(get_status))
        .layer(CompressionLayer::new())
        .with_state(app)
}

pub async fn start_dashboard_server(app: BrokerMe, host: &str, port: u16) -> std::io::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 Dashboard available at http://{}", addr);

    axum::serve(listener, router(app)).await
}

async fn get_tree(State(app): State<BrokerMe>) -> impl IntoResponse {
    Json(app.snapshot())
}

async fn get_children(State(app): State<BrokerMe>, Query(query): Query<ChildrenQuery>) -> Response {
    match app.expand(&query.path) {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    }
}

async fn get_status(State(app): State<BrokerMe>) -> impl IntoResponse {
    Json(app.status())
}
