use axum::Json;
use serde_json::{json, Value};

/// GET /ping
/// Liveness probe; fixed body, no store access.
pub async fn ping_handler() -> Json<Value> {
    Json(json!({ "app": "aboutme" }))
}
