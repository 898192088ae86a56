use axum::response::Json;
use serde_json::{Value, json};

/// Liveness check for the callback server.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "callback": "/callback"
    }))
}
