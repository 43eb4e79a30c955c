use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

/// Body accepted by `POST /saveString`. Any other key is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveString {
    #[serde(rename = "myString")]
    pub my_string: String,
}

/// Every string received, in arrival order.
pub type Store = Arc<RwLock<Vec<String>>>;

pub fn app() -> Router {
    router(Store::default())
}

pub fn router(store: Store) -> Router {
    Router::new()
        .route("/saveString", post(save_string))
        .route("/strings", get(list_strings))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_store(listener, Store::default()).await
}

pub async fn run_with_store(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, router(store)).await
}

async fn save_string(
    State(store): State<Store>,
    payload: Result<Json<SaveString>, JsonRejection>,
) -> Result<Json<Value>, StatusCode> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected save request");
        StatusCode::BAD_REQUEST
    })?;
    info!(len = input.my_string.len(), "saved string");
    store.write().await.push(input.my_string);
    Ok(Json(json!({ "status": "ok" })))
}

async fn list_strings(State(store): State<Store>) -> Json<Vec<String>> {
    Json(store.read().await.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_string_uses_camel_case_key() {
        let input: SaveString = serde_json::from_str(r#"{"myString":"hi"}"#).unwrap();
        assert_eq!(input.my_string, "hi");
    }

    #[test]
    fn save_string_accepts_empty_value() {
        let input: SaveString = serde_json::from_str(r#"{"myString":""}"#).unwrap();
        assert!(input.my_string.is_empty());
    }

    #[test]
    fn save_string_rejects_missing_key() {
        let result: Result<SaveString, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn save_string_rejects_extra_keys() {
        let result: Result<SaveString, _> =
            serde_json::from_str(r#"{"myString":"hi","other":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn save_string_rejects_non_string_value() {
        let result: Result<SaveString, _> = serde_json::from_str(r#"{"myString":42}"#);
        assert!(result.is_err());
    }
}
