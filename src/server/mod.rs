//! Minimal backend persisting the shared deck collection.
//!
//! The whole collection lives in one JSON document on disk. Handlers do
//! shape checks only (array for replace, object for update); deeper
//! validation belongs to the client. Decks are kept as raw JSON values so
//! the server stays agnostic about the card shape.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(msg: &str) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg)))
}

fn not_found() -> HandlerError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found")))
}

/// Server state: the collection document and its on-disk home.
pub struct ServerState {
    path: PathBuf,
    decks: Mutex<Vec<Value>>,
}

pub type SharedState = Arc<ServerState>;

impl ServerState {
    /// Loads the collection document, starting empty when the file is
    /// missing or unparsable.
    pub fn open(path: PathBuf) -> SharedState {
        let decks = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<Value>>(&contents) {
                Ok(decks) => decks,
                Err(e) => {
                    log::error!("data file {} is corrupt, starting empty: {e}", path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Arc::new(Self {
            path,
            decks: Mutex::new(decks),
        })
    }

    fn persist(&self, decks: &[Value]) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(decks)?;
        std::fs::write(&self.path, json)
    }
}

/// Shallow-merges a patch object into the stored deck with the given id.
/// Returns false when no deck matches.
pub fn merge_deck(decks: &mut [Value], id: i64, patch: &Map<String, Value>) -> bool {
    let target = decks
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|deck| deck.get("id") == Some(&Value::from(id)));

    match target {
        Some(deck) => {
            for (key, value) in patch {
                deck.insert(key.clone(), value.clone());
            }
            true
        }
        None => false,
    }
}

/// Builds the API router over the given state.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/decks", get(list_decks).post(replace_decks))
        .route("/api/decks/{id}", put(update_deck))
        .route("/api/health", get(health))
        .with_state(state)
}

/// GET /api/decks
async fn list_decks(State(state): State<SharedState>) -> Json<Vec<Value>> {
    let decks = state.decks.lock().unwrap();
    Json(decks.clone())
}

/// POST /api/decks - replaces the entire collection.
async fn replace_decks(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, HandlerError> {
    let Value::Array(new_decks) = body else {
        return Err(bad_request("expected array"));
    };

    let mut decks = state.decks.lock().unwrap();
    *decks = new_decks;
    if let Err(e) = state.persist(&decks) {
        log::error!("replace_decks: persist failed: {e}");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("failed to persist decks")),
        ));
    }

    Ok(Json(json!({ "ok": true })))
}

/// PUT /api/decks/{id} - shallow-merges a partial deck.
async fn update_deck(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, HandlerError> {
    let Value::Object(patch) = body else {
        return Err(bad_request("expected object"));
    };

    let mut decks = state.decks.lock().unwrap();
    if !merge_deck(&mut decks, id, &patch) {
        return Err(not_found());
    }
    if let Err(e) = state.persist(&decks) {
        log::error!("update_deck: persist failed: {e}");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("failed to persist decks")),
        ));
    }

    Ok(Json(json!({ "ok": true })))
}

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_value(id: i64, name: &str) -> Value {
        json!({ "id": id, "name": name, "description": "", "cards": [] })
    }

    #[test]
    fn test_merge_deck_shallow_merges_matching_deck() {
        let mut decks = vec![deck_value(1, "A"), deck_value(2, "B")];
        let patch = json!({ "name": "Renamed" });

        let merged = merge_deck(&mut decks, 2, patch.as_object().unwrap());

        assert!(merged);
        assert_eq!(decks[1]["name"], "Renamed");
        // Untouched keys survive the merge.
        assert_eq!(decks[1]["id"], 2);
        assert!(decks[1]["cards"].is_array());
        assert_eq!(decks[0]["name"], "A");
    }

    #[test]
    fn test_merge_deck_missing_id_changes_nothing() {
        let mut decks = vec![deck_value(1, "A")];
        let before = decks.clone();
        let patch = json!({ "name": "Renamed" });

        let merged = merge_deck(&mut decks, 999, patch.as_object().unwrap());

        assert!(!merged);
        assert_eq!(decks, before);
    }

    #[test]
    fn test_state_open_with_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = ServerState::open(dir.path().join("data.json"));

        assert!(state.decks.lock().unwrap().is_empty());
    }

    #[test]
    fn test_state_open_with_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ nope").unwrap();

        let state = ServerState::open(path);
        assert!(state.decks.lock().unwrap().is_empty());
    }

    #[test]
    fn test_persist_then_open_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let state = ServerState::open(path.clone());
        let decks = vec![deck_value(1, "A")];
        state.persist(&decks).unwrap();

        let reopened = ServerState::open(path);
        assert_eq!(*reopened.decks.lock().unwrap(), decks);
    }
}
