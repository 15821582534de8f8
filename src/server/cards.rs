// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;
use serde::Serialize;

use crate::server::response::error_response;
use crate::server::response::internal_error;
use crate::server::response::json_rejection;
use crate::server::state::ServerState;
use crate::store::CardRepository;
use crate::types::card::Flashcard;
use crate::types::card_hash::CardHash;

const MISSING_FIELDS: &str = "Both the front and the back of the card are required.";

#[derive(Deserialize)]
pub struct NewCard {
    #[serde(rename = "frente", alias = "front", default)]
    front: String,
    #[serde(rename = "verso", alias = "back", default)]
    back: String,
    #[serde(rename = "idioma", alias = "language", default)]
    language: Option<String>,
}

impl NewCard {
    /// Reject blank fields before anything reaches the store.
    fn validate(self) -> Option<Flashcard> {
        if self.front.trim().is_empty() || self.back.trim().is_empty() {
            return None;
        }
        match self.language {
            Some(language) if !language.trim().is_empty() => {
                Some(Flashcard::new(self.front, self.back, language))
            }
            _ => Some(Flashcard::with_default_language(self.front, self.back)),
        }
    }
}

#[derive(Serialize)]
pub struct QuickSaveResult {
    #[serde(rename = "sucesso")]
    success: bool,
}

pub async fn list_handler(State(state): State<ServerState>) -> Json<Vec<Flashcard>> {
    let coll = state.acquire();
    Json(coll.cards.list().to_vec())
}

pub async fn get_handler(State(state): State<ServerState>, Path(hash): Path<String>) -> Response {
    let Ok(hash) = CardHash::from_hex(&hash) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid card hash.");
    };
    let coll = state.acquire();
    match coll.cards.get_by_key(hash) {
        Some(card) => Json(card.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "No such card."),
    }
}

pub async fn get_by_index_handler(
    State(state): State<ServerState>,
    Path(index): Path<String>,
) -> Response {
    let Ok(index) = index.parse::<usize>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid card index.");
    };
    let coll = state.acquire();
    match coll.cards.get(index) {
        Some(card) => Json(card.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "No such card."),
    }
}

pub async fn create_handler(
    State(state): State<ServerState>,
    body: Result<Json<NewCard>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    let Some(card) = body.validate() else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    };
    match add_card(&state, card.clone()) {
        Ok(()) => (StatusCode::CREATED, Json(card)).into_response(),
        Err(response) => response,
    }
}

/// Save a card from the immersion page, where only the front and back are
/// given.
pub async fn quick_save_handler(
    State(state): State<ServerState>,
    body: Result<Json<NewCard>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    let Some(card) = body.validate() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(QuickSaveResult { success: false }),
        )
            .into_response();
    };
    let status = match add_card(&state, card) {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let success = status == StatusCode::OK;
    (status, Json(QuickSaveResult { success })).into_response()
}

fn add_card(state: &ServerState, card: Flashcard) -> Result<(), Response> {
    let mut coll = state.acquire();
    log::debug!("Adding card {}", card.hash());
    coll.cards.add(card).map_err(internal_error)
}
