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
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::quiz::QuizStart;
use crate::quiz::random_card;
use crate::quiz::start_quiz;
use crate::server::response::error_response;
use crate::server::state::ServerState;
use crate::store::CardRepository;
use crate::types::card::Flashcard;

/// Serve a random card to review.
pub async fn review_handler(State(state): State<ServerState>) -> Response {
    match pick_card(&state) {
        Some(card) => Json(card).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "No flashcards yet."),
    }
}

fn pick_card(state: &ServerState) -> Option<Flashcard> {
    let coll = state.acquire();
    random_card(coll.cards.list(), &mut rand::rng()).cloned()
}

pub async fn quiz_handler(State(state): State<ServerState>) -> Json<QuizStart> {
    Json(new_quiz(&state))
}

fn new_quiz(state: &ServerState) -> QuizStart {
    let coll = state.acquire();
    let quiz = start_quiz(coll.cards.list(), &mut rand::rng());
    match &quiz {
        QuizStart::Questions(questions) => {
            log::debug!("Started a quiz with {} questions.", questions.len());
        }
        QuizStart::NotEnoughCards { .. } => {
            log::debug!("Refused a quiz: only {} cards.", coll.cards.len());
        }
    }
    quiz
}
