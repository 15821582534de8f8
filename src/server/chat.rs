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

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::timeout;

use crate::chat::ChatMessage;
use crate::server::response::error_response;
use crate::server::response::json_rejection;
use crate::server::state::ServerState;

/// How long `/api/chat/next` waits before answering with no content.
const LONG_POLL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
pub struct NewMessage {
    #[serde(rename = "usuario", default)]
    author: String,
    #[serde(rename = "mensagem", default)]
    text: String,
}

pub async fn history_handler(State(state): State<ServerState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat.history())
}

pub async fn post_handler(
    State(state): State<ServerState>,
    body: Result<Json<NewMessage>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    if body.author.trim().is_empty() || body.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "A name and a message are required.");
    }
    let message = state.chat.publish(&body.author, &body.text);
    (StatusCode::CREATED, Json(message)).into_response()
}

/// Wait for the next message published to the room.
pub async fn next_handler(State(state): State<ServerState>) -> Response {
    let mut receiver = state.chat.subscribe();
    let wait = async {
        loop {
            match receiver.recv().await {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Chat listener skipped {skipped} messages.");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    };
    match timeout(LONG_POLL_TIMEOUT, wait).await {
        Ok(Some(message)) => Json(message).into_response(),
        Ok(None) | Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}
