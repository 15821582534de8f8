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

use crate::error::Fallible;
use crate::server::response::error_response;
use crate::server::response::internal_error;
use crate::server::state::ServerState;
use crate::types::content::ContentItem;
use crate::types::timestamp::Timestamp;

/// The pair of immersion items for this week. Visiting this page is what
/// advances the rotation.
pub async fn weekly_handler(State(state): State<ServerState>) -> Response {
    match current_pair(&state) {
        Ok(items) if items.is_empty() => {
            error_response(StatusCode::NOT_FOUND, "No immersion content available.")
        }
        Ok(items) => Json(items).into_response(),
        Err(e) => internal_error(e),
    }
}

fn current_pair(state: &ServerState) -> Fallible<Vec<ContentItem>> {
    let coll = state.acquire();
    coll.weekly_content(Timestamp::now().local_date())
}
