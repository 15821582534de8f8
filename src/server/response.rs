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
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde_json::json;

use crate::error::ErrorReport;

/// A JSON error body of the form `{"erro": message}`.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "erro": message }))).into_response()
}

/// Log an internal failure and answer with a 500.
pub fn internal_error(err: ErrorReport) -> Response {
    log::error!("{err}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.message())
}

/// Answer an unreadable request body in the same shape as other errors.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    log::debug!("Rejected request body: {rejection}");
    error_response(rejection.status(), &rejection.body_text())
}

pub async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found.")
}
