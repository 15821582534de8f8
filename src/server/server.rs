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

use axum::Router;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::time::sleep;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::server::cards;
use crate::server::chat;
use crate::server::immersion;
use crate::server::response::not_found_handler;
use crate::server::state::ServerState;
use crate::server::study;

pub async fn start_server(coll: Collection, port: u16, open_browser: bool) -> Fallible<()> {
    let bind = format!("{}:{port}", coll.config.bind);
    let state = ServerState::new(coll);
    let app = router(state);

    if open_browser {
        // Start a separate task to open the browser.
        let connect = format!("127.0.0.1:{port}");
        let url = format!("http://{connect}/api/cards");
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&connect).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::warn!("Failed to open {url}: {e}");
            }
        });
    }

    log::info!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped.");
    Ok(())
}

pub fn router(state: ServerState) -> Router {
    let app = Router::new();
    let app = app.route("/api/cards", get(cards::list_handler));
    let app = app.route("/api/cards", post(cards::create_handler));
    let app = app.route("/api/cards/{hash}", get(cards::get_handler));
    let app = app.route("/api/cards/index/{index}", get(cards::get_by_index_handler));
    let app = app.route("/api/salvar_rapido", post(cards::quick_save_handler));
    let app = app.route("/revisar", get(study::review_handler));
    let app = app.route("/api/iniciar_quiz", get(study::quiz_handler));
    let app = app.route("/api/imersao", get(immersion::weekly_handler));
    let app = app.route("/api/chat", get(chat::history_handler));
    let app = app.route("/api/chat", post(chat::post_handler));
    let app = app.route("/api/chat/next", get(chat::next_handler));
    let app = app.fallback(not_found_handler);
    app.with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
