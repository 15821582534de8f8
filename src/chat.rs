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

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use serde::Deserialize;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::types::timestamp::Timestamp;

/// The number of messages kept in the shared history.
pub const HISTORY_LIMIT: usize = 50;

/// Receivers further behind than this lose messages.
const CHANNEL_CAPACITY: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "usuario")]
    pub author: String,
    #[serde(rename = "mensagem")]
    pub text: String,
    #[serde(rename = "enviada_em")]
    pub sent_at: Timestamp,
}

/// The single shared chat room. Cloning yields another handle to the same
/// room.
#[derive(Clone)]
pub struct ChatRoom {
    history: Arc<Mutex<VecDeque<ChatMessage>>>,
    sender: broadcast::Sender<ChatMessage>,
}

impl ChatRoom {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            history: Arc::new(Mutex::new(VecDeque::with_capacity(HISTORY_LIMIT))),
            sender,
        }
    }

    /// Record a message and fan it out to everyone currently subscribed.
    pub fn publish(&self, author: &str, text: &str) -> ChatMessage {
        let message = ChatMessage {
            author: author.trim().to_string(),
            text: text.trim().to_string(),
            sent_at: Timestamp::now(),
        };
        {
            let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
            history.push_back(message.clone());
            while history.len() > HISTORY_LIMIT {
                history.pop_front();
            }
        }
        // An error only means nobody is listening.
        let receivers = self.sender.send(message.clone()).unwrap_or(0);
        log::debug!("Chat message from {} sent to {receivers} receivers.", message.author);
        message
    }

    /// The retained messages, oldest first.
    pub fn history(&self) -> Vec<ChatMessage> {
        let history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        history.iter().cloned().collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChatMessage> {
        self.sender.subscribe()
    }
}

impl Default for ChatRoom {
    fn default() -> Self {
        Self::new()
    }
}
