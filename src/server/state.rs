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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::chat::ChatRoom;
use crate::collection::Collection;

#[derive(Clone)]
pub struct ServerState {
    pub chat: ChatRoom,
    pub mutable: Arc<Mutex<Collection>>,
}

impl ServerState {
    pub fn new(collection: Collection) -> Self {
        Self {
            chat: ChatRoom::new(),
            mutable: Arc::new(Mutex::new(collection)),
        }
    }

    pub fn acquire(&self) -> MutexGuard<'_, Collection> {
        self.mutable.lock().unwrap_or_else(|e| e.into_inner())
    }
}
