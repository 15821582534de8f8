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

use serde::Deserialize;
use serde::Serialize;

use crate::types::card_hash::CardHash;
use crate::types::card_hash::Hasher;

/// The language assumed when a card is created without one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// A front/back learning unit. Cards are immutable once created.
///
/// The field names on disk and on the wire are the ones the existing
/// `flashcards.json` files and browser clients use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(rename = "frente", alias = "front")]
    front: String,
    #[serde(rename = "verso", alias = "back")]
    back: String,
    #[serde(rename = "idioma", alias = "language", default = "default_language")]
    language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Flashcard {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into().trim().to_string(),
            back: back.into().trim().to_string(),
            language: language.into().trim().to_string(),
        }
    }

    pub fn with_default_language(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self::new(front, back, DEFAULT_LANGUAGE)
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The content hash. Two cards with the same language, front, and back
    /// have the same hash.
    pub fn hash(&self) -> CardHash {
        let mut hasher = Hasher::new();
        hasher.update_field(&self.language);
        hasher.update_field(&self.front);
        hasher.update_field(&self.back);
        hasher.finalize()
    }
}
