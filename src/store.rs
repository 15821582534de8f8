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

use std::fs::read_to_string;
use std::fs::write;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Fallible;
use crate::types::card::Flashcard;
use crate::types::card_hash::CardHash;

/// Typed access to the flashcard collection.
pub trait CardRepository {
    /// All cards, in insertion order.
    fn list(&self) -> &[Flashcard];

    /// The card at the given insertion index.
    fn get(&self, index: usize) -> Option<&Flashcard> {
        self.list().get(index)
    }

    /// The first card with the given content hash.
    fn get_by_key(&self, hash: CardHash) -> Option<&Flashcard> {
        self.list().iter().find(|card| card.hash() == hash)
    }

    /// Append a card. Cards are never updated or removed.
    fn add(&mut self, card: Flashcard) -> Fallible<()>;
}

/// A card collection backed by a JSON file. Every mutation is written
/// through to disk before it is visible in memory.
pub struct CardStore {
    path: PathBuf,
    cards: Vec<Flashcard>,
}

impl CardStore {
    /// Load the store from `path`. A missing or corrupt file yields an empty
    /// store.
    pub fn open(path: &Path) -> Self {
        let cards = match read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Vec<Flashcard>>(&content) {
                Ok(cards) => cards,
                Err(e) => {
                    log::warn!("Ignoring unreadable card file {}: {e}", path.display());
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No card file at {}, starting empty.", path.display());
                Vec::new()
            }
            Err(e) => {
                log::warn!("Failed to read card file {}: {e}", path.display());
                Vec::new()
            }
        };
        log::debug!("Loaded {} cards.", cards.len());
        Self {
            path: path.to_path_buf(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn save(&self, cards: &[Flashcard]) -> Fallible<()> {
        let json = serde_json::to_string_pretty(cards)?;
        write(&self.path, json)?;
        Ok(())
    }
}

impl CardRepository for CardStore {
    fn list(&self) -> &[Flashcard] {
        &self.cards
    }

    fn add(&mut self, card: Flashcard) -> Fallible<()> {
        let mut cards = self.cards.clone();
        cards.push(card);
        self.save(&cards)?;
        self.cards = cards;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_is_empty() -> Fallible<()> {
        let dir = tempdir()?;
        let store = CardStore::open(&dir.path().join("flashcards.json"));
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_empty() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.json");
        write(&path, "{ not json")?;
        let store = CardStore::open(&path);
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_add_then_reload() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.json");
        let mut store = CardStore::open(&path);
        store.add(Flashcard::with_default_language("dog", "cachorro"))?;
        store.add(Flashcard::new("gato", "cat", "Portuguese"))?;
        store.add(Flashcard::with_default_language("dog", "cão"))?;
        let reloaded = CardStore::open(&path);
        assert_eq!(reloaded.list(), store.list());
        assert_eq!(reloaded.len(), 3);
        Ok(())
    }

    #[test]
    fn test_reads_legacy_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.json");
        write(
            &path,
            r#"[{"frente": "house", "verso": "casa", "idioma": "Inglês"}]"#,
        )?;
        let store = CardStore::open(&path);
        assert_eq!(store.list(), &[Flashcard::new("house", "casa", "Inglês")]);
        Ok(())
    }

    #[test]
    fn test_lookups() -> Fallible<()> {
        let dir = tempdir()?;
        let mut store = CardStore::open(&dir.path().join("flashcards.json"));
        let card = Flashcard::with_default_language("sun", "sol");
        store.add(Flashcard::with_default_language("moon", "lua"))?;
        store.add(card.clone())?;
        assert_eq!(store.get(1), Some(&card));
        assert_eq!(store.get(2), None);
        assert_eq!(store.get_by_key(card.hash()), Some(&card));
        let missing = Flashcard::with_default_language("star", "estrela");
        assert_eq!(store.get_by_key(missing.hash()), None);
        Ok(())
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing-dir").join("flashcards.json");
        let mut store = CardStore::open(&path);
        let result = store.add(Flashcard::with_default_language("a", "b"));
        assert!(result.is_err());
        assert!(store.is_empty());
        Ok(())
    }
}
