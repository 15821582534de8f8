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

use std::collections::BTreeMap;

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::quiz::MIN_QUIZ_CARDS;
use crate::rotation::RotationState;
use crate::rotation::load_state;
use crate::store::CardRepository;

pub fn print_collection_stats(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let stats = get_stats(&coll);
    let stats_json = serde_json::to_string_pretty(&stats)?;
    println!("{stats_json}");
    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    card_count: usize,
    cards_by_language: BTreeMap<String, usize>,
    quiz_available: bool,
    immersion_item_count: usize,
    rotation: RotationState,
}

fn get_stats(coll: &Collection) -> Stats {
    let mut cards_by_language: BTreeMap<String, usize> = BTreeMap::new();
    for card in coll.cards.list() {
        *cards_by_language
            .entry(card.language().to_string())
            .or_default() += 1;
    }
    Stats {
        card_count: coll.cards.len(),
        cards_by_language,
        quiz_available: coll.cards.len() >= MIN_QUIZ_CARDS,
        immersion_item_count: coll.catalogue.len(),
        rotation: load_state(&coll.rotation_path),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::types::card::Flashcard;

    #[test]
    fn test_stats() -> Fallible<()> {
        let dir = tempdir()?;
        let mut coll = Collection::new(Some(dir.path().display().to_string()))?;
        coll.cards.add(Flashcard::new("a", "1", "English"))?;
        coll.cards.add(Flashcard::new("b", "2", "English"))?;
        coll.cards.add(Flashcard::new("c", "3", "French"))?;
        let stats = get_stats(&coll);
        assert_eq!(stats.card_count, 3);
        assert_eq!(stats.cards_by_language.get("English"), Some(&2));
        assert_eq!(stats.cards_by_language.get("French"), Some(&1));
        assert!(!stats.quiz_available);
        assert_eq!(stats.rotation, RotationState::default());
        Ok(())
    }

    #[test]
    fn test_non_existent_directory() {
        assert!(print_collection_stats(Some("./derpherp".to_string())).is_err());
    }
}
