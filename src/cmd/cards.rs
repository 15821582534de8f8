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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::CardRepository;
use crate::types::card::Flashcard;

pub fn add_card(
    directory: Option<String>,
    front: String,
    back: String,
    language: String,
) -> Fallible<()> {
    if front.trim().is_empty() || back.trim().is_empty() {
        return fail("both the front and the back of the card are required.");
    }
    let mut coll = Collection::new(directory)?;
    let card = Flashcard::new(front, back, language);
    println!("{}", describe(&card));
    coll.cards.add(card)?;
    Ok(())
}

pub fn list_cards(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    if coll.cards.is_empty() {
        println!("No flashcards yet.");
    }
    for card in coll.cards.list() {
        println!("{}", describe(card));
    }
    Ok(())
}

fn describe(card: &Flashcard) -> String {
    format!("({}) {} -> {}", card.language(), card.front(), card.back())
}
