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

use rand::Rng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;
use rand::seq::index::sample;
use serde::Serialize;

use crate::types::card::Flashcard;

/// The fewest cards a quiz can be built from.
pub const MIN_QUIZ_CARDS: usize = 4;

/// The most questions in one quiz.
pub const MAX_QUESTIONS: usize = 10;

/// The most wrong answers offered with each question.
pub const MAX_DISTRACTORS: usize = 3;

pub const NOT_ENOUGH_CARDS: &str = "You need at least 4 flashcards to start a quiz.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    #[serde(rename = "pergunta")]
    pub prompt: String,
    #[serde(rename = "resposta_correta")]
    pub correct_answer: String,
    #[serde(rename = "alternativas")]
    pub options: Vec<String>,
}

/// The outcome of starting a quiz. Serializes either as a bare array of
/// questions or as `{"erro": true, "mensagem": ...}`.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuizStart {
    Questions(Vec<QuizQuestion>),
    NotEnoughCards {
        #[serde(rename = "erro")]
        error: bool,
        #[serde(rename = "mensagem")]
        message: String,
    },
}

/// Start a quiz over `cards`, or report that there are too few of them.
pub fn start_quiz<R: Rng + ?Sized>(cards: &[Flashcard], rng: &mut R) -> QuizStart {
    if cards.len() < MIN_QUIZ_CARDS {
        return QuizStart::NotEnoughCards {
            error: true,
            message: NOT_ENOUGH_CARDS.to_string(),
        };
    }
    QuizStart::Questions(generate_quiz(cards, rng))
}

/// Build up to ten multiple-choice questions from distinct cards.
///
/// Distractors for a question are drawn from the cards whose front differs
/// from the question's front, so a question may end up with fewer than four
/// options when many cards share a front.
pub fn generate_quiz<R: Rng + ?Sized>(cards: &[Flashcard], rng: &mut R) -> Vec<QuizQuestion> {
    let question_count = cards.len().min(MAX_QUESTIONS);
    // `sample` returns the indices fully shuffled.
    sample(rng, cards.len(), question_count)
        .into_iter()
        .map(|index| build_question(&cards[index], cards, rng))
        .collect()
}

fn build_question<R: Rng + ?Sized>(
    correct: &Flashcard,
    cards: &[Flashcard],
    rng: &mut R,
) -> QuizQuestion {
    let pool: Vec<&Flashcard> = cards
        .iter()
        .filter(|card| card.front() != correct.front())
        .collect();
    let mut options: Vec<String> = Vec::with_capacity(MAX_DISTRACTORS + 1);
    options.push(correct.back().to_string());
    options.extend(
        pool.choose_multiple(rng, MAX_DISTRACTORS)
            .map(|card| card.back().to_string()),
    );
    options.shuffle(rng);
    QuizQuestion {
        prompt: correct.front().to_string(),
        correct_answer: correct.back().to_string(),
        options,
    }
}

/// Pick a card uniformly at random for review.
pub fn random_card<'a, R: Rng + ?Sized>(
    cards: &'a [Flashcard],
    rng: &mut R,
) -> Option<&'a Flashcard> {
    cards.choose(rng)
}
