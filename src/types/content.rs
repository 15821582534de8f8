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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "musica")]
    Song,
    #[serde(rename = "livro")]
    Book,
}

/// A bilingual reading item (a song or a book excerpt) shown in the
/// immersion page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "tipo")]
    pub kind: ContentKind,
    #[serde(rename = "idioma")]
    pub language: String,
    pub original: String,
    #[serde(rename = "traducao")]
    pub translation: String,
}
