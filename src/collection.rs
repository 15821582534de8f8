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

use std::env::current_dir;
use std::path::PathBuf;

use crate::catalogue::load_catalogue;
use crate::config::CARDS_FILE;
use crate::config::CATALOGUE_FILE;
use crate::config::Config;
use crate::config::ROTATION_FILE;
use crate::error::Fallible;
use crate::error::fail;
use crate::rotation::weekly_content;
use crate::store::CardStore;
use crate::types::content::ContentItem;
use crate::types::date::Date;

/// Everything loaded from a data directory. Built once at startup and shared
/// by the commands and the server.
pub struct Collection {
    pub config: Config,
    pub cards: CardStore,
    pub catalogue: Vec<ContentItem>,
    pub rotation_path: PathBuf,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory)?;
        let cards = CardStore::open(&directory.join(CARDS_FILE));
        let catalogue = load_catalogue(&directory.join(CATALOGUE_FILE))?;
        log::debug!(
            "Loaded {} cards and {} immersion items from {}.",
            cards.len(),
            catalogue.len(),
            directory.display()
        );
        let rotation_path = directory.join(ROTATION_FILE);

        Ok(Self {
            config,
            cards,
            catalogue,
            rotation_path,
        })
    }

    /// The immersion items current on `today`.
    pub fn weekly_content(&self, today: Date) -> Fallible<Vec<ContentItem>> {
        weekly_content(&self.catalogue, &self.rotation_path, today)
    }
}
