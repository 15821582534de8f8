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
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

pub const CONFIG_FILE: &str = "lingodeck.toml";
pub const CARDS_FILE: &str = "flashcards.json";
pub const ROTATION_FILE: &str = "rotation.json";
pub const CATALOGUE_FILE: &str = "immersion.json";

/// Settings read from `lingodeck.toml` in the data directory. Every key is
/// optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The address the server listens on.
    pub bind: String,
    pub port: u16,
    /// Open the browser once the server is up.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8000,
            open_browser: false,
        }
    }
}

impl Config {
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        log::debug!("Reading config from {}.", path.display());
        Ok(toml::from_str(&content)?)
    }
}
