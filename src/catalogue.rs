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

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::content::ContentItem;

const BUILTIN_CATALOGUE: &str = include_str!("immersion.json");

/// Load the immersion catalogue from `path`, or the built-in one if the file
/// does not exist.
pub fn load_catalogue(path: &Path) -> Fallible<Vec<ContentItem>> {
    if path.exists() {
        log::debug!("Loading immersion catalogue from {}.", path.display());
        let content = read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ErrorReport::new(format!(
                "invalid immersion catalogue {}: {e}",
                path.display()
            ))
        })
    } else {
        log::debug!("Using the built-in immersion catalogue.");
        builtin_catalogue()
    }
}

pub fn builtin_catalogue() -> Fallible<Vec<ContentItem>> {
    Ok(serde_json::from_str(BUILTIN_CATALOGUE)?)
}
