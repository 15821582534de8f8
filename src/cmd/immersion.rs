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
use crate::types::timestamp::Timestamp;

/// Print this week's immersion items, advancing the rotation if it is due.
pub fn print_weekly_content(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let items = coll.weekly_content(Timestamp::now().local_date())?;
    if items.is_empty() {
        println!("No immersion content available.");
        return Ok(());
    }
    for item in items {
        println!("# {}", item.title);
        println!();
        println!("{}", item.original);
        println!();
        println!("{}", item.translation);
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_builtin_catalogue() -> Fallible<()> {
        let dir = tempdir()?;
        print_weekly_content(Some(dir.path().display().to_string()))?;
        assert!(dir.path().join("rotation.json").exists());
        Ok(())
    }
}
