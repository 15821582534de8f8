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

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::types::date::Date;

/// Days that must pass before the rotation advances.
pub const ROTATION_PERIOD_DAYS: i64 = 7;

/// How many items are shown at once, and how far the cursor moves.
pub const ROTATION_STEP: usize = 2;

/// The persisted cursor into the immersion catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    pub last_update: Date,
    pub current_index: usize,
}

impl Default for RotationState {
    /// Dated far enough in the past that the first visit advances.
    fn default() -> Self {
        let last_update = Date::from_ymd(2000, 1, 1).unwrap_or(Date::new(NaiveDate::MIN));
        Self {
            last_update,
            current_index: 0,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Rotation {
    /// The state after this visit.
    pub state: RotationState,
    /// Whether the cursor moved, in which case `state` should be persisted.
    pub advanced: bool,
    /// Indices of the items to show, in display order. Empty when there are
    /// no items.
    pub indices: Vec<usize>,
}

/// Decide which items are current on `today`.
pub fn compute_rotation(today: Date, state: RotationState, item_count: usize) -> Rotation {
    if item_count == 0 {
        return Rotation {
            state,
            advanced: false,
            indices: Vec::new(),
        };
    }
    let mut state = RotationState {
        last_update: state.last_update,
        current_index: state.current_index % item_count,
    };
    let advanced = today.days_since(state.last_update) >= ROTATION_PERIOD_DAYS;
    if advanced {
        state.current_index = (state.current_index + ROTATION_STEP) % item_count;
        state.last_update = today;
    }
    let indices = (0..ROTATION_STEP)
        .map(|offset| (state.current_index + offset) % item_count)
        .collect();
    Rotation {
        state,
        advanced,
        indices,
    }
}

/// Read the rotation state, falling back to the default when the file is
/// missing or unreadable.
pub fn load_state(path: &Path) -> RotationState {
    match read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Ignoring corrupt rotation file {}: {e}", path.display());
                RotationState::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => RotationState::default(),
        Err(e) => {
            log::warn!("Failed to read rotation file {}: {e}", path.display());
            RotationState::default()
        }
    }
}

pub fn save_state(path: &Path, state: &RotationState) -> Fallible<()> {
    let json = serde_json::to_string_pretty(state)?;
    write(path, json)?;
    Ok(())
}

/// Return the current pair of items, advancing and persisting the rotation
/// if a period has elapsed. Returns an empty vector when `items` is empty.
pub fn weekly_content<T: Clone>(items: &[T], path: &Path, today: Date) -> Fallible<Vec<T>> {
    let rotation = compute_rotation(today, load_state(path), items.len());
    if rotation.advanced {
        log::info!(
            "Rotating immersion content to index {}.",
            rotation.state.current_index
        );
        save_state(path, &rotation.state)?;
    }
    Ok(rotation
        .indices
        .into_iter()
        .map(|index| items[index].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn today() -> Date {
        Date::from_ymd(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_no_advance_within_period() {
        let state = RotationState {
            last_update: today().minus_days(6),
            current_index: 2,
        };
        let rotation = compute_rotation(today(), state, 6);
        assert!(!rotation.advanced);
        assert_eq!(rotation.state, state);
        assert_eq!(rotation.indices, vec![2, 3]);
    }

    #[test]
    fn test_advance_after_period() {
        let state = RotationState {
            last_update: today().minus_days(8),
            current_index: 0,
        };
        let rotation = compute_rotation(today(), state, 4);
        assert!(rotation.advanced);
        assert_eq!(rotation.state.current_index, 2);
        assert_eq!(rotation.state.last_update, today());
        assert_eq!(rotation.indices, vec![2, 3]);
    }

    #[test]
    fn test_advance_exactly_at_period() {
        let state = RotationState {
            last_update: today().minus_days(7),
            current_index: 0,
        };
        assert!(compute_rotation(today(), state, 4).advanced);
    }

    #[test]
    fn test_wraps_around() {
        let state = RotationState {
            last_update: today().minus_days(30),
            current_index: 3,
        };
        let rotation = compute_rotation(today(), state, 5);
        assert_eq!(rotation.state.current_index, 0);
        assert_eq!(rotation.indices, vec![0, 1]);

        let state = RotationState {
            last_update: today(),
            current_index: 4,
        };
        assert_eq!(compute_rotation(today(), state, 5).indices, vec![4, 0]);
    }

    #[test]
    fn test_single_item() {
        for days in [0, 10] {
            let state = RotationState {
                last_update: today().minus_days(days),
                current_index: 0,
            };
            assert_eq!(compute_rotation(today(), state, 1).indices, vec![0, 0]);
        }
    }

    #[test]
    fn test_empty() {
        let rotation = compute_rotation(today(), RotationState::default(), 0);
        assert!(!rotation.advanced);
        assert!(rotation.indices.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_normalized() {
        let state = RotationState {
            last_update: today(),
            current_index: 9,
        };
        let rotation = compute_rotation(today(), state, 4);
        assert_eq!(rotation.state.current_index, 1);
        assert_eq!(rotation.indices, vec![1, 2]);
    }

    #[test]
    fn test_future_last_update_does_not_advance() -> Fallible<()> {
        let state = RotationState {
            last_update: Date::from_ymd(2030, 1, 1)?,
            current_index: 0,
        };
        assert!(!compute_rotation(today(), state, 4).advanced);
        Ok(())
    }

    #[test]
    fn test_default_state_advances_on_first_visit() -> Fallible<()> {
        let state = RotationState::default();
        assert_eq!(state.last_update, Date::from_ymd(2000, 1, 1)?);
        let rotation = compute_rotation(today(), state, 4);
        assert!(rotation.advanced);
        assert_eq!(rotation.indices, vec![2, 3]);
        Ok(())
    }

    #[test]
    fn test_weekly_content_persists_and_is_stable() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rotation.json");
        let items = vec!["a", "b", "c", "d"];
        save_state(
            &path,
            &RotationState {
                last_update: today().minus_days(8),
                current_index: 0,
            },
        )?;
        assert_eq!(weekly_content(&items, &path, today())?, vec!["c", "d"]);
        assert_eq!(
            load_state(&path),
            RotationState {
                last_update: today(),
                current_index: 2
            }
        );
        // Repeated visits on the same day return the same pair.
        assert_eq!(weekly_content(&items, &path, today())?, vec!["c", "d"]);
        assert_eq!(weekly_content(&items, &path, today())?, vec!["c", "d"]);
        Ok(())
    }

    #[test]
    fn test_weekly_content_empty_list_writes_nothing() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rotation.json");
        let items: Vec<&str> = Vec::new();
        assert!(weekly_content(&items, &path, today())?.is_empty());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_corrupt_state_falls_back_to_default() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rotation.json");
        write(&path, "garbage")?;
        assert_eq!(load_state(&path), RotationState::default());
        Ok(())
    }

    #[test]
    fn test_file_shape() -> Fallible<()> {
        let state = RotationState {
            last_update: Date::from_ymd(2024, 1, 2)?,
            current_index: 4,
        };
        assert_eq!(
            serde_json::to_value(state)?,
            serde_json::json!({"last_update": "2024-01-02", "current_index": 4})
        );
        Ok(())
    }
}
