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

use std::fmt::Display;
use std::fmt::Formatter;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

/// A calendar date, serialized as `YYYY-MM-DD`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Fallible<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ErrorReport::new(format!("invalid date: {year}-{month}-{day}")))
    }

    /// Whole days elapsed from `earlier` to `self`. Negative if `earlier` is
    /// in the future.
    pub fn days_since(self, earlier: Date) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    #[cfg(test)]
    pub fn minus_days(self, days: u64) -> Date {
        Date(self.0 - chrono::Days::new(days))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_since() -> Fallible<()> {
        let a = Date::from_ymd(2024, 1, 1)?;
        let b = Date::from_ymd(2024, 1, 8)?;
        assert_eq!(b.days_since(a), 7);
        assert_eq!(a.days_since(b), -7);
        assert_eq!(b.minus_days(7), a);
        Ok(())
    }

    #[test]
    fn test_serialization() -> Fallible<()> {
        let date = Date::from_ymd(2024, 3, 9)?;
        assert_eq!(serde_json::to_string(&date)?, "\"2024-03-09\"");
        let parsed: Date = serde_json::from_str("\"2024-03-09\"")?;
        assert_eq!(parsed, date);
        assert_eq!(date.to_string(), "2024-03-09");
        Ok(())
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
    }
}
