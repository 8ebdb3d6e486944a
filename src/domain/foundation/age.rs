//! Age value object (whole years and months).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age of an animal at a given date, truncated to whole months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
}

impl Age {
    /// Computes the age on `on` of something born on `birthdate`.
    ///
    /// Returns `None` when `on` precedes the birthdate.
    pub fn between(birthdate: NaiveDate, on: NaiveDate) -> Option<Self> {
        if on < birthdate {
            return None;
        }

        let mut total_months = (on.year() - birthdate.year()) * 12
            + (on.month() as i32 - birthdate.month() as i32);
        if on.day() < birthdate.day() {
            total_months -= 1;
        }

        let total_months = u32::try_from(total_months).ok()?;
        Some(Self {
            years: total_months / 12,
            months: total_months % 12,
        })
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}
