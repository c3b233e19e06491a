use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Integer seed derived from a calendar date (`year*10000 + month*100 + day`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DailySeed(u64);

impl DailySeed {
    pub fn from_date(date: NaiveDate) -> Self {
        let year = u64::try_from(date.year()).unwrap_or_default();
        Self(year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day()))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DailySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn encodes_date_digits() {
        assert_eq!(DailySeed::from_date(date(2024, 3, 15)).value(), 20_240_315);
        assert_eq!(DailySeed::from_date(date(1999, 12, 31)).value(), 19_991_231);
    }

    #[test]
    fn same_date_same_seed() {
        assert_eq!(
            DailySeed::from_date(date(2025, 1, 2)),
            DailySeed::from_date(date(2025, 1, 2))
        );
        assert_ne!(
            DailySeed::from_date(date(2025, 1, 2)),
            DailySeed::from_date(date(2025, 1, 3))
        );
    }

    #[test]
    fn displays_raw_value() {
        assert_eq!(DailySeed::from_date(date(2024, 3, 15)).to_string(), "20240315");
    }
}
