use dailyword_core::{DailySeed, WordRecord};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

/// Draw one record uniformly with a generator seeded from `seed`.
///
/// The generator is local to the call; ChaCha8 keeps the draw stable across
/// platforms for a fixed seed and record order.
pub fn draw(records: &[WordRecord], seed: DailySeed) -> Option<&WordRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
    records.choose(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(word: &str) -> WordRecord {
        WordRecord::new(word, "XX", "reading", "meaning").expect("valid record")
    }

    fn seed(y: i32, m: u32, d: u32) -> DailySeed {
        DailySeed::from_date(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
    }

    #[test]
    fn empty_slice_draws_nothing() {
        assert!(draw(&[], seed(2024, 3, 15)).is_none());
    }

    #[test]
    fn single_record_is_always_drawn() {
        let records = vec![record("only")];
        assert_eq!(draw(&records, seed(2024, 3, 15)).map(|r| r.word.as_str()), Some("only"));
    }

    #[test]
    fn same_seed_same_draw() {
        let records = (0..50).map(|i| record(&format!("w{i}"))).collect::<Vec<_>>();
        let first = draw(&records, seed(2024, 7, 1)).cloned();
        for _ in 0..10 {
            assert_eq!(draw(&records, seed(2024, 7, 1)).cloned(), first);
        }
    }
}
