use serde::{Deserialize, Serialize};

/// Header names of the four columns every dataset must carry.
///
/// Matching is name-exact and independent of column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredColumns {
    pub word: String,
    pub country: String,
    pub pronunciation: String,
    pub meaning: String,
}

impl Default for RequiredColumns {
    fn default() -> Self {
        Self {
            word: "言葉".to_string(),
            country: "話されている国（国旗）".to_string(),
            pronunciation: "日本語読み".to_string(),
            meaning: "日本語の意味".to_string(),
        }
    }
}

impl RequiredColumns {
    /// Column names in record field order.
    pub fn names(&self) -> [&str; 4] {
        [
            self.word.as_str(),
            self.country.as_str(),
            self.pronunciation.as_str(),
            self.meaning.as_str(),
        ]
    }
}
