use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One entry of the word list, selected for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub country: String,
    pub pronunciation: String,
    pub meaning: String,
}

impl WordRecord {
    /// Build a record, rejecting any blank field.
    ///
    /// A field holding only whitespace counts as blank.
    pub fn new(
        word: impl Into<String>,
        country: impl Into<String>,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Result<Self> {
        let record = Self {
            word: word.into(),
            country: country.into(),
            pronunciation: pronunciation.into(),
            meaning: meaning.into(),
        };

        for (name, value) in record.fields() {
            if value.trim().is_empty() {
                return Err(Error::InvalidRecord(format!("field '{name}' is empty")));
            }
        }

        Ok(record)
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("word", self.word.as_str()),
            ("country", self.country.as_str()),
            ("pronunciation", self.pronunciation.as_str()),
            ("meaning", self.meaning.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_record() {
        let record = WordRecord::new("Hola", "ES", "ora", "hello").expect("valid record");
        assert_eq!(record.word, "Hola");
        assert_eq!(record.meaning, "hello");
    }

    #[test]
    fn rejects_blank_field() {
        let err = WordRecord::new("Hola", "ES", "   ", "hello").unwrap_err();
        assert!(err.to_string().contains("pronunciation"));
    }

    #[test]
    fn rejects_whitespace_only_field() {
        assert!(WordRecord::new("Hola", "ES", "ora", " \t ").is_err());
    }

    #[test]
    fn serializes_field_names() {
        let record = WordRecord::new("Ciao", "IT", "chao", "hi / bye").expect("valid record");
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["word"], "Ciao");
        assert_eq!(json["country"], "IT");
        assert_eq!(json["pronunciation"], "chao");
        assert_eq!(json["meaning"], "hi / bye");
    }
}
