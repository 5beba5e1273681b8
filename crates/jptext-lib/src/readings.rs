//! Lookup of the candidate readings of a kanji.

use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Serialize};

/// Something which knows the readings of kanji.
///
/// Readings are returned as written in a kanji dictionary, they are
/// normalized by the consumer. Returning `None` or an empty list means that
/// nothing is known about the character, which is never an error.
pub trait Readings {
    /// Candidate readings of `kanji`, in order of preference.
    fn readings(&self, kanji: char) -> Option<Vec<&str>>;
}

impl<T> Readings for &T
where
    T: ?Sized + Readings,
{
    #[inline]
    fn readings(&self, kanji: char) -> Option<Vec<&str>> {
        (**self).readings(kanji)
    }
}

impl Readings for HashMap<char, Vec<String>> {
    fn readings(&self, kanji: char) -> Option<Vec<&str>> {
        let readings = self.get(&kanji)?;
        Some(readings.iter().map(String::as_str).collect())
    }
}

/// Readings of a single kanji, as found in a kanji dictionary.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// On readings, usually written in katakana.
    #[serde(default)]
    pub on: Vec<String>,
    /// Kun readings, where `.` separates the okurigana.
    #[serde(default)]
    pub kun: Vec<String>,
    /// Readings only used in names.
    #[serde(default)]
    pub nanori: Vec<String>,
}

impl Character {
    /// On readings followed by kun readings.
    pub fn all_readings(&self) -> impl Iterator<Item = &str> {
        self.on.iter().chain(&self.kun).map(String::as_str)
    }
}

/// A table of kanji readings.
///
/// Serialized as a JSON object keyed by kanji:
///
/// ```json
/// {"食": {"on": ["ショク"], "kun": ["た.べる", "く.う"]}}
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingTable {
    characters: HashMap<char, Character>,
}

impl ReadingTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a table in JSON from the given reader.
    pub fn from_reader<R>(reader: R) -> Result<Self, serde_json::Error>
    where
        R: io::Read,
    {
        serde_json::from_reader(reader)
    }

    /// Insert the readings of a character, replacing any previous ones.
    pub fn insert(&mut self, kanji: char, character: Character) {
        self.characters.insert(kanji, character);
    }

    /// Get the readings of a character.
    pub fn get(&self, kanji: char) -> Option<&Character> {
        self.characters.get(&kanji)
    }

    /// Number of characters in the table.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Test if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl Readings for ReadingTable {
    fn readings(&self, kanji: char) -> Option<Vec<&str>> {
        let character = self.characters.get(&kanji)?;
        Some(character.all_readings().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json() {
        let table = ReadingTable::from_json(
            r#"{"食": {"on": ["ショク", "ジキ"], "kun": ["く.う", "た.べる"], "nanori": ["あき"]}, "変": {"on": ["ヘン"]}}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.readings('食'),
            Some(vec!["ショク", "ジキ", "く.う", "た.べる"])
        );
        assert_eq!(table.readings('変'), Some(vec!["ヘン"]));
        assert_eq!(table.readings('大'), None);
    }

    #[test]
    fn insert_and_borrow() {
        let mut table = ReadingTable::new();
        assert!(table.is_empty());

        table.insert(
            '大',
            Character {
                on: vec!["タイ".into(), "ダイ".into()],
                kun: vec!["おお.きい".into()],
                ..Character::default()
            },
        );

        let by_ref: &dyn Readings = &table;
        assert_eq!(by_ref.readings('大'), Some(vec!["タイ", "ダイ", "おお.きい"]));
        assert_eq!((&table).readings('大').map(|r| r.len()), Some(3));
    }
}
