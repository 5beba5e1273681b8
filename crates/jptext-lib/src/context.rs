use crate::furigana::{self, AlignmentError, Furigana, FuriganaGroup};
use crate::readings::{ReadingTable, Readings};
use crate::romaji::{self, Encoding};
use crate::Config;

/// Everything needed to perform conversions, built once from a
/// configuration and shared by reference.
pub struct Context<R = ReadingTable> {
    config: Config,
    encoding: Encoding,
    readings: R,
}

impl Context {
    /// Construct a context from a configuration, without any known kanji
    /// readings.
    pub fn new(config: Config) -> Self {
        Self::from_config(config, ReadingTable::new())
    }
}

impl<R> Context<R>
where
    R: Readings,
{
    /// Construct a context from a configuration and a source of kanji
    /// readings.
    pub fn from_config(config: Config, readings: R) -> Self {
        let encoding = Encoding::new(&config.standards);

        Self {
            config,
            encoding,
            readings,
        }
    }

    /// The configuration used.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The kana - romaji encoding.
    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    /// Known kanji readings.
    pub fn readings(&self) -> &R {
        &self.readings
    }

    /// Convert kana to romaji.
    pub fn to_romaji(&self, text: &str) -> Result<String, romaji::Error> {
        self.encoding.kana_to_romaji(text, &self.config.to_romaji())
    }

    /// Convert romaji to hiragana.
    pub fn to_hiragana(&self, text: &str) -> Result<String, romaji::Error> {
        self.encoding.romaji_to_hiragana(text, &self.config.from_romaji())
    }

    /// Convert romaji to katakana.
    pub fn to_katakana(&self, text: &str) -> Result<String, romaji::Error> {
        self.encoding.romaji_to_katakana(text, &self.config.from_romaji())
    }

    /// Align kanji against their reading.
    pub fn align<'a>(
        &self,
        kanji: &'a str,
        reading: &'a str,
    ) -> Result<Vec<FuriganaGroup<'a>>, AlignmentError> {
        furigana::align(kanji, reading, &self.readings)
    }

    /// Align kanji against their reading as [`Furigana`].
    pub fn furigana<'a>(
        &self,
        kanji: &'a str,
        reading: &'a str,
    ) -> Result<Furigana<'a>, AlignmentError> {
        Furigana::new(kanji, reading, &self.readings)
    }
}

#[cfg(test)]
mod tests {
    use fixed_map::Set;

    use super::*;
    use crate::readings::Character;
    use crate::romaji::{Invalid, Standard, MACRON};

    #[test]
    fn conversions_follow_config() {
        let cx = Context::new(Config::default());
        assert_eq!(cx.to_romaji("とうきょう").unwrap(), "toukyou");
        assert_eq!(cx.to_hiragana("t\u{14d}ky\u{14d}").unwrap(), "とうきょう");

        let cx = Context::new(Config {
            macron: Some(MACRON.to_owned()),
            invalid: Invalid::Error,
            ..Config::default()
        });

        assert_eq!(cx.to_romaji("とうきょう").unwrap(), "t\u{14d}ky\u{14d}");
        assert!(cx.to_romaji("東京").is_err());
        assert!(cx.to_katakana("Tokyo").is_err());
    }

    #[test]
    fn standards_follow_config() {
        let mut standards = Set::new();
        standards.insert(Standard::Ministry);

        let cx = Context::new(Config {
            standards,
            ..Config::default()
        });

        assert_eq!(cx.to_romaji("クァ").unwrap(), "qua");
        assert_eq!(cx.encoding().standards().iter().count(), 1);
    }

    #[test]
    fn furigana_with_readings() {
        let mut readings = ReadingTable::new();

        readings.insert(
            '食',
            Character {
                kun: vec!["た.べる".into()],
                ..Character::default()
            },
        );

        let cx = Context::from_config(Config::default(), readings);
        let furigana = cx.furigana("食べる", "たべる").unwrap();
        assert_eq!(furigana.to_string(), "食[た]べる");
        assert!(cx.align("食べる", "のむ").is_err());
    }
}
