//! Conversions between kana and Modified Hepburn romaji.
//!
//! An [`Encoding`] is built from the base table restricted to a set of
//! optional [`Standard`]s. Conversions scan the input for the longest
//! syllable the encoding knows about, and hand anything else to the
//! configured [`Invalid`] policy.

#[macro_use]
mod table;

mod error;


pub use self::error::Error;
use self::error::ErrorKind;

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::OnceLock;

use fixed_map::{Key, Set};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::charset::{Charset, HIRAGANA, KATAKANA};
use crate::mora;

/// Combining marks recognized as macrons when reading romaji: circumflex,
/// tilde, macron and overline.
pub const DEFAULT_MACRONS: &str = "\u{302}\u{303}\u{304}\u{305}";

/// The combining macron.
pub const MACRON: &str = "\u{304}";

const LONG_VOWEL_MARK: char = 'ー';

/// Optional extensions of the base table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Key, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Standard {
    /// Extended katakana recommended by the Ministry of Foreign Affairs.
    Ministry,
    /// Extended katakana of ANSI Z39.11-1972.
    Ansi,
    /// Extended katakana of BS 4812:1972.
    Hyojun,
}

impl Standard {
    /// Every standard.
    pub const ALL: [Standard; 3] = [Standard::Ministry, Standard::Ansi, Standard::Hyojun];

    /// A set enabling every standard.
    pub fn all() -> Set<Standard> {
        let mut set = Set::new();

        for standard in Self::ALL {
            set.insert(standard);
        }

        set
    }

    /// The name of the standard as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Standard::Ministry => "ministry",
            Standard::Ansi => "ansi",
            Standard::Hyojun => "hyojun",
        }
    }

    /// Parse a standard by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// A row of the base table.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Hiragana spelling, empty if the row only has katakana.
    pub hiragana: &'static str,
    /// Katakana spelling.
    pub katakana: &'static str,
    /// Romaji spelling.
    pub romaji: &'static str,
    /// Standards which enable the row. An empty list means it's always
    /// enabled.
    pub standards: &'static [Standard],
}

impl Entry {
    const fn new(
        hiragana: &'static str,
        katakana: &'static str,
        romaji: &'static str,
        standards: &'static [Standard],
    ) -> Self {
        Self {
            hiragana,
            katakana,
            romaji,
            standards,
        }
    }

    /// Test if the row is enabled by the given standards.
    pub fn is_enabled(&self, standards: &Set<Standard>) -> bool {
        self.standards.is_empty() || self.standards.iter().any(|s| standards.contains(*s))
    }
}

/// The base table, in priority order.
pub fn table() -> &'static [Entry] {
    table::TABLE
}

/// What to do with text that has no conversion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Invalid {
    /// Copy the text to the output as-is.
    #[default]
    Pass,
    /// Drop the text.
    Omit,
    /// Fail the conversion.
    Error,
}

/// Options when converting kana to romaji.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToRomaji<'a> {
    /// Policy for text without a conversion.
    pub invalid: Invalid,
    /// When set, long vowels are collapsed and marked with this string
    /// instead of being spelled out.
    pub macron: Option<&'a str>,
}

/// Options when converting romaji to kana.
#[derive(Debug, Clone, Copy)]
pub struct FromRomaji<'a> {
    /// Policy for text without a conversion.
    pub invalid: Invalid,
    /// Combining marks which lengthen the vowel they follow.
    pub macrons: &'a str,
}

impl Default for FromRomaji<'_> {
    fn default() -> Self {
        Self {
            invalid: Invalid::Pass,
            macrons: DEFAULT_MACRONS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Script {
    Hiragana,
    Katakana,
    Any,
}

impl Script {
    fn mora_len(self, input: &str) -> Option<usize> {
        let hiragana = |input: &str| mora::sokuon_mora_len(input, |c| HIRAGANA.class(c));
        let katakana = |input: &str| mora::sokuon_mora_len(input, |c| KATAKANA.class(c));

        match self {
            Script::Hiragana => hiragana(input),
            Script::Katakana => katakana(input),
            Script::Any => hiragana(input).or_else(|| katakana(input)),
        }
    }
}

type Table = HashMap<Box<str>, Box<str>>;

/// A kana - romaji encoding under a set of enabled standards.
#[derive(Debug, Clone)]
pub struct Encoding {
    standards: Set<Standard>,
    hiragana_to_romaji: Table,
    katakana_to_romaji: Table,
    romaji_to_hiragana: Table,
    romaji_to_katakana: Table,
}

impl Encoding {
    /// Build an encoding from the rows of the base table enabled by
    /// `standards`.
    ///
    /// Every row also produces a geminate form, where the romaji has its
    /// first letter doubled and the kana is prefixed with a sokuon. Rows
    /// starting with a vowel have no geminate form.
    pub fn new(standards: &Set<Standard>) -> Self {
        let mut this = Self {
            standards: standards.clone(),
            hiragana_to_romaji: Table::new(),
            katakana_to_romaji: Table::new(),
            romaji_to_hiragana: Table::new(),
            romaji_to_katakana: Table::new(),
        };

        for entry in table::TABLE {
            if entry.is_enabled(standards) {
                this.register(entry);
            }
        }

        tracing::debug!(
            standards = ?standards.iter().map(|s| s.name()).collect::<Vec<_>>(),
            hiragana = this.romaji_to_hiragana.len(),
            katakana = this.romaji_to_katakana.len(),
            "Built encoding"
        );

        this
    }

    /// The standards this encoding was built with.
    pub fn standards(&self) -> &Set<Standard> {
        &self.standards
    }

    fn register(&mut self, entry: &Entry) {
        self.insert(entry.hiragana, entry.katakana, entry.romaji);

        let Some(first) = entry.romaji.chars().next() else {
            return;
        };

        let romaji = format!("{first}{}", entry.romaji);
        let hiragana = geminate(entry.hiragana, &HIRAGANA).unwrap_or_default();
        let katakana = geminate(entry.katakana, &KATAKANA).unwrap_or_default();
        self.insert(&hiragana, &katakana, &romaji);
    }

    fn insert(&mut self, hiragana: &str, katakana: &str, romaji: &str) {
        if !hiragana.is_empty() {
            first_wins(&mut self.hiragana_to_romaji, hiragana, romaji);
            first_wins(&mut self.romaji_to_hiragana, romaji, hiragana);
        }

        if !katakana.is_empty() {
            first_wins(&mut self.katakana_to_romaji, katakana, romaji);
            first_wins(&mut self.romaji_to_katakana, romaji, katakana);
        }
    }

    /// Look up the romaji of a single mora of hiragana or katakana.
    pub fn romaji(&self, kana: &str) -> Option<&str> {
        self.lookup_romaji(Script::Any, kana)
    }

    /// Look up the hiragana of a single romaji syllable.
    pub fn hiragana(&self, romaji: &str) -> Option<&str> {
        self.romaji_to_hiragana.get(romaji).map(|s| &**s)
    }

    /// Look up the katakana of a single romaji syllable.
    pub fn katakana(&self, romaji: &str) -> Option<&str> {
        self.romaji_to_katakana.get(romaji).map(|s| &**s)
    }

    fn lookup_romaji(&self, script: Script, kana: &str) -> Option<&str> {
        let romaji = match script {
            Script::Hiragana => self.hiragana_to_romaji.get(kana),
            Script::Katakana => self.katakana_to_romaji.get(kana),
            Script::Any => self
                .hiragana_to_romaji
                .get(kana)
                .or_else(|| self.katakana_to_romaji.get(kana)),
        };

        romaji.map(|s| &**s)
    }

    /// Convert hiragana and katakana to romaji.
    pub fn kana_to_romaji(&self, text: &str, options: &ToRomaji<'_>) -> Result<String, Error> {
        self.encode(
            Script::Any,
            text,
            options.macron,
            policy(options.invalid, ErrorKind::NoRomaji),
        )
    }

    /// Convert hiragana to romaji, treating everything else as invalid.
    pub fn hiragana_to_romaji(&self, text: &str, options: &ToRomaji<'_>) -> Result<String, Error> {
        self.encode(
            Script::Hiragana,
            text,
            options.macron,
            policy(options.invalid, ErrorKind::NoRomaji),
        )
    }

    /// Convert katakana to romaji, treating everything else as invalid.
    pub fn katakana_to_romaji(&self, text: &str, options: &ToRomaji<'_>) -> Result<String, Error> {
        self.encode(
            Script::Katakana,
            text,
            options.macron,
            policy(options.invalid, ErrorKind::NoRomaji),
        )
    }

    /// Convert romaji to hiragana.
    pub fn romaji_to_hiragana(&self, text: &str, options: &FromRomaji<'_>) -> Result<String, Error> {
        self.decode(
            &self.romaji_to_hiragana,
            &HIRAGANA,
            text,
            options.macrons,
            policy(options.invalid, ErrorKind::NoKana),
        )
    }

    /// Convert romaji to katakana.
    pub fn romaji_to_katakana(&self, text: &str, options: &FromRomaji<'_>) -> Result<String, Error> {
        self.decode(
            &self.romaji_to_katakana,
            &KATAKANA,
            text,
            options.macrons,
            policy(options.invalid, ErrorKind::NoKana),
        )
    }

    /// Convert kana to romaji, spelling out long vowels and passing through
    /// anything which isn't kana.
    pub fn to_romaji(&self, text: &str) -> String {
        infallible(self.encode(Script::Any, text, None, pass))
    }

    /// Convert romaji to hiragana, passing through anything which isn't
    /// romaji.
    pub fn to_hiragana(&self, text: &str) -> String {
        infallible(self.decode(
            &self.romaji_to_hiragana,
            &HIRAGANA,
            text,
            DEFAULT_MACRONS,
            pass,
        ))
    }

    /// Convert romaji to katakana, passing through anything which isn't
    /// romaji.
    pub fn to_katakana(&self, text: &str) -> String {
        infallible(self.decode(
            &self.romaji_to_katakana,
            &KATAKANA,
            text,
            DEFAULT_MACRONS,
            pass,
        ))
    }

    fn encode<E>(
        &self,
        script: Script,
        text: &str,
        macron: Option<&str>,
        mut invalid: impl FnMut(&mut String, &str, usize) -> Result<(), E>,
    ) -> Result<String, E> {
        let mut out = String::with_capacity(text.len());
        // Last character written for the previous mora, used to collapse
        // long vowels.
        let mut previous = None::<char>;
        let mut pending = 0;
        let mut at = 0;

        while let Some(c) = text[at..].chars().next() {
            let Some(n) = script.mora_len(&text[at..]) else {
                at += c.len_utf8();
                continue;
            };

            let skipped = &text[pending..at];

            if !skipped.is_empty() {
                invalid(&mut out, skipped, pending)?;
            }

            let start = at;
            let mora = &text[at..at + n];
            at += n;

            let long = text[at..].starts_with(LONG_VOWEL_MARK);

            if long {
                at += LONG_VOWEL_MARK.len_utf8();
            }

            pending = at;
            let before = out.len();

            match self.lookup_romaji(script, mora) {
                Some(romaji) => {
                    let collapse = match (macron, previous, romaji.chars().next()) {
                        (Some(_), Some(p), Some(c)) => skipped.is_empty() && extends(p, c),
                        _ => false,
                    };

                    match macron {
                        Some(macron) if collapse => out.push_str(macron),
                        _ => out.push_str(romaji),
                    }
                }
                None => {
                    invalid(&mut out, mora, start)?;
                }
            }

            let last = out[before..].chars().next_back();

            if long {
                match (macron, last.and_then(extension)) {
                    (Some(macron), _) => out.push_str(macron),
                    (None, Some(vowel)) => out.push(vowel),
                    (None, None) => out.push(LONG_VOWEL_MARK),
                }

                previous = None;
            } else {
                previous = last;
            }
        }

        let skipped = &text[pending..];

        if !skipped.is_empty() {
            invalid(&mut out, skipped, pending)?;
        }

        Ok(out.nfc().collect())
    }

    fn decode<E>(
        &self,
        table: &Table,
        charset: &Charset,
        text: &str,
        macrons: &str,
        mut invalid: impl FnMut(&mut String, &str, usize) -> Result<(), E>,
    ) -> Result<String, E> {
        let text = text.nfd().collect::<String>();
        let mut out = String::with_capacity(text.len() * 3);
        let mut pending = 0;
        let mut at = 0;

        while let Some(c) = text[at..].chars().next() {
            let Some(n) = syllable_len(&text[at..], table) else {
                at += c.len_utf8();
                continue;
            };

            let skipped = &text[pending..at];

            if !skipped.is_empty() {
                invalid(&mut out, skipped, pending)?;
            }

            let start = at;
            let syllable = &text[at..at + n];
            at += n;

            let mark = text[at..]
                .chars()
                .next()
                .filter(|c| matches!(c, '\u{300}'..='\u{36f}'));

            if let Some(mark) = mark {
                at += mark.len_utf8();
            }

            pending = at;

            match table.get(syllable) {
                Some(kana) => out.push_str(kana),
                None => invalid(&mut out, syllable, start)?,
            }

            if let Some(mark) = mark {
                let long = syllable
                    .chars()
                    .next_back()
                    .and_then(|vowel| long_vowel(vowel, charset));

                match long {
                    Some(kana) if macrons.contains(mark) => out.push(kana),
                    _ => out.push(mark),
                }
            }
        }

        let skipped = &text[pending..];

        if !skipped.is_empty() {
            invalid(&mut out, skipped, pending)?;
        }

        Ok(out.nfc().collect())
    }
}

impl Default for Encoding {
    /// An encoding with every standard enabled.
    fn default() -> Self {
        Self::new(&Standard::all())
    }
}

/// The shared encoding with every standard enabled.
pub fn default_encoding() -> &'static Encoding {
    static ENCODING: OnceLock<Encoding> = OnceLock::new();
    ENCODING.get_or_init(Encoding::default)
}

/// Convert kana to romaji using the default encoding, see
/// [`Encoding::to_romaji`].
pub fn kana_to_romaji(text: &str) -> String {
    default_encoding().to_romaji(text)
}

/// Convert romaji to hiragana using the default encoding, see
/// [`Encoding::to_hiragana`].
pub fn romaji_to_hiragana(text: &str) -> String {
    default_encoding().to_hiragana(text)
}

/// Convert romaji to katakana using the default encoding, see
/// [`Encoding::to_katakana`].
pub fn romaji_to_katakana(text: &str) -> String {
    default_encoding().to_katakana(text)
}

fn first_wins(table: &mut Table, key: &str, value: &str) {
    table.entry(key.into()).or_insert_with(|| value.into());
}

/// Prefix a kana spelling with the sokuon of its script, unless it starts
/// with a vowel.
fn geminate(kana: &str, charset: &Charset) -> Option<String> {
    let first = kana.chars().next()?;

    if charset.vowels.contains(first) {
        return None;
    }

    Some(format!("{}{kana}", charset.sokuon))
}

/// Test if a syllable starting with `next` lengthens a vowel `previous`.
fn extends(previous: char, next: char) -> bool {
    match previous {
        'a' | 'i' | 'u' | 'e' => next == previous,
        'o' => matches!(next, 'o' | 'u'),
        _ => false,
    }
}

/// The letter which spells out the lengthening of a vowel.
fn extension(vowel: char) -> Option<char> {
    match vowel {
        'a' | 'i' | 'u' | 'e' => Some(vowel),
        'o' => Some('u'),
        _ => None,
    }
}

/// The kana which lengthens a romaji vowel.
fn long_vowel(vowel: char, charset: &Charset) -> Option<char> {
    let index = match vowel {
        'a' => 0,
        'i' => 1,
        'u' | 'o' => 2,
        'e' => 3,
        _ => return None,
    };

    charset.vowels.chars().nth(index)
}

fn is_consonant(b: u8) -> bool {
    b.is_ascii_lowercase() && !matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Length of the romaji syllable at the start of `input`: any run of
/// consonants followed by a vowel, or a lone `n`.
///
/// A syllable starting with `n` which the table doesn't know is cut down to
/// the `n`, so that `nj` in `kanji` reads as `ん` followed by `j`.
fn syllable_len(input: &str, table: &Table) -> Option<usize> {
    let bytes = input.as_bytes();
    let consonants = bytes.iter().take_while(|b| is_consonant(**b)).count();

    match bytes.get(consonants) {
        Some(b'a' | b'e' | b'i' | b'o' | b'u') => {
            let n = consonants + 1;

            if consonants > 1 && input.starts_with('n') && !table.contains_key(&input[..n]) {
                return Some(1);
            }

            Some(n)
        }
        _ if input.starts_with('n') => Some(1),
        _ => None,
    }
}

fn policy(
    invalid: Invalid,
    kind: fn(Box<str>, usize) -> ErrorKind,
) -> impl FnMut(&mut String, &str, usize) -> Result<(), Error> {
    move |out, text, at| match invalid {
        Invalid::Pass => {
            out.push_str(text);
            Ok(())
        }
        Invalid::Omit => Ok(()),
        Invalid::Error => Err(Error::new(kind(text.into(), at))),
    }
}

fn pass(out: &mut String, text: &str, _: usize) -> Result<(), Infallible> {
    out.push_str(text);
    Ok(())
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => match error {},
    }
}
