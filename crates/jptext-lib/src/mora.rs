//! Mora grammars over kana.
//!
//! A mora is `base [stress]? [combining]?`, where the base is a large kana, a
//! small kana which doesn't combine, a ligature, an iteration mark, a sokuon
//! or an intraword mark.
//!
//! The sokuon grammar used for transliteration only accepts a sokuon directly
//! in front of a large kana, since it doubles the consonant of the syllable
//! which follows it.

use crate::kana::{self, Class};

/// A function classifying characters for the grammar.
pub type Classify = fn(char) -> Class;

/// Construct an iterator over morae in the given input.
///
/// Characters which don't start a mora are yielded one at a time.
pub fn iter(input: &str) -> Morae<'_> {
    Morae {
        input,
        classify: kana::class,
    }
}

/// Iterate over morae.
pub struct Morae<'a> {
    input: &'a str,
    classify: Classify,
}

impl<'a> Morae<'a> {
    /// Iterate over morae using a custom classification.
    pub fn with_classify(input: &'a str, classify: Classify) -> Self {
        Self { input, classify }
    }
}

impl<'a> Iterator for Morae<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.input.chars().next()?;
        let end = mora_len(self.input, self.classify).unwrap_or(c.len_utf8());
        let (head, tail) = self.input.split_at(end);
        self.input = tail;
        Some(head)
    }
}

/// Length in bytes of the mora at the start of `input`, if there is one.
pub fn mora_len(input: &str, classify: Classify) -> Option<usize> {
    let c = input.chars().next()?;

    if !classify(c).is_base() {
        return None;
    }

    Some(tail(input, c.len_utf8(), classify))
}

/// Length in bytes of the mora at the start of `input` under the sokuon
/// grammar, if there is one.
pub fn sokuon_mora_len(input: &str, classify: Classify) -> Option<usize> {
    let mut it = input.chars();
    let a = it.next()?;

    match classify(a) {
        Class::Sokuon => {
            let b = it.next()?;

            if classify(b) != Class::Large {
                return None;
            }

            Some(tail(input, a.len_utf8() + b.len_utf8(), classify))
        }
        Class::Large => Some(tail(input, a.len_utf8(), classify)),
        Class::Small | Class::Ligature | Class::Repeat | Class::Intraword => Some(a.len_utf8()),
        _ => None,
    }
}

/// Extend a mora ending at `end` with an optional stress mark followed by an
/// optional combining kana.
fn tail(input: &str, mut end: usize, classify: Classify) -> usize {
    for class in [Class::Stress, Class::Combining] {
        if let Some(c) = input[end..].chars().next() {
            if classify(c) == class {
                end += c.len_utf8();
            }
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{HIRAGANA, KATAKANA_HALFWIDTH};

    #[test]
    fn count_morae() {
        let input = "ひらがな";
        let morae: Vec<_> = iter(input).collect();
        assert_eq!(morae, vec!["ひ", "ら", "が", "な"]);

        let input = "とうきょう";
        let morae: Vec<_> = iter(input).collect();
        assert_eq!(morae, vec!["と", "う", "きょ", "う"]);

        let input = "モーラ";
        let morae: Vec<_> = iter(input).collect();
        assert_eq!(morae, vec!["モ", "ー", "ラ"]);

        let input = "ちょっと";
        let morae: Vec<_> = iter(input).collect();
        assert_eq!(morae, vec!["ちょ", "っ", "と"]);
    }

    #[test]
    fn stress_then_combining() {
        let input = "リ゜ャン";
        let morae: Vec<_> = iter(input).collect();
        assert_eq!(morae, vec!["リ゜ャ", "ン"]);
    }

    #[test]
    fn non_kana_passes_one_at_a_time() {
        let morae: Vec<_> = iter("aゃか").collect();
        assert_eq!(morae, vec!["a", "ゃ", "か"]);
    }

    #[test]
    fn halfwidth_morae() {
        let morae: Vec<_> =
            Morae::with_classify("ｶﾞｯｷｮｰ", |c| KATAKANA_HALFWIDTH.class(c)).collect();
        assert_eq!(morae, vec!["ｶﾞ", "ｯ", "ｷｮ", "ｰ"]);
    }

    #[test]
    fn sokuon_grammar() {
        let classify: Classify = |c| HIRAGANA.class(c);

        assert_eq!(sokuon_mora_len("っきょう", classify), Some("っきょ".len()));
        assert_eq!(sokuon_mora_len("っ", classify), None);
        assert_eq!(sokuon_mora_len("っゃ", classify), None);
        assert_eq!(sokuon_mora_len("ゃ", classify), None);
        assert_eq!(sokuon_mora_len("ーか", classify), Some("ー".len()));
        assert_eq!(sokuon_mora_len("カ", classify), None);

        assert_eq!(mora_len("っか", classify), Some("っ".len()));
    }
}
