//! Writing system classes and conversions between them.
//!
//! Each [`Charset`] is a static description of a script: the code point
//! ranges it covers plus named subranges of the characters which make up
//! morae. Conversions between scripts are total, anything which has no
//! counterpart is passed through as-is.

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::RangeInclusive;

use unicode_normalization::char::{compose, decompose_canonical};

use crate::kana::{self, Class};

/// A writing system class.
pub struct Charset {
    name: &'static str,
    /// Letters of the script, excluding symbols found in its block.
    letters: &'static [RangeInclusive<char>],
    /// The whole block of the script, symbols included.
    block: &'static [RangeInclusive<char>],
    /// Punctuation used alongside the script.
    punctuation: &'static [RangeInclusive<char>],
    /// Vowels.
    pub vowels: &'static str,
    /// Large kana, which can start a mora.
    pub large: &'static str,
    /// All small kana.
    pub small: &'static str,
    /// Small kana which combine with a preceding large kana.
    pub combining: &'static str,
    /// Small kana which stand on their own.
    pub small_non_combining: &'static str,
    /// The geminate marker.
    pub sokuon: &'static str,
    /// Voiced and semi-voiced sound marks.
    pub stresses: &'static str,
    /// Marks used inside of words.
    pub intraword: &'static str,
    /// Iteration marks.
    pub repeats: &'static str,
    /// Ligatures.
    pub ligatures: &'static str,
}

impl Charset {
    const fn new(
        name: &'static str,
        letters: &'static [RangeInclusive<char>],
        block: &'static [RangeInclusive<char>],
        punctuation: &'static [RangeInclusive<char>],
    ) -> Self {
        Self {
            name,
            letters,
            block,
            punctuation,
            vowels: "",
            large: "",
            small: "",
            combining: "",
            small_non_combining: "",
            sokuon: "",
            stresses: "",
            intraword: "",
            repeats: "",
            ligatures: "",
        }
    }

    /// The name of the character set.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Test if a single character belongs to this class.
    ///
    /// Without punctuation only the letters of the script are accepted. With
    /// punctuation, symbols from the block of the script and its associated
    /// punctuation are accepted as well.
    pub fn contains(&self, c: char, allow_punctuation: bool) -> bool {
        if in_ranges(self.letters, c) {
            return true;
        }

        allow_punctuation && (in_ranges(self.block, c) || in_ranges(self.punctuation, c))
    }

    /// Test if every character in `text` belongs to this class.
    ///
    /// The empty string belongs to no class.
    pub fn is_class(&self, text: &str, allow_punctuation: bool) -> bool {
        !text.is_empty() && text.chars().all(|c| self.contains(c, allow_punctuation))
    }

    /// Iterate over maximal runs of characters belonging to this class.
    pub fn runs<'a>(&'a self, text: &'a str, allow_punctuation: bool) -> Runs<'a> {
        Runs {
            charset: self,
            input: text,
            allow_punctuation,
        }
    }

    /// Classify a character by the part it plays in a mora of this script.
    ///
    /// Characters which are not kana of this script are [`Class::Other`].
    pub fn class(&self, c: char) -> Class {
        let owned = in_ranges(self.block, c)
            || self.stresses.contains(c)
            || self.intraword.contains(c);

        if owned {
            kana::class(c)
        } else {
            Class::Other
        }
    }
}

impl fmt::Debug for Charset {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name).finish()
    }
}

/// Iterator over runs of a character class, see [`Charset::runs`].
#[derive(Clone)]
pub struct Runs<'a> {
    charset: &'a Charset,
    input: &'a str,
    allow_punctuation: bool,
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let charset = self.charset;
        let allow_punctuation = self.allow_punctuation;

        let Some(start) = self
            .input
            .find(|c| charset.contains(c, allow_punctuation))
        else {
            self.input = "";
            return None;
        };

        let rest = &self.input[start..];

        let end = rest
            .find(|c| !charset.contains(c, allow_punctuation))
            .unwrap_or(rest.len());

        let (run, tail) = rest.split_at(end);
        self.input = tail;
        Some(run)
    }
}

static FULLWIDTH_PUNCTUATION: &[RangeInclusive<char>] = &[
    '\u{3001}'..='\u{303e}',
    '\u{ff01}'..='\u{ff0f}',
    '\u{ff1a}'..='\u{ff20}',
    '\u{ff3b}'..='\u{ff40}',
    '\u{ff5b}'..='\u{ff60}',
];

static HALFWIDTH_PUNCTUATION: &[RangeInclusive<char>] = &[
    '\u{0020}'..='\u{002f}',
    '\u{003a}'..='\u{0040}',
    '\u{005b}'..='\u{0060}',
    '\u{007b}'..='\u{007e}',
    '\u{ff61}'..='\u{ff64}',
];

/// Hiragana.
pub static HIRAGANA: Charset = Charset {
    vowels: "あいうえお",
    large: "あいうえおかがきぎくぐけげこごさざしじすずせぜそぞただちぢつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽまみむめもやゆよらりるれろわゐゑをんゔ",
    small: "ぁぃぅぇぉっゃゅょゎゕゖ",
    combining: "ぁぃぅぇぉゃゅょゎ",
    small_non_combining: "ゕゖ",
    sokuon: "っ",
    stresses: "\u{3099}\u{309a}゛゜",
    intraword: "・ー",
    repeats: "ゝゞ",
    ligatures: "ゟ",
    ..Charset::new(
        "hiragana",
        &['\u{3041}'..='\u{3096}', '\u{309f}'..='\u{309f}'],
        &['\u{3040}'..='\u{309f}', '\u{30fb}'..='\u{30fc}'],
        FULLWIDTH_PUNCTUATION,
    )
};

/// Full-width katakana.
pub static KATAKANA: Charset = Charset {
    vowels: "アイウエオ",
    large: "アイウエオカガキギクグケゲコゴサザシジスズセゼソゾタダチヂツヅテデトドナニヌネノハバパヒビピフブプヘベペホボポマミムメモヤユヨラリルレロワヰヱヲンヴヷヸヹヺ",
    small: "ァィゥェォッャュョヮヵヶ",
    combining: "ァィゥェォャュョヮ",
    small_non_combining: "ヵヶ",
    sokuon: "ッ",
    stresses: "\u{3099}\u{309a}゛゜",
    intraword: "゠・ー",
    repeats: "ヽヾ",
    ligatures: "ヿ",
    ..Charset::new(
        "katakana",
        &['\u{30a1}'..='\u{30fa}', '\u{30ff}'..='\u{30ff}'],
        &['\u{3099}'..='\u{309c}', '\u{30a0}'..='\u{30ff}'],
        FULLWIDTH_PUNCTUATION,
    )
};

/// Half-width katakana.
pub static KATAKANA_HALFWIDTH: Charset = Charset {
    vowels: "ｱｲｳｴｵ",
    large: "ｦｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ",
    small: "ｧｨｩｪｫｬｭｮｯ",
    combining: "ｧｨｩｪｫｬｭｮ",
    sokuon: "ｯ",
    stresses: "ﾞﾟ",
    intraword: "･ｰ",
    ..Charset::new(
        "katakana-halfwidth",
        &['\u{ff66}'..='\u{ff6f}', '\u{ff71}'..='\u{ff9d}'],
        &['\u{ff65}'..='\u{ff9f}'],
        HALFWIDTH_PUNCTUATION,
    )
};

/// Kanji, including the iteration mark `々`.
pub static KANJI: Charset = Charset::new(
    "kanji",
    &[
        '\u{3005}'..='\u{3005}',
        '\u{3400}'..='\u{4db5}',
        '\u{4e00}'..='\u{9fcb}',
        '\u{f900}'..='\u{fa6a}',
    ],
    &[],
    FULLWIDTH_PUNCTUATION,
);

/// Full-width ASCII, such as `ＡＢＣ`.
pub static ASCII_FULLWIDTH: Charset = Charset::new(
    "ascii-fullwidth",
    &[
        '\u{ff10}'..='\u{ff19}',
        '\u{ff21}'..='\u{ff3a}',
        '\u{ff41}'..='\u{ff5a}',
    ],
    &['\u{3000}'..='\u{3000}', '\u{ff01}'..='\u{ff5e}'],
    FULLWIDTH_PUNCTUATION,
);

/// Half-width ASCII.
pub static ASCII_HALFWIDTH: Charset = Charset::new(
    "ascii-halfwidth",
    &['0'..='9', 'A'..='Z', 'a'..='z'],
    &['\u{0020}'..='\u{007e}'],
    HALFWIDTH_PUNCTUATION,
);

/// Every writing system class.
pub static ALL: [&Charset; 6] = [
    &HIRAGANA,
    &KATAKANA,
    &KATAKANA_HALFWIDTH,
    &KANJI,
    &ASCII_FULLWIDTH,
    &ASCII_HALFWIDTH,
];

/// Full-width katakana and their half-width counterpart. Voiced forms are
/// absent since they are handled through decomposition.
#[rustfmt::skip]
static KATAKANA_WIDTH: &[(char, char)] = &[
    ('ァ', 'ｧ'), ('ア', 'ｱ'), ('ィ', 'ｨ'), ('イ', 'ｲ'), ('ゥ', 'ｩ'),
    ('ウ', 'ｳ'), ('ェ', 'ｪ'), ('エ', 'ｴ'), ('ォ', 'ｫ'), ('オ', 'ｵ'),
    ('カ', 'ｶ'), ('キ', 'ｷ'), ('ク', 'ｸ'), ('ケ', 'ｹ'), ('コ', 'ｺ'),
    ('サ', 'ｻ'), ('シ', 'ｼ'), ('ス', 'ｽ'), ('セ', 'ｾ'), ('ソ', 'ｿ'),
    ('タ', 'ﾀ'), ('チ', 'ﾁ'), ('ッ', 'ｯ'), ('ツ', 'ﾂ'), ('テ', 'ﾃ'), ('ト', 'ﾄ'),
    ('ナ', 'ﾅ'), ('ニ', 'ﾆ'), ('ヌ', 'ﾇ'), ('ネ', 'ﾈ'), ('ノ', 'ﾉ'),
    ('ハ', 'ﾊ'), ('ヒ', 'ﾋ'), ('フ', 'ﾌ'), ('ヘ', 'ﾍ'), ('ホ', 'ﾎ'),
    ('マ', 'ﾏ'), ('ミ', 'ﾐ'), ('ム', 'ﾑ'), ('メ', 'ﾒ'), ('モ', 'ﾓ'),
    ('ャ', 'ｬ'), ('ヤ', 'ﾔ'), ('ュ', 'ｭ'), ('ユ', 'ﾕ'), ('ョ', 'ｮ'), ('ヨ', 'ﾖ'),
    ('ラ', 'ﾗ'), ('リ', 'ﾘ'), ('ル', 'ﾙ'), ('レ', 'ﾚ'), ('ロ', 'ﾛ'),
    ('ワ', 'ﾜ'), ('ヲ', 'ｦ'), ('ン', 'ﾝ'),
    ('・', '･'), ('ー', 'ｰ'),
];

const VOICED: char = '\u{3099}';
const SEMI_VOICED: char = '\u{309a}';

/// Convert hiragana to katakana.
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' | 'ゝ' | 'ゞ' => shift(c, 0x60, true),
            c => c,
        })
        .collect()
}

/// Convert katakana to hiragana.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{30a1}'..='\u{30f6}' | 'ヽ' | 'ヾ' => shift(c, 0x60, false),
            c => c,
        })
        .collect()
}

/// Convert full-width katakana to half-width katakana.
///
/// Voiced syllables are decomposed so that their sound mark can be written
/// as a separate half-width mark. Everything else is copied as-is.
pub fn katakana_fullwidth_to_halfwidth(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_halfwidth = false;

    for c in text.chars() {
        after_halfwidth = match c {
            VOICED | SEMI_VOICED if after_halfwidth => {
                out.push(halfwidth_mark(c));
                false
            }
            '゛' | '゜' => {
                out.push(halfwidth_mark(c));
                false
            }
            c => {
                if let Some(half) = halfwidth(c) {
                    out.push(half);
                    true
                } else if let Some((half, mark)) = halfwidth_voiced(c) {
                    out.push(half);
                    out.push(mark);
                    false
                } else {
                    out.push(c);
                    false
                }
            }
        };
    }

    out
}

/// Convert half-width katakana to full-width katakana.
///
/// Sound marks following a kana are composed with it where a precomposed
/// form exists, and otherwise written as combining marks.
pub fn katakana_halfwidth_to_fullwidth(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut after_kana = false;

    for c in text.chars() {
        after_kana = match c {
            'ﾞ' | 'ﾟ' => {
                let (combining, spacing) = match c {
                    'ﾞ' => (VOICED, '゛'),
                    _ => (SEMI_VOICED, '゜'),
                };

                let base = if after_kana { out.pop() } else { None };

                match base {
                    Some(base) => match compose(base, combining) {
                        Some(composed) => out.push(composed),
                        None => {
                            out.push(base);
                            out.push(combining);
                        }
                    },
                    None => out.push(spacing),
                }

                false
            }
            c => match fullwidth(c) {
                Some(full) => {
                    out.push(full);
                    true
                }
                None => {
                    out.push(c);
                    false
                }
            },
        };
    }

    out
}

fn halfwidth(c: char) -> Option<char> {
    KATAKANA_WIDTH
        .iter()
        .find(|&&(full, _)| full == c)
        .map(|&(_, half)| half)
}

fn fullwidth(c: char) -> Option<char> {
    KATAKANA_WIDTH
        .iter()
        .find(|&&(_, half)| half == c)
        .map(|&(full, _)| full)
}

fn halfwidth_mark(c: char) -> char {
    match c {
        VOICED | '゛' => 'ﾞ',
        _ => 'ﾟ',
    }
}

/// Split a precomposed voiced katakana into its half-width base and sound
/// mark.
fn halfwidth_voiced(c: char) -> Option<(char, char)> {
    if !('\u{30a1}'..='\u{30fa}').contains(&c) {
        return None;
    }

    let mut parts = [None; 2];
    let mut len = 0;

    decompose_canonical(c, |part| {
        if let Some(slot) = parts.get_mut(len) {
            *slot = Some(part);
        }

        len += 1;
    });

    match (len, parts) {
        (2, [Some(base), Some(mark @ (VOICED | SEMI_VOICED))]) => {
            Some((halfwidth(base)?, halfwidth_mark(mark)))
        }
        _ => None,
    }
}

/// Convert full-width ASCII to half-width ASCII.
pub fn ascii_fullwidth_to_halfwidth(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{ff01}'..='\u{ff5e}' => shift(c, 0xfee0, false),
            c => c,
        })
        .collect()
}

/// Convert half-width ASCII to full-width ASCII.
pub fn ascii_halfwidth_to_fullwidth(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' ' => '\u{3000}',
            '!'..='~' => shift(c, 0xfee0, true),
            c => c,
        })
        .collect()
}

fn shift(c: char, n: u32, up: bool) -> char {
    let code = c as u32;
    let code = if up { code.checked_add(n) } else { code.checked_sub(n) };
    code.and_then(char::from_u32).unwrap_or(c)
}

fn in_ranges(ranges: &[RangeInclusive<char>], c: char) -> bool {
    ranges.iter().any(|r| r.contains(&c))
}
