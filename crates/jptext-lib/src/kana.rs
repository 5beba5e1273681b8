//! Per-character classification of kana.
//!
//! The tables here cover the hiragana, katakana and half-width katakana
//! blocks and assign each code point the role it plays in a mora. They are
//! shared by every kana [`Charset`], which restricts them to its own script.
//!
//! [`Charset`]: crate::charset::Charset

/// The role a character plays when assembling a mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Class {
    /// Large kana, like `か` or `ア`.
    Large,
    /// Small kana which combines with a preceding large kana, like `ゃ`.
    Combining,
    /// Small kana which stands on its own, like `ヵ`.
    Small,
    /// The geminate marker, `っ` or `ッ`.
    Sokuon,
    /// Voiced and semi-voiced sound marks.
    Stress,
    /// Marks appearing inside of words, like `ー` or `・`.
    Intraword,
    /// Iteration marks, like `ゝ`.
    Repeat,
    /// Ligatures, like `ゟ`.
    Ligature,
    /// Not kana.
    Other,
}

impl Class {
    /// Test if the class can start a mora.
    #[inline]
    pub fn is_base(self) -> bool {
        !matches!(self, Class::Combining | Class::Stress | Class::Other)
    }
}

mod tables {
    use super::Class;

    const U: Class = Class::Large;
    const L: Class = Class::Combining;
    const N: Class = Class::Small;
    const S: Class = Class::Sokuon;
    const D: Class = Class::Stress;
    const I: Class = Class::Intraword;
    const R: Class = Class::Repeat;
    const G: Class = Class::Ligature;
    const X: Class = Class::Other;

    pub(super) static HIRA_B: u32 = 0x3040;

    #[rustfmt::skip]
    pub(super) static HIRA_T: [Class; 0x60] = [
        /*U+304x*/
        /*　*/ X, /*ぁ*/ L, /*あ*/ U, /*ぃ*/ L, /*い*/ U, /*ぅ*/ L, /*う*/ U, /*ぇ*/ L,
        /*え*/ U, /*ぉ*/ L, /*お*/ U, /*か*/ U, /*が*/ U, /*き*/ U, /*ぎ*/ U, /*く*/ U,
        /*U+305x*/
        /*ぐ*/ U, /*け*/ U, /*げ*/ U, /*こ*/ U, /*ご*/ U, /*さ*/ U, /*ざ*/ U, /*し*/ U,
        /*じ*/ U, /*す*/ U, /*ず*/ U, /*せ*/ U, /*ぜ*/ U, /*そ*/ U, /*ぞ*/ U, /*た*/ U,
        /*U+306x*/
        /*だ*/ U, /*ち*/ U, /*ぢ*/ U, /*っ*/ S, /*つ*/ U, /*づ*/ U, /*て*/ U, /*で*/ U,
        /*と*/ U, /*ど*/ U, /*な*/ U, /*に*/ U, /*ぬ*/ U, /*ね*/ U, /*の*/ U, /*は*/ U,
        /*U+307x*/
        /*ば*/ U, /*ぱ*/ U, /*ひ*/ U, /*び*/ U, /*ぴ*/ U, /*ふ*/ U, /*ぶ*/ U, /*ぷ*/ U,
        /*へ*/ U, /*べ*/ U, /*ぺ*/ U, /*ほ*/ U, /*ぼ*/ U, /*ぽ*/ U, /*ま*/ U, /*み*/ U,
        /*U+308x*/
        /*む*/ U, /*め*/ U, /*も*/ U, /*ゃ*/ L, /*や*/ U, /*ゅ*/ L, /*ゆ*/ U, /*ょ*/ L,
        /*よ*/ U, /*ら*/ U, /*り*/ U, /*る*/ U, /*れ*/ U, /*ろ*/ U, /*ゎ*/ L, /*わ*/ U,
        /*U+309x*/
        /*ゐ*/ U, /*ゑ*/ U, /*を*/ U, /*ん*/ U, /*ゔ*/ U, /*ゕ*/ N, /*ゖ*/ N, /*　*/ X,
        /*　*/ X, /*゙*/ D, /*゚*/ D, /*゛*/ D, /*゜*/ D, /*ゝ*/ R, /*ゞ*/ R, /*ゟ*/ G,
    ];

    pub(super) static KATA_B: u32 = 0x30a0;

    #[rustfmt::skip]
    pub(super) static KATA_T: [Class; 0x60] = [
        /*U+30Ax */
        /*゠*/ I, /*ァ*/ L, /*ア*/ U, /*ィ*/ L, /*イ*/ U, /*ゥ*/ L, /*ウ*/ U, /*ェ*/ L,
        /*エ*/ U, /*ォ*/ L, /*オ*/ U, /*カ*/ U, /*ガ*/ U, /*キ*/ U, /*ギ*/ U, /*ク*/ U,
        /*U+30Bx */
        /*グ*/ U, /*ケ*/ U, /*ゲ*/ U, /*コ*/ U, /*ゴ*/ U, /*サ*/ U, /*ザ*/ U, /*シ*/ U,
        /*ジ*/ U, /*ス*/ U, /*ズ*/ U, /*セ*/ U, /*ゼ*/ U, /*ソ*/ U, /*ゾ*/ U, /*タ*/ U,
        /*U+30Cx */
        /*ダ*/ U, /*チ*/ U, /*ヂ*/ U, /*ッ*/ S, /*ツ*/ U, /*ヅ*/ U, /*テ*/ U, /*デ*/ U,
        /*ト*/ U, /*ド*/ U, /*ナ*/ U, /*ニ*/ U, /*ヌ*/ U, /*ネ*/ U, /*ノ*/ U, /*ハ*/ U,
        /*U+30Dx */
        /*バ*/ U, /*パ*/ U, /*ヒ*/ U, /*ビ*/ U, /*ピ*/ U, /*フ*/ U, /*ブ*/ U, /*プ*/ U,
        /*ヘ*/ U, /*ベ*/ U, /*ペ*/ U, /*ホ*/ U, /*ボ*/ U, /*ポ*/ U, /*マ*/ U, /*ミ*/ U,
        /*U+30Ex */
        /*ム*/ U, /*メ*/ U, /*モ*/ U, /*ャ*/ L, /*ヤ*/ U, /*ュ*/ L, /*ユ*/ U, /*ョ*/ L,
        /*ヨ*/ U, /*ラ*/ U, /*リ*/ U, /*ル*/ U, /*レ*/ U, /*ロ*/ U, /*ヮ*/ L, /*ワ*/ U,
        /*U+30Fx */
        /*ヰ*/ U, /*ヱ*/ U, /*ヲ*/ U, /*ン*/ U, /*ヴ*/ U, /*ヵ*/ N, /*ヶ*/ N, /*ヷ*/ U,
        /*ヸ*/ U, /*ヹ*/ U, /*ヺ*/ U, /*・*/ I, /*ー*/ I, /*ヽ*/ R, /*ヾ*/ R, /*ヿ*/ G,
    ];

    pub(super) static HALF_B: u32 = 0xff60;

    #[rustfmt::skip]
    pub(super) static HALF_T: [Class; 0x40] = [
        /*U+FF6x */
        /*｠*/ X, /*｡*/ X, /*｢*/ X, /*｣*/ X, /*､*/ X, /*･*/ I, /*ｦ*/ U, /*ｧ*/ L,
        /*ｨ*/ L, /*ｩ*/ L, /*ｪ*/ L, /*ｫ*/ L, /*ｬ*/ L, /*ｭ*/ L, /*ｮ*/ L, /*ｯ*/ S,
        /*U+FF7x */
        /*ｰ*/ I, /*ｱ*/ U, /*ｲ*/ U, /*ｳ*/ U, /*ｴ*/ U, /*ｵ*/ U, /*ｶ*/ U, /*ｷ*/ U,
        /*ｸ*/ U, /*ｹ*/ U, /*ｺ*/ U, /*ｻ*/ U, /*ｼ*/ U, /*ｽ*/ U, /*ｾ*/ U, /*ｿ*/ U,
        /*U+FF8x */
        /*ﾀ*/ U, /*ﾁ*/ U, /*ﾂ*/ U, /*ﾃ*/ U, /*ﾄ*/ U, /*ﾅ*/ U, /*ﾆ*/ U, /*ﾇ*/ U,
        /*ﾈ*/ U, /*ﾉ*/ U, /*ﾊ*/ U, /*ﾋ*/ U, /*ﾌ*/ U, /*ﾍ*/ U, /*ﾎ*/ U, /*ﾏ*/ U,
        /*U+FF9x */
        /*ﾐ*/ U, /*ﾑ*/ U, /*ﾒ*/ U, /*ﾓ*/ U, /*ﾔ*/ U, /*ﾕ*/ U, /*ﾖ*/ U, /*ﾗ*/ U,
        /*ﾘ*/ U, /*ﾙ*/ U, /*ﾚ*/ U, /*ﾛ*/ U, /*ﾜ*/ U, /*ﾝ*/ U, /*ﾞ*/ D, /*ﾟ*/ D,
    ];
}

/// Classify a character in any kana script.
pub fn class(c: char) -> Class {
    lookup(c, tables::HIRA_B, &tables::HIRA_T)
        .or_else(|| lookup(c, tables::KATA_B, &tables::KATA_T))
        .or_else(|| lookup(c, tables::HALF_B, &tables::HALF_T))
        .unwrap_or(Class::Other)
}

/// Test if a character is a hiragana letter.
#[inline]
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309f}')
}

/// Test if a character is a katakana letter.
#[inline]
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30a1}'..='\u{30fa}' | '\u{30ff}')
}

/// Test if a character is read as written in furigana, which covers kana
/// letters and the prolonged sound mark.
#[inline]
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || c == 'ー'
}

fn lookup(c: char, base: u32, table: &[Class]) -> Option<Class> {
    let index = (c as u32).checked_sub(base)?;
    let index = usize::try_from(index).ok()?;
    table.get(index).copied()
}
