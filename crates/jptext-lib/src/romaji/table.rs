//! Modified Hepburn base table.
//!
//! Rows are listed in priority order. When several rows produce the same
//! lookup key, the first one declared is used.

macro_rules! romaji_table {
    ($(($hira:literal, $kata:literal, $romaji:literal $(, $standard:ident)* $(,)?),)*) => {
        &[$(Entry::new($hira, $kata, $romaji, &[$(Standard::$standard),*]),)*]
    };
}

use super::{Entry, Standard};

#[rustfmt::skip]
pub(super) static TABLE: &[Entry] = romaji_table![
    ("あ", "ア", "a"),
    ("い", "イ", "i"),
    ("う", "ウ", "u"),
    ("え", "エ", "e"),
    ("お", "オ", "o"),
    ("か", "カ", "ka"),
    ("き", "キ", "ki"),
    ("く", "ク", "ku"),
    ("け", "ケ", "ke"),
    ("こ", "コ", "ko"),
    ("きゃ", "キャ", "kya"),
    ("きゅ", "キュ", "kyu"),
    ("きょ", "キョ", "kyo"),
    ("さ", "サ", "sa"),
    ("し", "シ", "shi"),
    ("す", "ス", "su"),
    ("せ", "セ", "se"),
    ("そ", "ソ", "so"),
    ("しゃ", "シャ", "sha"),
    ("しゅ", "シュ", "shu"),
    ("しょ", "ショ", "sho"),
    ("た", "タ", "ta"),
    ("ち", "チ", "chi"),
    ("つ", "ツ", "tsu"),
    ("て", "テ", "te"),
    ("と", "ト", "to"),
    ("ちゃ", "チャ", "cha"),
    ("ちゅ", "チュ", "chu"),
    ("ちょ", "チョ", "cho"),
    ("な", "ナ", "na"),
    ("に", "ニ", "ni"),
    ("ぬ", "ヌ", "nu"),
    ("ね", "ネ", "ne"),
    ("の", "ノ", "no"),
    ("にゃ", "ニャ", "nya"),
    ("にゅ", "ニュ", "nyu"),
    ("にょ", "ニョ", "nyo"),
    ("は", "ハ", "ha"),
    ("ひ", "ヒ", "hi"),
    ("ふ", "フ", "fu"),
    ("へ", "ヘ", "he"),
    ("ほ", "ホ", "ho"),
    ("ひゃ", "ヒャ", "hya"),
    ("ひゅ", "ヒュ", "hyu"),
    ("ひょ", "ヒョ", "hyo"),
    ("ま", "マ", "ma"),
    ("み", "ミ", "mi"),
    ("む", "ム", "mu"),
    ("め", "メ", "me"),
    ("も", "モ", "mo"),
    ("みゃ", "ミャ", "mya"),
    ("みゅ", "ミュ", "myu"),
    ("みょ", "ミョ", "myo"),
    ("や", "ヤ", "ya"),
    ("ゆ", "ユ", "yu"),
    ("よ", "ヨ", "yo"),
    ("ら", "ラ", "ra"),
    ("り", "リ", "ri"),
    ("る", "ル", "ru"),
    ("れ", "レ", "re"),
    ("ろ", "ロ", "ro"),
    ("りゃ", "リャ", "rya"),
    ("りゅ", "リュ", "ryu"),
    ("りょ", "リョ", "ryo"),
    ("わ", "ワ", "wa"),
    // Obsolete kana, romanized like their modern counterpart.
    ("ゐ", "ヰ", "i"),
    ("ゑ", "ヱ", "e"),
    ("を", "ヲ", "o"),
    ("ん", "ン", "n"),
    ("が", "ガ", "ga"),
    ("ぎ", "ギ", "gi"),
    ("ぐ", "グ", "gu"),
    ("げ", "ゲ", "ge"),
    ("ご", "ゴ", "go"),
    ("ぎゃ", "ギャ", "gya"),
    ("ぎゅ", "ギュ", "gyu"),
    ("ぎょ", "ギョ", "gyo"),
    ("ざ", "ザ", "za"),
    ("じ", "ジ", "ji"),
    ("ず", "ズ", "zu"),
    ("ぜ", "ゼ", "ze"),
    ("ぞ", "ゾ", "zo"),
    ("じゃ", "ジャ", "ja"),
    ("じゅ", "ジュ", "ju"),
    ("じょ", "ジョ", "jo"),
    ("だ", "ダ", "da"),
    ("ぢ", "ヂ", "ji"),
    ("づ", "ヅ", "zu"),
    ("で", "デ", "de"),
    ("ど", "ド", "do"),
    ("ぢゃ", "ヂャ", "ja"),
    ("ぢゅ", "ヂュ", "ju"),
    ("ぢょ", "ヂョ", "jo"),
    ("ば", "バ", "ba"),
    ("び", "ビ", "bi"),
    ("ぶ", "ブ", "bu"),
    ("べ", "ベ", "be"),
    ("ぼ", "ボ", "bo"),
    ("びゃ", "ビャ", "bya"),
    ("びゅ", "ビュ", "byu"),
    ("びょ", "ビョ", "byo"),
    ("ぱ", "パ", "pa"),
    ("ぴ", "ピ", "pi"),
    ("ぷ", "プ", "pu"),
    ("ぺ", "ペ", "pe"),
    ("ぽ", "ポ", "po"),
    ("ぴゃ", "ピャ", "pya"),
    ("ぴゅ", "ピュ", "pyu"),
    ("ぴょ", "ピョ", "pyo"),
    ("", "イィ", "yi", Hyojun),
    ("", "イェ", "ye", Ministry, Ansi, Hyojun),
    ("", "ウァ", "wa", Ansi),
    ("", "ウィ", "wi", Ministry, Ansi),
    ("", "ウゥ", "wu", Hyojun),
    ("", "ウェ", "we", Ministry, Ansi),
    ("", "ウォ", "wo", Ministry, Ansi),
    ("", "ウュ", "wyu", Ansi),
    ("", "ヴァ", "va", Ministry, Ansi),
    ("", "ヴィ", "vi", Ministry, Ansi),
    ("", "ヴ", "vu", Ministry, Ansi),
    ("", "ヴェ", "ve", Ministry, Ansi),
    ("", "ヴォ", "vo", Ministry, Ansi),
    ("", "ヴャ", "vya", Ansi),
    ("", "ヴュ", "vyu", Ministry, Ansi),
    ("", "ヴィェ", "vye", Ansi),
    ("", "ヴョ", "vyo", Ansi),
    ("", "ヴヰ", "vi", Ansi),
    ("", "ヴヲ", "vo", Ansi),
    ("", "キェ", "kye", Ansi),
    ("", "ギェ", "gye", Ansi),
    ("", "クァ", "kwa", Ansi),
    ("", "クィ", "kwi", Ansi),
    ("", "クェ", "kwe", Ansi),
    ("", "クォ", "kwo", Ansi),
    ("", "クァ", "qua", Ministry),
    ("", "クィ", "qui", Ministry),
    ("", "クェ", "que", Ministry),
    ("", "クォ", "quo", Ministry),
    ("", "クヮ", "kwa", Ansi),
    ("", "グァ", "gwa", Ansi),
    ("", "グァ", "gua", Ministry),
    ("", "グィ", "gwi", Ansi),
    ("", "グェ", "gwe", Ansi),
    ("", "グォ", "gwo", Ansi),
    ("", "グヮ", "gwa", Ansi),
    ("", "ゲォ", "geo", Ansi),
    ("", "ゲョ", "geyo", Ansi),
    ("", "シェ", "she", Ministry, Ansi, Hyojun),
    ("", "ジェ", "je", Ministry, Ansi),
    ("", "スィ", "si", Hyojun),
    ("", "ズィ", "zi", Hyojun),
    ("", "チェ", "che", Ministry, Ansi, Hyojun),
    ("", "ツァ", "tsa", Ministry, Ansi, Hyojun),
    ("", "ツィ", "tsi", Ministry, Ansi, Hyojun),
    ("", "ツェ", "tse", Ministry, Ansi, Hyojun),
    ("", "ツォ", "tso", Ministry, Ansi, Hyojun),
    ("", "ツュ", "tsyu", Ansi),
    ("", "ティ", "ti", Ministry, Ansi, Hyojun),
    ("", "トゥ", "tu", Ministry, Ansi, Hyojun),
    ("", "テュ", "tyu", Ministry, Ansi),
    ("", "ディ", "di", Ministry, Ansi),
    ("", "ドゥ", "du", Ministry, Ansi),
    ("", "デュ", "dyu", Ansi),
    ("", "デュ", "du", Ministry),
    ("", "ニェ", "nye", Ansi),
    ("", "ヒェ", "hye", Ansi),
    ("", "ビェ", "bye", Ansi),
    ("", "ピェ", "pye", Ansi),
    ("", "ファ", "fa", Ministry, Ansi, Hyojun),
    ("", "フィ", "fi", Ministry, Ansi, Hyojun),
    ("", "フェ", "fe", Ministry, Ansi, Hyojun),
    ("", "フォ", "fo", Ministry, Ansi, Hyojun),
    ("", "フャ", "fya", Ansi),
    ("", "フュ", "fyu", Ministry, Ansi),
    ("", "フィェ", "fye", Ansi),
    ("", "フョ", "fyo", Ansi),
    ("", "ホゥ", "hu", Hyojun),
    ("", "ミェ", "mye", Ansi),
    ("", "リェ", "rye", Ansi),
    ("", "ラ゜", "la", Hyojun),
    ("", "リ゜", "li", Hyojun),
    ("", "ル゜", "lu", Hyojun),
    ("", "レ゜", "le", Hyojun),
    ("", "ロ゜", "lo", Hyojun),
    ("", "リ゜ャ", "lya", Hyojun),
    ("", "リ゜ュ", "lyu", Hyojun),
    ("", "リ゜ェ", "lye", Hyojun),
    ("", "リ゜ョ", "lyo", Hyojun),
    ("", "ヷ", "va", Ansi, Hyojun),
    ("", "ヸ", "vi", Ansi, Hyojun),
    ("", "ヹ", "ve", Ansi),
    ("", "ヺ", "vo", Ansi),
];
