use std::collections::HashMap;

use super::*;
use crate::readings::ReadingTable;

use FuriganaGroup::Kana as Kn;
use FuriganaGroup::Kanji as K;

fn table(entries: &[(char, &[&str])]) -> HashMap<char, Vec<String>> {
    entries
        .iter()
        .map(|&(c, readings)| (c, readings.iter().map(|r| r.to_string()).collect()))
        .collect()
}

macro_rules! test_case {
    ($readings:expr, $kanji:expr, $kana:expr, $expected:expr) => {
        assert_eq!(align($kanji, $kana, &$readings).unwrap(), $expected);
    };
}

#[test]
fn okurigana() {
    let t = table(&[('食', &["ショク", "た.べる"])]);
    test_case!(t, "食べる", "たべる", [K("食", "た"), Kn("べ"), Kn("る")]);
}

#[test]
fn single_candidates() {
    let t = table(&[('大', &["たい"]), ('変', &["へん"])]);
    test_case!(t, "大変", "たいへん", [K("大", "たい"), K("変", "へん")]);
}

#[test]
fn incompatible_reading_is_kept_whole() {
    let t = table(&[('大', &["たい"]), ('変', &["へん"])]);
    test_case!(t, "大変", "ぜんぜん", [K("大変", "ぜんぜん")]);

    let t = table(&[('二', &["に"]), ('人', &["ひと", "にん"])]);
    test_case!(t, "二人", "ふたり", [K("二人", "ふたり")]);
}

#[test]
fn unknown_kanji() {
    let t = HashMap::<char, Vec<String>>::new();
    test_case!(t, "猫", "ねこ", [K("猫", "ねこ")]);

    let t = table(&[('東', &["トウ"])]);
    test_case!(t, "東京", "とうきょう", [K("東", "とう"), K("京", "きょう")]);
    test_case!(t, "東京へ", "とうきょうへ", [K("東", "とう"), K("京", "きょう"), Kn("へ")]);
}

#[test]
fn relax_one_position() {
    let t = table(&[('手', &["て"]), ('紙', &["かみ"])]);
    test_case!(t, "手紙", "てがみ", [K("手", "て"), K("紙", "がみ")]);

    let t = table(&[('日', &["に", "にち"]), ('本', &["ほん"])]);
    test_case!(t, "日本", "にっぽん", [K("日", "に"), K("本", "っぽん")]);
}

#[test]
fn kana_prefix() {
    let t = table(&[('金', &["キン", "かね"]), ('私', &["わたくし", "わたし"])]);

    test_case!(t, "お金", "おかね", [Kn("お"), K("金", "かね")]);

    test_case!(
        t,
        "私はお金がない",
        "わたしはおかねがない",
        [
            K("私", "わたし"),
            Kn("は"),
            Kn("お"),
            K("金", "かね"),
            Kn("が"),
            Kn("な"),
            Kn("い")
        ]
    );
}

#[test]
fn katakana_is_literal() {
    let t = table(&[('瓶', &["ビン"])]);

    test_case!(
        t,
        "ビール瓶",
        "ビールびん",
        [Kn("ビ"), Kn("ー"), Kn("ル"), K("瓶", "びん")]
    );

    assert!(align("ビール瓶", "びーるびん", &t).is_err());
}

#[test]
fn kana_morae() {
    let t = HashMap::<char, Vec<String>>::new();
    test_case!(t, "ちょっと", "ちょっと", [Kn("ちょ"), Kn("っ"), Kn("と")]);
}

#[test]
fn skeleton_mismatch() {
    let t = table(&[('食', &["た.べる"])]);

    let error = align("食べる", "たべた", &t).unwrap_err();
    assert_eq!(error.kanji(), "食べる");
    assert_eq!(error.reading(), "たべた");

    // Left over reading.
    assert!(align("食べる", "たべるよ", &t).is_err());
    // Kanji need at least one character of reading.
    assert!(align("食べる", "べる", &t).is_err());
    // Trailing kana missing from the reading.
    assert!(align("大変だ", "たいへん", &t).is_err());
}

#[test]
fn empty_inputs() {
    let t = HashMap::<char, Vec<String>>::new();
    assert!(align("", "", &t).unwrap().is_empty());
    assert!(align("", "あ", &t).is_err());
    assert!(align("漢", "", &t).is_err());
}

#[test]
fn reading_table() {
    let t = ReadingTable::from_json(r#"{"食": {"on": ["ショク", "ジキ"], "kun": ["く.う", "た.べる"]}}"#)
        .unwrap();

    test_case!(t, "食べる", "たべる", [K("食", "た"), Kn("べ"), Kn("る")]);
    test_case!(t, "食堂", "しょくどう", [K("食", "しょく"), K("堂", "どう")]);
}

#[test]
fn normalized_candidates() {
    let out = normalize(vec!["ショク", "た.べる", "-た", "く.う", "たべる"]);
    assert_eq!(out, ["しょく", "た", "たべる", "く", "くう"]);

    assert!(normalize(vec!["-", "."]).is_empty());
}

#[test]
fn display() {
    let t = table(&[('食', &["た.べる"]), ('大', &["たい"]), ('変', &["へん"])]);

    let furigana = Furigana::new("食べる", "たべる", &t).unwrap();
    assert_eq!(furigana.to_string(), "食[た]べる");
    assert_eq!(furigana.groups().len(), 3);

    let furigana = Furigana::new("大変", "たいへん", &t).unwrap();
    assert_eq!(furigana.to_string(), "大[たい]変[へん]");
}

#[test]
fn ruby_markup() {
    let t = table(&[('食', &["た.べる"])]);

    assert_eq!(
        ruby("食べる", "たべる", &t).unwrap(),
        "<ruby><rb>食</rb><rt>た</rt><rb>べ</rb><rt></rt><rb>る</rb><rt></rt></ruby>"
    );

    assert_eq!(
        render_ruby(&[K("<a>", "\"x'&")]),
        "<ruby><rb>&lt;a&gt;</rb><rt>&quot;x&#x27;&amp;</rt></ruby>"
    );
}
