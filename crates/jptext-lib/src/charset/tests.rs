use super::*;

fn subranges(charset: &Charset) -> [(&'static str, Class); 8] {
    [
        (charset.large, Class::Large),
        (charset.combining, Class::Combining),
        (charset.small_non_combining, Class::Small),
        (charset.sokuon, Class::Sokuon),
        (charset.stresses, Class::Stress),
        (charset.intraword, Class::Intraword),
        (charset.repeats, Class::Repeat),
        (charset.ligatures, Class::Ligature),
    ]
}

#[test]
fn subranges_are_disjoint() {
    for charset in ALL {
        let ranges = subranges(charset);

        for (i, (a, _)) in ranges.iter().enumerate() {
            for (b, _) in &ranges[i + 1..] {
                for c in a.chars() {
                    assert!(
                        !b.contains(c),
                        "{charset:?}: {c:?} appears in both {a:?} and {b:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn small_is_union_of_parts() {
    for charset in ALL {
        let mut expected = charset
            .combining
            .chars()
            .chain(charset.small_non_combining.chars())
            .chain(charset.sokuon.chars())
            .collect::<Vec<_>>();

        let mut actual = charset.small.chars().collect::<Vec<_>>();

        expected.sort();
        actual.sort();
        assert_eq!(actual, expected, "{charset:?}");
    }
}

#[test]
fn class_agrees_with_subranges() {
    for charset in [&HIRAGANA, &KATAKANA, &KATAKANA_HALFWIDTH] {
        for (chars, class) in subranges(charset) {
            for c in chars.chars() {
                assert_eq!(charset.class(c), class, "{charset:?}: {c:?}");
            }
        }
    }
}

#[test]
fn class_is_restricted_to_script() {
    assert_eq!(HIRAGANA.class('か'), Class::Large);
    assert_eq!(HIRAGANA.class('カ'), Class::Other);
    assert_eq!(KATAKANA.class('か'), Class::Other);
    assert_eq!(KATAKANA.class('ッ'), Class::Sokuon);
    assert_eq!(HIRAGANA.class('ー'), Class::Intraword);
    assert_eq!(KATAKANA.class('ー'), Class::Intraword);
    assert_eq!(KANJI.class('漢'), Class::Other);
}

#[test]
fn vowels_are_large() {
    for charset in [&HIRAGANA, &KATAKANA, &KATAKANA_HALFWIDTH] {
        assert_eq!(charset.vowels.chars().count(), 5);

        for c in charset.vowels.chars() {
            assert!(charset.large.contains(c), "{charset:?}: {c:?}");
        }
    }
}

#[test]
fn membership() {
    assert!(HIRAGANA.is_class("ひらがな", false));
    assert!(!HIRAGANA.is_class("ひらがな。", false));
    assert!(HIRAGANA.is_class("ひらがな。", true));
    assert!(!HIRAGANA.is_class("ひらカナ", true));
    assert!(KATAKANA.is_class("カタカナ", false));
    assert!(KATAKANA.is_class("カード", true));
    assert!(!KATAKANA.is_class("カード", false));
    assert!(KATAKANA_HALFWIDTH.is_class("ｶﾀｶﾅ", false));
    assert!(KANJI.is_class("漢字", false));
    assert!(KANJI.is_class("人々", false));
    assert!(ASCII_FULLWIDTH.is_class("ＡＢＣ", false));
    assert!(ASCII_HALFWIDTH.is_class("abc", false));
    assert!(!ASCII_HALFWIDTH.is_class("a b", false));
    assert!(ASCII_HALFWIDTH.is_class("a b", true));
}

#[test]
fn empty_string_belongs_to_no_class() {
    for charset in ALL {
        assert!(!charset.is_class("", false), "{charset:?}");
        assert!(!charset.is_class("", true), "{charset:?}");
    }
}

#[test]
fn maximal_runs() {
    let runs = KANJI.runs("食べ物を買う", false).collect::<Vec<_>>();
    assert_eq!(runs, ["食", "物", "買"]);

    let runs = HIRAGANA.runs("漢字とかな", false).collect::<Vec<_>>();
    assert_eq!(runs, ["とかな"]);

    let runs = HIRAGANA.runs("漢字", false).collect::<Vec<_>>();
    assert!(runs.is_empty());

    let runs = KATAKANA.runs("コーヒーとケーキ", false).collect::<Vec<_>>();
    assert_eq!(runs, ["コ", "ヒ", "ケ", "キ"]);

    let runs = KATAKANA.runs("コーヒーとケーキ", true).collect::<Vec<_>>();
    assert_eq!(runs, ["コーヒー", "ケーキ"]);
}

#[test]
fn kana_conversions() {
    assert_eq!(hiragana_to_katakana("ひらがな ゝ"), "ヒラガナ ヽ");
    assert_eq!(hiragana_to_katakana("ゔゕゖ"), "ヴヵヶ");
    assert_eq!(hiragana_to_katakana("漢字"), "漢字");
    assert_eq!(katakana_to_hiragana("カタカナ・ヾ"), "かたかな・ゞ");
    assert_eq!(katakana_to_hiragana("ヴヷ"), "ゔヷ");

    let text = "きょうはいいてんきですね";
    assert_eq!(katakana_to_hiragana(&hiragana_to_katakana(text)), text);
}

#[test]
fn katakana_width() {
    assert_eq!(katakana_fullwidth_to_halfwidth("カタカナ"), "ｶﾀｶﾅ");
    assert_eq!(katakana_fullwidth_to_halfwidth("ガイド"), "ｶﾞｲﾄﾞ");
    assert_eq!(katakana_fullwidth_to_halfwidth("パーティー"), "ﾊﾟｰﾃｨｰ");
    assert_eq!(katakana_fullwidth_to_halfwidth("ヴ"), "ｳﾞ");
    assert_eq!(katakana_fullwidth_to_halfwidth("゛"), "ﾞ");

    assert_eq!(katakana_halfwidth_to_fullwidth("ｶﾀｶﾅ"), "カタカナ");
    assert_eq!(katakana_halfwidth_to_fullwidth("ｶﾞｲﾄﾞ"), "ガイド");
    assert_eq!(katakana_halfwidth_to_fullwidth("ﾊﾟｰﾃｨｰ"), "パーティー");
    assert_eq!(katakana_halfwidth_to_fullwidth("ｳﾞ"), "ヴ");
    assert_eq!(katakana_halfwidth_to_fullwidth("ﾞ"), "゛");

    for text in ["コンピューター", "ガッコウ・ポスト", "ヴァイオリン"] {
        let half = katakana_fullwidth_to_halfwidth(text);
        assert_eq!(katakana_halfwidth_to_fullwidth(&half), text);
    }
}

#[test]
fn katakana_width_leaves_other_text_alone() {
    for text in ["\u{f900}", "e\u{301}", "\u{212b}", "か\u{3099}", "漢字 abc"] {
        assert_eq!(katakana_fullwidth_to_halfwidth(text), text);
        assert_eq!(katakana_halfwidth_to_fullwidth(text), text);
    }

    assert_eq!(katakana_fullwidth_to_halfwidth("\u{f900}ガ"), "\u{f900}ｶﾞ");
    assert_eq!(katakana_halfwidth_to_fullwidth("\u{f900}ｶﾞ"), "\u{f900}ガ");
    assert_eq!(katakana_fullwidth_to_halfwidth("カ\u{3099}"), "ｶﾞ");
    assert_eq!(katakana_fullwidth_to_halfwidth("ヷ"), "ﾜﾞ");
    assert_eq!(katakana_halfwidth_to_fullwidth("ﾜﾞ"), "ヷ");
    assert_eq!(katakana_halfwidth_to_fullwidth("ｱﾞ"), "ア\u{3099}");
}

#[test]
fn ascii_width() {
    assert_eq!(ascii_halfwidth_to_fullwidth("ABC 123!"), "ＡＢＣ　１２３！");
    assert_eq!(ascii_fullwidth_to_halfwidth("ＡＢＣ　１２３！"), "ABC 123!");
    assert_eq!(ascii_halfwidth_to_fullwidth("かな"), "かな");
    assert_eq!(ascii_fullwidth_to_halfwidth("かな"), "かな");
}
