//! Alignment of kanji text against its reading.
//!
//! The kanji text is split into alternating runs of kana and everything
//! else. Kana runs must appear verbatim in the reading, which pins down the
//! reading of the runs between them. Each of those runs is then split per
//! character using the readings known for each kanji.

#[cfg(test)]
mod tests;

use core::fmt;
use std::collections::HashSet;

use memchr::memmem;

use crate::charset;
use crate::kana;
use crate::mora;
use crate::readings::Readings;

/// A single furigana group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuriganaGroup<'a> {
    /// Kanji with associated kana, such as `私[わたし]`.
    Kanji(&'a str, &'a str),
    /// Literal kana, such as `る`.
    Kana(&'a str),
}

impl<'a> FuriganaGroup<'a> {
    /// The text being annotated.
    pub fn text(&self) -> &'a str {
        match *self {
            FuriganaGroup::Kanji(kanji, _) => kanji,
            FuriganaGroup::Kana(kana) => kana,
        }
    }

    /// The reading of the text, if it isn't read as written.
    pub fn reading(&self) -> Option<&'a str> {
        match *self {
            FuriganaGroup::Kanji(_, reading) => Some(reading),
            FuriganaGroup::Kana(_) => None,
        }
    }
}

/// Error raised when a reading can't correspond to the kana in a kanji text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unable to match reading `{reading}` to `{kanji}`")]
pub struct AlignmentError {
    kanji: Box<str>,
    reading: Box<str>,
}

impl AlignmentError {
    fn new(kanji: &str, reading: &str) -> Self {
        Self {
            kanji: kanji.into(),
            reading: reading.into(),
        }
    }

    /// The kanji text which was being aligned.
    pub fn kanji(&self) -> &str {
        &self.kanji
    }

    /// The reading which was being aligned.
    pub fn reading(&self) -> &str {
        &self.reading
    }
}

/// Aligned furigana for a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Furigana<'a> {
    groups: Vec<FuriganaGroup<'a>>,
}

impl<'a> Furigana<'a> {
    /// Align `kanji` against `reading`, see [`align`].
    pub fn new<R>(kanji: &'a str, reading: &'a str, readings: &R) -> Result<Self, AlignmentError>
    where
        R: ?Sized + Readings,
    {
        Ok(Self {
            groups: align(kanji, reading, readings)?,
        })
    }

    /// The aligned groups.
    pub fn groups(&self) -> &[FuriganaGroup<'a>] {
        &self.groups
    }

    /// Iterate over aligned groups.
    pub fn iter(&self) -> impl Iterator<Item = FuriganaGroup<'a>> + '_ {
        self.groups.iter().copied()
    }

    /// Render as ruby markup.
    pub fn ruby(&self) -> String {
        render_ruby(&self.groups)
    }
}

impl fmt::Display for Furigana<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            match group {
                FuriganaGroup::Kanji(kanji, kana) => {
                    write!(f, "{kanji}[{kana}]")?;
                }
                FuriganaGroup::Kana(kana) => {
                    write!(f, "{kana}")?;
                }
            }
        }

        Ok(())
    }
}

/// Align `kanji` against its full `reading`.
///
/// The groups produced cover all of `kanji` in order. Kana in the kanji text
/// is yielded one mora at a time as [`FuriganaGroup::Kana`].
///
/// Fails if the reading doesn't contain the kana of the kanji text in order,
/// or has text left over. Runs which can't be split per character are
/// returned as a single group instead of failing.
pub fn align<'a, R>(
    kanji: &'a str,
    reading: &'a str,
    readings: &R,
) -> Result<Vec<FuriganaGroup<'a>>, AlignmentError>
where
    R: ?Sized + Readings,
{
    let segments = segments(kanji);

    let mut search = Skeleton {
        segments: &segments,
        reading,
        ends: Vec::with_capacity(segments.len()),
        failed: HashSet::new(),
    };

    if !search.matches(0, 0) {
        tracing::trace!(kanji, reading, "Reading doesn't match kana skeleton");
        return Err(AlignmentError::new(kanji, reading));
    }

    let mut groups = Vec::new();
    let mut start = 0;

    for (segment, &end) in segments.iter().zip(&search.ends) {
        match *segment {
            Segment::Kana(kana) => {
                groups.extend(mora::iter(kana).map(FuriganaGroup::Kana));
            }
            Segment::Kanji(run) => {
                align_run(run, &reading[start..end], readings, &mut groups);
            }
        }

        start = end;
    }

    Ok(groups)
}

/// Align `kanji` against `reading` and render it as ruby markup.
///
/// ```
/// use std::collections::HashMap;
///
/// let readings = HashMap::from([('食', vec![String::from("た")])]);
/// let ruby = jptext_lib::furigana::ruby("食べる", "たべる", &readings)?;
/// assert_eq!(ruby, "<ruby><rb>食</rb><rt>た</rt><rb>べ</rb><rt></rt><rb>る</rb><rt></rt></ruby>");
/// # Ok::<_, jptext_lib::furigana::AlignmentError>(())
/// ```
pub fn ruby<R>(kanji: &str, reading: &str, readings: &R) -> Result<String, AlignmentError>
where
    R: ?Sized + Readings,
{
    Ok(render_ruby(&align(kanji, reading, readings)?))
}

fn render_ruby(groups: &[FuriganaGroup<'_>]) -> String {
    let mut out = String::from("<ruby>");

    for group in groups {
        out.push_str("<rb>");
        escape(&mut out, group.text());
        out.push_str("</rb><rt>");
        escape(&mut out, group.reading().unwrap_or_default());
        out.push_str("</rt>");
    }

    out.push_str("</ruby>");
    out
}

fn escape(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Anything which isn't kana, matching one or more characters of the
    /// reading.
    Kanji(&'a str),
    /// Kana, matching itself.
    Kana(&'a str),
}

/// Partition a string into maximal runs of kana and non-kana.
fn segments(kanji: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = kanji;

    while let Some(c) = rest.chars().next() {
        let is_kana = kana::is_kana(c);
        let end = rest
            .find(|c| kana::is_kana(c) != is_kana)
            .unwrap_or(rest.len());

        let (run, tail) = rest.split_at(end);

        segments.push(if is_kana {
            Segment::Kana(run)
        } else {
            Segment::Kanji(run)
        });

        rest = tail;
    }

    segments
}

/// Greedy search for the kana skeleton of a kanji text in its reading.
struct Skeleton<'s, 'a> {
    segments: &'s [Segment<'a>],
    reading: &'a str,
    /// Reading offset at which each matched segment ends.
    ends: Vec<usize>,
    /// Positions known not to match, as (segment, reading offset).
    failed: HashSet<(usize, usize)>,
}

impl Skeleton<'_, '_> {
    fn matches(&mut self, index: usize, at: usize) -> bool {
        let segments = self.segments;
        let reading = self.reading;

        let Some(&segment) = segments.get(index) else {
            return at == reading.len();
        };

        if self.failed.contains(&(index, at)) {
            return false;
        }

        let rest = &reading[at..];

        match segment {
            Segment::Kana(kana) => {
                if rest.starts_with(kana) && self.step(index, at + kana.len()) {
                    return true;
                }
            }
            Segment::Kanji(..) => {
                if let Some(c) = rest.chars().next() {
                    let min = c.len_utf8();

                    match segments.get(index + 1) {
                        Some(Segment::Kana(kana)) => {
                            let ends = memmem::rfind_iter(rest.as_bytes(), kana.as_bytes())
                                .filter(|&end| end >= min)
                                .collect::<Vec<_>>();

                            for end in ends {
                                if self.step(index, at + end) {
                                    return true;
                                }
                            }
                        }
                        _ => {
                            if self.step(index, reading.len()) {
                                return true;
                            }
                        }
                    }
                }
            }
        }

        self.failed.insert((index, at));
        false
    }

    fn step(&mut self, index: usize, end: usize) -> bool {
        self.ends.push(end);

        if self.matches(index + 1, end) {
            return true;
        }

        self.ends.pop();
        false
    }
}

/// Split a run of kanji and its reading per character, or keep it whole.
fn align_run<'a, R>(
    run: &'a str,
    reading: &'a str,
    readings: &R,
    groups: &mut Vec<FuriganaGroup<'a>>,
) where
    R: ?Sized + Readings,
{
    let slots = run
        .char_indices()
        .map(|(at, c)| {
            let kanji = &run[at..at + c.len_utf8()];
            let candidates = readings.readings(c).map(normalize).unwrap_or_default();
            (kanji, candidates)
        })
        .collect::<Vec<_>>();

    let relaxations = core::iter::once(None).chain(
        slots
            .iter()
            .enumerate()
            .filter(|(_, (_, candidates))| !candidates.is_empty())
            .map(|(index, _)| Some(index)),
    );

    for relaxed in relaxations {
        tracing::trace!(run, reading, ?relaxed, "Matching readings");

        let mut search = Slots {
            slots: &slots,
            relaxed,
            reading,
            ends: Vec::with_capacity(slots.len()),
            failed: HashSet::new(),
        };

        if search.matches(0, 0) {
            let mut start = 0;

            for (&(kanji, _), &end) in slots.iter().zip(&search.ends) {
                groups.push(FuriganaGroup::Kanji(kanji, &reading[start..end]));
                start = end;
            }

            return;
        }
    }

    tracing::debug!(run, reading, "Keeping run unaligned");
    groups.push(FuriganaGroup::Kanji(run, reading));
}

/// Normalize dictionary readings into candidates matching hiragana.
///
/// Katakana is converted to hiragana and anything which isn't a hiragana
/// letter is dropped. Readings with okurigana also offer the stem before the
/// `.` separator.
fn normalize(readings: Vec<&str>) -> Vec<String> {
    fn clean(reading: &str) -> String {
        reading.chars().filter(|&c| kana::is_hiragana(c)).collect()
    }

    let mut out = Vec::<String>::new();

    for reading in readings {
        let reading = charset::katakana_to_hiragana(reading);

        let stem = reading.split_once('.').map(|(stem, _)| clean(stem));

        for candidate in stem.into_iter().chain([clean(&reading)]) {
            if !candidate.is_empty() && !out.contains(&candidate) {
                out.push(candidate);
            }
        }
    }

    out
}

/// Search for a per-character split of a reading, where each character
/// matches one of its candidates or, without candidates, any non-empty
/// text.
struct Slots<'s, 'a> {
    slots: &'s [(&'a str, Vec<String>)],
    /// Slot which is allowed to match anything.
    relaxed: Option<usize>,
    reading: &'a str,
    ends: Vec<usize>,
    failed: HashSet<(usize, usize)>,
}

impl Slots<'_, '_> {
    fn matches(&mut self, index: usize, at: usize) -> bool {
        let slots = self.slots;
        let reading = self.reading;

        let Some((_, candidates)) = slots.get(index) else {
            return at == reading.len();
        };

        if self.failed.contains(&(index, at)) {
            return false;
        }

        let rest = &reading[at..];

        if candidates.is_empty() || self.relaxed == Some(index) {
            // Longest span first.
            let ends = rest
                .char_indices()
                .skip(1)
                .map(|(end, _)| end)
                .chain([rest.len()])
                .filter(|&end| end > 0)
                .collect::<Vec<_>>();

            for end in ends.into_iter().rev() {
                if self.step(index, at + end) {
                    return true;
                }
            }
        } else {
            for candidate in candidates {
                if rest.starts_with(candidate.as_str()) && self.step(index, at + candidate.len()) {
                    return true;
                }
            }
        }

        self.failed.insert((index, at));
        false
    }

    fn step(&mut self, index: usize, end: usize) -> bool {
        self.ends.push(end);

        if self.matches(index + 1, end) {
            return true;
        }

        self.ends.pop();
        false
    }
}
