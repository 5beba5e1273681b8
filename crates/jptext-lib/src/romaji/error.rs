/// Error raised when a conversion is configured with [`Invalid::Error`] and
/// hits text it cannot convert.
///
/// [`Invalid::Error`]: super::Invalid::Error
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(super) fn new<K>(kind: K) -> Self
    where
        ErrorKind: From<K>,
    {
        Self { kind: kind.into() }
    }

    /// The text which could not be converted.
    pub fn text(&self) -> &str {
        match &self.kind {
            ErrorKind::NoRomaji(text, _) | ErrorKind::NoKana(text, _) => text,
        }
    }

    /// Byte offset of the text which could not be converted.
    ///
    /// For conversions from romaji this is an offset into the canonically
    /// decomposed input.
    pub fn at(&self) -> usize {
        match &self.kind {
            ErrorKind::NoRomaji(_, at) | ErrorKind::NoKana(_, at) => *at,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(super) enum ErrorKind {
    #[error("No romaji for `{0}` at byte {1}")]
    NoRomaji(Box<str>, usize),
    #[error("No kana for `{0}` at byte {1}")]
    NoKana(Box<str>, usize),
}
