//! Classification, transliteration and furigana alignment of Japanese text.

pub mod charset;
pub use self::charset::Charset;

pub mod kana;

pub mod mora;

pub mod romaji;
pub use self::romaji::{Encoding, Invalid, Standard};

pub mod furigana;
pub use self::furigana::{AlignmentError, Furigana, FuriganaGroup};

pub mod readings;
pub use self::readings::{ReadingTable, Readings};

mod config;
pub use self::config::Config;

mod dirs;
pub use self::dirs::Dirs;

mod context;
pub use self::context::Context;
