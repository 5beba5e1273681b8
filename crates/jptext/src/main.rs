use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fixed_map::Set;
use flate2::read::GzDecoder;
use lib::charset;
use lib::{Config, Context, Dirs, Invalid, ReadingTable, Standard};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jptext", about = "Japanese script classification, romanization and furigana")]
struct Args {
    /// Load configuration from the given path instead of the default
    /// location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable a romanization standard, replacing the configured ones. Can be
    /// specified multiple times.
    #[arg(long = "standard", value_enum, global = true)]
    standards: Vec<StandardArg>,
    /// Mark long vowels in romaji with the given string, like `̄`.
    #[arg(long, global = true)]
    macron: Option<String>,
    /// What to do with text that can't be converted.
    #[arg(long, value_enum, global = true)]
    invalid: Option<InvalidArg>,
    /// Path to a JSON table of kanji readings. Gzipped if it ends with `.gz`.
    #[arg(long, global = true)]
    readings: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show which writing systems the text belongs to.
    Classify {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Text to classify.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Convert between kana scripts and character widths.
    Convert {
        /// What to convert to.
        #[arg(long, value_enum)]
        to: Target,
        /// Text to convert.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Convert kana to romaji.
    Romaji {
        /// Text to convert.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Convert romaji to kana.
    Kana {
        /// Produce katakana instead of hiragana.
        #[arg(long)]
        katakana: bool,
        /// Text to convert.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Align kanji against their reading.
    Furigana {
        /// Output ruby markup instead of bracket notation.
        #[arg(long)]
        ruby: bool,
        /// Text containing kanji.
        kanji: String,
        /// The full reading of the text.
        reading: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    Hiragana,
    Katakana,
    Halfwidth,
    Fullwidth,
    AsciiHalfwidth,
    AsciiFullwidth,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StandardArg {
    Ministry,
    Ansi,
    Hyojun,
}

impl From<StandardArg> for Standard {
    fn from(value: StandardArg) -> Self {
        match value {
            StandardArg::Ministry => Standard::Ministry,
            StandardArg::Ansi => Standard::Ansi,
            StandardArg::Hyojun => Standard::Hyojun,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InvalidArg {
    Pass,
    Omit,
    Error,
}

impl From<InvalidArg> for Invalid {
    fn from(value: InvalidArg) -> Self {
        match value {
            InvalidArg::Pass => Invalid::Pass,
            InvalidArg::Omit => Invalid::Omit,
            InvalidArg::Error => Invalid::Error,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    match &args.command {
        Command::Classify { json, text } => {
            for text in text {
                classify(text, *json)?;
            }
        }
        Command::Convert { to, text } => {
            for text in text {
                println!("{}", convert(*to, text));
            }
        }
        Command::Romaji { text } => {
            let cx = context(&args)?;

            for text in text {
                println!("{}", cx.to_romaji(text)?);
            }
        }
        Command::Kana { katakana, text } => {
            let cx = context(&args)?;

            for text in text {
                let kana = if *katakana {
                    cx.to_katakana(text)?
                } else {
                    cx.to_hiragana(text)?
                };

                println!("{kana}");
            }
        }
        Command::Furigana {
            ruby,
            kanji,
            reading,
        } => {
            let cx = context(&args)?;
            let furigana = cx.furigana(kanji, reading)?;

            if *ruby {
                println!("{}", furigana.ruby());
            } else {
                println!("{furigana}");
            }
        }
    }

    Ok(())
}

/// Build the conversion context from configuration and command line
/// overrides.
fn context(args: &Args) -> Result<Context> {
    let mut dirs = None;

    let mut config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(dirs.insert(Dirs::open()?))?,
    };

    if !args.standards.is_empty() {
        let mut standards = Set::new();

        for &standard in &args.standards {
            standards.insert(Standard::from(standard));
        }

        config.standards = standards;
    }

    if let Some(macron) = &args.macron {
        config.macron = Some(macron.clone());
    }

    if let Some(invalid) = args.invalid {
        config.invalid = invalid.into();
    }

    if let Some(readings) = &args.readings {
        config.readings = Some(readings.clone());
    }

    let path = match &config.readings {
        Some(path) => Some(path.clone()),
        None => {
            let dirs = match dirs {
                Some(dirs) => dirs,
                None => Dirs::open()?,
            };

            Some(dirs.readings_path()).filter(|path| path.is_file())
        }
    };

    let readings = match &path {
        Some(path) => load_readings(path)?,
        None => ReadingTable::new(),
    };

    Ok(Context::from_config(config, readings))
}

fn load_readings(path: &Path) -> Result<ReadingTable> {
    let file = File::open(path).with_context(|| path.display().to_string())?;

    let table = if path.extension() == Some("gz".as_ref()) {
        ReadingTable::from_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        ReadingTable::from_reader(BufReader::new(file))
    };

    let table = table.with_context(|| format!("Parsing {}", path.display()))?;
    tracing::debug!(?path, characters = table.len(), "Loaded readings");
    Ok(table)
}

fn classify(text: &str, json: bool) -> Result<()> {
    if json {
        let classes = charset::ALL
            .iter()
            .map(|class| {
                serde_json::json!({
                    "name": class.name(),
                    "is_class": class.is_class(text, false),
                    "is_class_with_punctuation": class.is_class(text, true),
                    "runs": class.runs(text, false).collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>();

        let value = serde_json::json!({ "text": text, "classes": classes });
        println!("{}", serde_json::to_string(&value)?);
        return Ok(());
    }

    println!("{text}");

    for class in charset::ALL {
        let runs = class.runs(text, false).collect::<Vec<_>>();

        if runs.is_empty() {
            continue;
        }

        let marker = if class.is_class(text, false) {
            "="
        } else if class.is_class(text, true) {
            "~"
        } else {
            " "
        };

        println!("  {marker} {}: {}", class.name(), runs.join(" "));
    }

    Ok(())
}

fn convert(target: Target, text: &str) -> String {
    match target {
        Target::Hiragana => charset::katakana_to_hiragana(text),
        Target::Katakana => charset::hiragana_to_katakana(text),
        Target::Halfwidth => charset::katakana_fullwidth_to_halfwidth(text),
        Target::Fullwidth => charset::katakana_halfwidth_to_fullwidth(text),
        Target::AsciiHalfwidth => charset::ascii_fullwidth_to_halfwidth(text),
        Target::AsciiFullwidth => charset::ascii_halfwidth_to_fullwidth(text),
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn parse<const N: usize>(args: [&OsString; N]) -> Result<Args, clap::Error> {
        Args::try_parse_from(args)
    }

    #[test]
    fn reject_unknown_values() {
        let os = |s: &str| OsString::from(s);

        let args = [&os("jptext"), &os("--standard"), &os("kunrei"), &os("romaji"), &os("か")];
        assert!(parse(args).is_err());

        let args = [&os("jptext"), &os("--invalid"), &os("drop"), &os("romaji"), &os("か")];
        assert!(parse(args).is_err());
    }

    #[test]
    fn explicit_paths_and_overrides() -> Result<()> {
        let mut config = NamedTempFile::new()?;
        writeln!(config, "invalid = \"omit\"")?;

        let mut readings = NamedTempFile::new()?;
        write!(readings, r#"{{"食": {{"kun": ["た.べる"]}}}}"#)?;

        let config_path = config.path().as_os_str().to_owned();
        let readings_path = readings.path().as_os_str().to_owned();
        let os = |s: &str| OsString::from(s);

        let args = parse([
            &os("jptext"),
            &os("--config"),
            &config_path,
            &os("--readings"),
            &readings_path,
            &os("--standard"),
            &os("ministry"),
            &os("--invalid"),
            &os("error"),
            &os("furigana"),
            &os("食べる"),
            &os("たべる"),
        ])?;

        let cx = context(&args)?;
        assert_eq!(cx.config().invalid, Invalid::Error);
        assert!(cx.config().standards.contains(Standard::Ministry));
        assert_eq!(cx.config().standards.iter().count(), 1);
        assert_eq!(cx.readings().len(), 1);
        assert_eq!(cx.furigana("食べる", "たべる")?.to_string(), "食[た]べる");
        Ok(())
    }
}
