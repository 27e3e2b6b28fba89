//! CLI helpers.

pub(crate) mod error;
mod output;
mod stderr_logger;

use core::fmt;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Serialize, Serializer};

use crate::source::Input;

pub use self::error::CliError;
pub(self) use self::output::{Output, OutputKind};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Which part of a puzzle to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    fn parse(arg: &str) -> Result<Self, CliError> {
        match arg {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(CliError::BadPart(other.to_owned())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "part 1"),
            Part::Two => write!(f, "part 2"),
        }
    }
}

impl Serialize for Part {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Part::One => serializer.serialize_u8(1),
            Part::Two => serializer.serialize_u8(2),
        }
    }
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Part to solve, if requested.
    part: Option<Part>,
    /// Read input from the given path instead of the embedded input.
    input: Option<PathBuf>,
    /// Output JSON.
    json: bool,
    /// Run in verbose mode.
    verbose: bool,
    /// Only log errors.
    quiet: bool,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        log::set_max_level(opts.level());
        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;

        Ok(opts)
    }

    /// Parse CLI options from the given arguments, not including the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                return Err(CliError::NonUtf8);
            };

            match arg {
                "--part" => {
                    if opts.part.is_some() {
                        return Err(CliError::Duplicate("--part"));
                    }

                    let part = it.next().ok_or(CliError::MissingArgument("--part"))?;
                    let part = part.to_str().ok_or(CliError::NonUtf8)?;
                    opts.part = Some(Part::parse(part)?);
                }
                "--input" => {
                    if opts.input.is_some() {
                        return Err(CliError::Duplicate("--input"));
                    }

                    let input = it.next().ok_or(CliError::MissingArgument("--input"))?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--json" => {
                    opts.json = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "--" => {
                    break;
                }
                other => {
                    return Err(CliError::Unsupported(other.to_owned()));
                }
            }
        }

        Ok(opts)
    }

    /// The part to solve, falling back to `default`.
    #[inline]
    pub fn part(&self, default: Part) -> Part {
        self.part.unwrap_or(default)
    }

    /// Use the input given on the command line, or else the embedded one.
    pub fn input(&self, embedded: Input) -> Result<Input> {
        match &self.input {
            Some(path) => {
                log::debug!("reading input from {}", path.display());
                Input::open(path)
            }
            None => Ok(embedded),
        }
    }

    /// Log level to use.
    fn level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }

    /// Print the answer to stdout.
    pub fn answer<T>(&self, part: Part, value: &T) -> Result<()>
    where
        T: ?Sized + fmt::Display + Serialize,
    {
        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        log::info!("{part}: {value}");
        Output::new(io::stdout().lock(), kind).answer(part, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::Path;

    use super::{CliError, Opts, Part};

    fn parse(args: &[&str]) -> Result<Opts, CliError> {
        Opts::parse_from(args.iter().map(OsString::from))
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.part(Part::Two), Part::Two);
        assert!(opts.input.is_none());
        assert_eq!(opts.level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_arguments() {
        let opts = parse(&["--part", "1", "--input", "other.txt", "--json", "-V"]).unwrap();
        assert_eq!(opts.part(Part::Two), Part::One);
        assert_eq!(opts.input.as_deref(), Some(Path::new("other.txt")));
        assert!(opts.json);
        assert_eq!(opts.level(), log::LevelFilter::Debug);

        let opts = parse(&["--verbose", "--quiet"]).unwrap();
        assert_eq!(opts.level(), log::LevelFilter::Error);
    }

    #[test]
    fn test_stops_at_separator() {
        let opts = parse(&["--", "--unknown"]).unwrap();
        assert!(!opts.json);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--part", "3"]), Err(CliError::BadPart(p)) if p == "3"));
        assert!(matches!(
            parse(&["--part"]),
            Err(CliError::MissingArgument("--part"))
        ));
        assert!(matches!(
            parse(&["--part", "1", "--part", "2"]),
            Err(CliError::Duplicate("--part"))
        ));
        assert!(matches!(parse(&["--bench"]), Err(CliError::Unsupported(a)) if a == "--bench"));
    }
}
