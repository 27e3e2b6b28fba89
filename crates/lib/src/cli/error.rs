use thiserror::Error;

/// Errors raised while parsing command-line options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    #[error("non-utf8 argument")]
    NonUtf8,
    #[error("duplicate `{0}` arguments")]
    Duplicate(&'static str),
    #[error("missing argument to `{0}`")]
    MissingArgument(&'static str),
    #[error("bad argument to `--part`: expected `1` or `2`, but got `{0}`")]
    BadPart(String),
    #[error("unsupported argument: {0}")]
    Unsupported(String),
}
