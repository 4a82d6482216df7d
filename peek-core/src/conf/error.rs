use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(code(peek::config::read))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    #[diagnostic(code(peek::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("configuration {path} has {} problem(s)", errors.len())]
    #[diagnostic(code(peek::config::invalid))]
    Validation {
        path: PathBuf,
        #[related]
        errors: Vec<ConfigError>,
    },

    //-------------------------------------------------------------------------
    // Log file
    //-------------------------------------------------------------------------
    #[error("access log '{path}' does not exist")]
    #[diagnostic(
        code(peek::config::log_file),
        help("point `log_file` at the nginx access log, e.g. /var/log/nginx/access.log")
    )]
    MissingLogFile { path: PathBuf },

    //-------------------------------------------------------------------------
    // Store
    //-------------------------------------------------------------------------
    #[error("persistent store requires a path")]
    #[diagnostic(
        code(peek::config::store_path),
        help("set `path` in the `store` block or use `mode = \"ephemeral\"`")
    )]
    MissingStorePath,

    //-------------------------------------------------------------------------
    // Dashboard
    //-------------------------------------------------------------------------
    #[error("refresh interval must be at least 1 second")]
    #[diagnostic(code(peek::config::refresh_interval))]
    InvalidRefreshInterval,

    #[error("precision {precision} is out of range (0..={max})")]
    #[diagnostic(code(peek::config::precision))]
    InvalidPrecision { precision: usize, max: usize },

    #[error("{reason}")]
    #[diagnostic(code(peek::config::byte_unit))]
    InvalidByteUnit { reason: String },

    #[error("dashboard verb must not be empty")]
    #[diagnostic(
        code(peek::config::verb),
        help("use an HTTP method such as \"GET\" or \"POST\"")
    )]
    EmptyVerb,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
