/// Errors raised while resolving parsed options into a session.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur after the argument vector has parsed cleanly.
#[derive(Debug, Error)]
pub enum PeasantError {
    /// `--credentials` lacks the `username:password` shape.
    #[error("Credentials must be colon delimited, e.g. 'username:password'")]
    MalformedCredentials,

    /// A fragment of `--cookies` is not a `name=value` pair.
    #[error("Malformed cookie '{fragment}': expected 'name=value' pairs separated by ';'")]
    MalformedCookies {
        /// The offending fragment, or the whole string when it held no pairs.
        fragment: String,
    },

    /// `--url` is not an absolute http(s) URL.
    #[error("Invalid base URL '{value}': {reason}")]
    InvalidUrl {
        /// The value given on the command line.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An entry of `--proxies` is not a URL with a host.
    #[error("Invalid proxy '{value}': {reason}")]
    InvalidProxy {
        /// The value given on the command line.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// `--public-identifier` was blank.
    #[error("Public identifier must not be empty")]
    EmptyPublicIdentifier,

    /// Reading or writing a record file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file is not valid CSV.
    #[error("CSV error in '{}': {source}", path.display())]
    Csv {
        /// File being parsed.
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl PeasantError {
    /// Machine-readable error code (snake_case).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedCredentials => "malformed_credentials",
            Self::MalformedCookies { .. } => "malformed_cookies",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidProxy { .. } => "invalid_proxy",
            Self::EmptyPublicIdentifier => "empty_public_identifier",
            Self::Io { .. } => "io_error",
            Self::Csv { .. } => "csv_error",
        }
    }

    /// Return the CLI exit code for this error.
    ///
    /// Bad flag values share the usage-error code; file failures exit 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedCredentials
            | Self::MalformedCookies { .. }
            | Self::InvalidUrl { .. }
            | Self::InvalidProxy { .. }
            | Self::EmptyPublicIdentifier => 2,
            Self::Io { .. } | Self::Csv { .. } => 1,
        }
    }
}
