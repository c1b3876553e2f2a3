// SPDX-License-Identifier: MPL-2.0
//! Failures while reading or writing the settings file.

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Error {
    /// The file or its directory could not be accessed.
    Io {
        path: Option<PathBuf>,
        message: String,
    },
    /// The file is not valid TOML, or one of its values is out of range.
    Settings(String),
}

impl Error {
    /// Wraps an I/O failure on `path`.
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Error::Io {
            path: Some(path.to_path_buf()),
            message: err.to_string(),
        }
    }

    /// Localization key of the notice shown when startup falls back to the
    /// default settings.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io { .. } => "config-read-error",
            Error::Settings(_) => "config-load-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io {
                path: Some(path),
                message,
            } => write!(f, "cannot access {}: {message}", path.display()),
            Error::Io {
                path: None,
                message,
            } => write!(f, "I/O failure: {message}"),
            Error::Settings(message) => write!(f, "invalid settings: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Settings(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
