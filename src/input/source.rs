//! Wordlist source validation and acquisition.
//!
//! A wordlist is either standard input, selected by the `-` sentinel, or a
//! file. Files are probe-opened during validation and opened again for the
//! read pass.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::InputError;

/// Path value that selects standard input.
pub const STDIN_SENTINEL: &str = "-";

/// A validated wordlist source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The process's standard input.
    Stdin,
    /// A file that existed and could be opened when validated.
    File(PathBuf),
}

impl Source {
    /// Validates a wordlist path.
    ///
    /// `-` is always valid and skips the filesystem. Anything else must
    /// exist, must not be a directory, and must open for reading; the probe
    /// handle is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotFound`] if the path does not exist and
    /// [`InputError::Unreadable`] for any other failure.
    pub fn validate(value: &str) -> Result<Self, InputError> {
        if value == STDIN_SENTINEL {
            return Ok(Self::Stdin);
        }

        let path = Path::new(value);
        let metadata = std::fs::metadata(path).map_err(|e| unreadable(path, e))?;
        if metadata.is_dir() {
            return Err(InputError::Unreadable {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::IsADirectory, "is a directory"),
            });
        }
        drop(File::open(path).map_err(|e| unreadable(path, e))?);

        tracing::debug!(path = %path.display(), bytes = metadata.len(), "validated wordlist");
        Ok(Self::File(path.to_path_buf()))
    }

    /// Opens the source for the read pass.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotFound`] or [`InputError::Unreadable`] if
    /// the file can no longer be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| unreadable(path, e))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Human-readable name for log output.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

fn unreadable(path: &Path, err: io::Error) -> InputError {
    if err.kind() == io::ErrorKind::NotFound {
        InputError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        InputError::Unreadable {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
