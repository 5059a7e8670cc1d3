//! All error types for the strings-sort crate.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error on `{}`: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: entry has no name attribute: {text}")]
    MissingName { line: usize, text: String },

    #[error("line {line}: invalid UTF-8")]
    Encoding { line: usize },
}

impl Error {
    /// Wraps an I/O error with the path it happened on.
    pub fn file(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn missing_name(line: usize, text: impl Into<String>) -> Self {
        Error::MissingName {
            line,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_file_error_names_path() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = Error::file("res/values/strings.xml", io_error);
        assert_eq!(
            error.to_string(),
            "I/O error on `res/values/strings.xml`: denied"
        );
    }

    #[test]
    fn test_file_error_keeps_source() {
        use std::error::Error as _;

        let io_error = io::Error::new(io::ErrorKind::NotFound, "gone");
        let error = Error::file("strings.xml", io_error);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_missing_name_error() {
        let error = Error::missing_name(3, "<string>oops</string>");
        assert_eq!(
            error.to_string(),
            "line 3: entry has no name attribute: <string>oops</string>"
        );
    }

    #[test]
    fn test_encoding_error() {
        let error = Error::Encoding { line: 7 };
        assert_eq!(error.to_string(), "line 7: invalid UTF-8");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::missing_name(1, "test");
        let debug = format!("{:?}", error);
        assert!(debug.contains("MissingName"));
        assert!(debug.contains("test"));
    }
}
