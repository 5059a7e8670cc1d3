use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Sort(#[from] strings_sort::Error),

    #[error("cannot read config `{}`: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config `{}`: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Glob(String),

    #[error("no input files: pass paths, use --config, or add strings-sort.toml")]
    NoInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_error_is_transparent() {
        let error = CliError::from(strings_sort::Error::Encoding { line: 4 });
        assert_eq!(error.to_string(), "line 4: invalid UTF-8");
    }

    #[test]
    fn test_no_input_message() {
        assert!(CliError::NoInput.to_string().contains("--config"));
    }
}
