use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("line {line}: column `{column}` holds non-numeric value {value:?}")]
    MalformedValue {
        column: &'static str,
        line: u64,
        value: String,
    },

    #[error("malformed CSV input")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
