use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Could not find file {path:?}")]
    MissingFile { path: PathBuf },

    #[error("Could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Column {column:?} is missing from {file:?}")]
    MissingColumn { file: String, column: &'static str },

    #[error("Could not read {file:?}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("Could not serialize the database: {0}")]
    Json(#[from] serde_json::Error),
}
