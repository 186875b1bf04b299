//! Error types for dictionary construction and queries.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A (symbol, stress) pair that breaks the vowel/consonant stress rule.
    #[error("invalid stress: {0}")]
    InvalidStress(String),

    /// A code outside the ARPABET catalog.
    #[error("unknown ARPABET symbol: {0:?}")]
    UnknownSymbol(String),

    /// Empty or whitespace-only spelling.
    #[error("invalid spelling: {0:?}")]
    InvalidSpelling(String),

    #[error("word already exists in the dictionary: {0}")]
    DuplicateWord(String),

    #[error("word is not in the dictionary: {0}")]
    UnknownWord(String),

    /// The dictionary file could not be opened or read.
    #[error("error loading dictionary file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
