use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Sled(#[from] sled::Error),
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
    #[error(transparent)]
    ThreadPoolBuild(#[from] rayon::ThreadPoolBuildError),
    #[error("Word already exists")]
    WordExists,
    #[error("Word not found")]
    WordNotFound,
    #[error("Meaning already exists")]
    DuplicateMeaning,
    #[error("Dictionary lock poisoned")]
    Poisoned,
    #[error("Line longer than {0} bytes")]
    LineTooLong(usize),
    #[error("Connection closed by peer")]
    ConnectionClosed,
    #[error("Invalid thread pool: {0}")]
    InvalidPool(String),
}

/// The Result type encapsulates standard result
pub type Result<T> = std::result::Result<T, Error>;
