//! JSON-line wire format shared by the server and the client.

use crate::error::Error;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Read, Write};

/// Longest request or response line accepted, newline included.
pub const MAX_LINE_BYTES: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Search,
    Add,
    Remove,
    Update,
    Unknown(String),
}

impl From<String> for Mode {
    fn from(mode: String) -> Mode {
        match mode.as_str() {
            "search" => Mode::Search,
            "add" => Mode::Add,
            "remove" => Mode::Remove,
            "update" => Mode::Update,
            _ => Mode::Unknown(mode),
        }
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> String {
        match mode {
            Mode::Search => "search".to_owned(),
            Mode::Add => "add".to_owned(),
            Mode::Remove => "remove".to_owned(),
            Mode::Update => "update".to_owned(),
            Mode::Unknown(other) => other,
        }
    }
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::Unknown(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meaning: String,
}

impl Request {
    pub fn new(mode: Mode, word: impl Into<String>, meaning: impl Into<String>) -> Request {
        Request {
            mode,
            word: word.into(),
            meaning: meaning.into(),
        }
    }

    pub fn search(word: impl Into<String>) -> Request {
        Request::new(Mode::Search, word, "")
    }

    pub fn add(word: impl Into<String>, meaning: impl Into<String>) -> Request {
        Request::new(Mode::Add, word, meaning)
    }

    pub fn remove(word: impl Into<String>) -> Request {
        Request::new(Mode::Remove, word, "")
    }

    pub fn update(word: impl Into<String>, meaning: impl Into<String>) -> Request {
        Request::new(Mode::Update, word, meaning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

impl Response {
    pub fn found(meaning: String) -> Response {
        Response {
            status: Status::Success,
            message: None,
            meaning: Some(meaning),
        }
    }

    pub fn success(message: &str) -> Response {
        Response::with_message(Status::Success, message)
    }

    pub fn fail(message: &str) -> Response {
        Response::with_message(Status::Fail, message)
    }

    pub fn error(message: &str) -> Response {
        Response::with_message(Status::Error, message)
    }

    fn with_message(status: Status, message: &str) -> Response {
        Response {
            status,
            message: Some(message.to_owned()),
            meaning: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Reads the next line and decodes it. `Ok(None)` means the peer closed the stream.
///
/// A line that reaches [`MAX_LINE_BYTES`] without a newline is rejected
/// with `Error::LineTooLong` instead of being buffered further.
pub fn read_message<R, T>(reader: &mut R) -> Result<Option<T>>
where
    R: BufRead,
    T: DeserializeOwned,
{
    let mut line = String::new();
    let read = reader
        .by_ref()
        .take(MAX_LINE_BYTES as u64)
        .read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    if read == MAX_LINE_BYTES && !line.ends_with('\n') {
        return Err(Error::LineTooLong(MAX_LINE_BYTES));
    }
    let message = serde_json::from_str(line.trim_end_matches(&['\n', '\r'][..]))?;
    Ok(Some(message))
}

/// Encodes `message` as one line and flushes it.
pub fn write_message<W, T>(writer: &mut W, message: &T) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut encoded = serde_json::to_vec(message)?;
    encoded.push(b'\n');
    writer.write_all(&encoded)?;
    writer.flush()?;
    Ok(())
}
