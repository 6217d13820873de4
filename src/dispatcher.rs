use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::protocol::{Mode, Request, Response};
use crate::tables::Table;

pub const MISSING_WORD: &str = "missing word";
pub const MISSING_WORD_OR_MEANING: &str = "missing word or meaning";
pub const WORD_NOT_FOUND: &str = "word not found";
pub const WORD_EXISTS: &str = "word already exists";
pub const MEANING_EXISTS: &str = "meaning already exists";
pub const INVALID_OPERATION: &str = "invalid operation";
pub const DATABASE_ERROR: &str = "database error";

pub const WORD_ADDED: &str = "word added";
pub const WORD_REMOVED: &str = "word removed";
pub const MEANING_ADDED: &str = "meaning added";

/// Runs one request against the dictionary and describes the outcome.
///
/// Validation problems and storage faults come back as `error`, business
/// refusals as `fail`. Nothing here panics or touches the connection.
pub fn dispatch<T: Table>(dictionary: &Dictionary<T>, request: Request) -> Response {
    let Request {
        mode,
        word,
        meaning,
    } = request;

    match mode {
        Mode::Search => {
            if word.is_empty() {
                return Response::error(MISSING_WORD);
            }
            match dictionary.lookup(&word) {
                Ok(Some(meaning)) => Response::found(meaning),
                Ok(None) => Response::fail(WORD_NOT_FOUND),
                Err(e) => refusal(e),
            }
        }
        Mode::Add => {
            if word.is_empty() || meaning.is_empty() {
                return Response::error(MISSING_WORD_OR_MEANING);
            }
            match dictionary.insert(&word, &meaning) {
                Ok(()) => Response::success(WORD_ADDED),
                Err(e) => refusal(e),
            }
        }
        Mode::Remove => {
            if word.is_empty() {
                return Response::error(MISSING_WORD);
            }
            match dictionary.remove(&word) {
                Ok(()) => Response::success(WORD_REMOVED),
                Err(e) => refusal(e),
            }
        }
        Mode::Update => {
            if word.is_empty() || meaning.is_empty() {
                return Response::error(MISSING_WORD_OR_MEANING);
            }
            match dictionary.append_meaning(&word, &meaning) {
                Ok(()) => Response::success(MEANING_ADDED),
                Err(e) => refusal(e),
            }
        }
        Mode::Unknown(_) => Response::fail(INVALID_OPERATION),
    }
}

fn refusal(error: Error) -> Response {
    match error {
        Error::WordExists => Response::fail(WORD_EXISTS),
        Error::WordNotFound => Response::fail(WORD_NOT_FOUND),
        Error::DuplicateMeaning => Response::fail(MEANING_EXISTS),
        _ => Response::error(DATABASE_ERROR),
    }
}
