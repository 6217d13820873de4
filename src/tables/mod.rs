use crate::Result;

/// A single word and its newline-joined meanings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry {
    pub word: String,
    pub meaning: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Entry {
        Entry {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}

/// Durable storage behind the in-memory dictionary.
///
/// `insert` must refuse an existing word with `Error::WordExists`. Every
/// other failure is a storage fault.
pub trait Table: Send + 'static {
    fn load_all(&self) -> Result<Vec<Entry>>;

    fn insert(&mut self, word: &str, meaning: &str) -> Result<()>;

    fn update(&mut self, word: &str, meaning: &str) -> Result<()>;

    fn delete(&mut self, word: &str) -> Result<()>;
}

mod sled;

pub use self::sled::SledTable;
