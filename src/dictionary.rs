use crate::error::Error;
use crate::tables::{Entry, Table};
use crate::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// Separates the accumulated meanings of a word.
pub const MEANING_SEPARATOR: char = '\n';

/// In-memory word list mirrored onto a [`Table`].
///
/// Mutations hold the table mutex from the existence check through the
/// memory commit, so two mutations never interleave. Lookups only take the
/// read side of the map lock and see each mutation either before or after.
pub struct Dictionary<T: Table> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    words: RwLock<HashMap<String, String>>,
    table: Mutex<T>,
}

impl<T: Table> Clone for Dictionary<T> {
    fn clone(&self) -> Self {
        Dictionary {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Table> Dictionary<T> {
    /// Loads every row of `table` into memory.
    pub fn open(table: T) -> Result<Dictionary<T>> {
        let words = collect(table.load_all()?);
        Ok(Dictionary {
            inner: Arc::new(Inner {
                words: RwLock::new(words),
                table: Mutex::new(table),
            }),
        })
    }

    pub fn lookup(&self, word: &str) -> Result<Option<String>> {
        let words = self.inner.words.read().map_err(|_| Error::Poisoned)?;
        Ok(words.get(word).cloned())
    }

    pub fn insert(&self, word: &str, meaning: &str) -> Result<()> {
        let mut table = self.lock_table()?;
        if self.contains(word)? {
            return Err(Error::WordExists);
        }
        table.insert(word, meaning)?;
        self.commit(|words| {
            words.insert(word.to_owned(), meaning.to_owned());
        })
    }

    pub fn remove(&self, word: &str) -> Result<()> {
        let mut table = self.lock_table()?;
        if !self.contains(word)? {
            return Err(Error::WordNotFound);
        }
        table.delete(word)?;
        self.commit(|words| {
            words.remove(word);
        })
    }

    /// Adds `meaning` as a new segment of `word`'s stored meaning.
    pub fn append_meaning(&self, word: &str, meaning: &str) -> Result<()> {
        let mut table = self.lock_table()?;
        let current = self.lookup(word)?.ok_or(Error::WordNotFound)?;
        if current.split(MEANING_SEPARATOR).any(|segment| segment == meaning) {
            return Err(Error::DuplicateMeaning);
        }

        let combined = format!("{}{}{}", current, MEANING_SEPARATOR, meaning);
        table.update(word, &combined)?;
        self.commit(|words| {
            words.insert(word.to_owned(), combined);
        })
    }

    /// Snapshot of every entry, sorted by word.
    pub fn entries(&self) -> Result<Vec<Entry>> {
        let words = self.inner.words.read().map_err(|_| Error::Poisoned)?;
        let mut entries: Vec<Entry> = words
            .iter()
            .map(|(word, meaning)| Entry::new(word.as_str(), meaning.as_str()))
            .collect();
        entries.sort();
        Ok(entries)
    }

    pub fn len(&self) -> Result<usize> {
        let words = self.inner.words.read().map_err(|_| Error::Poisoned)?;
        Ok(words.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn contains(&self, word: &str) -> Result<bool> {
        let words = self.inner.words.read().map_err(|_| Error::Poisoned)?;
        Ok(words.contains_key(word))
    }

    fn lock_table(&self) -> Result<MutexGuard<'_, T>> {
        self.inner.table.lock().map_err(|_| Error::Poisoned)
    }

    fn commit<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let mut words = self.inner.words.write().map_err(|_| Error::Poisoned)?;
        apply(&mut words);
        Ok(())
    }
}

fn collect(entries: Vec<Entry>) -> HashMap<String, String> {
    entries
        .into_iter()
        .map(|entry| (entry.word, entry.meaning))
        .collect()
}
