#![allow(dead_code)]

use dictd::{Dictionary, Entry, Error, Result, SledTable, Table};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// In-memory table whose writes can be switched to fail.
#[derive(Clone, Default)]
pub struct FlakyTable {
    rows: Arc<Mutex<HashMap<String, String>>>,
    failing: Arc<AtomicBool>,
}

impl FlakyTable {
    pub fn with_rows(rows: &[(&str, &str)]) -> FlakyTable {
        let table = FlakyTable::default();
        {
            let mut stored = table.rows.lock().unwrap();
            for (word, meaning) in rows {
                stored.insert(word.to_string(), meaning.to_string());
            }
        }
        table
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn row(&self, word: &str) -> Option<String> {
        self.rows.lock().unwrap().get(word).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "table unavailable",
            )))
        } else {
            Ok(())
        }
    }
}

impl Table for FlakyTable {
    fn load_all(&self) -> Result<Vec<Entry>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|(word, meaning)| Entry::new(word.as_str(), meaning.as_str()))
            .collect())
    }

    fn insert(&mut self, word: &str, meaning: &str) -> Result<()> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(word) {
            return Err(Error::WordExists);
        }
        rows.insert(word.to_owned(), meaning.to_owned());
        Ok(())
    }

    fn update(&mut self, word: &str, meaning: &str) -> Result<()> {
        self.check()?;
        self.rows
            .lock()
            .unwrap()
            .insert(word.to_owned(), meaning.to_owned());
        Ok(())
    }

    fn delete(&mut self, word: &str) -> Result<()> {
        self.check()?;
        self.rows.lock().unwrap().remove(word);
        Ok(())
    }
}

pub fn sled_dictionary() -> (TempDir, Dictionary<SledTable>) {
    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let table = SledTable::open(temp_dir.path()).expect("unable to open table");
    let dictionary = Dictionary::open(table).expect("unable to open dictionary");
    (temp_dir, dictionary)
}

pub fn flaky_dictionary(rows: &[(&str, &str)]) -> (FlakyTable, Dictionary<FlakyTable>) {
    let table = FlakyTable::with_rows(rows);
    let dictionary = Dictionary::open(table.clone()).expect("unable to open dictionary");
    (table, dictionary)
}

pub fn discard_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}
