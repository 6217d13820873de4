use super::{Entry, Table};
use crate::error::Error;
use crate::Result;
use sled::{Db, IVec, Tree};
use std::path::Path;

const TREE_NAME: &str = "dictionary";

/// Table kept in a sled database, one tree holding `word -> meaning`.
pub struct SledTable {
    db: Db,
    tree: Tree,
}

impl SledTable {
    pub fn open(path: impl AsRef<Path>) -> Result<SledTable> {
        let db = sled::open(path)?;
        let tree = db.open_tree(TREE_NAME)?;
        Ok(SledTable { db, tree })
    }

    fn flush(&self) -> Result<()> {
        self.tree.flush()?;
        Ok(())
    }
}

fn decode(bytes: IVec) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(Error::Utf8)
}

impl Table for SledTable {
    fn load_all(&self) -> Result<Vec<Entry>> {
        self.tree
            .iter()
            .map(|row| {
                let (word, meaning) = row?;
                Ok(Entry::new(decode(word)?, decode(meaning)?))
            })
            .collect()
    }

    fn insert(&mut self, word: &str, meaning: &str) -> Result<()> {
        match self
            .tree
            .compare_and_swap(word, None as Option<&[u8]>, Some(meaning.as_bytes()))?
        {
            Ok(()) => self.flush(),
            Err(_) => Err(Error::WordExists),
        }
    }

    fn update(&mut self, word: &str, meaning: &str) -> Result<()> {
        self.tree.insert(word, meaning.as_bytes())?;
        self.flush()
    }

    fn delete(&mut self, word: &str) -> Result<()> {
        self.tree.remove(word)?;
        self.flush()
    }
}

impl Drop for SledTable {
    fn drop(&mut self) {
        let _ = self.db.flush();
    }
}
