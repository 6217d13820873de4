//! This library houses a concurrent word/meaning dictionary service
//! backed by a sled table and served as JSON lines over TCP.

mod client;
mod dictionary;
pub mod dispatcher;
mod error;
pub mod protocol;
pub mod server;
pub mod session;
mod tables;
pub mod thread_pool;

pub use client::DictionaryClient;
pub use dictionary::{Dictionary, MEANING_SEPARATOR};
pub use error::{Error, Result};
pub use tables::{Entry, SledTable, Table};
pub use thread_pool::{
    NaiveThreadPool, PoolKind, RayonThreadPool, SharedQueueThreadPool, ThreadPool,
};
