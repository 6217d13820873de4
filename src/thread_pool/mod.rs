use crate::error::Error;
use crate::Result;
use std::str::FromStr;

mod naive;
mod rayon;
mod shared_queue;

pub use self::naive::NaiveThreadPool;
pub use self::rayon::RayonThreadPool;
pub use self::shared_queue::SharedQueueThreadPool;

/// Runs session jobs. `new` receives the worker count, which a pool may ignore.
pub trait ThreadPool {
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static;
}

/// Pool selection as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Naive,
    SharedQueue,
    Rayon,
}

impl FromStr for PoolKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<PoolKind> {
        match s {
            "naive" => Ok(PoolKind::Naive),
            "shared" => Ok(PoolKind::SharedQueue),
            "rayon" => Ok(PoolKind::Rayon),
            other => Err(Error::InvalidPool(other.to_owned())),
        }
    }
}

impl PoolKind {
    pub fn name(self) -> &'static str {
        match self {
            PoolKind::Naive => "naive",
            PoolKind::SharedQueue => "shared",
            PoolKind::Rayon => "rayon",
        }
    }
}
