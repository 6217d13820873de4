use super::ThreadPool;
use crate::Result;

use std::io;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

type Thunk = Box<dyn FnOnce() + Send + 'static>;

#[derive(Clone)]
struct Worker {
    id: u32,
    jobs: Arc<Mutex<Receiver<Thunk>>>,
}

impl Worker {
    fn start(self) -> io::Result<()> {
        let name = format!("session-{}", self.id);
        thread::Builder::new().name(name).spawn(move || self.run())?;
        Ok(())
    }

    fn run(self) {
        loop {
            // Only lock for the duration required to receive a job
            // Not for also executing a job
            let message = match self.jobs.lock() {
                Ok(receiver) => receiver.recv(),
                Err(..) => break,
            };

            match message {
                Ok(job) => job(),
                Err(..) => break,
            }
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // A failed respawn leaves the pool one worker short; the rest keep draining.
        if thread::panicking() {
            let _ = self.clone().start();
        }
    }
}

/// Fixed set of workers pulling jobs from one channel. A worker whose job
/// panics is replaced, so the pool keeps its size.
pub struct SharedQueueThreadPool {
    job_sender: Sender<Thunk>,
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: u32) -> Result<SharedQueueThreadPool> {
        let (tx, rx) = channel::<Thunk>();
        let jobs = Arc::new(Mutex::new(rx));

        for id in 0..threads.max(1) {
            Worker {
                id,
                jobs: Arc::clone(&jobs),
            }
            .start()?;
        }

        Ok(SharedQueueThreadPool { job_sender: tx })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.job_sender
            .send(Box::new(job))
            .expect("ThreadPool::spawn unable to send jobs into queue");
    }
}
