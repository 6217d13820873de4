use crate::dictionary::Dictionary;
use crate::session;
use crate::tables::Table;
use crate::thread_pool::ThreadPool;
use crate::Result;
use slog::{error, info, o};
use std::net::{TcpListener, ToSocketAddrs};

/// Accepts connections and hands each one to the thread pool as a session.
pub struct DictionaryServer<T: Table, P: ThreadPool> {
    dictionary: Dictionary<T>,
    thread_pool: P,
    logger: slog::Logger,
}

impl<T: Table, P: ThreadPool> DictionaryServer<T, P> {
    pub fn new(dictionary: Dictionary<T>, thread_pool: P, logger: slog::Logger) -> Self {
        DictionaryServer {
            dictionary,
            thread_pool,
            logger,
        }
    }

    /// Binds `addr` and serves forever. Only a bind failure is returned.
    pub fn start<A: ToSocketAddrs>(&self, addr: A) -> Result<()> {
        let listener = TcpListener::bind(addr)?;
        self.run(listener)
    }

    pub fn run(&self, listener: TcpListener) -> Result<()> {
        let local = listener.local_addr()?;
        let words = self.dictionary.len()?;
        info!(self.logger, "starting server..."; "listen" => %local, "words" => words);

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let peer = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_owned());
                    let dictionary = self.dictionary.clone();
                    let logger = self.logger.new(o!("peer" => peer));
                    self.thread_pool
                        .spawn(move || session::serve(dictionary, stream, logger));
                }
                Err(e) => error!(self.logger, "ERROR accepting connection: {}", e),
            }
        }
        Ok(())
    }
}
