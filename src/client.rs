use crate::error::Error;
use crate::protocol::{read_message, write_message, Request, Response};
use crate::Result;
use std::io::BufReader;
use std::net::{TcpStream, ToSocketAddrs};

/// Blocking client that keeps one connection open across requests.
pub struct DictionaryClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl DictionaryClient {
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<DictionaryClient> {
        let writer = TcpStream::connect(addr)?;
        let reader = BufReader::new(writer.try_clone()?);
        Ok(DictionaryClient { reader, writer })
    }

    pub fn send(&mut self, request: &Request) -> Result<Response> {
        write_message(&mut self.writer, request)?;
        read_message(&mut self.reader)?.ok_or(Error::ConnectionClosed)
    }

    pub fn search(&mut self, word: &str) -> Result<Response> {
        self.send(&Request::search(word))
    }

    pub fn add(&mut self, word: &str, meaning: &str) -> Result<Response> {
        self.send(&Request::add(word, meaning))
    }

    pub fn remove(&mut self, word: &str) -> Result<Response> {
        self.send(&Request::remove(word))
    }

    pub fn update(&mut self, word: &str, meaning: &str) -> Result<Response> {
        self.send(&Request::update(word, meaning))
    }
}
