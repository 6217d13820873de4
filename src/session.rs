use crate::dictionary::Dictionary;
use crate::dispatcher::{self, DATABASE_ERROR};
use crate::error::Error;
use crate::protocol::{read_message, write_message, Request, Response, Status};
use crate::tables::Table;
use slog::{debug, error, info, warn};
use std::io::BufReader;
use std::net::TcpStream;

/// Serves one connection until the peer hangs up or sends something undecodable.
///
/// Every decoded request gets exactly one response before the next line is
/// read. A broken stream is never answered; the connection is simply dropped.
pub fn serve<T: Table>(dictionary: Dictionary<T>, stream: TcpStream, logger: slog::Logger) {
    info!(logger, "connection accepted");

    let reason = match run(&dictionary, stream, &logger) {
        Ok(()) => "closed by peer".to_owned(),
        Err(Error::Json(e)) => {
            warn!(logger, "malformed request: {}", e);
            "malformed request".to_owned()
        }
        Err(e @ Error::LineTooLong(_)) => {
            warn!(logger, "malformed request: {}", e);
            "malformed request".to_owned()
        }
        Err(e) => format!("{}", e),
    };

    info!(logger, "client disconnected"; "reason" => reason);
}

fn run<T: Table>(
    dictionary: &Dictionary<T>,
    stream: TcpStream,
    logger: &slog::Logger,
) -> crate::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;

    while let Some(request) = read_message::<_, Request>(&mut reader)? {
        info!(logger, "request";
            "mode" => String::from(request.mode.clone()),
            "word" => request.word.as_str());

        let response = dispatcher::dispatch(dictionary, request);
        log_outcome(logger, &response);
        write_message(&mut writer, &response)?;
    }
    Ok(())
}

fn log_outcome(logger: &slog::Logger, response: &Response) {
    let message = response.message.as_deref().unwrap_or("");
    match response.status {
        Status::Error if message == DATABASE_ERROR => {
            error!(logger, "storage failure while handling request")
        }
        status => debug!(logger, "response"; "status" => ?status, "message" => message),
    }
}
