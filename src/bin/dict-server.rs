use dictd::server::DictionaryServer;
use dictd::{
    Dictionary, NaiveThreadPool, PoolKind, RayonThreadPool, Result, SharedQueueThreadPool,
    SledTable, ThreadPool,
};
use slog::{error, info, o, Drain};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process::exit;
use std::thread;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dict-server")]
struct ServerOpts {
    #[structopt(long, default_value = "127.0.0.1", help = "IP to listen on")]
    host: IpAddr,
    #[structopt(long, default_value = "naive", help = "naive, shared or rayon")]
    pool: PoolKind,
    #[structopt(long, help = "Worker threads for the shared and rayon pools")]
    threads: Option<u32>,
    #[structopt(help = "PORT")]
    port: u16,
    #[structopt(parse(from_os_str), help = "DICTIONARY-FILE")]
    dictionary: PathBuf,
}

fn main() {
    let decorator = slog_term::PlainDecorator::new(std::io::stderr());
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    let log = slog::Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")));
    let opts = ServerOpts::from_args();
    let addr = SocketAddr::new(opts.host, opts.port);

    let logger = log.new(o!("addr" => addr.to_string(), "pool" => opts.pool.name()));

    if let Err(e) = run(opts, addr, &logger) {
        error!(logger, "server stopped: {}", e);
        // Dropping every logger flushes the async drain before exiting.
        drop(logger);
        drop(log);
        exit(1);
    }
}

fn run(opts: ServerOpts, addr: SocketAddr, logger: &slog::Logger) -> Result<()> {
    let table = SledTable::open(&opts.dictionary)?;
    let dictionary = Dictionary::open(table)?;
    let words = dictionary.len()?;
    let path = opts.dictionary.display().to_string();
    info!(logger, "dictionary loaded"; "path" => path, "words" => words);

    let threads = opts.threads.unwrap_or_else(default_threads);
    match opts.pool {
        PoolKind::Naive => serve(dictionary, NaiveThreadPool::new(threads)?, addr, logger),
        PoolKind::SharedQueue => {
            serve(dictionary, SharedQueueThreadPool::new(threads)?, addr, logger)
        }
        PoolKind::Rayon => serve(dictionary, RayonThreadPool::new(threads)?, addr, logger),
    }
}

fn serve<P: ThreadPool>(
    dictionary: Dictionary<SledTable>,
    pool: P,
    addr: SocketAddr,
    logger: &slog::Logger,
) -> Result<()> {
    DictionaryServer::new(dictionary, pool, logger.clone()).start(addr)
}

fn default_threads() -> u32 {
    thread::available_parallelism()
        .map(|n| n.get() as u32 * 2)
        .unwrap_or(4)
}
