use dictd::protocol::{Response, Status};
use dictd::{DictionaryClient, Result};
use std::net::SocketAddr;
use std::process::exit;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dict-client")]
struct ClientOpts {
    #[structopt(default_value = "127.0.0.1:4000", long, help = "IP:PORT")]
    addr: SocketAddr,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    Search {
        #[structopt(required = true)]
        word: String,
    },
    Add {
        #[structopt(index = 1, required = true)]
        word: String,
        #[structopt(index = 2, required = true)]
        meaning: String,
    },
    Remove {
        #[structopt(required = true)]
        word: String,
    },
    Update {
        #[structopt(index = 1, required = true)]
        word: String,
        #[structopt(index = 2, required = true)]
        meaning: String,
    },
}

fn main() -> Result<()> {
    let opts = ClientOpts::from_args();
    let mut client = DictionaryClient::connect(opts.addr)?;

    let response = match opts.command {
        Command::Search { word } => client.search(&word)?,
        Command::Add { word, meaning } => client.add(&word, &meaning)?,
        Command::Remove { word } => client.remove(&word)?,
        Command::Update { word, meaning } => client.update(&word, &meaning)?,
    };

    exit(report(response));
}

fn report(response: Response) -> i32 {
    if let Some(meaning) = response.meaning {
        println!("{}", meaning);
    }
    if let Some(message) = response.message {
        match response.status {
            Status::Success => println!("{}", message),
            _ => eprintln!("{}", message),
        }
    }
    match response.status {
        Status::Success => 0,
        Status::Fail | Status::Error => 1,
    }
}
