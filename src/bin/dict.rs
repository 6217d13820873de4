use dictd::{Dictionary, Result, SledTable, MEANING_SEPARATOR};
use std::path::PathBuf;
use std::process::exit;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dict")]
struct DictOpts {
    #[structopt(parse(from_os_str), help = "DICTIONARY-FILE")]
    dictionary: PathBuf,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print every word with its meanings
    List,
    /// Seed a word without going through a server
    Add {
        #[structopt(index = 1, required = true)]
        word: String,
        #[structopt(index = 2, required = true)]
        meaning: String,
    },
}

fn main() -> Result<()> {
    let opts = DictOpts::from_args();
    let dictionary = Dictionary::open(SledTable::open(&opts.dictionary)?)?;

    match opts.command {
        Command::List => {
            for entry in dictionary.entries()? {
                let meanings: Vec<&str> = entry.meaning.split(MEANING_SEPARATOR).collect();
                println!("{}\t{}", entry.word, meanings.join(" | "));
            }
        }
        Command::Add { word, meaning } => {
            if let Err(e) = dictionary.insert(&word, &meaning) {
                eprintln!("{}", e);
                exit(1);
            }
        }
    }
    Ok(())
}
