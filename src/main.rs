use std::io;
use std::path::PathBuf;

use log::error;
use structopt::StructOpt;

use scrabble_tools::command::session::interactive;
use scrabble_tools::command::{Output, Query};
use scrabble_tools::error::Result;
use scrabble_tools::wordlist::trie::searchconfig::SearchConfig;
use scrabble_tools::wordlist::wordlist::{FileFormat, Wordlist};


/// Find the dictionary words you can spell from a rack of letters, or
/// every word that starts with a prefix.
#[derive(StructOpt)]
struct Cli {
    /// The dictionary file to load
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Print results as JSON
    #[structopt(long)]
    json: bool,
    /// Lowercase the dictionary and queries and drop non-letters
    #[structopt(long)]
    normalize: bool,
    /// Stop after this many words
    #[structopt(long)]
    max_results: Option<usize>,
    /// Dictionary column separator; by default the file is split on whitespace
    #[structopt(long)]
    delimiter: Option<char>,
    /// Which column holds the word when a delimiter is given
    #[structopt(long, default_value = "0")]
    word_column: usize,
    /// Run a single query instead of prompting
    #[structopt(subcommand)]
    query: Option<QueryCmd>,
}

#[derive(StructOpt)]
enum QueryCmd {
    /// Words of exactly LENGTH letters spelled from LETTERS
    Search { letters: String, length: i64 },
    /// Words that use every one of LETTERS
    Anagram { letters: String },
    /// Words starting with PREFIX
    Complete { prefix: String },
}

impl QueryCmd {
    fn into_query(self) -> Result<Query> {
        match self {
            QueryCmd::Search { letters, length } => Query::search(&letters, length),
            QueryCmd::Anagram { letters } => Ok(Query::Anagram(letters)),
            QueryCmd::Complete { prefix } => Ok(Query::Complete(prefix)),
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .normalize(args.normalize)
        .build();
    let config = SearchConfig { max_results: args.max_results };
    let output = if args.json { Output::Json } else { Output::Plain };

    let wl = Wordlist::from_file(&args.path, &format)?.with_config(config);

    match args.query {
        Some(cmd) => {
            let query = cmd.into_query()?;
            let words = query.run(&wl);
            println!("{}", output.format(&query, &words)?);
        }
        None => {
            let stdin = io::stdin();
            interactive(&wl, output, stdin.lock(), io::stdout())?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
