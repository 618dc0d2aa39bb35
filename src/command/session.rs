use std::io::{BufRead, Write};

use log::debug;

use crate::command::output::Output;
use crate::command::parse::{parse, parse_length, Command};
use crate::command::query::Query;
use crate::error::Result;
use crate::wordlist::wordlist::Wordlist;

/// The interactive loop: read a command, run it, print the words. Input
/// mistakes are reported and the loop carries on; it ends on end of input
/// or `:q`. Only failures to talk to `out` are returned.
pub fn interactive<R: BufRead, W: Write>(wordlist: &Wordlist, output: Output,
                                         mut input: R, mut out: W) -> Result<()> {
    loop {
        let line = match prompt(&mut input, &mut out, "\nEnter letters: ")? {
            Some(line) => line,
            None => break,
        };

        let query = match parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Complete(prefix)) => Ok(Query::Complete(prefix)),
            Ok(Command::Search { letters, length: Some(length) }) => Query::search(&letters, length),
            Ok(Command::Search { letters, length: None }) => {
                let line = match prompt(&mut input, &mut out, "Enter length: ")? {
                    Some(line) => line,
                    None => break,
                };
                parse_length(&line).and_then(|length| Query::search(&letters, length))
            }
            Err(e) => Err(e),
        };

        match query {
            Ok(query) => {
                let words = query.run(wordlist);
                debug!("{}: {} words", query, words.len());
                writeln!(out, "{}", output.format(&query, &words)?)?;
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
    writeln!(out, "\nExiting...")?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
