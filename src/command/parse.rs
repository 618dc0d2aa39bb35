use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{i64, satisfy, space0, space1};
use nom::combinator::{all_consuming, map, map_opt, not, opt, value};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;

use crate::error::{Error, Result};

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    /// `ca_`: every word starting with `ca`. The prefix may contain spaces.
    Complete(String),
    /// `atc 3`, or just `atc` when the length is asked for separately.
    Search { letters: String, length: Option<i64> },
    /// `:q`
    Quit,
}

pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    all_consuming(command)(line)
        .map(|(_, command)| command)
        .map_err(|_| Error::Parse(line.to_string()))
}

/// A bare length, as typed at the "Enter length" prompt.
pub fn parse_length(line: &str) -> Result<i64> {
    let line = line.trim_end_matches(|c| c == '\r' || c == '\n');
    all_consuming(delimited(space0, i64, space0))(line)
        .map(|(_, length)| length)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| Error::InvalidLength(line.trim().to_string()))
}

fn command(input: &str) -> IResult<&str, Command> {
    delimited(space0, alt((quit, complete, search)), space0)(input)
}

fn token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

fn quit(input: &str) -> IResult<&str, Command> {
    value(Command::Quit,
          terminated(tag(":q"), not(satisfy(|c| !c.is_whitespace()))))(input)
}

/// Everything up to a trailing `_`, spaces included, so multi-word
/// dictionary entries can be completed.
fn complete(input: &str) -> IResult<&str, Command> {
    map_opt(take_while1(|c: char| c != '\n' && c != '\r'), |t: &str| {
        t.trim_end().strip_suffix('_').map(|prefix| Command::Complete(prefix.to_string()))
    })(input)
}

fn search(input: &str) -> IResult<&str, Command> {
    map(
        pair(token, opt(preceded(space1, i64))),
        |(letters, length)| Command::Search { letters: letters.to_string(), length },
    )(input)
}
