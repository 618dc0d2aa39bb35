use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::wordlist::wordlist::Wordlist;

/// A validated request against a word list.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Query {
    Search { letters: String, length: usize },
    Anagram(String),
    Complete(String),
}

/// Word lengths come in as signed integers from the user; anything below
/// one is refused before it reaches the trie.
pub fn validate_length(length: i64) -> Result<usize> {
    usize::try_from(length)
        .ok()
        .filter(|&x| x >= 1)
        .ok_or_else(|| Error::InvalidLength(length.to_string()))
}

impl Query {
    pub fn search(letters: &str, length: i64) -> Result<Query> {
        Ok(Query::Search { letters: letters.to_string(), length: validate_length(length)? })
    }

    pub fn run(&self, wordlist: &Wordlist) -> Vec<String> {
        match self {
            Query::Search { letters, length } => wordlist.search(letters, *length),
            Query::Anagram(letters) => wordlist.anagram(letters),
            Query::Complete(prefix) => wordlist.complete(prefix),
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Query::Search { letters, length } => write!(f, "search {} {}", letters, length),
            Query::Anagram(letters) => write!(f, "anagram {}", letters),
            Query::Complete(prefix) => write!(f, "complete {}", prefix),
        }
    }
}
