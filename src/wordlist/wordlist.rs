use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info, warn};
use metrics::{gauge, histogram, increment_counter};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Error, Result};
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::Trie;

/// A dictionary ready for queries, plus the settings it was loaded with.
#[derive(Debug, Clone)]
pub struct Wordlist {
    trie: Trie,
    normalize: bool,
    config: SearchConfig,
}

/// How a dictionary file is laid out.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Column separator. Without one the whole file is split on whitespace
    /// and every token is a word.
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
    /// Fold words (and later, queries) to lowercase letters.
    #[builder(default)]
    normalize: bool,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column)
                .map(str::trim)
                .filter(|x| !x.is_empty()),
        }
    }

    fn words<'a>(&self, contents: &'a str, failures: &mut usize) -> Vec<&'a str> {
        match self.delimiter {
            None => contents.split_whitespace().collect(),
            Some(_) => contents.lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .filter_map(|(idx, line)| {
                    let word = self.parse_line(line);
                    if word.is_none() {
                        warn!("Line #{} has no column {}: {:?}", idx + 1, self.word_column, line);
                        *failures += 1;
                    }
                    word
                })
                .collect(),
        }
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(filename: P, format: &FileFormat) -> Result<Wordlist> {
        let path = filename.as_ref();
        info!("Reading words from {:?}", path);

        let start = Instant::now();
        let contents = fs::read_to_string(path)
            .map_err(|source| Error::Dictionary { path: path.to_path_buf(), source })?;
        debug!("Reading took {}s", start.elapsed().as_secs_f64());

        let mut failures: usize = 0;
        let words = format.words(&contents, &mut failures);
        let wordlist = Wordlist::from_words(words, format.normalize);

        let elapsed = start.elapsed();
        info!("Read {} words in {}s [{} failures]",
              wordlist.len(), elapsed.as_secs_f64(), failures);
        histogram!("wordlist_load_seconds", elapsed.as_secs_f64());
        Ok(wordlist)
    }

    /// Load a dictionary that is already in memory. With `normalize` set,
    /// words that fold to nothing are dropped.
    pub fn from_words<I, S>(words: I, normalize: bool) -> Wordlist
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut builder = Trie::builder();
        for word in words {
            let word = word.as_ref();
            if normalize {
                let folded = crate::alphabet::normalize(word);
                if !folded.is_empty() {
                    builder.add(&folded);
                }
            } else {
                builder.add(word);
            }
        }
        let trie = builder.build();
        gauge!("wordlist_words", trie.len() as f64);
        Wordlist { trie, normalize, config: SearchConfig::new() }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Wordlist {
        self.config = config;
        self
    }

    delegate! {
        to self.trie {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    fn fold<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.normalize {
            Cow::Owned(normalize(input))
        } else {
            Cow::Borrowed(input)
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&self.fold(word))
    }

    pub fn search(&self, letters: &str, length: usize) -> Vec<String> {
        increment_counter!("wordlist_queries", "kind" => "search");
        self.trie.query_scrabble_with_config(&self.fold(letters), length, &self.config)
    }

    pub fn anagram(&self, letters: &str) -> Vec<String> {
        increment_counter!("wordlist_queries", "kind" => "anagram");
        self.trie.query_anagram_with_config(&self.fold(letters), &self.config)
    }

    pub fn complete(&self, prefix: &str) -> Vec<String> {
        increment_counter!("wordlist_queries", "kind" => "complete");
        self.trie.query_autocomplete_with_config(&self.fold(prefix), &self.config)
    }
}
