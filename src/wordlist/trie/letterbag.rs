use std::collections::HashMap;

use maplit::hashmap;

/// The multiset of letters a player holds. Built fresh for every query and
/// never mutated during the search: how many of a letter are already spent
/// is read off the path walked so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterBag {
    counts: HashMap<char, usize>,
}

impl LetterBag {
    pub fn new(letters: &str) -> LetterBag {
        let mut counts = hashmap! {};

        letters.chars().for_each(|c| {
            *counts.entry(c).or_insert(0) += 1;
        });
        LetterBag { counts }
    }

    pub fn available(&self, c: char) -> usize {
        *self.counts.get(&c).unwrap_or(&0)
    }

    /// Can `prefix` be extended by `c` without spending more `c`s than the
    /// bag holds?
    pub fn allows(&self, prefix: &str, c: char) -> bool {
        let available = self.available(c);
        available > 0 && prefix.chars().filter(|&x| x == c).count() < available
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl From<&str> for LetterBag {
    fn from(letters: &str) -> Self {
        LetterBag::new(letters)
    }
}
