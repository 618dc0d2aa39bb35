use std::fmt::{Debug, Formatter};

use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::TrieBuilder;

/// A dictionary loaded into a prefix tree. Built once, read-only afterwards,
/// so a `&Trie` can be shared freely between queries.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
    count: usize,
}

impl Trie {
    /// Bulk-load `words` into a new trie. Duplicates collapse to a single
    /// path; an empty word list yields a trie holding only the root.
    pub fn new<I, S>(words: I) -> Trie
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        TrieBuilder::new().add_all(words).build()
    }

    pub fn builder() -> TrieBuilder {
        TrieBuilder::new()
    }

    pub(crate) fn from_parts(root: TrieNode, count: usize) -> Trie {
        debug_assert_eq!(root.count_words(), count);
        Trie { root, count }
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The node reached by spelling out `prefix` from the root, if every
    /// edge along the way exists.
    pub fn get_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.chars()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word).map(|x| x.is_terminal()).unwrap_or(false)
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.get_node(prefix).is_some()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
        Trie::new(iter)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(x);
            stack.extend(x.children().rev().map(|(_, child)| child));
        }
        l.finish()
    }
}
