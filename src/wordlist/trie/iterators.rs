use std::collections::btree_map;

use crate::wordlist::trie::node::TrieNode;

/// Walks the outgoing edges of a node in ascending letter order.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    inner: btree_map::Iter<'a, char, TrieNode>,
}

impl<'a> Iterator for Children<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(c, node)| (*c, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(c, node)| (*c, node))
    }
}

impl ExactSizeIterator for Children<'_> {}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = Children<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

impl TrieNode {
    pub fn children(&self) -> Children<'_> {
        Children { inner: self.children.iter() }
    }
}
