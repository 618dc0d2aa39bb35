use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use crate::wordlist::trie::iterators::Children;

/// One letter-indexed node of the dictionary trie. Each child is owned by
/// exactly one parent; `is_terminal` marks that a dictionary word ends here.
///
/// A node is as deep as the longest word below it, so dropping, cloning and
/// comparing all walk an explicit stack rather than recursing.
#[derive(Default)]
pub struct TrieNode {
    pub(crate) children: BTreeMap<char, TrieNode>,
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    fn leaf(is_terminal: bool) -> TrieNode {
        TrieNode { children: BTreeMap::new(), is_terminal }
    }

    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Number of terminal nodes at or below this one.
    pub(crate) fn count_words(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_terminal {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending = vec![std::mem::take(&mut self.children)];
        while let Some(children) = pending.pop() {
            for (_, mut child) in children {
                // child is left empty, so its own drop does no work
                pending.push(std::mem::take(&mut child.children));
            }
        }
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        // (edge letter, source children not yet copied, copy built so far)
        let mut stack: Vec<(char, Children<'_>, TrieNode)> = vec![];
        let mut current = ('\0', self.children(), TrieNode::leaf(self.is_terminal));
        loop {
            match current.1.next() {
                Some((c, child)) => {
                    let parent = std::mem::replace(
                        &mut current, (c, child.children(), TrieNode::leaf(child.is_terminal)));
                    stack.push(parent);
                }
                None => match stack.pop() {
                    Some(parent) => {
                        let (c, _, done) = std::mem::replace(&mut current, parent);
                        current.2.children.insert(c, done);
                    }
                    None => return current.2,
                },
            }
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.is_terminal != b.is_terminal || a.children.len() != b.children.len() {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children.iter().zip(b.children.iter()) {
                if ca != cb {
                    return false;
                }
                stack.push((na, nb));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::TrieBuilder;

    #[test]
    fn clone_copies_every_edge() {
        let mut builder = TrieBuilder::new();
        builder.add_all(["car", "cart", "cat", "", "dog"]);
        let copy = builder.root.clone();
        assert_eq!(copy, builder.root);
        assert_eq!(copy.count_words(), 5);
        assert!(copy.is_terminal());
        assert!(copy.get_child('c').unwrap().get_child('a').unwrap()
            .get_child('r').unwrap().is_terminal());
    }

    #[test]
    fn equality_sees_terminal_and_edge_differences() {
        let mut a = TrieBuilder::new();
        a.add_all(["cat", "car"]);
        let mut b = TrieBuilder::new();
        b.add_all(["cat", "car", "ca"]);
        let mut c = TrieBuilder::new();
        c.add_all(["cat", "cab"]);
        assert_ne!(a.root, b.root);
        assert_ne!(a.root, c.root);
    }
}
