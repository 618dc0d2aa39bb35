use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::Trie;

/// The only mutable phase of a trie's life. Words are added here and the
/// finished, read-only [`Trie`] is produced by [`TrieBuilder::build`].
#[derive(Default, Debug)]
pub struct TrieBuilder {
    pub(crate) root: TrieNode,
    count: usize,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        TrieBuilder {
            root: Default::default(),
            count: 0,
        }
    }

    /// Adding a word that is already present has no effect. The empty
    /// string marks the root itself.
    pub fn add(&mut self, word: &str) -> &mut TrieBuilder {
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.get_or_create_child(c);
        }
        if !current.is_terminal {
            current.is_terminal = true;
            self.count += 1;
        }
        self
    }

    pub fn add_all<I, S>(&mut self, items: I) -> &mut TrieBuilder
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        items.into_iter().for_each(|x| { self.add(x.as_ref()); });
        self
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn build(&mut self) -> Trie {
        let root = std::mem::take(&mut self.root);
        let count = std::mem::replace(&mut self.count, 0);
        Trie::from_parts(root, count)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieBuilder {
    fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
        let mut builder = TrieBuilder::new();
        builder.add_all(iter);
        builder
    }
}
