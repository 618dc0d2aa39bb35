pub mod trie;
pub mod trie_builder;
pub mod search;
pub mod searchconfig;
pub mod letterbag;

mod node;
mod iterators;

pub use iterators::Children;
pub use node::TrieNode;
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
