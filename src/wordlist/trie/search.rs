use derive_new::new;
use log::debug;

use crate::wordlist::trie::letterbag::LetterBag;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::trie::Trie;

/// A pending visit: the node, the word spelled on the way to it, and
/// whatever per-path state the query carries.
#[derive(new)]
struct Frame<'t, State> {
    node: &'t TrieNode,
    path: String,
    state: State,
}

impl Trie {
    /// Depth-first walk below `start` on an explicit stack. A child edge is
    /// followed only when `keep_going` yields a state for it; a terminal node
    /// is reported when `accept` agrees. Children are pushed in reverse, so
    /// words come out in ascending order.
    fn depth_first_search<State, Accept, KeepGoing>
    (&self, start: &TrieNode, path: String, starting_state: State,
     accept: Accept, keep_going: KeepGoing, config: &SearchConfig,
    ) -> Vec<String>
        where Accept: Fn(&str, &State) -> bool,
              KeepGoing: Fn(&str, &State, char) -> Option<State>
    {
        let mut stack = vec![Frame::new(start, path, starting_state)];
        let mut results: Vec<String> = vec![];

        while let Some(Frame { node, mut path, state }) = stack.pop() {
            if config.is_full(results.len()) {
                break;
            }
            if node.is_terminal() && accept(path.as_str(), &state) {
                results.push(path.clone());
            }
            let mut next = node.children().rev()
                .filter_map(|(c, child)| keep_going(path.as_str(), &state, c).map(|s| (c, child, s)))
                .collect::<Vec<_>>()
                .into_iter()
                .peekable();
            while let Some((c, child, new_state)) = next.next() {
                // the last child pushed takes over this frame's path
                let mut new_path = if next.peek().is_some() {
                    path.clone()
                } else {
                    std::mem::take(&mut path)
                };
                new_path.push(c);
                stack.push(Frame::new(child, new_path, new_state));
            }
        }
        results
    }

    /// Every word of exactly `length` characters that can be spelled from
    /// `letters`, using each supplied letter at most as often as it appears.
    pub fn query_scrabble(&self, letters: &str, length: usize) -> Vec<String> {
        self.query_scrabble_with_config(letters, length, &SearchConfig::new())
    }

    pub fn query_scrabble_with_config(&self, letters: &str, length: usize,
                                      config: &SearchConfig) -> Vec<String> {
        if length == 0 {
            return vec![];
        }
        let bag = LetterBag::new(letters);
        // state is the depth, so only full-length words are ever accepted
        let results = self.depth_first_search(
            &self.root,
            String::new(),
            0usize,
            |_, depth| *depth == length,
            |path, depth, c| {
                if *depth < length && bag.allows(path, c) {
                    Some(depth + 1)
                } else { None }
            },
            config);
        debug!("scrabble {:?} length {}: {} words", letters, length, results.len());
        results
    }

    /// Words that use every one of `letters` exactly once.
    pub fn query_anagram(&self, letters: &str) -> Vec<String> {
        self.query_anagram_with_config(letters, &SearchConfig::new())
    }

    pub fn query_anagram_with_config(&self, letters: &str, config: &SearchConfig) -> Vec<String> {
        self.query_scrabble_with_config(letters, letters.chars().count(), config)
    }

    /// Every dictionary word starting with `prefix`, the prefix itself
    /// included when it is a word. An unknown prefix gives no words.
    pub fn query_autocomplete(&self, prefix: &str) -> Vec<String> {
        self.query_autocomplete_with_config(prefix, &SearchConfig::new())
    }

    pub fn query_autocomplete_with_config(&self, prefix: &str, config: &SearchConfig) -> Vec<String> {
        let start = match self.get_node(prefix) {
            Some(node) => node,
            None => {
                debug!("autocomplete {:?}: prefix not in dictionary", prefix);
                return vec![];
            }
        };
        let results = self.depth_first_search(
            start,
            prefix.to_string(),
            (),
            |_, _| true,
            |_, _, _| Some(()),
            config);
        debug!("autocomplete {:?}: {} words", prefix, results.len());
        results
    }
}
