use typed_builder::TypedBuilder;

/// Knobs shared by every trie query.
#[derive(Default, Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct SearchConfig {
    /// Stop the traversal once this many words have been found.
    #[builder(default, setter(strip_option))]
    pub max_results: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub(crate) fn is_full(&self, found: usize) -> bool {
        self.max_results.map(|max| found >= max).unwrap_or(false)
    }
}
