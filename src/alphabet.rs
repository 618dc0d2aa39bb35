/// Fold a word or query into the dictionary's canonical form: lowercase,
/// alphabetic characters only.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect()
}
