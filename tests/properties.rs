use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use scrabble_tools::wordlist::trie::Trie;

fn letter_counts(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn dictionary() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-e]{0,6}", 0..40)
}

proptest! {
    #[test]
    fn every_word_is_completed_from_empty_prefix(words in dictionary()) {
        let trie = Trie::new(&words);
        let all: HashSet<String> = trie.query_autocomplete("").into_iter().collect();
        for w in &words {
            prop_assert!(all.contains(w), "missing {:?}", w);
        }
        prop_assert_eq!(all.len(), trie.len());
    }

    #[test]
    fn every_word_is_found_from_its_own_letters(words in dictionary()) {
        let trie = Trie::new(&words);
        for w in words.iter().filter(|w| !w.is_empty()) {
            let found = trie.query_scrabble(w, w.chars().count());
            prop_assert!(found.contains(w), "{:?} not in {:?}", w, found);
        }
    }

    #[test]
    fn search_respects_length_and_counts(words in dictionary(),
                                         letters in "[a-e]{0,8}",
                                         length in 1usize..8) {
        let trie = Trie::new(&words);
        let bag = letter_counts(&letters);
        for w in trie.query_scrabble(&letters, length) {
            prop_assert_eq!(w.chars().count(), length);
            for (c, n) in letter_counts(&w) {
                prop_assert!(n <= *bag.get(&c).unwrap_or(&0), "{:?} overuses {:?}", w, c);
            }
        }
    }

    #[test]
    fn search_matches_brute_force(words in dictionary(),
                                  letters in "[a-e]{0,8}",
                                  length in 1usize..8) {
        let trie = Trie::new(&words);
        let bag = letter_counts(&letters);
        let expected: HashSet<&String> = words.iter()
            .filter(|w| w.chars().count() == length)
            .filter(|w| letter_counts(w).iter().all(|(c, n)| n <= bag.get(c).unwrap_or(&0)))
            .collect();
        let found = trie.query_scrabble(&letters, length);
        let found_set: HashSet<&String> = found.iter().collect();
        prop_assert_eq!(found.len(), found_set.len());
        prop_assert_eq!(found_set, expected);
    }

    #[test]
    fn completions_start_with_prefix(words in dictionary(), prefix in "[a-e]{0,3}") {
        let trie = Trie::new(&words);
        let found = trie.query_autocomplete(&prefix);
        for w in &found {
            prop_assert!(w.starts_with(&prefix));
        }
        let expected: HashSet<&String> = words.iter().filter(|w| w.starts_with(&prefix)).collect();
        prop_assert_eq!(found.iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn absent_prefix_completes_to_nothing(words in dictionary(), prefix in "[a-e]{1,4}[xyz]") {
        let trie = Trie::new(&words);
        prop_assert!(trie.query_autocomplete(&prefix).is_empty());
    }

    #[test]
    fn results_come_out_sorted(words in dictionary(), letters in "[a-e]{0,8}", length in 1usize..8) {
        let trie = Trie::new(&words);
        for found in [trie.query_autocomplete(""), trie.query_scrabble(&letters, length)] {
            let mut sorted = found.clone();
            sorted.sort();
            prop_assert_eq!(found, sorted);
        }
    }

    #[test]
    fn inserting_twice_changes_nothing(words in dictionary(), letters in "[a-e]{0,8}",
                                       length in 1usize..8, prefix in "[a-e]{0,2}") {
        let once = Trie::new(&words);
        let twice = Trie::new(words.iter().chain(words.iter()));
        prop_assert_eq!(once.query_autocomplete(&prefix), twice.query_autocomplete(&prefix));
        prop_assert_eq!(once.query_scrabble(&letters, length), twice.query_scrabble(&letters, length));
        prop_assert_eq!(once.len(), twice.len());
    }
}

#[test]
fn scenario_search() {
    let trie = Trie::new(["cat", "car", "cart", "dog"]);
    assert_eq!(trie.query_scrabble("atc", 3), vec!["cat"]);
    assert_eq!(trie.query_scrabble("tarc", 4), vec!["cart"]);
}

#[test]
fn scenario_complete() {
    let trie = Trie::new(["cat", "car", "cart"]);
    let found: HashSet<String> = trie.query_autocomplete("ca").into_iter().collect();
    let expected: HashSet<String> = ["cat", "car", "cart"].iter().map(|s| s.to_string()).collect();
    assert_eq!(found, expected);
    assert!(trie.query_autocomplete("do").is_empty());
}

#[test]
fn scenario_letter_counts() {
    let trie = Trie::new(["a", "aa"]);
    assert_eq!(trie.query_scrabble("a", 1), vec!["a"]);
    assert_eq!(trie.query_scrabble("aa", 2), vec!["aa"]);
    assert!(trie.query_scrabble("a", 2).is_empty());
}

#[test]
fn scenario_empty_dictionary() {
    let trie = Trie::new(Vec::<String>::new());
    assert!(trie.query_scrabble("abc", 1).is_empty());
    assert!(trie.query_scrabble("", 3).is_empty());
    assert!(trie.query_autocomplete("").is_empty());
    assert!(trie.query_autocomplete("abc").is_empty());
}

#[test]
fn trie_is_shareable_across_threads() {
    fn assert_sync<T: Send + Sync>() {}
    assert_sync::<Trie>();

    let trie = Trie::new(["cat", "act", "tac", "cart"]);
    std::thread::scope(|s| {
        let a = s.spawn(|| trie.query_scrabble("tac", 3));
        let b = s.spawn(|| trie.query_autocomplete("ca"));
        assert_eq!(a.join().unwrap(), vec!["act", "cat", "tac"]);
        assert_eq!(b.join().unwrap(), vec!["cart", "cat"]);
    });
}
