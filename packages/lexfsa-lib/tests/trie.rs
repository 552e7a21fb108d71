use hashbrown::HashSet;
use lexfsa_lib::{automaton::fsa::Fsa, validation::same_language::assert_same_language};

#[test]
fn common_prefixes_are_shared() {
    let fsa = Fsa::trie_from_words(["cat", "car"].iter().map(|word| word.chars()));

    // c-a is shared, then t and r branch: start plus four states
    assert_eq!(fsa.state_count(), 5);
    assert_eq!(fsa.arc_count(), 4);
    assert!(fsa.is_deterministic());
}

#[test]
fn insertion_order_does_not_change_the_language() {
    let a = Fsa::trie_from_words(["walk", "walks", "wall", "talk"].iter().map(|w| w.chars()));
    let b = Fsa::trie_from_words(["talk", "wall", "walks", "walk"].iter().map(|w| w.chars()));

    assert_same_language(&a, &b, 6);
    assert_eq!(a.state_count(), b.state_count());
    assert_eq!(a.arc_count(), b.arc_count());
}

#[test]
fn duplicate_words_collapse() {
    let a = Fsa::trie_from_words(["dog", "dog", "dot"].iter().map(|w| w.chars()));
    let b = Fsa::trie_from_words(["dog", "dot"].iter().map(|w| w.chars()));

    assert_eq!(a.state_count(), b.state_count());
    assert_eq!(a.arc_count(), b.arc_count());
}

#[test]
fn prefix_words_mark_inner_states_accepting() {
    let fsa = Fsa::trie_from_words(["walk", "walks"].iter().map(|w| w.chars()));

    let walk: Vec<char> = "walk".chars().collect();
    let walks: Vec<char> = "walks".chars().collect();
    let wal: Vec<char> = "wal".chars().collect();

    assert!(fsa.recognize(&walk));
    assert!(fsa.recognize(&walks));
    assert!(!fsa.recognize(&wal));
    // "walks" extends "walk" by one state
    assert_eq!(fsa.state_count(), 6);
}

#[test]
fn round_trip_through_enumeration() {
    let words = ["a", "ab", "abc", "b"];
    let fsa = Fsa::trie_from_words(words.iter().map(|w| w.chars()));

    let generated: HashSet<String> = fsa.words().map(|w| w.into_iter().collect()).collect();
    let expected: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
    assert_eq!(generated, expected);
}
