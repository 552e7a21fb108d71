use itertools::{Itertools, repeat_n};

use crate::automaton::{Symbol, fsa::Fsa};

/// The union of both automata's alphabets, sorted and deduplicated. The
/// alphabets are derived caches, so minimization may shrink one of them; the
/// union keeps the comparison meaningful either way.
fn union_alphabet<S: Symbol>(a: &Fsa<S>, b: &Fsa<S>) -> Vec<S> {
    let mut alphabet = a
        .alphabet()
        .iter()
        .chain(b.alphabet().iter())
        .cloned()
        .collect_vec();
    alphabet.sort();
    alphabet.dedup();
    alphabet
}

/// Checks if two automata accept the same language, comparing every word up
/// to `max_word_length` over the union of both alphabets.
pub fn same_language<S: Symbol>(a: &Fsa<S>, b: &Fsa<S>, max_word_length: usize) -> bool {
    if a.recognize(std::iter::empty::<&S>()) != b.recognize(std::iter::empty::<&S>()) {
        return false;
    }

    let alphabet = union_alphabet(a, b);

    for length in 1..=max_word_length {
        for word in repeat_n(alphabet.iter(), length).multi_cartesian_product() {
            let word: Vec<S> = word.into_iter().cloned().collect_vec();
            if a.recognize(&word) != b.recognize(&word) {
                return false;
            }
        }
    }

    true
}

/// Like [`same_language`], but panics with the first differing word, which
/// makes test failures readable.
pub fn assert_same_language<S: Symbol>(a: &Fsa<S>, b: &Fsa<S>, max_word_length: usize) {
    assert_eq!(
        a.recognize(std::iter::empty::<&S>()),
        b.recognize(std::iter::empty::<&S>()),
        "automata disagree on the empty word"
    );

    let alphabet = union_alphabet(a, b);

    for length in 1..=max_word_length {
        for word in repeat_n(alphabet.iter(), length).multi_cartesian_product() {
            let word: Vec<S> = word.into_iter().cloned().collect_vec();
            match (a.recognize(&word), b.recognize(&word)) {
                (true, false) => {
                    panic!(
                        "{:?} is accepted by automaton `a` but not by automaton `b`. Thus their languages are not equal.",
                        word
                    );
                }
                (false, true) => {
                    panic!(
                        "{:?} is accepted by automaton `b` but not by automaton `a`. Thus their languages are not equal.",
                        word
                    );
                }
                _ => {}
            }
        }
    }
}
