use hashbrown::HashSet;
use lexfsa_lib::{
    automaton::fsa::Fsa,
    error::FsaError,
    validation::same_language::{assert_same_language, same_language},
};

#[test]
fn equivalent_leaves_are_merged() {
    let mut fsa = Fsa::trie_from_words(["ab", "cb"].iter().map(|w| w.chars()));
    let original = fsa.clone();
    let before = fsa.state_count();

    let stats = fsa.minimize().unwrap();

    assert!(fsa.state_count() < before);
    assert_eq!(stats.states_before, before);
    assert_eq!(stats.states_after, fsa.state_count());
    // both inner states and both leaves collapse: start, inner, leaf
    assert_eq!(fsa.state_count(), 3);
    assert_same_language(&original, &fsa, 4);
}

#[test]
fn minimize_complete_dfa() {
    // the classic six-state example that minimizes to three states
    let mut fsa = Fsa::new();
    let q0 = fsa.add_state();
    let q1 = fsa.add_state();
    let q2 = fsa.add_state();
    let q3 = fsa.add_state();
    let q4 = fsa.add_state();
    let q5 = fsa.add_state();

    fsa.add_transition(q0, 'a', Some(q1), false);
    fsa.add_transition(q0, 'b', Some(q2), false);
    fsa.add_transition(q1, 'a', Some(q0), false);
    fsa.add_transition(q1, 'b', Some(q3), false);
    fsa.add_transition(q2, 'a', Some(q4), false);
    fsa.add_transition(q2, 'b', Some(q5), false);
    fsa.add_transition(q3, 'a', Some(q4), false);
    fsa.add_transition(q3, 'b', Some(q5), false);
    fsa.add_transition(q4, 'a', Some(q4), false);
    fsa.add_transition(q4, 'b', Some(q5), false);
    fsa.add_transition(q5, 'a', Some(q5), false);
    fsa.add_transition(q5, 'b', Some(q5), false);

    fsa.mark_accepting(q2);
    fsa.mark_accepting(q3);
    fsa.mark_accepting(q4);

    let original = fsa.clone();
    let stats = fsa.minimize().unwrap();

    assert_eq!(fsa.state_count(), 3);
    assert_eq!(stats.states_after, 3);
    assert!(same_language(&original, &fsa, 8));
}

#[test]
fn transition_presence_distinguishes_states() {
    // {ab, b}: the start state and the post-'a' state both reach an
    // accepting state on 'b', but only the start state moves on 'a'
    let mut fsa = Fsa::trie_from_words(["ab", "b"].iter().map(|w| w.chars()));
    let original = fsa.clone();

    fsa.minimize().unwrap();

    assert_eq!(fsa.state_count(), 3);
    assert_same_language(&original, &fsa, 4);
}

#[test]
fn disconnected_states_are_pruned() {
    let mut fsa = Fsa::new();
    let q0 = fsa.add_state();
    fsa.add_transition(q0, 'a', None, true);
    let _orphan = fsa.add_state();
    assert_eq!(fsa.state_count(), 3);

    let stats = fsa.minimize().unwrap();

    assert_eq!(fsa.state_count(), 2);
    assert_eq!(stats.states_before, 3);
    assert_eq!(stats.states_after, 2);
}

#[test]
fn minimization_preserves_a_lexicon_language() {
    let words = ["walk", "walks", "wall", "walls", "want", "wants"];
    let mut fsa = Fsa::trie_from_words(words.iter().map(|w| w.chars()));
    let original = fsa.clone();

    let stats = fsa.minimize().unwrap();
    // suffix sharing kicks in, e.g. the accepting leaves collapse
    assert!(stats.states_after < stats.states_before);
    assert!(fsa.is_deterministic());

    let generated: HashSet<String> = fsa.words().map(|w| w.into_iter().collect()).collect();
    let expected: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
    assert_eq!(generated, expected);

    assert_same_language(&original, &fsa, 6);
}

#[test]
fn minimization_is_idempotent() {
    let mut fsa = Fsa::trie_from_words(["ab", "cb"].iter().map(|w| w.chars()));
    fsa.minimize().unwrap();
    let states = fsa.state_count();
    let arcs = fsa.arc_count();

    let stats = fsa.minimize().unwrap();
    assert_eq!(stats.states_after, states);
    assert_eq!(stats.arcs_after, arcs);
}

#[test]
fn minimizing_a_nondeterministic_automaton_is_rejected() {
    let mut fsa = Fsa::new();
    let q0 = fsa.add_state();
    fsa.add_transition(q0, 'a', None, true);
    fsa.add_transition(q0, 'a', None, false);

    let err = fsa.minimize().unwrap_err();
    assert!(matches!(err, FsaError::NotDeterministic));
}

#[test]
fn minimizing_without_a_start_state_is_rejected() {
    let mut fsa = Fsa::<char>::new();
    let err = fsa.minimize().unwrap_err();
    assert!(matches!(err, FsaError::MissingStartState));
}
