use crate::automaton::{Symbol, fsa::Fsa};

impl<S: Symbol> Fsa<S> {
    /// Inserts a single word, walking from the start state and reusing
    /// existing transitions, so common prefixes are shared. Fresh states are
    /// allocated past the shared prefix and the final state is marked
    /// accepting.
    ///
    /// Inserting the empty word marks the start state accepting. The start
    /// state is never unmarked on behalf of other words.
    pub fn insert_word(&mut self, word: impl IntoIterator<Item = S>) {
        let mut state = self.start_or_insert();

        for symbol in word {
            state = match self.step(&symbol, Some(state)) {
                Some(targets) => targets[0],
                None => self.add_transition(state, symbol, None, false),
            };
        }

        self.mark_accepting(state);
    }

    /// Builds a trie whose accepted language is exactly the given word set.
    ///
    /// The result is acyclic and deterministic by construction: the
    /// reuse-if-present rule keeps at most one outgoing arc per (state,
    /// symbol) pair. Insertion order does not affect the recognized language.
    pub fn trie_from_words<W>(words: impl IntoIterator<Item = W>) -> Self
    where
        W: IntoIterator<Item = S>,
    {
        let mut fsa = Fsa::new();
        for word in words {
            fsa.insert_word(word);
        }

        tracing::debug!(
            states = fsa.state_count(),
            arcs = fsa.arc_count(),
            "built trie"
        );

        fsa
    }
}
