use petgraph::{Direction, visit::EdgeRef};

use crate::automaton::{Symbol, fsa::Fsa};

impl<S: Symbol> Fsa<S> {
    /// Decides whether the automaton accepts `input`, consumed left to right.
    ///
    /// Dispatches on the determinism flag, so the direct-walk algorithm is
    /// only ever run on automata that truthfully are deterministic. Both
    /// modes are pure queries. An automaton without a start state rejects
    /// everything.
    pub fn recognize<'a>(&self, input: impl IntoIterator<Item = &'a S>) -> bool
    where
        S: 'a,
    {
        if self.deterministic {
            self.recognize_deterministic(input)
        } else {
            self.recognize_nondeterministic(input)
        }
    }

    /// Direct walk: one unique target per consumed symbol. A missing
    /// transition rejects immediately without consuming the rest of the
    /// input.
    fn recognize_deterministic<'a>(&self, input: impl IntoIterator<Item = &'a S>) -> bool
    where
        S: 'a,
    {
        let Some(mut state) = self.start else {
            return false;
        };

        for symbol in input {
            let next = self
                .graph
                .edges_directed(state, Direction::Outgoing)
                .find(|edge| edge.weight() == symbol)
                .map(|edge| edge.target());

            match next {
                Some(next) => state = next,
                None => return false,
            }
        }

        self.graph[state].accepting
    }

    /// Agenda search over (state, input position) pairs. Only acceptance is
    /// reported, not a witness path, so the order in which branches are
    /// explored does not matter and a stack suffices.
    ///
    /// The agenda is seeded with (start, 0) rather than with the moves on the
    /// first symbol, which makes the empty input well defined: it is accepted
    /// exactly when the start state is accepting.
    fn recognize_nondeterministic<'a>(&self, input: impl IntoIterator<Item = &'a S>) -> bool
    where
        S: 'a,
    {
        let Some(start) = self.start else {
            return false;
        };

        let input = input.into_iter().collect::<Vec<_>>();
        let mut agenda = vec![(start, 0usize)];

        while let Some((state, position)) = agenda.pop() {
            if position == input.len() {
                if self.graph[state].accepting {
                    return true;
                }
                continue;
            }

            for edge in self.graph.edges_directed(state, Direction::Outgoing) {
                if edge.weight() == input[position] {
                    agenda.push((edge.target(), position + 1));
                }
            }
        }

        false
    }
}
