use std::collections::VecDeque;

use petgraph::{Direction, graph::NodeIndex, visit::EdgeRef};

use crate::automaton::{Symbol, fsa::Fsa};

/// Lazy enumeration of the accepted language.
///
/// Traversal uses an explicit work stack, so depth is bounded only by memory
/// and the sequence can be consumed one word at a time. Popping a stack entry
/// expands every outgoing arc at once; words that end in an accepting state
/// are parked in a small ready buffer and handed out on subsequent calls.
///
/// The sequence is infinite when a cycle is reachable from the start state.
/// No cycle detection is performed; the caller bounds consumption, e.g. with
/// [`Iterator::take`]. Dropping the iterator early releases nothing but its
/// own stack.
pub struct Words<'a, S: Symbol> {
    fsa: &'a Fsa<S>,
    stack: Vec<(NodeIndex, Vec<S>)>,
    ready: VecDeque<Vec<S>>,
}

impl<S: Symbol> Fsa<S> {
    /// Lazily enumerates every accepted word. Each call starts a fresh
    /// traversal. The order of words is unspecified beyond "every accepted
    /// word eventually appears, and only accepted words appear".
    ///
    /// The empty word is yielded (once, first) exactly when the start state
    /// is accepting.
    pub fn words(&self) -> Words<'_, S> {
        let mut stack = Vec::new();
        let mut ready = VecDeque::new();

        if let Some(start) = self.start() {
            stack.push((start, Vec::new()));
            if self.graph[start].accepting {
                ready.push_back(Vec::new());
            }
        }

        Words {
            fsa: self,
            stack,
            ready,
        }
    }
}

impl<S: Symbol> Iterator for Words<'_, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Vec<S>> {
        loop {
            if let Some(word) = self.ready.pop_front() {
                return Some(word);
            }

            let (state, prefix) = self.stack.pop()?;

            for edge in self.fsa.graph.edges_directed(state, Direction::Outgoing) {
                let mut word = prefix.clone();
                word.push(edge.weight().clone());

                if self.fsa.graph[edge.target()].accepting {
                    self.ready.push_back(word.clone());
                }

                self.stack.push((edge.target(), word));
            }
        }
    }
}
