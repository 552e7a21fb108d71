use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use serde::Serialize;

use crate::{
    automaton::{
        Symbol,
        fsa::{Fsa, node::FsaNode},
    },
    error::FsaError,
};

/// State and arc counts around a minimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinimizeStats {
    pub states_before: usize,
    pub arcs_before: usize,
    pub states_after: usize,
    pub arcs_after: usize,
}

impl<S: Symbol> Fsa<S> {
    /// The unique successor of `state` on `symbol`.
    /// Only meaningful on deterministic automata.
    fn successor(&self, state: NodeIndex, symbol: &S) -> Option<NodeIndex> {
        self.graph
            .edges_directed(state, Direction::Outgoing)
            .find(|edge| edge.weight() == symbol)
            .map(|edge| edge.target())
    }

    /// Collapses the automaton to the coarsest partition of states consistent
    /// with acceptance and transition behavior (Myhill–Nerode equivalence),
    /// via the table-filling algorithm over the actual state identifiers.
    ///
    /// The partition is computed first as an immutable representative map and
    /// then applied in one pass to a fresh transition relation which replaces
    /// the old one; only equivalence classes reachable from the start class
    /// are materialized, so disconnected states are dropped in the same pass.
    ///
    /// The accepted language is preserved exactly: for every input,
    /// [`Fsa::recognize`] agrees before and after.
    ///
    /// Fails with [`FsaError::NotDeterministic`] on non-deterministic input
    /// (pair propagation relies on unique successors) and with
    /// [`FsaError::MissingStartState`] on an automaton that never received a
    /// transition.
    pub fn minimize(&mut self) -> Result<MinimizeStats, FsaError> {
        if !self.deterministic {
            return Err(FsaError::NotDeterministic);
        }
        let Some(start) = self.start else {
            return Err(FsaError::MissingStartState);
        };

        let states_before = self.state_count();
        let arcs_before = self.arc_count();
        let n = self.graph.node_count();

        // pair table over state indices, marked[i][j] with i < j meaning
        // "distinguishable"
        let mut marked = vec![vec![false; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let a = NodeIndex::new(i);
                let b = NodeIndex::new(j);
                if self.graph[a].accepting != self.graph[b].accepting {
                    marked[i][j] = true;
                }
            }
        }

        // fixpoint: a pair is distinguishable if some symbol leads it to a
        // distinguishable pair, or if exactly one of the two states has a
        // transition on that symbol
        let mut changed = true;
        while changed {
            changed = false;

            for i in 0..n {
                for j in (i + 1)..n {
                    if marked[i][j] {
                        continue;
                    }

                    for symbol in &self.alphabet {
                        let a = self.successor(NodeIndex::new(i), symbol);
                        let b = self.successor(NodeIndex::new(j), symbol);

                        let distinguishable = match (a, b) {
                            (Some(a), Some(b)) => {
                                let lo = a.index().min(b.index());
                                let hi = a.index().max(b.index());
                                lo != hi && marked[lo][hi]
                            }
                            (None, None) => false,
                            _ => true,
                        };

                        if distinguishable {
                            marked[i][j] = true;
                            changed = true;
                            break;
                        }
                    }
                }
            }
        }

        // representative map: every state maps to the smallest state it is
        // indistinguishable from
        let mut representative = (0..n).collect::<Vec<_>>();
        for j in 0..n {
            for i in 0..j {
                if representative[i] == i && !marked[i][j] {
                    representative[j] = i;
                    break;
                }
            }
        }

        // apply the partition in one pass, materializing only classes
        // reachable from the start class; members of a class have transitions
        // on exactly the same symbols and to equivalent targets, so the
        // representative's outgoing arcs stand in for the whole class
        let mut graph: DiGraph<FsaNode, S> = DiGraph::new();
        let mut class_node: Vec<Option<NodeIndex>> = vec![None; n];

        let start_class = representative[start.index()];
        class_node[start_class] = Some(graph.add_node(self.graph[NodeIndex::new(start_class)]));
        let mut stack = vec![start_class];

        while let Some(class) = stack.pop() {
            let from = class_node[class].expect("pushed classes are materialized");

            for edge in self
                .graph
                .edges_directed(NodeIndex::new(class), Direction::Outgoing)
            {
                let target_class = representative[edge.target().index()];
                let to = match class_node[target_class] {
                    Some(node) => node,
                    None => {
                        let node = graph.add_node(self.graph[NodeIndex::new(target_class)]);
                        class_node[target_class] = Some(node);
                        stack.push(target_class);
                        node
                    }
                };

                graph.add_edge(from, to, edge.weight().clone());
            }
        }

        // re-derive the alphabet cache, arcs may have been dropped
        let mut alphabet = Vec::new();
        for edge in graph.edge_references() {
            if !alphabet.contains(edge.weight()) {
                alphabet.push(edge.weight().clone());
            }
        }

        self.graph = graph;
        self.start = class_node[start_class];
        self.alphabet = alphabet;

        let stats = MinimizeStats {
            states_before,
            arcs_before,
            states_after: self.state_count(),
            arcs_after: self.arc_count(),
        };

        tracing::debug!(
            states_before = stats.states_before,
            states_after = stats.states_after,
            arcs_before = stats.arcs_before,
            arcs_after = stats.arcs_after,
            "minimized automaton"
        );

        Ok(stats)
    }
}
