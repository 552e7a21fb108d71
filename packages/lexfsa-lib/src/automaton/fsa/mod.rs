use std::fmt::Display;

use itertools::Itertools;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::automaton::Symbol;

pub mod language;
pub mod minimize;
pub mod node;
pub mod recognize;
pub mod trie;

use node::FsaNode;

/// A finite-state automaton over symbols of type `S`.
///
/// States are opaque [`NodeIndex`] handles allocated by the underlying graph.
/// The transition relation maps (state, symbol) to a set of target states; a
/// missing entry means "no move defined" and makes recognition reject
/// immediately, there is no implicit sink state.
///
/// The alphabet and the determinism flag are derived caches: they are kept in
/// sync with the transition relation by [`Fsa::add_transition`] and are never
/// an independent source of truth.
#[derive(Debug, Clone)]
pub struct Fsa<S: Symbol> {
    start: Option<NodeIndex>,
    pub graph: DiGraph<FsaNode, S>,
    alphabet: Vec<S>,
    deterministic: bool,
}

impl<S: Symbol> Default for Fsa<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Fsa<S> {
    /// Creates an empty automaton: no transitions, no start state, empty
    /// accepting set. An empty automaton recognizes nothing.
    pub fn new() -> Self {
        Fsa {
            start: None,
            graph: DiGraph::new(),
            alphabet: vec![],
            deterministic: true,
        }
    }

    /// The start state, set by the first transition ever added and never
    /// changed afterwards.
    pub fn start(&self) -> Option<NodeIndex> {
        self.start
    }

    /// True while no (state, symbol) pair has more than one target.
    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    /// The symbols appearing on any transition, in first-seen order.
    pub fn alphabet(&self) -> &[S] {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Allocates a fresh, non-accepting state distinct from all existing
    /// states.
    pub fn add_state(&mut self) -> NodeIndex {
        self.graph.add_node(FsaNode::non_accepting())
    }

    /// The start state, allocated first if the automaton is still empty.
    pub(crate) fn start_or_insert(&mut self) -> NodeIndex {
        match self.start {
            Some(start) => start,
            None => {
                let start = self.add_state();
                self.start = Some(start);
                start
            }
        }
    }

    /// Adds an arc from `source` on `symbol`.
    ///
    /// If `target` is `None` a fresh state is allocated. The first call ever
    /// registers `source` as the start state. Adding a second distinct target
    /// for the same (state, symbol) pair flags the automaton as
    /// non-deterministic; re-adding an identical arc is a no-op (the relation
    /// has set semantics). If `accepting` is true the target joins the
    /// accepting set. Returns the target state.
    pub fn add_transition(
        &mut self,
        source: NodeIndex,
        symbol: S,
        target: Option<NodeIndex>,
        accepting: bool,
    ) -> NodeIndex {
        if self.start.is_none() {
            self.start = Some(source);
        }

        let target = target.unwrap_or_else(|| self.add_state());

        if !self.alphabet.contains(&symbol) {
            self.alphabet.push(symbol.clone());
        }

        let mut duplicate = false;
        for edge in self.graph.edges_directed(source, Direction::Outgoing) {
            if *edge.weight() != symbol {
                continue;
            }
            if edge.target() == target {
                duplicate = true;
            } else {
                self.deterministic = false;
            }
        }

        if !duplicate {
            self.graph.add_edge(source, target, symbol);
        }

        if accepting {
            self.graph[target].accepting = true;
        }

        target
    }

    pub fn mark_accepting(&mut self, state: NodeIndex) {
        self.graph[state].accepting = true;
    }

    pub fn unmark_accepting(&mut self, state: NodeIndex) {
        self.graph[state].accepting = false;
    }

    pub fn toggle_accepting(&mut self, state: NodeIndex) {
        let node = &mut self.graph[state];
        node.accepting = !node.accepting;
    }

    pub fn is_accepting(&self, state: NodeIndex) -> bool {
        self.graph[state].accepting
    }

    pub fn accepting_states(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .node_indices()
            .filter(|&state| self.graph[state].accepting)
    }

    /// The states reachable from `source` (default: the start state) on
    /// `symbol`. Returns `None` when no such transition exists; never returns
    /// an empty set.
    pub fn step(&self, symbol: &S, source: Option<NodeIndex>) -> Option<Vec<NodeIndex>> {
        let source = source.or(self.start)?;
        let targets = self
            .graph
            .edges_directed(source, Direction::Outgoing)
            .filter(|edge| edge.weight() == symbol)
            .map(|edge| edge.target())
            .collect_vec();

        if targets.is_empty() { None } else { Some(targets) }
    }
}

impl<S: Symbol + Display> Fsa<S> {
    /// Renders the automaton in the AT&T tabular format: one tab-separated
    /// `source target symbol` line per arc with the start state's arcs first,
    /// then one bare `state` line per accepting state.
    pub fn to_att(&self) -> String {
        let mut out = String::new();

        if let Some(start) = self.start {
            for edge in self.graph.edges_directed(start, Direction::Outgoing) {
                out.push_str(&format!(
                    "{}\t{}\t{}\n",
                    start.index(),
                    edge.target().index(),
                    edge.weight()
                ));
            }
        }

        for edge in self.graph.edge_references() {
            if Some(edge.source()) == self.start {
                continue;
            }
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                edge.source().index(),
                edge.target().index(),
                edge.weight()
            ));
        }

        for state in self.accepting_states() {
            out.push_str(&format!("{}\n", state.index()));
        }

        out
    }

    /// Renders the automaton as a graphviz digraph, left to right, with an
    /// invisible marker node pointing at the start state and accepting states
    /// drawn as double circles.
    pub fn to_graphviz(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph {\n");
        dot.push_str("  rankdir = LR;\n");
        dot.push_str("  start [style=invis];\n");
        dot.push_str("  node [shape=circle];\n");

        if let Some(start) = self.start {
            dot.push_str(&format!("  start -> {};\n", start.index()));
        }

        for edge in self.graph.edge_references() {
            dot.push_str(&format!(
                "  {} -> {} [label=\"{}\"];\n",
                edge.source().index(),
                edge.target().index(),
                edge.weight()
            ));
        }

        for state in self.accepting_states() {
            dot.push_str(&format!("  {} [shape=doublecircle];\n", state.index()));
        }

        dot.push_str("}\n");

        dot
    }
}
