use std::{fmt::Debug, hash::Hash};

pub mod fsa;

/// This trait represents types that can be used as input symbols along the
/// transitions of an automaton. A symbol is an atomic input unit; nothing
/// about the alphabet size is assumed.
pub trait Symbol: Debug + Clone + PartialEq + Eq + Hash + Ord {}

impl<T: Debug + Clone + PartialEq + Eq + Hash + Ord> Symbol for T {}
