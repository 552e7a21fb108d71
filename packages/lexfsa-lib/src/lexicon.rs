use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use hashbrown::HashSet;
use serde::Serialize;

use crate::{automaton::fsa::Fsa, error::FsaError};

/// Reads a word list: one word per line, line terminator stripped, duplicate
/// lines collapsed into a set. Blank lines are ignored, so a trailing newline
/// does not add the empty word to the lexicon.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<HashSet<String>, FsaError> {
    let file = File::open(path)?;
    let mut words = HashSet::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim_end_matches('\r');
        if !word.is_empty() {
            words.insert(word.to_string());
        }
    }

    Ok(words)
}

/// Builds the lexicon trie for a word set.
pub fn build_trie<'a>(words: impl IntoIterator<Item = &'a str>) -> Fsa<char> {
    Fsa::trie_from_words(words.into_iter().map(|word| word.chars()))
}

/// Outcome of regenerating the language of a lexicon automaton and comparing
/// it against the source word set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexiconReport {
    /// Words in the source set the automaton failed to generate.
    pub missing: usize,
    /// Generated words that are not in the source set.
    pub extra: usize,
}

impl LexiconReport {
    pub fn passed(&self) -> bool {
        self.missing == 0 && self.extra == 0
    }
}

/// Enumerates the automaton's language and compares it against `words`.
///
/// `cap` bounds how many words are pulled from the enumerator. Lexicon
/// automata are acyclic, so full enumeration terminates and `None` is the
/// usual choice; a cap is only needed when verifying an automaton that may
/// contain cycles.
pub fn verify_lexicon(
    fsa: &Fsa<char>,
    words: &HashSet<String>,
    cap: Option<usize>,
) -> LexiconReport {
    let generated = fsa.words().map(|word| word.into_iter().collect::<String>());
    let generated: HashSet<String> = match cap {
        Some(cap) => generated.take(cap).collect(),
        None => generated.collect(),
    };

    LexiconReport {
        missing: words.difference(&generated).count(),
        extra: generated.difference(words).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::LexiconReport;

    #[test]
    fn report_passes_only_when_both_counts_are_zero() {
        assert!(LexiconReport {
            missing: 0,
            extra: 0
        }
        .passed());
        assert!(!LexiconReport {
            missing: 1,
            extra: 0
        }
        .passed());
        assert!(!LexiconReport {
            missing: 0,
            extra: 2
        }
        .passed());
    }
}
