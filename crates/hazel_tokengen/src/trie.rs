//! The character trie used to classify 1 to 3 character literals.

use crate::error::TrieError;
use crate::grammar::{TokenGrammar, NOT_EQUAL, NOT_EQUAL_SYNONYM};
use log::trace;
use std::collections::BTreeMap;

/// The longest literal that can be dispatched on
pub const MAX_LITERAL_LEN: usize = 3;

/// Branches of a trie node, iterated in ascending character order
pub type Branches = BTreeMap<char, TrieNode>;

/// A node of a [DispatchTrie]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieNode {
    /// The name of the token the path so far resolves to
    Leaf(String),
    /// Further characters to match
    Branch(Branches),
}

/// Dispatch roots for literals of length 1, 2 and 3.
///
/// All literals under one root have the same length, so leaves only ever appear at the final
/// depth of a root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchTrie {
    roots: [Branches; MAX_LITERAL_LEN],
}

impl DispatchTrie {
    /// Builds the trie from the dispatch literals of a grammar
    pub fn build(grammar: &TokenGrammar) -> Result<Self, TrieError> {
        let literals = grammar
            .dispatch_literals()
            .ok_or(TrieError::MissingSynonymTarget {
                synonym: NOT_EQUAL_SYNONYM,
                target: NOT_EQUAL,
            })?;

        let mut trie = Self::default();
        for (literal, &id) in &literals {
            let name = &grammar.names()[id];
            trie.insert(literal, name)?;
        }
        Ok(trie)
    }

    fn insert(&mut self, literal: &str, name: &str) -> Result<(), TrieError> {
        let chars = literal.chars().collect::<Vec<_>>();
        let length = chars.len();
        let Some((last, path)) = chars.split_last().filter(|_| length <= MAX_LITERAL_LEN) else {
            return Err(TrieError::InvalidLiteralLength {
                literal: literal.to_string(),
                length,
            });
        };
        trace!("dispatch {literal:?} -> {name}");

        let mut branches = &mut self.roots[length - 1];
        for c in path {
            let node = branches
                .entry(*c)
                .or_insert_with(|| TrieNode::Branch(Branches::new()));
            branches = match node {
                TrieNode::Branch(next) => next,
                TrieNode::Leaf(_) => unreachable!("leaves only exist at the final depth"),
            };
        }
        branches.insert(*last, TrieNode::Leaf(name.to_string()));
        Ok(())
    }

    /// Gets the root for literals of the given length.
    ///
    /// # Panics
    /// Panics if `len` is not between 1 and [MAX_LITERAL_LEN].
    pub fn root(&self, len: usize) -> &Branches {
        &self.roots[len - 1]
    }

    /// Resolves a literal to the name of the token it dispatches to
    pub fn lookup(&self, literal: &str) -> Option<&str> {
        let len = literal.chars().count();
        if !(1..=MAX_LITERAL_LEN).contains(&len) {
            return None;
        }
        let mut branches = self.root(len);
        let mut chars = literal.chars().peekable();
        while let Some(c) = chars.next() {
            match (branches.get(&c)?, chars.peek()) {
                (TrieNode::Leaf(name), None) => return Some(name.as_str()),
                (TrieNode::Branch(next), Some(_)) => branches = next,
                _ => return None,
            }
        }
        None
    }
}
