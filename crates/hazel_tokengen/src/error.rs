//! Errors raised while generating the token tables

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error occurred while loading the token grammar
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("could not read token grammar {0:?}: {1}")]
    UnreadableSource(PathBuf, #[source] io::Error),
    #[error("line {line}: malformed literal in {text:?}: {reason}")]
    MalformedLine {
        line: usize,
        text: String,
        reason: String,
    },
}

/// An error occurred while building the dispatch trie
#[derive(Debug, Error)]
pub enum TrieError {
    #[error("literal {literal:?} has length {length}, but literals must be 1 to 3 characters long")]
    InvalidLiteralLength { literal: String, length: usize },
    #[error("the {synonym:?} synonym requires the grammar to declare {target:?}")]
    MissingSynonymTarget {
        synonym: &'static str,
        target: &'static str,
    },
}

/// An error occurred while writing a generated file
#[derive(Debug, Error)]
#[error("could not write {path:?}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// The kind of error
#[derive(Debug, Error)]
pub enum TokenGenError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Trie(#[from] TrieError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// A type alias for general results in the token generator
pub type TokenGenResult<T> = Result<T, TokenGenError>;
