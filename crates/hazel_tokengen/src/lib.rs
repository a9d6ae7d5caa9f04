#![doc = include_str!("../README.md")]

use crate::error::TokenGenResult;
use crate::grammar::TokenGrammar;
use crate::trie::DispatchTrie;
use log::debug;
use std::path::{Path, PathBuf};
use strum::{AsRefStr, EnumIter, EnumString};

pub mod emit;
pub mod error;
pub mod grammar;
pub mod trie;
pub mod writer;

/// Where the token grammar is read from by default
pub const DEFAULT_GRAMMAR: &str = "hazel/grammar/Tokens";
/// How the dispatch source includes the constants header by default
pub const DEFAULT_HEADER_INCLUDE: &str = "hazel/compiler/tokens/tokens.h";
/// The include guard of the constants header by default
pub const DEFAULT_HEADER_GUARD: &str = "HAZEL_TOKENS_H";

/// A file that can be generated from the token grammar
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Artifact {
    /// The C header with the token constants and predicates
    Header,
    /// The C source with the token names and the literal dispatch functions
    Dispatch,
    /// The Rust module with the token constants, literal table and predicates
    Module,
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl Artifact {
    /// Where this artifact is written to by default
    pub fn default_output(&self) -> &'static Path {
        Path::new(match self {
            Artifact::Header => "hazel/compiler/tokens/tokens.h",
            Artifact::Dispatch => "hazel/compiler/tokens/tokens.c",
            Artifact::Module => "hazel/compiler/tokens/tokens.rs",
        })
    }
}

/// The outcome of generating an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub artifact: Artifact,
    pub path: PathBuf,
    /// Whether the file had to be rewritten
    pub changed: bool,
}

/// Generates the token artifacts from a loaded grammar.
///
/// Must be configured using a [TokenGenBuilder].
#[derive(Debug)]
pub struct TokenGen {
    grammar_path: PathBuf,
    grammar: TokenGrammar,
    header_include: String,
    header_guard: String,
}

impl TokenGen {
    /// Creates the default TokenGenBuilder
    #[inline]
    pub fn builder() -> TokenGenBuilder {
        TokenGenBuilder::new()
    }

    /// The path the grammar was loaded from
    pub fn grammar_path(&self) -> &Path {
        &self.grammar_path
    }

    /// The loaded grammar
    pub fn grammar(&self) -> &TokenGrammar {
        &self.grammar
    }

    /// Renders an artifact without writing it anywhere
    pub fn render(&self, artifact: Artifact) -> TokenGenResult<String> {
        debug!("rendering {artifact}");
        let rendered = match artifact {
            Artifact::Header => emit::header::render(&self.grammar, &self.header_guard),
            Artifact::Dispatch => {
                let trie = DispatchTrie::build(&self.grammar)?;
                emit::dispatch::render(&self.grammar, &trie, &self.header_include)
            }
            Artifact::Module => emit::module::render(&self.grammar),
        };
        Ok(rendered)
    }

    /// Renders an artifact and writes it to `output`, or its default location.
    ///
    /// The file is left untouched if it is already up to date.
    pub fn generate(&self, artifact: Artifact, output: Option<&Path>) -> TokenGenResult<Generated> {
        let path = output.unwrap_or_else(|| artifact.default_output());
        let rendered = self.render(artifact)?;
        Self::write(artifact, path, &rendered)
    }

    /// Generates every artifact at its default location under `root`.
    ///
    /// Every artifact is rendered before any is written, so a bad grammar leaves all files
    /// untouched. Writes happen in order; those written before a write failure stay written.
    pub fn generate_all<P: AsRef<Path>>(&self, root: P) -> TokenGenResult<Vec<Generated>> {
        use strum::IntoEnumIterator;
        let rendered = Artifact::iter()
            .map(|artifact| self.render(artifact).map(|content| (artifact, content)))
            .collect::<TokenGenResult<Vec<_>>>()?;
        rendered
            .into_iter()
            .map(|(artifact, content)| {
                let path = root.as_ref().join(artifact.default_output());
                Self::write(artifact, &path, &content)
            })
            .collect()
    }

    fn write(artifact: Artifact, path: &Path, content: &str) -> TokenGenResult<Generated> {
        let changed = writer::update_file(path, content)?;
        Ok(Generated {
            artifact,
            path: path.to_path_buf(),
            changed,
        })
    }
}

/// Builder for creating a [TokenGen] instance.
#[derive(Debug)]
pub struct TokenGenBuilder {
    pub grammar: PathBuf,
    pub header_include: String,
    pub header_guard: String,
}

impl TokenGenBuilder {
    /// Creates a TokenGenBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grammar file to load
    pub fn grammar<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.grammar = path.as_ref().to_path_buf();
        self
    }

    /// Sets the path the dispatch source uses to include the constants header
    pub fn header_include(mut self, include: impl Into<String>) -> Self {
        self.header_include = include.into();
        self
    }

    /// Sets the include guard of the constants header
    pub fn header_guard(mut self, guard: impl Into<String>) -> Self {
        self.header_guard = guard.into();
        self
    }

    /// Loads the grammar and builds a [TokenGen] instance
    pub fn build(self) -> TokenGenResult<TokenGen> {
        let grammar = TokenGrammar::load(&self.grammar)?;
        Ok(TokenGen {
            grammar_path: self.grammar,
            grammar,
            header_include: self.header_include,
            header_guard: self.header_guard,
        })
    }
}

impl Default for TokenGenBuilder {
    fn default() -> Self {
        Self {
            grammar: PathBuf::from(DEFAULT_GRAMMAR),
            header_include: DEFAULT_HEADER_INCLUDE.to_string(),
            header_guard: DEFAULT_HEADER_GUARD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_log::test;

    #[test]
    fn test_artifact_names() {
        assert_eq!(Artifact::from_str("header").unwrap(), Artifact::Header);
        assert_eq!(Artifact::from_str("dispatch").unwrap(), Artifact::Dispatch);
        assert_eq!(Artifact::from_str("module").unwrap(), Artifact::Module);
        assert!(Artifact::from_str("python").is_err());
        assert_eq!(Artifact::Dispatch.to_string(), "dispatch");
    }

    #[test]
    fn test_default_outputs_are_distinct() {
        use strum::IntoEnumIterator;
        let outputs = Artifact::iter()
            .map(|a| a.default_output())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(outputs.len(), 3);
    }
}
