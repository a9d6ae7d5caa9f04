//! Loading of the token grammar.
//!
//! A grammar file declares one token per line, optionally followed by the literal the token
//! stands for:
//!
//! ```text
//! ENDMARKER
//! ERRORTOKEN
//! EQEQUAL    '=='     # comments run to the end of the line
//! ```
//!
//! Token ids are the position of the declaration, starting at zero.

use crate::error::GrammarError;
use log::{debug, trace, warn};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;

pub mod literal;

/// The name of the token that marks the start of the error-class tokens
pub const ERROR_TOKEN: &str = "ERRORTOKEN";

/// The alternate spelling of `!=` that always classifies as the same token
pub const NOT_EQUAL_SYNONYM: &str = "<>";
/// The literal [NOT_EQUAL_SYNONYM] resolves to
pub const NOT_EQUAL: &str = "!=";

/// The ordered token table of a grammar, along with the error boundary and the literal mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrammar {
    names: Vec<String>,
    error_token: usize,
    literals: BTreeMap<String, usize>,
}

impl TokenGrammar {
    /// Reads and parses the grammar file at the given path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GrammarError> {
        let path = path.as_ref();
        debug!("loading token grammar from {path:?}");
        let source = std::fs::read_to_string(path)
            .map_err(|e| GrammarError::UnreadableSource(path.to_path_buf(), e))?;
        Self::parse(&source)
    }

    /// Parses the text of a grammar file
    pub fn parse(source: &str) -> Result<Self, GrammarError> {
        let mut seen = HashMap::new();
        let mut error_token = None;
        let (names, literals) = source.lines().enumerate().try_fold(
            (Vec::new(), BTreeMap::new()),
            |(mut names, mut literals), (index, line)| -> Result<_, GrammarError> {
                let line_no = index + 1;
                let Some(decl) = parse_line(line_no, line)? else {
                    return Ok((names, literals));
                };
                let id = names.len();
                trace!("line {line_no}: token {} = {id}", decl.name);

                match seen.entry(decl.name.to_string()) {
                    Entry::Occupied(mut prev) => {
                        warn!(
                            "line {line_no}: token {} was already declared with id {}",
                            decl.name,
                            prev.get()
                        );
                        prev.insert(id);
                    }
                    Entry::Vacant(v) => {
                        v.insert(id);
                    }
                }
                if decl.name == ERROR_TOKEN {
                    error_token = Some(id);
                }
                if let Some(literal) = decl.literal {
                    if let Some(prev) = literals.insert(literal.clone(), id) {
                        warn!("line {line_no}: literal {literal:?} was already mapped to token {prev}");
                    }
                }
                names.push(decl.name.to_string());
                Ok((names, literals))
            },
        )?;

        let error_token = error_token.unwrap_or(names.len());
        debug!(
            "loaded {} tokens ({} literals), error boundary at {error_token}",
            names.len(),
            literals.len()
        );
        Ok(Self {
            names,
            error_token,
            literals,
        })
    }

    /// Gets the token names, indexed by token id
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The number of tokens declared
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no tokens were declared
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Gets the id of the error token, or the number of tokens if there is none
    pub fn error_token(&self) -> usize {
        self.error_token
    }

    /// Gets the literals declared by the grammar, sorted by literal
    pub fn literals(&self) -> &BTreeMap<String, usize> {
        &self.literals
    }

    /// Gets the literals used for dispatch, which always includes the [NOT_EQUAL_SYNONYM].
    ///
    /// Returns `None` if the grammar never declared [NOT_EQUAL].
    pub fn dispatch_literals(&self) -> Option<BTreeMap<String, usize>> {
        let not_equal = *self.literals.get(NOT_EQUAL)?;
        let mut literals = self.literals.clone();
        literals.insert(NOT_EQUAL_SYNONYM.to_string(), not_equal);
        Some(literals)
    }

    /// Gets the name of a token by its id
    pub fn name_of(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Gets the id of a token by its name. Later declarations shadow earlier ones.
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.names.iter().rposition(|n| n == name)
    }

    /// Checks whether a token id is at or beyond the error boundary
    pub fn is_error_class(&self, id: usize) -> bool {
        id >= self.error_token
    }
}

impl FromStr for TokenGrammar {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A single token declaration
#[derive(Debug, PartialEq)]
struct Declaration<'a> {
    name: &'a str,
    literal: Option<String>,
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Declaration<'_>>, GrammarError> {
    let line = match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    };
    let mut fields = line.split_whitespace();
    let Some(name) = fields.next() else {
        return Ok(None);
    };
    let literal = fields
        .next()
        .map(|field| {
            literal::decode_literal(field).map_err(|reason| GrammarError::MalformedLine {
                line: line_no,
                text: line.trim().to_string(),
                reason,
            })
        })
        .transpose()?;
    let extra = fields.count();
    if extra > 0 {
        warn!("line {line_no}: ignoring {extra} extra field(s) after token {name}");
    }
    Ok(Some(Declaration { name, literal }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const GRAMMAR: &str = "\
# the basics
ENDMARKER
NEWLINE
OP
ERRORTOKEN

EQEQUAL    '=='
NOTEQUAL   '!='   # not equal
PLUS       '+'
";

    #[test]
    fn test_ids_follow_declaration_order() {
        let grammar = TokenGrammar::parse(GRAMMAR).expect("could not parse grammar");
        assert_eq!(
            grammar.names(),
            ["ENDMARKER", "NEWLINE", "OP", "ERRORTOKEN", "EQEQUAL", "NOTEQUAL", "PLUS"]
        );
        assert_eq!(grammar.error_token(), 3);
        assert_eq!(grammar.id_of("PLUS"), Some(6));
        assert!(grammar.is_error_class(4));
        assert!(!grammar.is_error_class(2));
    }

    #[test]
    fn test_literals_are_mapped() {
        let grammar = TokenGrammar::parse(GRAMMAR).unwrap();
        let literals = grammar.literals();
        assert_eq!(literals.len(), 3);
        assert_eq!(literals["=="], 4);
        assert_eq!(literals["!="], 5);
        assert!(!literals.contains_key("<>"));
    }

    #[test]
    fn test_dispatch_literals_have_synonym() {
        let grammar = TokenGrammar::parse(GRAMMAR).unwrap();
        let literals = grammar.dispatch_literals().expect("!= is declared");
        assert_eq!(literals["<>"], literals["!="]);
    }

    #[test]
    fn test_dispatch_literals_without_not_equal() {
        let grammar = TokenGrammar::parse("OP\nPLUS '+'\n").unwrap();
        assert_eq!(grammar.dispatch_literals(), None);
    }

    #[test]
    fn test_comment_only_lines_are_skipped() {
        let grammar = TokenGrammar::parse("   # nothing\n\n\t\nNAME # trailing\n").unwrap();
        assert_eq!(grammar.names(), ["NAME"]);
    }

    #[test]
    fn test_missing_error_token() {
        let grammar = TokenGrammar::parse("A\nB\nC\n").unwrap();
        assert_eq!(grammar.error_token(), 3);
        assert!(!grammar.is_error_class(2));
    }

    #[test]
    fn test_last_error_token_wins() {
        let grammar = TokenGrammar::parse("ERRORTOKEN\nA\nERRORTOKEN\n").unwrap();
        assert_eq!(grammar.len(), 3);
        assert_eq!(grammar.error_token(), 2);
    }

    #[test]
    fn test_duplicate_names_pass_through() {
        let grammar = TokenGrammar::parse("A\nA\n").unwrap();
        assert_eq!(grammar.names(), ["A", "A"]);
        assert_eq!(grammar.id_of("A"), Some(1));
    }

    #[test]
    fn test_oversized_literal_is_accepted() {
        let grammar = TokenGrammar::parse("LONG '<<=='\nEMPTY ''\n").unwrap();
        assert_eq!(grammar.literals()["<<=="], 0);
        assert_eq!(grammar.literals()[""], 1);
    }

    #[test]
    fn test_malformed_literal() {
        let err = TokenGrammar::parse("A\nPLUS +\n").expect_err("bare literal should fail");
        match err {
            GrammarError::MalformedLine { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "PLUS +");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_unreadable_source() {
        let err = TokenGrammar::load("/this/path/does/not/exist/Tokens").unwrap_err();
        assert!(matches!(err, GrammarError::UnreadableSource(..)));
    }
}
