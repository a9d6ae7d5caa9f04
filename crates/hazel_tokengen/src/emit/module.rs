//! The Rust module holding the token constants

use super::{banner, EOF_TOKEN, NT_OFFSET, WHITESPACE_TOKENS};
use crate::grammar::TokenGrammar;
use itertools::Itertools;

/// Placed right before the error token's constant
const ERROR_CLASS_COMMENT: &str =
    "// These are produced by the tokenizer for error reporting and never reach the parser";

/// Renders the constants module.
///
/// Unlike the C header every token gets a constant.
pub fn render(grammar: &TokenGrammar) -> String {
    let mut constants = String::new();
    for (id, name) in grammar.names().iter().enumerate() {
        if id == grammar.error_token() {
            constants.push_str(ERROR_CLASS_COMMENT);
            constants.push('\n');
        }
        constants.push_str(&format!("pub const {name}: u32 = {id};\n"));
    }

    let names = grammar
        .names()
        .iter()
        .map(|name| format!("    {name:?},\n"))
        .join("");

    let exact_token_types = grammar
        .literals()
        .iter()
        .map(|(literal, &id)| format!("    ({literal:?}, {}),\n", grammar.names()[id]))
        .join("");

    format!(
        r#"//! Token constants.
{banner}
{constants}
pub const N_TOKENS: u32 = {n_tokens};
/// Special definitions for cooperation with the parser
pub const NT_OFFSET: u32 = {NT_OFFSET};

/// Token names, indexed by token id
pub const TOKEN_NAMES: [&str; N_TOKENS as usize] = [
{names}];

/// Literal operators and the token they stand for, sorted by literal
pub const EXACT_TOKEN_TYPES: &[(&str, u32)] = &[
{exact_token_types}];

pub const fn is_terminal(x: u32) -> bool {{
    x < NT_OFFSET
}}

pub const fn is_nonterminal(x: u32) -> bool {{
    x >= NT_OFFSET
}}

pub const fn is_eof(x: u32) -> bool {{
    {is_eof}
}}

pub const fn is_whitespace(x: u32) -> bool {{
    {is_whitespace}
}}

/// Gets the name of a token
pub fn token_name(x: u32) -> Option<&'static str> {{
    TOKEN_NAMES.get(x as usize).copied()
}}
"#,
        banner = banner("//"),
        n_tokens = grammar.len(),
        is_eof = membership(grammar, &[EOF_TOKEN]),
        is_whitespace = membership(grammar, &WHITESPACE_TOKENS),
    )
}

/// A test of `x` against the named tokens the grammar actually declares
fn membership(grammar: &TokenGrammar, names: &[&str]) -> String {
    let declared = names
        .iter()
        .filter(|name| grammar.id_of(name).is_some())
        .collect::<Vec<_>>();
    if declared.is_empty() {
        "let _ = x;\n    false".to_string()
    } else {
        format!("matches!(x, {})", declared.iter().join(" | "))
    }
}
