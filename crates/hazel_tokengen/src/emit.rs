//! Renderers for the generated artifacts.
//!
//! Every renderer takes the loaded [TokenGrammar](crate::grammar::TokenGrammar) so the token ids
//! and totals agree across all artifacts.

pub mod dispatch;
pub mod header;
pub mod module;

/// First id of the numbering space reserved for grammar non-terminals
pub const NT_OFFSET: usize = 256;

/// Token names that count as whitespace for the parser
pub const WHITESPACE_TOKENS: [&str; 4] = ["ENDMARKER", "NEWLINE", "INDENT", "DEDENT"];

/// The token that marks the end of the input
pub const EOF_TOKEN: &str = "ENDMARKER";

/// The token returned by the dispatch functions when no literal matches
pub const GENERIC_OPERATOR: &str = "OP";

/// First line of every generated artifact, as a line comment
pub(crate) fn banner(comment: &str) -> String {
    format!(
        "{comment} Auto-generated by {} from the token grammar. Do not edit.\n",
        env!("CARGO_PKG_NAME")
    )
}
