//! The C header declaring the token constants

use super::{banner, NT_OFFSET};
use crate::grammar::TokenGrammar;
use itertools::Itertools;

/// Renders the constants header.
///
/// Only tokens up to and including the error token get a `#define`.
pub fn render(grammar: &TokenGrammar, guard: &str) -> String {
    let defines = grammar
        .names()
        .iter()
        .take(grammar.error_token() + 1)
        .enumerate()
        .map(|(id, name)| define(name, id))
        .join("");

    format!(
        r#"{banner}
#ifndef {guard}
#define {guard}

#ifdef __cplusplus
extern "C" {{
#endif

{defines}{n_tokens}{nt_offset}
/* Special definitions for cooperation with the parser */
#define ISTERMINAL(x)         ((x) < NT_OFFSET)
#define ISNONTERMINAL(x)      ((x) >= NT_OFFSET)
#define ISEOF(x)              ((x) == ENDMARKER)
#define ISWHITESPACE(x)       ((x) == ENDMARKER || \
                               (x) == NEWLINE   || \
                               (x) == INDENT    || \
                               (x) == DEDENT)

extern const char * const TokenNames[];
int Token_OneChar(int);
int Token_TwoChars(int, int);
int Token_ThreeChars(int, int, int);

#ifdef __cplusplus
}}
#endif

#endif /* {guard} */
"#,
        banner = banner("//"),
        n_tokens = define("N_TOKENS", grammar.len()),
        nt_offset = define("NT_OFFSET", NT_OFFSET),
    )
}

fn define(name: &str, value: usize) -> String {
    format!("#define {name:<15} {value}\n")
}
