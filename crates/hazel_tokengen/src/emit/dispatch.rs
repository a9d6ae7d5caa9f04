//! The C source holding the token name table and the literal dispatch functions

use super::{banner, GENERIC_OPERATOR};
use crate::grammar::TokenGrammar;
use crate::trie::{Branches, DispatchTrie, TrieNode};
use itertools::Itertools;

const INDENT: &str = "    ";

/// Renders the dispatch source.
///
/// `header_include` is the path the source uses to `#include` the constants header.
pub fn render(grammar: &TokenGrammar, trie: &DispatchTrie, header_include: &str) -> String {
    let names = grammar
        .names()
        .iter()
        .enumerate()
        .map(|(id, name)| {
            if grammar.is_error_class(id) {
                format!("{INDENT}\"<{name}>\",\n")
            } else {
                format!("{INDENT}\"{name}\",\n")
            }
        })
        .join("");

    format!(
        r#"{banner}
#include "{header_include}"

/* Token names */
const char * const TokenNames[] = {{
{names}{INDENT}"<N_TOKENS>",
}};

/* Return the token corresponding to a single character */
int
Token_OneChar(int c1)
{{
{one}{INDENT}return {GENERIC_OPERATOR};
}}

int
Token_TwoChars(int c1, int c2)
{{
{two}{INDENT}return {GENERIC_OPERATOR};
}}

int
Token_ThreeChars(int c1, int c2, int c3)
{{
{three}{INDENT}return {GENERIC_OPERATOR};
}}
"#,
        banner = banner("//"),
        one = render_switch(trie.root(1), 1),
        two = render_switch(trie.root(2), 1),
        three = render_switch(trie.root(3), 1),
    )
}

/// Renders a `switch` on the `depth`th character, recursing into branches
fn render_switch(branches: &Branches, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    let mut out = format!("{indent}switch (c{depth}) {{\n");
    for (c, node) in branches {
        let c = case_label(*c);
        match node {
            TrieNode::Leaf(name) => {
                out.push_str(&format!("{indent}case {c}: return {name};\n"));
            }
            TrieNode::Branch(next) => {
                out.push_str(&format!("{indent}case {c}:\n"));
                out.push_str(&render_switch(next, depth + 1));
                out.push_str(&format!("{indent}{INDENT}break;\n"));
            }
        }
    }
    out.push_str(&format!("{indent}}}\n"));
    out
}

/// The C `case` label matching `c`.
///
/// Printable ASCII becomes a character literal, anything else its code point.
fn case_label(c: char) -> String {
    match c {
        '\'' => r"'\''".to_string(),
        '\\' => r"'\\'".to_string(),
        ' '..='~' => format!("'{c}'"),
        c => u32::from(c).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const GRAMMAR: &str = "\
ENDMARKER
OP
ERRORTOKEN
EQEQUAL    '=='
NOTEQUAL   '!='
PLUS       '+'
";

    fn render_grammar(src: &str) -> String {
        let grammar = TokenGrammar::parse(src).unwrap();
        let trie = DispatchTrie::build(&grammar).unwrap();
        render(&grammar, &trie, "tokens.h")
    }

    #[test]
    fn test_names_table() {
        let source = render_grammar(GRAMMAR);
        let expected = r#"const char * const TokenNames[] = {
    "ENDMARKER",
    "OP",
    "<ERRORTOKEN>",
    "<EQEQUAL>",
    "<NOTEQUAL>",
    "<PLUS>",
    "<N_TOKENS>",
};
"#;
        assert!(source.contains(expected), "names table missing from:\n{source}");
        assert!(source.contains("#include \"tokens.h\"\n"));
    }

    #[test]
    fn test_one_char_switch() {
        let source = render_grammar(GRAMMAR);
        let expected = "\
Token_OneChar(int c1)
{
    switch (c1) {
    case '+': return PLUS;
    }
    return OP;
}
";
        assert!(source.contains(expected), "one char function missing from:\n{source}");
    }

    #[test]
    fn test_two_char_switch() {
        let source = render_grammar(GRAMMAR);
        let expected = "\
Token_TwoChars(int c1, int c2)
{
    switch (c1) {
    case '!':
        switch (c2) {
        case '=': return NOTEQUAL;
        }
        break;
    case '<':
        switch (c2) {
        case '>': return NOTEQUAL;
        }
        break;
    case '=':
        switch (c2) {
        case '=': return EQEQUAL;
        }
        break;
    }
    return OP;
}
";
        assert!(source.contains(expected), "two char function missing from:\n{source}");
    }

    #[test]
    fn test_three_char_switch_is_nested() {
        let source = render_grammar("OP\nNOTEQUAL '!='\nELLIPSIS '...'\n");
        let expected = "\
    switch (c1) {
    case '.':
        switch (c2) {
        case '.':
            switch (c3) {
            case '.': return ELLIPSIS;
            }
            break;
        }
        break;
    }
";
        assert!(source.contains(expected), "three char function missing from:\n{source}");
    }

    #[test]
    fn test_empty_root() {
        let source = render_grammar("OP\nNOTEQUAL '!='\n");
        assert!(source.contains("Token_ThreeChars(int c1, int c2, int c3)\n{\n    switch (c1) {\n    }\n    return OP;\n}\n"));
    }

    #[test]
    fn test_quote_is_escaped() {
        let source = render_grammar("OP\nNOTEQUAL '!='\nQUOTE \"'\"\nBACKSLASH '\\\\'\n");
        assert!(source.contains(r"case '\'': return QUOTE;"));
        assert!(source.contains(r"case '\\': return BACKSLASH;"));
    }

    #[test]
    fn test_unprintable_chars_use_code_points() {
        let source = render_grammar("OP\nNOTEQUAL '!='\nDEL '\\x7f'\nARROW '\\xe9'\nRARROW '->'\n");
        assert!(source.contains("    case 127: return DEL;\n"), "{source}");
        assert!(source.contains("    case 233: return ARROW;\n"), "{source}");
        assert!(source.contains("    case '-':\n        switch (c2) {\n        case '>': return RARROW;\n"));
        assert!(!source.contains("\\u{"));
    }
}
