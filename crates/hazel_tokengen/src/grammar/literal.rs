//! Decoding of the quoted literal field of a grammar line.
//!
//! Only plain single or double quoted strings are understood. Supported escapes are
//! `\\`, `\'`, `\"`, `\n`, `\r`, `\t`, `\0` and `\xHH`.

use nom::branch::alt;
use nom::bytes::complete::{is_not, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{all_consuming, cut, map, map_opt, map_res, value, verify};
use nom::error::{context, convert_error, VerboseError};
use nom::multi::fold_many0;
use nom::sequence::{delimited, preceded};
use nom::{Finish, IResult, Parser};

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Decodes a quoted literal such as `'=='` into its raw value.
///
/// The whole field must be consumed, otherwise a rendered description of the failure is returned.
pub fn decode_literal(field: &str) -> std::result::Result<String, String> {
    all_consuming(parse_string_literal)(field)
        .finish()
        .map(|(_, decoded)| decoded)
        .map_err(|e| convert_error(field, e))
}

#[derive(Debug, Clone)]
enum StringFragment<'a> {
    Literal(&'a str),
    EscapedChar(std::primitive::char),
}

fn parse_string_literal(input: &str) -> Result<String> {
    context(
        "string literal",
        alt((parse_quoted('\'', "'\\"), parse_quoted('"', "\"\\"))),
    )(input)
}

fn parse_quoted<'a>(
    quote: std::primitive::char,
    stop: &'static str,
) -> impl FnMut(&'a str) -> Result<'a, String> {
    let build_string = fold_many0(
        parse_fragment(stop),
        String::new,
        |mut accum: String, next| {
            match next {
                StringFragment::Literal(l) => accum.push_str(l),
                StringFragment::EscapedChar(c) => accum.push(c),
            }
            accum
        },
    );

    delimited(
        char(quote),
        build_string,
        context("closing quote", cut(char(quote))),
    )
}

fn parse_fragment<'a>(stop: &'static str) -> impl FnMut(&'a str) -> Result<'a, StringFragment<'a>> {
    alt((
        map(parse_literal_chunk(stop), StringFragment::Literal),
        map(parse_escaped_char, StringFragment::EscapedChar),
    ))
}

fn parse_literal_chunk<'a>(stop: &'static str) -> impl FnMut(&'a str) -> Result<'a, &'a str> {
    verify(is_not(stop), |s: &str| !s.is_empty())
}

fn parse_hex_escape(input: &str) -> Result<'_, std::primitive::char> {
    let parse_hex = take_while_m_n::<_, &str, _>(2, 2, |c: std::primitive::char| {
        c.is_ascii_hexdigit()
    });
    let parse_u32 = map_res(preceded(char('x'), parse_hex), |hex| {
        u32::from_str_radix(hex, 16)
    });
    map_opt(parse_u32, std::char::from_u32).parse(input)
}

fn parse_escaped_char(input: &str) -> Result<'_, std::primitive::char> {
    preceded(
        char('\\'),
        context(
            "escape",
            cut(alt((
                parse_hex_escape,
                value('\n', char('n')),
                value('\r', char('r')),
                value('\t', char('t')),
                value('\0', char('0')),
                value('\\', char('\\')),
                value('\'', char('\'')),
                value('"', char('"')),
            ))),
        ),
    )
    .parse(input)
}
