use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::is_not;
use nom::character::complete::{char, line_ending};
use nom::combinator::{opt, value};
use nom::multi::many0;
use nom::sequence::{pair, terminated};

/// Skip any number of whole lines starting with `;`.
pub fn ignore_comment_lines<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        many0(terminated(
            pair(char(';'), opt(is_not("\r\n"))),
            line_ending,
        )),
    )(input.into())
}
