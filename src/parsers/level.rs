use crate::parsers::{ignore_comment_lines, ParseResult, Parser, Span};
use nom::{
    branch::alt,
    character::complete::{char, line_ending, multispace0, satisfy, space0},
    combinator::{eof, map, value, verify},
    multi::many1,
    sequence::{pair, preceded, separated_pair, terminated},
};

/// One cell of a level grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Free,
    Agent(u8),
}

/// A level as written in the file: the initial grid and the goal grid, row by
/// row. Rows may have different lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLevel {
    pub initial: Vec<Vec<Cell>>,
    pub goal: Vec<Vec<Cell>>,
}

/// `+` is a wall, a space is free floor and a digit is the agent with that
/// number.
pub fn parse_cell<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Cell> {
    alt((
        value(Cell::Wall, char('+')),
        value(Cell::Free, char(' ')),
        map(satisfy(|c| c.is_ascii_digit()), |c| {
            Cell::Agent(c as u8 - b'0')
        }),
    ))(input.into())
}

/// A row holds at least one wall or agent, a line of only spaces is blank.
fn parse_row(input: Span) -> ParseResult<Vec<Cell>> {
    terminated(
        verify(many1(parse_cell), |cells: &[Cell]| {
            cells.iter().any(|&cell| cell != Cell::Free)
        }),
        alt((line_ending, eof)),
    )(input)
}

fn parse_blank_line(input: Span) -> ParseResult<Span> {
    preceded(space0, line_ending)(input)
}

/// A grid is one or more non-blank rows.
pub fn parse_grid<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Vec<Vec<Cell>>> {
    many1(parse_row)(input.into())
}

/// Optional `;` comment lines, the initial grid, at least one blank line and
/// the goal grid. Blank lines may contain spaces. Trailing whitespace is
/// allowed, anything else is not.
pub fn parse_level<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ParsedLevel> {
    map(
        terminated(
            preceded(
                ignore_comment_lines,
                separated_pair(parse_grid, many1(parse_blank_line), parse_grid),
            ),
            pair(multispace0, eof),
        ),
        |(initial, goal)| ParsedLevel { initial, goal },
    )(input.into())
}

impl Parser for ParsedLevel {
    type Item = ParsedLevel;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_level(input)
    }
}
