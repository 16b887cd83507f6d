use anyhow::{Result, anyhow};
use winnow::ModalResult;
use winnow::ascii::{digit1, multispace0, multispace1};
use winnow::combinator::{alt, delimited, separated};
use winnow::prelude::*;

/// Parse a list of elements such as `4,2,5`, `4 2 5` or `[4, 2, 5]`.
pub(crate) fn parse_elements(s: &str) -> Result<Vec<usize>> {
    fn element(input: &mut &str) -> ModalResult<usize> {
        digit1.try_map(str::parse::<usize>).parse_next(input)
    }

    fn separator(input: &mut &str) -> ModalResult<()> {
        alt(((multispace0, ',', multispace0).void(), multispace1.void())).parse_next(input)
    }

    fn list(input: &mut &str) -> ModalResult<Vec<usize>> {
        separated(0.., element, separator).parse_next(input)
    }

    fn bracketed(input: &mut &str) -> ModalResult<Vec<usize>> {
        alt((
            delimited(('[', multispace0), list, (multispace0, ']')),
            list,
        ))
        .parse_next(input)
    }

    let trimmed = s.trim();
    bracketed
        .parse(trimmed)
        .map_err(|err| anyhow!("invalid element list {trimmed:?}:\n{err}"))
}
