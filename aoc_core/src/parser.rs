extern crate nom;

use std::str::FromStr;

use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, space0},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, terminated},
    Finish, IResult,
};

use crate::error::{Error, Result};

/// Signed decimal integer with an optional `+` or `-` sign.
pub fn integer<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(
        recognize(pair(opt(alt((char('-'), char('+')))), digit1)),
        |s: &str| s.parse::<T>(),
    )(input)
}

pub fn unsigned<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, |s: &str| s.parse::<T>())(input)
}

/// Integer surrounded by optional spaces, as in `position=< 9,  1>`.
pub fn padded_integer<T: FromStr>(input: &str) -> IResult<&str, T> {
    delimited(space0, integer, space0)(input)
}

/// Comma separated integers, allowing spaces around the separators.
pub fn integer_list<T: FromStr>(input: &str) -> IResult<&str, Vec<T>> {
    separated_list1(char(','), padded_integer)(input)
}

fn describe(err: nom::error::Error<&str>) -> String {
    let rest = err.input.lines().next().unwrap_or("");
    if rest.is_empty() {
        format!("{:?} at end of input", err.code)
    } else {
        format!("{:?} at {:?}", err.code, rest)
    }
}

/// Parses a whole line, trailing whitespace excluded. Leftover input is an error.
pub fn parse_line<'a, O, F>(line: &'a str, parser: F, context: &'static str) -> Result<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(parser)(line.trim_end())
        .finish()
        .map(|(_, o)| o)
        .map_err(|e| Error::parse(context, describe(e)))
}

/// Parses every non-blank line of `input` with `parser`.
pub fn parse_lines<'a, O, F>(input: &'a str, mut parser: F, context: &'static str) -> Result<Vec<O>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line, &mut parser, context))
        .collect()
}

/// Parses the whole input; trailing whitespace (usually the final newline) is allowed.
pub fn parse_all<'a, O, F>(input: &'a str, parser: F, context: &'static str) -> Result<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(terminated(parser, multispace0))(input)
        .finish()
        .map(|(_, o)| o)
        .map_err(|e| Error::parse(context, describe(e)))
}

/// Parses an input consisting of a single integer.
pub fn parse_single_integer<T: FromStr>(input: &str, context: &'static str) -> Result<T> {
    parse_all(input.trim_start(), integer::<T>, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::bytes::complete::tag;
    use nom::sequence::preceded;

    #[test]
    fn test_integer() {
        assert_eq!(integer::<i32>("+12 rest"), Ok((" rest", 12)));
        assert_eq!(integer::<i32>("-7"), Ok(("", -7)));
        assert_eq!(integer::<i64>("42"), Ok(("", 42)));
        assert!(integer::<i32>("x1").is_err());
        assert!(integer::<u8>("300").is_err());
    }

    #[test]
    fn test_integer_list() {
        assert_eq!(integer_list::<i32>(" 9,  1"), Ok(("", vec![9, 1])));
        assert_eq!(integer_list::<i32>("1,-2,3,0"), Ok(("", vec![1, -2, 3, 0])));
    }

    #[test]
    fn test_parse_line() {
        let parsed = parse_line("#ip 3", preceded(tag("#ip "), unsigned::<usize>), "ip");
        assert_eq!(parsed.ok(), Some(3));

        let err = parse_line("#ip 3 4", preceded(tag("#ip "), unsigned::<usize>), "ip");
        assert!(matches!(err, Err(Error::Parse { context: "ip", .. })));
    }

    #[test]
    fn test_parse_lines_skips_blank_lines() {
        let parsed = parse_lines("+1\n\n-2\n+3\n", integer::<i64>, "deltas");
        assert_eq!(parsed.ok(), Some(vec![1, -2, 3]));
        assert!(parse_lines("+1\nfoo\n", integer::<i64>, "deltas").is_err());
    }

    #[test]
    fn test_parse_single_integer() {
        assert_eq!(parse_single_integer::<u32>("8561\n", "serial").ok(), Some(8561));
        assert!(parse_single_integer::<u32>("85a61\n", "serial").is_err());
    }
}
