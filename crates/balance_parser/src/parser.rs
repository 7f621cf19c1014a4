use crate::error::ParseError;
use balance_ast::{Operation, Term};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, digit1, multispace0, one_of},
    combinator::{map, map_res, opt, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

// One summand of a term, before signs are applied. Magnitudes are u64 so
// that `- 9223372036854775808` reaches i64::MIN.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Part {
    X(u64),
    Const(u64),
}

fn parse_unsigned(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |s: &str| s.parse::<u64>())(input)
}

fn parse_signed(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

// "3x", "3 x", "3*x", "3·x", "x"
fn parse_x_part(input: &str) -> IResult<&str, Part> {
    map(
        pair(
            opt(terminated(
                parse_unsigned,
                pair(multispace0, opt(alt((tag("*"), tag("·"))))),
            )),
            preceded(multispace0, one_of("xX")),
        ),
        |(coeff, _)| Part::X(coeff.unwrap_or(1)),
    )(input)
}

fn parse_part(input: &str) -> IResult<&str, Part> {
    alt((parse_x_part, map(parse_unsigned, Part::Const)))(input)
}

// true for '-'
fn parse_sign(input: &str) -> IResult<&str, bool> {
    map(one_of("+-"), |c| c == '-')(input)
}

fn parse_term_parts(input: &str) -> IResult<&str, Vec<(bool, Part)>> {
    let (input, (first_sign, first)) = preceded(
        multispace0,
        pair(opt(terminated(parse_sign, multispace0)), parse_part),
    )(input)?;
    let (input, rest) = many0(pair(
        preceded(multispace0, parse_sign),
        preceded(multispace0, parse_part),
    ))(input)?;

    let mut parts = Vec::with_capacity(rest.len() + 1);
    parts.push((first_sign.unwrap_or(false), first));
    parts.extend(rest);
    Ok((input, parts))
}

fn sum_parts(parts: &[(bool, Part)]) -> Result<Term, ParseError> {
    let mut term = Term::ZERO;
    for &(negative, part) in parts {
        let (slot, value) = match part {
            Part::X(v) => (&mut term.coeff, v),
            Part::Const(v) => (&mut term.constant, v),
        };
        let value = if negative {
            -i128::from(value)
        } else {
            i128::from(value)
        };
        *slot = i64::try_from(i128::from(*slot) + value)
            .map_err(|_| ParseError::Overflow)?;
    }
    Ok(term)
}

fn from_nom(err: nom::Err<nom::error::Error<&str>>) -> ParseError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let rest = e.input.trim();
            if rest.is_empty() {
                ParseError::EndOfInput
            } else {
                ParseError::Unexpected(rest.to_string())
            }
        }
        nom::Err::Incomplete(_) => ParseError::EndOfInput,
    }
}

fn expect_consumed(rest: &str) -> Result<(), ParseError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::UnconsumedInput(rest.to_string()))
    }
}

/// Parse a linear term such as `3x - 2`, `-x`, `x + x + 4` or `12`.
///
/// Repeated `x` parts and constants are summed.
pub fn parse_term(input: &str) -> Result<Term, ParseError> {
    let (rest, parts) = parse_term_parts(input).map_err(from_nom)?;
    expect_consumed(rest)?;
    sum_parts(&parts)
}

/// Parse `left = right`.
pub fn parse_equation(input: &str) -> Result<(Term, Term), ParseError> {
    let (rest, (left, _, right)) = tuple((
        parse_term_parts,
        preceded(multispace0, tag("=")),
        parse_term_parts,
    ))(input)
    .map_err(from_nom)?;
    expect_consumed(rest)?;
    Ok((sum_parts(&left)?, sum_parts(&right)?))
}

/// Parse an operation command: `sub 5`, `div -2`, `+ 3`, `÷ 4`.
pub fn parse_command(input: &str) -> Result<(Operation, i64), ParseError> {
    let op_token = alt((alpha1, recognize(one_of("+-*/×÷"))));
    let (rest, (token, value)) = tuple((
        preceded(multispace0, op_token),
        preceded(multispace0, parse_signed),
    ))(input)
    .map_err(from_nom)?;
    expect_consumed(rest)?;
    let op = token.parse::<Operation>()?;
    Ok((op, value))
}
