//! Recognizers behind the pattern matchers that validate pseudo selector
//! arguments.
//!
//! Each recognizer must consume the whole argument to accept it.

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, preceded, tuple},
};

/// `An+B` in the restricted form `<digits>[n[ + <digits>]]`.
fn nth_expression(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        digit1,
        opt(pair(
            char('n'),
            opt(tuple((multispace0, char('+'), multispace0, digit1))),
        )),
    ))(input)
}

fn part_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic() || c == '-')(input)
}

/// One or two part names separated by a single space.
fn part_names(input: &str) -> IResult<&str, &str> {
    recognize(pair(part_ident, opt(preceded(char(' '), part_ident))))(input)
}

/// Accepts `3`, `2n`, `2n+1`, `2n + 1`.
pub fn is_nth_expression(arg: &str) -> bool {
    all_consuming(nth_expression)(arg).is_ok()
}

/// Accepts the argument of `::part()`, e.g. `label` or `tab active`.
///
/// The whole argument has to be one or two names. A prefix match is not
/// enough, so `tab2` and `tab active focus` are rejected even though both
/// start with a valid name.
pub fn is_part_name_list(arg: &str) -> bool {
    all_consuming(part_names)(arg).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_expressions() {
        for ok in ["0", "3", "12", "2n", "2n+1", "2n + 1", "10n  +\t3"] {
            assert!(is_nth_expression(ok), "{ok:?} should be accepted");
        }
        for bad in ["", "n", "odd", "-1", "2n+", "2n-1", "2n + 1 ", "3 ", "+2"] {
            assert!(!is_nth_expression(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn part_names_accept_one_or_two_idents() {
        assert!(is_part_name_list("label"));
        assert!(is_part_name_list("tab-header active"));
        assert!(!is_part_name_list(""));
        assert!(!is_part_name_list("a b c"));
        assert!(!is_part_name_list("tab1"));
    }
}
