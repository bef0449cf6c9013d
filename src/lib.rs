//! Reduce polynomial equations like `5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0`
//! and solve them when their degree is 2 or less.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod equations;
mod parse;
#[cfg(test)]
mod proptests;
mod solve;

pub use equations::{Equation, Term};
pub use parse::{parse_side, ParseError};
pub use solve::{solve, sqrt, DegreeBucket, Roots, Solution};

/// Parse, reduce, and solve an equation in one go.
pub fn solve_equation(src: &str) -> Result<Solution, ParseError> {
    let equation: Equation = src.parse()?;
    Ok(solve(&equation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_from_text() {
        let got = solve_equation("5 * X^0 + 4 * X^1 = 4 * X^0").unwrap();

        assert_eq!(got.degree, 1);
        assert_eq!(got.reduced_form, "1 * X^0 + 4 * X^1 = 0");
        assert_eq!(got.solutions.unwrap().as_slice(), &["-0.25"]);
    }

    #[test]
    fn errors_abort_the_whole_pipeline() {
        let got = solve_equation("5 + 4 * X^1 = 1").unwrap_err();

        assert_eq!(got.to_string(), "Invalid term format: 5");
    }
}
