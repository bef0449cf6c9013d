use crate::parse::{self, ParseError};
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    iter::FromIterator,
    ops::Neg,
    str::FromStr,
};

/// A single monomial, `coefficient * X^exponent`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: u32,
}

impl Term {
    pub const fn new(coefficient: f64, exponent: u32) -> Self {
        Term {
            coefficient,
            exponent,
        }
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Self::Output { Term::new(-self.coefficient, self.exponent) }
}

/// A polynomial equation in its reduced form, `terms = 0`.
///
/// The terms are always sorted by exponent, no two terms share an exponent,
/// and no term has a coefficient of zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Equation {
    terms: Vec<Term>,
    degree: u32,
}

impl Equation {
    /// The equation `0 = 0`.
    pub fn zero() -> Self { Equation::default() }

    /// Reduce a set of terms, combining any which share an exponent and
    /// dropping those which cancel out.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let mut combined = BTreeMap::new();

        for term in terms {
            *combined.entry(term.exponent).or_insert(0.0) += term.coefficient;
        }

        let terms: Vec<Term> = combined
            .into_iter()
            .filter(|&(_, coefficient)| coefficient != 0.0)
            .map(|(exponent, coefficient)| Term::new(coefficient, exponent))
            .collect();
        let degree = terms.last().map(|term| term.exponent).unwrap_or(0);

        Equation { terms, degree }
    }

    pub fn terms(&self) -> &[Term] { &self.terms }

    /// The highest exponent with a non-zero coefficient.
    pub fn degree(&self) -> u32 { self.degree }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Get the coefficient for `X^exponent`, treating missing terms as `0`.
    pub fn coefficient(&self, exponent: u32) -> f64 {
        self.terms
            .binary_search_by_key(&exponent, |term| term.exponent)
            .map(|ix| self.terms[ix].coefficient)
            .unwrap_or(0.0)
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = match s.find('=') {
            Some(index) => {
                let (left, right) = s.split_at(index);
                (left, &right[1..])
            },
            None => (s, ""),
        };

        let left = parse::parse_side(left)?;
        let right = parse::parse_side(right)?;

        // move everything to the left hand side
        let equation: Equation =
            left.into_iter().chain(right.into_iter().map(Neg::neg)).collect();
        log::debug!("Reduced \"{}\" to \"{}\"", s.trim(), equation);

        Ok(equation)
    }
}

impl FromIterator<Term> for Equation {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Equation::from_terms(iter)
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0 = 0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            if term.coefficient < 0.0 {
                write!(f, "- ")?;
            } else if i > 0 {
                write!(f, "+ ")?;
            }

            write!(f, "{} * X^{}", term.coefficient.abs(), term.exponent)?;
        }

        write!(f, " = 0")
    }
}
