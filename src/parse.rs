use crate::Term;
use smol_str::SmolStr;
use std::ops::Range;

/// The marker every term uses to introduce its exponent.
const EXPONENT_MARKER: &str = "X^";

/// Parse one side of an equation into the [`Term`]s it is made of.
///
/// The grammar:
///
/// ```text
/// side          := "0"
///                | signed_term*
///
/// signed_term   := "+" term
///                | "-" term
///                | term
///
/// term          := NUMBER? "*" "X^" INTEGER
///                | "X^" INTEGER
/// ```
///
/// A side which is empty (or just `0`) is the zero polynomial and contains no
/// terms at all.
pub fn parse_side(src: &str) -> Result<Vec<Term>, ParseError> {
    if src.trim() == "0" {
        return Ok(Vec::new());
    }

    SignedTerms::new(src).map(|term| term.parse()).collect()
}

/// Possible errors that may occur while parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The term is missing its `*` or its `X^`.
    #[error("Invalid term format: {term}")]
    MalformedTerm { term: SmolStr, span: Range<usize> },
    #[error("Invalid exponent format: {text}")]
    InvalidExponent { text: SmolStr, span: Range<usize> },
    #[error("Invalid coefficient format: {text}")]
    InvalidCoefficient { text: SmolStr, span: Range<usize> },
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Sign {
    Plus,
    Minus,
}

impl Sign {
    fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

/// A single term, sliced out of the side it came from but not yet parsed.
#[derive(Debug, Clone, PartialEq)]
struct SignedTerm<'a> {
    sign: Sign,
    /// The whole term, sign included.
    text: &'a str,
    /// Everything after the sign.
    body: &'a str,
    span: Range<usize>,
}

impl<'a> SignedTerm<'a> {
    fn parse(&self) -> Result<Term, ParseError> {
        let marker = self
            .body
            .find(EXPONENT_MARKER)
            .ok_or_else(|| self.malformed())?;
        let (before, after) = self.body.split_at(marker);

        let coefficient = self.coefficient(before)?;
        let exponent = self.exponent(after[EXPONENT_MARKER.len()..].trim())?;

        let term = Term::new(self.sign.apply(coefficient), exponent);
        log::trace!("Parsed \"{}\" as {:?}", self.text, term);

        Ok(term)
    }

    fn coefficient(&self, before_marker: &str) -> Result<f64, ParseError> {
        // a bare "X^n" is shorthand for "1 * X^n"
        if before_marker.is_empty() {
            return Ok(1.0);
        }

        let text = match before_marker.trim_end().strip_suffix('*') {
            Some(text) => text.trim(),
            None => return Err(self.malformed()),
        };

        if text.is_empty() {
            return Ok(1.0);
        }

        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::InvalidCoefficient {
                text: text.into(),
                span: self.span.clone(),
            })
    }

    fn exponent(&self, text: &str) -> Result<u32, ParseError> {
        text.parse().map_err(|_| ParseError::InvalidExponent {
            text: text.into(),
            span: self.span.clone(),
        })
    }

    fn malformed(&self) -> ParseError {
        ParseError::MalformedTerm {
            term: self.text.into(),
            span: self.span.clone(),
        }
    }
}

/// Splits a side into [`SignedTerm`]s, starting a new term at every `+` or
/// `-`.
#[derive(Debug, Clone, PartialEq)]
struct SignedTerms<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> SignedTerms<'a> {
    fn new(src: &'a str) -> Self { SignedTerms { src, cursor: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn skip_while<P>(&mut self, mut predicate: P)
    where
        P: FnMut(char) -> bool,
    {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.advance();
        }
    }

    fn chomp_sign(&mut self) -> Sign {
        match self.peek() {
            Some('+') => {
                self.advance();
                Sign::Plus
            },
            Some('-') => {
                self.advance();
                Sign::Minus
            },
            // no explicit sign means "+"
            _ => Sign::Plus,
        }
    }
}

fn is_sign(c: char) -> bool { c == '+' || c == '-' }

impl<'a> Iterator for SignedTerms<'a> {
    type Item = SignedTerm<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_while(char::is_whitespace);
        self.peek()?;

        let start = self.cursor;
        let sign = self.chomp_sign();
        let body_start = self.cursor;
        self.skip_while(|c| !is_sign(c));
        let end = self.cursor;

        Some(SignedTerm {
            sign,
            text: self.src[start..end].trim(),
            body: self.src[body_start..end].trim(),
            span: start..end,
        })
    }
}
