use crate::Equation;
use arrayvec::ArrayVec;
use std::fmt::{self, Display, Formatter};

const ALL_REAL_NUMBERS: &str = "All real numbers are solutions.";
const NO_SOLUTION: &str = "There is no solution.";
const NEGATIVE_DISCRIMINANT: &str =
    "Discriminant is strictly negative, there are no real solutions.";
const ZERO_DISCRIMINANT: &str = "Discriminant is zero, the solution is:";
const POSITIVE_DISCRIMINANT: &str =
    "Discriminant is strictly positive, the two solutions are:";
const DEGREE_TOO_HIGH: &str =
    "The polynomial degree is strictly greater than 2, I can't solve.";

/// The formatted roots of an equation. We never solve anything with more
/// than two.
pub type Roots = ArrayVec<[String; 2]>;

/// Everything we know about an [`Equation`] after trying to solve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub degree: u32,
    /// The [`Equation`] in its canonical text form.
    pub reduced_form: String,
    /// The real roots, if the equation has a finite number of them.
    pub solutions: Option<Roots>,
    /// Only set for equations of degree 2.
    pub discriminant: Option<f64>,
    pub message: Option<&'static str>,
}

/// The kinds of equation the solver knows how to deal with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DegreeBucket {
    Constant,
    Linear,
    Quadratic,
    Higher(u32),
}

impl DegreeBucket {
    pub fn of(degree: u32) -> Self {
        match degree {
            0 => DegreeBucket::Constant,
            1 => DegreeBucket::Linear,
            2 => DegreeBucket::Quadratic,
            other => DegreeBucket::Higher(other),
        }
    }
}

/// Solve an [`Equation`], giving its real roots when the degree is 2 or less.
pub fn solve(equation: &Equation) -> Solution {
    let outcome = if equation.is_empty() {
        Outcome::message(ALL_REAL_NUMBERS)
    } else {
        let bucket = DegreeBucket::of(equation.degree());
        log::debug!("Solving \"{}\" as {:?}", equation, bucket);

        match bucket {
            DegreeBucket::Constant => solve_constant(equation.coefficient(0)),
            DegreeBucket::Linear => {
                solve_linear(equation.coefficient(1), equation.coefficient(0))
            },
            DegreeBucket::Quadratic => solve_quadratic(
                equation.coefficient(2),
                equation.coefficient(1),
                equation.coefficient(0),
            ),
            DegreeBucket::Higher(_) => Outcome::message(DEGREE_TOO_HIGH),
        }
    };

    Solution {
        degree: equation.degree(),
        reduced_form: equation.to_string(),
        solutions: outcome.solutions,
        discriminant: outcome.discriminant,
        message: outcome.message,
    }
}

/// The part of a [`Solution`] which depends on the coefficients.
#[derive(Debug, Default, Clone, PartialEq)]
struct Outcome {
    solutions: Option<Roots>,
    discriminant: Option<f64>,
    message: Option<&'static str>,
}

impl Outcome {
    fn message(message: &'static str) -> Self {
        Outcome {
            message: Some(message),
            ..Default::default()
        }
    }

    fn roots<I>(roots: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Outcome {
            solutions: Some(roots.into_iter().map(format_root).collect()),
            ..Default::default()
        }
    }

    fn with_discriminant(
        self,
        discriminant: f64,
        message: &'static str,
    ) -> Self {
        Outcome {
            discriminant: Some(discriminant),
            message: Some(message),
            ..self
        }
    }
}

/// `c = 0`
fn solve_constant(c: f64) -> Outcome {
    if c == 0.0 {
        Outcome::message(ALL_REAL_NUMBERS)
    } else {
        Outcome::message(NO_SOLUTION)
    }
}

/// `a*x + b = 0`
fn solve_linear(a: f64, b: f64) -> Outcome {
    if a == 0.0 {
        return solve_constant(b);
    }

    Outcome::roots(Some(-b / a))
}

/// `a*x^2 + b*x + c = 0`
fn solve_quadratic(a: f64, b: f64, c: f64) -> Outcome {
    if a == 0.0 {
        return solve_linear(b, c);
    }

    let discriminant = b * b - 4.0 * a * c;
    log::trace!("Discriminant of ({}, {}, {}) is {}", a, b, c, discriminant);

    if discriminant < 0.0 {
        Outcome::default()
            .with_discriminant(discriminant, NEGATIVE_DISCRIMINANT)
    } else if discriminant == 0.0 {
        Outcome::roots(Some(-b / (2.0 * a)))
            .with_discriminant(discriminant, ZERO_DISCRIMINANT)
    } else {
        let root = sqrt(discriminant);

        Outcome::roots(vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)])
            .with_discriminant(discriminant, POSITIVE_DISCRIMINANT)
    }
}

/// Calculate the square root of `value` using the Babylonian method.
///
/// Starting with the guesses `x = value` and `y = 1`, we keep replacing `x`
/// with the average of the two and `y` with `value / x`. The two guesses
/// close in on the root from either side until they agree within a small
/// tolerance.
///
/// Negative (and NaN) inputs have no real square root and give `NaN`.
pub fn sqrt(value: f64) -> f64 {
    const TOLERANCE: f64 = 1e-8;
    const MAX_RELATIVE: f64 = 1e-12;
    // enough to halve our way down from f64::MAX
    const MAX_ITERATIONS: usize = 2048;

    if value.is_nan() || value < 0.0 {
        return f64::NAN;
    }
    if value == 0.0 || value.is_infinite() {
        return value;
    }

    let mut x = value;
    let mut y = 1.0;

    for iteration in 0..MAX_ITERATIONS {
        if approx::relative_eq!(
            x,
            y,
            epsilon = TOLERANCE,
            max_relative = MAX_RELATIVE
        ) {
            log::trace!("sqrt({}) converged after {} steps", value, iteration);
            break;
        }

        x = (x + y) / 2.0;
        y = value / x;
    }

    x
}

/// Render a root with 6 decimal places, dropping any trailing zeros (and the
/// decimal point if nothing is left after it).
fn format_root(value: f64) -> String {
    let fixed = format!("{:.6}", value);

    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    match trimmed {
        "-0" => String::from("0"),
        other => other.to_string(),
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Reduced form: {}", self.reduced_form)?;
        write!(f, "\nPolynomial degree: {}", self.degree)?;

        if let Some(message) = self.message {
            write!(f, "\n{}", message)?;
        }

        if let Some(solutions) = &self.solutions {
            match solutions.as_slice() {
                [single] => write!(f, "\nThe solution is:\n{}", single)?,
                many => {
                    let negative_discriminant =
                        self.discriminant.map_or(false, |d| d < 0.0);
                    if many.len() == 2 && negative_discriminant {
                        write!(f, "\nThe solutions are:")?;
                    }

                    for solution in many {
                        write!(f, "\n{}", solution)?;
                    }
                },
            }
        }

        Ok(())
    }
}
