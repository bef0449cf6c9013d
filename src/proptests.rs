//! Property-based tests for the reduce and solve pipeline.

use crate::{solve, Equation, Term};
use proptest::prelude::*;

fn coefficient() -> impl Strategy<Value = f64> {
    // quarters are exact in binary, so sums never pick up rounding noise
    (-400i32..400).prop_map(|quarters| f64::from(quarters) / 4.0)
}

fn term() -> impl Strategy<Value = Term> {
    (coefficient(), 0u32..6)
        .prop_map(|(coefficient, exponent)| Term::new(coefficient, exponent))
}

fn side() -> impl Strategy<Value = Vec<Term>> {
    proptest::collection::vec(term(), 0..6)
}

fn non_zero() -> impl Strategy<Value = f64> {
    prop_oneof![-10i32..=-1, 1i32..=10].prop_map(f64::from)
}

/// Write out terms the way a person would type them.
fn render(terms: &[Term]) -> String {
    let mut text = String::new();

    for (i, term) in terms.iter().enumerate() {
        let sign = if term.coefficient < 0.0 {
            "-"
        } else if i > 0 {
            "+"
        } else {
            ""
        };
        text.push_str(&format!(
            "{} {} * X^{} ",
            sign,
            term.coefficient.abs(),
            term.exponent
        ));
    }

    text
}

proptest! {
    #[test]
    fn reduced_form_is_stable(left in side(), right in side()) {
        let src = format!("{}= {}", render(&left), render(&right));
        let first: Equation = src.parse().unwrap();
        let second: Equation = first.to_string().parse().unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn exponents_are_unique_and_coefficients_non_zero(
        left in side(),
        right in side(),
    ) {
        let src = format!("{}= {}", render(&left), render(&right));
        let equation: Equation = src.parse().unwrap();

        for pair in equation.terms().windows(2) {
            prop_assert!(pair[0].exponent < pair[1].exponent);
        }
        for term in equation.terms() {
            prop_assert!(term.coefficient != 0.0);
        }
    }

    #[test]
    fn degree_is_the_highest_exponent(left in side(), right in side()) {
        let src = format!("{}= {}", render(&left), render(&right));
        let equation: Equation = src.parse().unwrap();

        let highest = equation.terms().iter().map(|t| t.exponent).max();
        prop_assert_eq!(equation.degree(), highest.unwrap_or(0));
    }

    #[test]
    fn quadratic_roots_satisfy_the_equation(
        a in non_zero(),
        b in -10i32..=10,
        c in -10i32..=10,
    ) {
        let (b, c) = (f64::from(b), f64::from(c));
        let equation = Equation::from_terms(vec![
            Term::new(c, 0),
            Term::new(b, 1),
            Term::new(a, 2),
        ]);

        let solution = solve(&equation);

        prop_assert_eq!(solution.degree, 2);
        for root in solution.solutions.iter().flatten() {
            let x: f64 = root.parse().unwrap();
            let residual = a * x * x + b * x + c;
            // roots are rounded to 6 decimal places before we see them
            let tolerance = 1e-5 * (1.0 + 2.0 * a.abs() * x.abs() + b.abs());

            prop_assert!(
                residual.abs() < tolerance,
                "{} gives {} for {}", root, residual, equation,
            );
        }
    }
}
