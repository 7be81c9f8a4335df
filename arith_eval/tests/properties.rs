//! Property-based tests for the evaluator.
//!
//! Expressions are generated together with their expected value: every
//! composite is fully parenthesized, so the expected value can be computed
//! during generation without re-deriving precedence.

use arith_eval::evaluate;
use proptest::prelude::*;

fn arb_expression() -> impl Strategy<Value = (String, f64)> {
    let leaf = (0u32..1000, 0u32..100).prop_map(|(whole, frac)| {
        let text = format!("{whole}.{frac:02}");
        let value: f64 = text.parse().unwrap();
        (text, value)
    });

    leaf.prop_recursive(4, 64, 2, |inner| {
        (
            inner.clone(),
            prop_oneof![Just('+'), Just('-'), Just('*')],
            inner,
        )
            .prop_map(|((lhs_text, lhs), op, (rhs_text, rhs))| {
                let value = match op {
                    '+' => lhs + rhs,
                    '-' => lhs - rhs,
                    _ => lhs * rhs,
                };
                (format!("({lhs_text} {op} {rhs_text})"), value)
            })
    })
}

proptest! {
    #[test]
    fn evaluates_generated_expressions((text, expected) in arb_expression()) {
        prop_assert_eq!(evaluate(&text), Ok(expected));
    }

    #[test]
    fn whitespace_does_not_change_the_result((text, _) in arb_expression()) {
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let padded: String = text.chars().flat_map(|c| [c, ' ']).collect();
        prop_assert_eq!(evaluate(&stripped), evaluate(&padded));
    }

    #[test]
    fn evaluation_is_idempotent((text, _) in arb_expression()) {
        prop_assert_eq!(evaluate(&text), evaluate(&text));
    }
}
