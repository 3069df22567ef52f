//! Property tests for the parser, printer and saturation driver.

use proptest::prelude::*;
use resat::{lexer::tokenize, parser::parse_tokens, saturate, Atom, Expr, Literal};

fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0u32..5).prop_map(Expr::literal),
        (0u32..1000).prop_map(Expr::literal),
        "[0-9]{1,3}".prop_filter_map("digit run", |text| {
            Literal::from_digits(&text).map(|lit| Expr::Atom(Atom::Literal(lit)))
        }),
        "[a-z]{1,3}".prop_map(Expr::ident),
    ]
}

/// Arbitrary trees over `+` and `*`, the shapes the parser produces.
fn expr_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::mul(l, r)),
        ]
    })
}

/// Products of leaves only: no sum ever appears beneath a product.
fn product_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(3, 8, 2, |inner| {
        (inner.clone(), inner).prop_map(|(l, r)| Expr::mul(l, r))
    })
}

/// Sums of products, where distribution can never fire.
fn sum_of_products_strategy() -> impl Strategy<Value = Expr> {
    prop::collection::vec(product_strategy(), 1..5).prop_map(|terms| {
        let mut terms = terms.into_iter();
        let first = terms.next().unwrap_or_else(|| Expr::literal(0u32));
        terms.fold(first, Expr::add)
    })
}

fn reparse(expr: &Expr) -> Expr {
    let printed = expr.to_string();
    parse_tokens(&tokenize(&printed)).expect("printed tree must parse")
}

mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn saturation_is_idempotent(expr in expr_strategy()) {
            let once = saturate(expr);
            let twice = saturate(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn printing_round_trips(expr in expr_strategy()) {
            prop_assert_eq!(reparse(&expr), expr);
        }

        #[test]
        fn saturated_trees_round_trip(expr in expr_strategy()) {
            let saturated = saturate(expr);
            prop_assert_eq!(reparse(&saturated), saturated);
        }

        #[test]
        fn cost_does_not_grow_without_distribution(expr in sum_of_products_strategy()) {
            let before = expr.cost();
            let after = saturate(expr).cost();
            prop_assert!(after <= before, "cost grew: {} -> {}", before, after);
        }

        #[test]
        fn sums_associate_left(names in prop::collection::vec("[a-z]{1,3}", 2..6)) {
            let source = names.join("+");
            let parsed = parse_tokens(&tokenize(&source)).unwrap();

            let mut expected = Expr::ident(names[0].clone());
            for name in &names[1..] {
                expected = Expr::add(expected, Expr::ident(name.clone()));
            }
            prop_assert_eq!(parsed, expected);
        }
    }
}

#[test]
fn a_plus_b_plus_c_associates_left() {
    let parsed = resat::parse("a+b+c").unwrap();
    assert_eq!(
        parsed,
        Expr::add(
            Expr::add(Expr::ident("a"), Expr::ident("b")),
            Expr::ident("c")
        )
    );
}
