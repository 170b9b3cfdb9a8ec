use crate::ops::{Conversion, MASK_QUERIES, OPERATORS, OperatorSpec, ResultKind};

#[test]
fn conversions_come_first_in_fixed_order() {
    assert_eq!(
        OPERATORS[0],
        OperatorSpec::Conversion(Conversion::Storage)
    );
    assert_eq!(OPERATORS[1], OperatorSpec::Conversion(Conversion::Erased));
    assert_eq!(
        OPERATORS[2],
        OperatorSpec::Conversion(Conversion::Siblings)
    );
    assert_eq!(OPERATORS[3], OperatorSpec::Increment);
    assert_eq!(OPERATORS[4], OperatorSpec::Decrement);
}

#[test]
fn scalar_variant_coverage() {
    // 5 arithmetic + 3 bitwise + 6 comparisons
    let with_variant = OPERATORS
        .iter()
        .filter(|op| op.has_scalar_variant())
        .count();
    assert_eq!(with_variant, 14);

    // Every binary operator has one; nothing else does
    for op in OPERATORS {
        match op {
            OperatorSpec::Binary(bin) => assert!(bin.has_scalar_variant, "{}", bin.symbol),
            other => assert!(!other.has_scalar_variant()),
        }
    }
}

#[test]
fn comparisons_produce_masks() {
    let comparisons: Vec<_> = OPERATORS
        .iter()
        .filter_map(|op| match op {
            OperatorSpec::Binary(bin) if bin.result == ResultKind::Mask => Some(bin),
            _ => None,
        })
        .collect();

    let symbols: Vec<_> = comparisons.iter().map(|bin| bin.symbol).collect();
    assert_eq!(symbols, ["==", "!=", "<", ">", "<=", ">="]);

    for bin in &comparisons {
        assert!(bin.primitive.starts_with("Compare"), "{}", bin.primitive);
    }
}

#[test]
fn bitwise_ops_are_generic_over_scalar() {
    for op in OPERATORS {
        if let OperatorSpec::Binary(bin) = op {
            let is_bitwise = matches!(bin.symbol, "&" | "|" | "^");
            assert_eq!(bin.scalar_generic, is_bitwise, "{}", bin.symbol);
        }
    }
}

#[test]
fn unary_ops() {
    let unary: Vec<_> = OPERATORS
        .iter()
        .filter_map(|op| match op {
            OperatorSpec::Unary(u) => Some((u.symbol, u.primitive, u.scalar_generic)),
            _ => None,
        })
        .collect();
    assert_eq!(unary, [("-", "Negate", false), ("~", "Not", true)]);
}

#[test]
fn primitives_are_distinct() {
    let mut seen = std::collections::BTreeSet::new();
    for op in OPERATORS {
        if let OperatorSpec::Binary(bin) = op {
            assert!(seen.insert(bin.primitive), "duplicate {}", bin.primitive);
        }
    }
}

#[test]
fn mask_queries_are_the_six_reductions() {
    let names: Vec<_> = MASK_QUERIES.iter().map(|q| q.name).collect();
    assert_eq!(
        names,
        [
            "AllTrue",
            "AllFalse",
            "AnyTrue",
            "AnyFalse",
            "ElementTrue",
            "ElementFalse"
        ]
    );

    for query in MASK_QUERIES {
        assert_eq!(query.indexed, query.name.starts_with("Element"));
    }
}
