//! Property-based tests for the edit distance metric.
//!
//! BK-tree pruning is only correct if distance is a metric:
//! 1. **Identity**: d(x, x) = 0, and d(x, y) = 0 only if x and y fold to the same string
//! 2. **Symmetry**: d(x, y) = d(y, x)
//! 3. **Triangle inequality**: d(x, z) <= d(x, y) + d(y, z)

use bkcomplete::domain::{CostModel, EditDistance};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_-]{0,12}").unwrap()
}

fn metric() -> EditDistance {
    EditDistance::with_capacity(CostModel::default(), 12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn distance_identity(a in arb_name()) {
        let mut m = metric();
        prop_assert_eq!(m.distance(&a, &a), 0);
        prop_assert_eq!(m.distance(&a, &a.to_uppercase()), 0);
    }

    #[test]
    fn distance_zero_only_for_equal_folded(a in arb_name(), b in arb_name()) {
        let mut m = metric();
        if m.distance(&a, &b) == 0 {
            prop_assert_eq!(a.to_lowercase(), b.to_lowercase());
        }
    }

    #[test]
    fn distance_symmetric(a in arb_name(), b in arb_name()) {
        let mut m = metric();
        let d_ab = m.distance(&a, &b);
        let d_ba = m.distance(&b, &a);
        prop_assert_eq!(d_ab, d_ba, "d({}, {}) != d({}, {})", a, b, b, a);
    }

    #[test]
    fn distance_triangle_inequality(a in arb_name(), b in arb_name(), c in arb_name()) {
        let mut m = metric();
        let d_ac = m.distance(&a, &c);
        let d_ab = m.distance(&a, &b);
        let d_bc = m.distance(&b, &c);
        prop_assert!(
            d_ac <= d_ab + d_bc,
            "Triangle inequality violated: d({}, {}) = {} > {} + {}",
            a, c, d_ac, d_ab, d_bc
        );
    }

    #[test]
    fn distance_bounded_by_longer_operand(a in arb_name(), b in arb_name()) {
        let mut m = metric();
        let d = m.distance(&a, &b);
        let (la, lb) = (a.chars().count(), b.chars().count());
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }
}

#[test]
fn given_empty_operand_when_measuring_then_equals_other_length() {
    let mut m = metric();
    assert_eq!(m.distance("", "Gapdh"), 5);
    assert_eq!(m.distance("Gapdh", ""), 5);
}
