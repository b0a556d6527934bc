//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::hash::{Hash, Hasher};

    use proptest::prelude::*;
    use rustc_hash::FxHasher;

    use crate::dense::PolyF64;

    // Integer-valued coefficients keep ring laws exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-4, or zero)
    fn small_poly() -> impl Strategy<Value = PolyF64> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|c| PolyF64::from_coefficients(&c).unwrap())
    }

    // Arbitrary finite coefficients for the approximate laws
    fn real_poly() -> impl Strategy<Value = PolyF64> {
        proptest::collection::vec(-10.0f64..10.0, 1..=6)
            .prop_map(|c| PolyF64::from_coefficients(&c).unwrap())
    }

    fn nonzero_poly() -> impl Strategy<Value = PolyF64> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Polynomials that may carry infinities and NaNs
    fn wild_poly() -> impl Strategy<Value = PolyF64> {
        let coeff = prop_oneof![
            small_coeff(),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            Just(f64::NAN),
        ];
        proptest::collection::vec(coeff, 1..=5)
            .prop_map(|c| PolyF64::from_coefficients(&c).unwrap())
    }

    fn fx_hash(p: &PolyF64) -> u64 {
        let mut hasher = FxHasher::default();
        p.hash(&mut hasher);
        hasher.finish()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
    }

    proptest! {
        // Canonical form

        #[test]
        fn all_zero_input_is_canonical_zero(len in 1usize..50) {
            let p = PolyF64::from_coefficients(&vec![0.0; len]).unwrap();
            prop_assert_eq!(&p, &PolyF64::from_constant(0.0));
            prop_assert_eq!(p.degree(), -1);
            prop_assert_eq!(p.coefficients(), vec![0.0]);
        }

        #[test]
        fn leading_coefficient_nonzero(p in small_poly()) {
            if let Some(lead) = p.leading_coefficient() {
                prop_assert!(lead != 0.0);
            }
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c)).unwrap();
            let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap());
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in real_poly()) {
            let zero = PolyF64::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_additive_inverse(a in real_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert_eq!(a.sub(&a), PolyF64::zero());
        }

        #[test]
        fn poly_mul_identity(a in real_poly()) {
            let one = PolyF64::one();
            prop_assert_eq!(a.mul(&one).unwrap(), a.clone());
            prop_assert_eq!(one.mul(&a).unwrap(), a);
        }

        #[test]
        fn poly_mul_zero_absorbs(a in wild_poly()) {
            let zero = PolyF64::zero();
            prop_assert!(a.mul(&zero).unwrap().is_zero());
            prop_assert!(zero.mul(&a).unwrap().is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) for exact non-zero coefficients
            let product = a.mul(&b).unwrap();
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(sum.degree() <= a.degree().max(b.degree()));
        }

        // Division

        #[test]
        fn division_remainder_law(a in real_poly(), d in real_poly()) {
            prop_assume!(!d.is_zero());
            prop_assume!(d.leading_coefficient().is_some_and(|c| c.abs() > 0.5));

            let (q, r) = a.div_rem(&d).unwrap();
            prop_assert!(r.degree() < d.degree());

            let back = q.mul(&d).unwrap().add(&r);
            for x in [-1.5, -0.5, 0.0, 0.25, 1.0, 2.0] {
                prop_assert!(
                    close(back.evaluate(x), a.evaluate(x)),
                    "at {}: {} vs {}", x, back.evaluate(x), a.evaluate(x)
                );
            }
        }

        #[test]
        fn exact_division_recovers_factor(a in nonzero_poly(), b in nonzero_poly()) {
            // Exact when b is monic with integer coefficients
            let monic = b.add(&PolyF64::monomial(1.0, b.len()).unwrap());
            let product = a.mul(&monic).unwrap();
            let (q, r) = product.div_rem(&monic).unwrap();
            prop_assert_eq!(q, a);
            prop_assert!(r.is_zero());
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            let sum = a.add(&b);
            prop_assert_eq!(sum.evaluate(x), a.evaluate(x) + b.evaluate(x));
        }

        #[test]
        fn poly_eval_mul(a in real_poly(), b in real_poly(), x in -2.0f64..2.0) {
            let product = a.mul(&b).unwrap();
            prop_assert!(close(product.evaluate(x), a.evaluate(x) * b.evaluate(x)));
        }

        #[test]
        fn derivative_is_linear(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(
                a.add(&b).derivative(),
                a.derivative().add(&b.derivative())
            );
        }

        // Equality and hashing

        #[test]
        fn equal_implies_equal_hash(a in small_poly(), b in small_poly()) {
            if a == b {
                prop_assert_eq!(fx_hash(&a), fx_hash(&b));
            }
            let copy = PolyF64::from_coefficients(&a.coefficients()).unwrap();
            prop_assert_eq!(&copy, &a);
            prop_assert_eq!(fx_hash(&copy), fx_hash(&a));
        }
    }
}
