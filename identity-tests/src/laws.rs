use identity::{Identity, Monad, PartiallyApplied, Semigroup, Step};
use proptest::prelude::*;

use crate::arb::{arb_identity, arb_int};

type Endo = fn(i64) -> i64;

fn sq(x: i64) -> i64 {
    x.wrapping_mul(x)
}

fn inc(x: i64) -> i64 {
    x.wrapping_add(1)
}

mod functor {
    use super::*;

    proptest! {
        #[test]
        fn identity_map_changes_nothing(m in arb_identity(arb_int())) {
            prop_assert_eq!(m.map(|x| x), m);
        }

        #[test]
        fn mapping_twice_is_mapping_the_composition(m in arb_identity(arb_int())) {
            prop_assert_eq!(m.map(sq).map(inc), m.map(|x| inc(sq(x))));
        }
    }
}

mod apply {
    use super::*;

    proptest! {
        #[test]
        fn composition(w in arb_identity(arb_int())) {
            let u: Identity<Endo> = Identity(sq);
            let v: Identity<Endo> = Identity(inc);
            let lhs = w.ap(v).ap(u);
            let rhs = w.ap(v.ap(u.map(|f: Endo| move |g: Endo| move |x: i64| f(g(x)))));
            prop_assert_eq!(lhs, rhs);
        }
    }
}

mod applicative {
    use super::*;

    proptest! {
        #[test]
        fn identity(v in arb_identity(arb_int())) {
            prop_assert_eq!(v.ap(Identity::of(|x: i64| x)), v);
        }

        #[test]
        fn homomorphism(x in arb_int()) {
            prop_assert_eq!(Identity::of(x).ap(Identity::of(sq)), Identity::of(sq(x)));
        }

        #[test]
        fn interchange(y in arb_int()) {
            let u: Identity<Endo> = Identity(sq);
            prop_assert_eq!(Identity::of(y).ap(u), u.ap(Identity::of(move |f: Endo| f(y))));
        }
    }
}

mod chain {
    use super::*;

    fn drop_upper(s: String) -> Identity<String> {
        Identity(s.chars().filter(|c| !c.is_ascii_uppercase()).collect())
    }

    fn upper(s: String) -> Identity<String> {
        Identity(s.to_uppercase())
    }

    proptest! {
        #[test]
        fn associativity(m in arb_identity(".*")) {
            let lhs = m.clone().chain(drop_upper).chain(upper);
            let rhs = m.chain(|x| drop_upper(x).chain(upper));
            prop_assert_eq!(lhs, rhs);
        }
    }
}

mod chain_rec {
    use super::*;

    fn step(x: i64) -> Identity<Step<i64, i64>> {
        Identity(if x >= 0 { Step::Done(x * x) } else { Step::Next(x + 1) })
    }

    #[test]
    fn squares_the_first_non_negative_value() {
        assert_eq!(Identity::chain_rec(step, 8), Identity(64));
        assert_eq!(Identity::chain_rec(step, -8), Identity(0));
    }

    #[test]
    fn survives_a_million_iterations() {
        let countdown = |x: u64| Identity(if x == 0 { Step::Done(0_u64) } else { Step::Next(x - 1) });
        assert_eq!(Identity::chain_rec(countdown, 1_000_000), Identity(0));
    }

    proptest! {
        #[test]
        fn matches_the_closed_form(x in -1000_i64..=1000) {
            let expected = if x >= 0 { x * x } else { 0 };
            prop_assert_eq!(Identity::chain_rec(step, x), Identity(expected));
        }

        // the equivalence law, at depths where plain recursion is safe
        #[test]
        fn equivalent_to_recursive_chaining(x in -50_i64..=50) {
            fn via_chain(x: i64) -> Identity<i64> {
                Identity(x).chain(|x| if x >= 0 { Identity(x * x) } else { via_chain(x + 1) })
            }
            prop_assert_eq!(Identity::chain_rec(step, x), via_chain(x));
        }
    }
}

mod monad {
    use super::*;

    proptest! {
        #[test]
        fn left_identity(x in arb_int()) {
            let f = |x: i64| Identity(vec![x, x]);
            prop_assert_eq!(Identity::of(x).chain(f), f(x));
        }

        #[test]
        fn right_identity(m in arb_identity(arb_int())) {
            prop_assert_eq!(m.chain(Identity::of), m);
        }
    }

    // the wrapper's whole reason to exist: generic code written against the
    // abstractions runs against it unchanged
    #[test]
    fn usable_through_the_generic_interface() {
        fn sum_twice<M: Monad>(ma: M::Of<i64>) -> M::Of<i64>
        where
            M::Of<i64>: Clone,
        {
            let copy = ma.clone();
            M::chain(ma, move |x| M::map(copy.clone(), move |y| x + y))
        }

        assert_eq!(sum_twice::<Identity<PartiallyApplied>>(Identity(21)), Identity(42));
        assert_eq!(sum_twice::<Option<PartiallyApplied>>(Some(21)), Some(42));
        assert_eq!(sum_twice::<Vec<PartiallyApplied>>(vec![1, 2]), vec![2, 3, 3, 4]);
    }
}

mod foldable {
    use super::*;

    proptest! {
        #[test]
        fn reduce_applies_the_step_once(x in arb_int(), y in arb_int()) {
            prop_assert_eq!(Identity(y).reduce(x, |acc, v: i64| acc.wrapping_add(v)), x.wrapping_add(y));
        }

        #[test]
        fn folding_an_associative_combination_combines_with_the_seed(init in ".*", s in arb_identity(".*")) {
            let folded = s.clone().reduce(init.clone(), |acc: String, v| acc.combine(v));
            prop_assert_eq!(folded, init.combine(s.extract()));
        }
    }
}

mod traversable {
    use super::*;

    #[test]
    fn fans_out_over_the_vec_applicative() {
        let fanned = Identity(100).traverse::<Vec<PartiallyApplied>, _, _>(|x| vec![x + 1, x + 2, x + 3]);
        assert_eq!(fanned, vec![Identity(101), Identity(102), Identity(103)]);
    }

    #[test]
    fn short_circuits_through_option_and_result() {
        let present = Identity(3_i64).traverse::<Option<PartiallyApplied>, _, _>(|x| (x > 0).then_some(x));
        assert_eq!(present, Some(Identity(3)));
        let absent = Identity(-3_i64).traverse::<Option<PartiallyApplied>, _, _>(|x| (x > 0).then_some(x));
        assert_eq!(absent, None);

        let parsed = Identity("28").traverse::<Result<PartiallyApplied, _>, _, _>(|s| s.parse::<u16>());
        assert_eq!(parsed, Ok(Identity(28)));
        assert!(Identity("eight").traverse::<Result<PartiallyApplied, _>, _, _>(|s| s.parse::<u16>()).is_err());
    }

    proptest! {
        #[test]
        fn identity_law(x in arb_int()) {
            prop_assert_eq!(Identity(x).traverse::<Vec<PartiallyApplied>, _, _>(|a| vec![a]), vec![Identity(x)]);
        }

        // first-element projection Vec -> Identity is a natural transformation
        #[test]
        fn naturality(x in arb_int()) {
            let f = |a: i64| vec![a, a.wrapping_add(1)];
            let lhs = {
                let vs = Identity(x).traverse::<Vec<PartiallyApplied>, _, _>(f);
                Identity(vs[0])
            };
            let rhs = Identity(x).traverse::<Identity<PartiallyApplied>, _, _>(|a| Identity(f(a)[0]));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn composes_through_nested_applicatives(x in -100_i64..=100) {
            let f = |a: i64| vec![a, a + 1];
            let g = |b: i64| if b % 7 != 0 { Some(b * 2) } else { None };
            let lhs: Option<Vec<Identity<i64>>> = Identity(x)
                .traverse::<Vec<PartiallyApplied>, _, _>(f)
                .into_iter()
                .map(|t| t.traverse::<Option<PartiallyApplied>, _, _>(g))
                .collect();
            let rhs: Option<Vec<Identity<i64>>> = Identity(x)
                .traverse::<Option<PartiallyApplied>, _, _>(|a| f(a).into_iter().map(g).collect::<Option<Vec<i64>>>())
                .map(|t| t.extract().into_iter().map(Identity).collect());
            prop_assert_eq!(lhs, rhs);
        }
    }
}

mod extend_comonad {
    use super::*;

    fn widen(w: Identity<i64>) -> i64 {
        w.extract().wrapping_mul(2)
    }

    fn bump(w: Identity<i64>) -> i64 {
        w.extract().wrapping_add(1)
    }

    proptest! {
        #[test]
        fn extend_associativity(w in arb_identity(arb_int())) {
            prop_assert_eq!(w.extend(bump).extend(widen), w.extend(|w2| widen(w2.extend(bump))));
        }

        #[test]
        fn extract_after_extend_is_the_callback(w in arb_identity(arb_int())) {
            prop_assert_eq!(w.extend(widen).extract(), widen(w));
        }

        #[test]
        fn extending_with_extract_changes_nothing(w in arb_identity(arb_int())) {
            prop_assert_eq!(w.extend(Identity::extract), w);
        }
    }
}

mod setoid {
    use super::*;

    // a tiny domain, so the guarded laws actually fire
    proptest! {
        #[test]
        fn reflexivity(a in arb_identity(-3_i64..=3)) {
            prop_assert_eq!(a, a);
        }

        #[test]
        fn symmetry(a in arb_identity(-3_i64..=3), b in arb_identity(-3_i64..=3)) {
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn transitivity(
            a in arb_identity(-3_i64..=3),
            b in arb_identity(-3_i64..=3),
            c in arb_identity(-3_i64..=3),
        ) {
            if a == b && b == c {
                prop_assert_eq!(a, c);
            }
        }
    }
}

mod ord {
    use super::*;

    proptest! {
        #[test]
        fn totality(a in arb_identity(arb_int()), b in arb_identity(arb_int())) {
            prop_assert!(a <= b || b <= a);
        }

        #[test]
        fn antisymmetry(a in arb_identity(-3_i64..=3), b in arb_identity(-3_i64..=3)) {
            if a <= b && b <= a {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn transitivity(
            a in arb_identity(-3_i64..=3),
            b in arb_identity(-3_i64..=3),
            c in arb_identity(-3_i64..=3),
        ) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
        }
    }
}

mod semigroup {
    use super::*;
    use proptest::collection::vec;

    proptest! {
        #[test]
        fn string_combination_associates(a in ".*", b in ".*", c in ".*") {
            let (a, b, c) = (Identity(a), Identity(b), Identity(c));
            prop_assert_eq!(
                a.clone().combine(b.clone()).combine(c.clone()),
                a.combine(b.combine(c))
            );
        }

        #[test]
        fn vec_combination_associates(
            a in vec(any::<i32>(), 0..8),
            b in vec(any::<i32>(), 0..8),
            c in vec(any::<i32>(), 0..8),
        ) {
            let (a, b, c) = (Identity(a), Identity(b), Identity(c));
            prop_assert_eq!(
                a.clone().combine(b.clone()).combine(c.clone()),
                a.combine(b.combine(c))
            );
        }
    }
}

mod display {
    use super::*;

    #[test]
    fn renders_nested_containers_with_nested_parens() {
        let nested = Identity(Identity(Identity(-0.0_f64)));
        assert_eq!(nested.to_string(), "Identity (Identity (Identity (-0.0)))");
    }

    #[test]
    fn renders_sequences_the_way_the_payload_shows_them() {
        assert_eq!(
            Identity(vec!["foo", "bar", "baz"]).to_string(),
            r#"Identity (["foo", "bar", "baz"])"#
        );
    }

    #[test]
    fn show_and_display_agree() {
        use identity::Show;

        let m = Identity((1_u8, "two".to_string()));
        assert_eq!(m.show(), m.to_string());
        assert_eq!(m.show(), r#"Identity ((1, "two"))"#);
    }
}

mod serde_repr {
    use super::*;

    #[test]
    fn serializes_transparently_as_the_payload() {
        assert_eq!(serde_json::to_string(&Identity(42)).unwrap(), "42");
        let round: Identity<Vec<i64>> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(round, Identity(vec![1, 2, 3]));
    }
}
