use std::fmt::Debug;

use identity::Identity;
use proptest::prelude::*;

/// Edge-heavy integer generator: the boundary values first, then the full
/// range. Laws that only hold on a capability tend to break at the edges.
pub fn arb_int() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(i64::MIN),
        Just(-10_000),
        Just(-1),
        Just(0),
        Just(1),
        Just(10_000),
        Just(i64::MAX),
        any::<i64>(),
    ]
}

/// Wrap any payload strategy in the container.
pub fn arb_identity<T: Debug>(
    inner: impl Strategy<Value = T>,
) -> impl Strategy<Value = Identity<T>> {
    inner.prop_map(Identity)
}
