use std::fmt;

use crate::semigroup::Semigroup;
use crate::show::{Show, Shown};
use crate::typeclass::{
    Applicative, Apply, Chain, ChainRec, Comonad, Extend, Foldable, Functor, PartiallyApplied,
    Step, Traversable, TypeRep,
};

/// The simplest container type: a value of type `Identity<A>` always
/// contains exactly one value, of type `A`.
///
/// `Identity` does nothing to the value it wraps, which is the point: it is
/// the degenerate instance of every algebraic capability this crate defines,
/// useful for exercising generic code written against those capabilities
/// without any structure getting in the way.
///
/// Which comparison/combination capabilities an `Identity` has follows the
/// payload. `Identity<T>` is `PartialEq` iff `T` is, `PartialOrd` iff `T` is
/// (so an ordered payload is always also comparable for equality), and
/// [`Semigroup`] iff `T` is, independently of the other two. `Clone`,
/// `Copy`, `Eq`, `Ord`, `Hash`, and [`Show`] follow the payload the same
/// way. For payloads whose capabilities are only known at runtime, see
/// [`crate::dynamic`].
///
/// ```rust
/// use identity::Identity;
///
/// assert_eq!(Identity(vec![1, 2, 3]), Identity(vec![1, 2, 3]));
/// assert_ne!(Identity(vec![1, 2, 3]), Identity(vec![3, 2, 1]));
/// assert!(Identity(1) <= Identity(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<T>(pub T);

impl<T> Identity<T> {
    /// The unit operation; equivalent to the tuple constructor.
    ///
    /// ```rust
    /// use identity::Identity;
    ///
    /// assert_eq!(Identity::of(42), Identity(42));
    /// ```
    pub fn of(value: T) -> Self {
        Identity(value)
    }

    /// Apply `f` to the wrapped value and wrap the result.
    ///
    /// ```rust
    /// use identity::Identity;
    ///
    /// assert_eq!(Identity(64.0_f64).map(f64::sqrt), Identity(8.0));
    /// ```
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Identity<U> {
        Identity(f(self.0))
    }

    /// Apply the function wrapped in `ff` to the value wrapped in `self`.
    ///
    /// ```rust
    /// use identity::Identity;
    ///
    /// assert_eq!(Identity(64.0_f64).ap(Identity(f64::sqrt)), Identity(8.0));
    /// ```
    pub fn ap<U, F: FnOnce(T) -> U>(self, ff: Identity<F>) -> Identity<U> {
        Identity((ff.0)(self.0))
    }

    /// `Identity(x).chain(f)` is `f(x)`.
    ///
    /// ```rust
    /// use identity::Identity;
    ///
    /// assert_eq!(Identity(99).chain(|n| Identity(n + 1)), Identity(100));
    /// ```
    pub fn chain<U>(self, f: impl FnOnce(T) -> Identity<U>) -> Identity<U> {
        f(self.0)
    }

    /// Trampolined recursive chaining: drives `f` from `seed` until it
    /// produces [`Step::Done`].
    ///
    /// Implemented as an explicit loop over the [`Step`] marker, so it is
    /// safe for an unbounded number of iterations. A step function that
    /// never settles loops forever.
    ///
    /// ```rust
    /// use identity::{Identity, Step};
    ///
    /// let step = |x: i64| Identity(if x >= 0 { Step::Done(x * x) } else { Step::Next(x + 1) });
    /// assert_eq!(Identity::chain_rec(step, 8), Identity(64));
    /// assert_eq!(Identity::chain_rec(step, -8), Identity(0));
    /// ```
    pub fn chain_rec<A>(mut f: impl FnMut(A) -> Identity<Step<A, T>>, seed: A) -> Identity<T> {
        let mut step = Step::Next(seed);
        loop {
            match step {
                Step::Next(a) => step = f(a).0,
                Step::Done(b) => return Identity(b),
            }
        }
    }

    /// `Identity(y).reduce(x, f)` is `f(x, y)`.
    ///
    /// ```rust
    /// use identity::Identity;
    ///
    /// let folded = Identity(vec![4, 5, 6]).reduce(vec![1, 2, 3], |mut acc, mut xs| {
    ///     acc.append(&mut xs);
    ///     acc
    /// });
    /// assert_eq!(folded, vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn reduce<A>(self, init: A, f: impl FnOnce(A, T) -> A) -> A {
        f(init, self.0)
    }

    /// Distribute an effectful computation over the container:
    /// `Identity(x).traverse::<F, _, _>(f)` is `F::map(f(x), Identity)`.
    ///
    /// The target applicative is chosen with a turbofish on its
    /// partially-applied token.
    ///
    /// ```rust
    /// use identity::{Identity, PartiallyApplied};
    ///
    /// let fanned = Identity(100).traverse::<Vec<PartiallyApplied>, _, _>(|x| vec![x + 1, x + 2, x + 3]);
    /// assert_eq!(fanned, vec![Identity(101), Identity(102), Identity(103)]);
    ///
    /// let absent = Identity(-1_i64).traverse::<Option<PartiallyApplied>, _, _>(|x| (x >= 0).then_some(x));
    /// assert_eq!(absent, None);
    /// ```
    pub fn traverse<F, U, G>(self, f: G) -> F::Of<Identity<U>>
    where
        F: Applicative,
        G: FnOnce(T) -> F::Of<U>,
    {
        F::map(f(self.0), Identity)
    }

    /// Pass the *whole* container (not just its value) to `f`, and wrap the
    /// result.
    ///
    /// ```rust
    /// use identity::Identity;
    ///
    /// assert_eq!(Identity(99).extend(|w| w.extract() + 1), Identity(100));
    /// ```
    pub fn extend<U>(self, f: impl FnOnce(Identity<T>) -> U) -> Identity<U> {
        Identity(f(self))
    }

    /// Unwrap: `Identity(x).extract()` is `x`.
    ///
    /// ```rust
    /// use identity::Identity;
    ///
    /// assert_eq!(Identity(42).extract(), 42);
    /// ```
    pub fn extract(self) -> T {
        self.0
    }

    /// Alias for [`Identity::extract`], under the name Rust newtypes
    /// usually spell it.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Borrow the wrapped value.
    pub fn get(&self) -> &T {
        &self.0
    }

    /// An `Identity` borrowing this one's payload.
    pub fn as_ref(&self) -> Identity<&T> {
        Identity(&self.0)
    }
}

impl<T: Semigroup> Semigroup for Identity<T> {
    /// `Identity(x).combine(Identity(y))` is `Identity(x.combine(y))`.
    ///
    /// ```rust
    /// use identity::{Identity, Semigroup};
    ///
    /// let combined = Identity(vec![1, 2, 3]).combine(Identity(vec![4, 5, 6]));
    /// assert_eq!(combined, Identity(vec![1, 2, 3, 4, 5, 6]));
    /// ```
    ///
    /// The capability is gated on the payload; numbers do not combine:
    ///
    /// ```rust,compile_fail
    /// use identity::{Identity, Semigroup};
    ///
    /// let _ = Identity(0).combine(Identity(1));
    /// ```
    fn combine(self, other: Self) -> Self {
        Identity(self.0.combine(other.0))
    }
}

impl<T: Show> Show for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity ({})", Shown(&self.0))
    }
}

/// Renders as `Identity (<payload>)`, recursing through the payload's own
/// [`Show`] rendering; nested containers produce nested parentheses.
///
/// ```rust
/// use identity::Identity;
///
/// assert_eq!(Identity(vec!["foo", "bar", "baz"]).to_string(), r#"Identity (["foo", "bar", "baz"])"#);
/// assert_eq!(Identity(Identity(Identity(-0.0_f64))).to_string(), "Identity (Identity (Identity (-0.0)))");
/// ```
impl<T: Show> fmt::Display for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Show::fmt(self, f)
    }
}

impl TypeRep for Identity<PartiallyApplied> {
    type Of<X> = Identity<X>;
}

impl Functor for Identity<PartiallyApplied> {
    fn map<A, B>(fa: Identity<A>, mut f: impl FnMut(A) -> B) -> Identity<B> {
        fa.map(&mut f)
    }
}

impl Apply for Identity<PartiallyApplied> {
    fn ap<A: Clone, B, F: FnMut(A) -> B>(ff: Identity<F>, fa: Identity<A>) -> Identity<B> {
        let Identity(mut f) = ff;
        Identity(f(fa.0))
    }
}

impl Applicative for Identity<PartiallyApplied> {
    fn of<A>(a: A) -> Identity<A> {
        Identity(a)
    }
}

impl Chain for Identity<PartiallyApplied> {
    fn chain<A, B>(fa: Identity<A>, mut f: impl FnMut(A) -> Identity<B>) -> Identity<B> {
        f(fa.0)
    }
}

impl ChainRec for Identity<PartiallyApplied> {
    fn chain_rec<A, B>(f: impl FnMut(A) -> Identity<Step<A, B>>, seed: A) -> Identity<B> {
        Identity::chain_rec(f, seed)
    }
}

impl Foldable for Identity<PartiallyApplied> {
    fn reduce<A, B>(fa: Identity<A>, init: B, mut f: impl FnMut(B, A) -> B) -> B {
        f(init, fa.0)
    }
}

impl Traversable for Identity<PartiallyApplied> {
    fn traverse<F, A, B, G>(fa: Identity<A>, mut f: G) -> F::Of<Identity<B>>
    where
        F: Applicative,
        G: FnMut(A) -> F::Of<B>,
    {
        F::map(f(fa.0), Identity)
    }
}

impl Extend for Identity<PartiallyApplied> {
    fn extend<A, B>(wa: Identity<A>, mut f: impl FnMut(Identity<A>) -> B) -> Identity<B> {
        Identity(f(wa))
    }
}

impl Comonad for Identity<PartiallyApplied> {
    fn extract<A>(wa: Identity<A>) -> A {
        wa.0
    }
}
