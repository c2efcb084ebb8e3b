//! The algebraic capability traits the container dispatches through, plus
//! reference instances for `Option`, `Vec`, and `Result`.

/// An uninhabited type used to name instances for partially-applied types.
///
/// Rust does not allow implementing a trait for a partially applied type:
/// we can implement a trait for `Option<usize>` but not for just `Option`.
/// A unary constructor is therefore represented by a marker token, eg
/// `Option<PartiallyApplied>`, whose [`TypeRep::Of`] associated type
/// re-applies the constructor to any argument.
#[derive(Clone, Copy, Debug)]
pub enum PartiallyApplied {}

/// A type representative for a unary type constructor.
///
/// `Self` is the token standing in for the constructor (see
/// [`PartiallyApplied`]); `Self::Of<X>` is the constructor applied to `X`.
pub trait TypeRep {
    /// The represented constructor, applied to `X`.
    type Of<X>;
}

/// Mapping a function over the contained value(s).
///
/// Instances must preserve identity (`map(fa, |x| x)` changes nothing) and
/// composition (`map(map(fa, f), g)` is `map(fa, |x| g(f(x)))`).
///
/// ```rust
/// use identity::{Functor, PartiallyApplied};
///
/// let doubled = <Option<PartiallyApplied> as Functor>::map(Some(21), |n| n * 2);
/// assert_eq!(doubled, Some(42));
/// ```
pub trait Functor: TypeRep {
    /// Apply some function `f` to each element inside the structure.
    fn map<A, B>(fa: Self::Of<A>, f: impl FnMut(A) -> B) -> Self::Of<B>;
}

/// Applying a wrapped function to a wrapped argument.
pub trait Apply: Functor {
    /// Apply every function in `ff` to the argument(s) in `fa`.
    ///
    /// The `A: Clone` bound is not part of the lawful signature; it is
    /// required so that non-linear instances (`Vec`) can hand the same
    /// argument to more than one wrapped function.
    fn ap<A: Clone, B, F: FnMut(A) -> B>(ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>;
}

/// [`Apply`] plus a unit operation lifting a bare value into the structure.
pub trait Applicative: Apply {
    fn of<A>(a: A) -> Self::Of<A>;
}

/// Sequencing computations that each produce a wrapped result.
pub trait Chain: Apply {
    fn chain<A, B>(fa: Self::Of<A>, f: impl FnMut(A) -> Self::Of<B>) -> Self::Of<B>;
}

/// Marker for structures that are both [`Applicative`] and [`Chain`].
pub trait Monad: Applicative + Chain {}

impl<M: Applicative + Chain> Monad for M {}

/// Continuation marker for [`ChainRec`]: keep iterating or stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<N, D> {
    Next(N),
    Done(D),
}

/// Tail-recursive chaining.
///
/// Instances must be implemented as an explicit loop over [`Step`], never as
/// nested recursive calls: a conforming `chain_rec` is safe for an unbounded
/// number of iterations. A step function that never produces [`Step::Done`]
/// loops forever; that is a caller contract violation and is not detected.
pub trait ChainRec: Chain {
    fn chain_rec<A, B>(f: impl FnMut(A) -> Self::Of<Step<A, B>>, seed: A) -> Self::Of<B>;
}

/// Collapsing the structure into a single accumulated value.
pub trait Foldable: TypeRep {
    fn reduce<A, B>(fa: Self::Of<A>, init: B, f: impl FnMut(B, A) -> B) -> B;
}

/// Distributing an effectful computation over the structure.
pub trait Traversable: Functor + Foldable {
    /// Run `f` over each element, collecting the results inside the
    /// applicative `F`.
    ///
    /// The callback is a named generic (rather than `impl Trait`) so call
    /// sites can pin `F` with a turbofish, which is how the target
    /// applicative is usually chosen.
    fn traverse<F, A, B, G>(fa: Self::Of<A>, f: G) -> F::Of<Self::Of<B>>
    where
        F: Applicative,
        G: FnMut(A) -> F::Of<B>;
}

/// The dual of [`Chain`]: the callback sees the whole structure, not just
/// the value inside it.
pub trait Extend: Functor {
    fn extend<A, B>(wa: Self::Of<A>, f: impl FnMut(Self::Of<A>) -> B) -> Self::Of<B>;
}

/// [`Extend`] plus extraction of the contained value.
pub trait Comonad: Extend {
    fn extract<A>(wa: Self::Of<A>) -> A;
}

impl TypeRep for Option<PartiallyApplied> {
    type Of<X> = Option<X>;
}

impl Functor for Option<PartiallyApplied> {
    fn map<A, B>(fa: Option<A>, f: impl FnMut(A) -> B) -> Option<B> {
        fa.map(f)
    }
}

impl Apply for Option<PartiallyApplied> {
    fn ap<A: Clone, B, F: FnMut(A) -> B>(ff: Option<F>, fa: Option<A>) -> Option<B> {
        match (ff, fa) {
            (Some(mut f), Some(a)) => Some(f(a)),
            _ => None,
        }
    }
}

impl Applicative for Option<PartiallyApplied> {
    fn of<A>(a: A) -> Option<A> {
        Some(a)
    }
}

impl Chain for Option<PartiallyApplied> {
    fn chain<A, B>(fa: Option<A>, f: impl FnMut(A) -> Option<B>) -> Option<B> {
        fa.and_then(f)
    }
}

impl ChainRec for Option<PartiallyApplied> {
    fn chain_rec<A, B>(mut f: impl FnMut(A) -> Option<Step<A, B>>, seed: A) -> Option<B> {
        let mut step = Step::Next(seed);
        loop {
            match step {
                Step::Next(a) => step = f(a)?,
                Step::Done(b) => return Some(b),
            }
        }
    }
}

impl TypeRep for Vec<PartiallyApplied> {
    type Of<X> = Vec<X>;
}

impl Functor for Vec<PartiallyApplied> {
    fn map<A, B>(fa: Vec<A>, f: impl FnMut(A) -> B) -> Vec<B> {
        fa.into_iter().map(f).collect()
    }
}

impl Apply for Vec<PartiallyApplied> {
    fn ap<A: Clone, B, F: FnMut(A) -> B>(ff: Vec<F>, fa: Vec<A>) -> Vec<B> {
        let mut out = Vec::with_capacity(ff.len() * fa.len());
        for mut f in ff {
            for a in &fa {
                out.push(f(a.clone()));
            }
        }
        out
    }
}

impl Applicative for Vec<PartiallyApplied> {
    fn of<A>(a: A) -> Vec<A> {
        vec![a]
    }
}

impl Chain for Vec<PartiallyApplied> {
    fn chain<A, B>(fa: Vec<A>, f: impl FnMut(A) -> Vec<B>) -> Vec<B> {
        fa.into_iter().flat_map(f).collect()
    }
}

impl<E> TypeRep for Result<PartiallyApplied, E> {
    type Of<X> = Result<X, E>;
}

impl<E> Functor for Result<PartiallyApplied, E> {
    fn map<A, B>(fa: Result<A, E>, f: impl FnMut(A) -> B) -> Result<B, E> {
        fa.map(f)
    }
}

impl<E> Apply for Result<PartiallyApplied, E> {
    fn ap<A: Clone, B, F: FnMut(A) -> B>(ff: Result<F, E>, fa: Result<A, E>) -> Result<B, E> {
        let mut f = ff?;
        Ok(f(fa?))
    }
}

impl<E> Applicative for Result<PartiallyApplied, E> {
    fn of<A>(a: A) -> Result<A, E> {
        Ok(a)
    }
}

impl<E> Chain for Result<PartiallyApplied, E> {
    fn chain<A, B>(fa: Result<A, E>, mut f: impl FnMut(A) -> Result<B, E>) -> Result<B, E> {
        f(fa?)
    }
}

impl<E> ChainRec for Result<PartiallyApplied, E> {
    fn chain_rec<A, B>(mut f: impl FnMut(A) -> Result<Step<A, B>, E>, seed: A) -> Result<B, E> {
        let mut step = Step::Next(seed);
        loop {
            match step {
                Step::Next(a) => step = f(a)?,
                Step::Done(b) => return Ok(b),
            }
        }
    }
}
