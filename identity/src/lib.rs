//! `Identity<A>` is the simplest container type: it always holds exactly one
//! value, of type `A`, and does nothing to it. It exists as the degenerate
//! instance of the algebraic capability traits defined here, against which
//! generic code written over those traits can be exercised.

mod identity;
mod semigroup;
mod show;
mod typeclass;

pub mod dynamic;

pub use crate::identity::Identity;
pub use crate::semigroup::Semigroup;
pub use crate::show::{Show, Shown};
pub use crate::typeclass::{
    Applicative, Apply, Chain, ChainRec, Comonad, Extend, Foldable, Functor, Monad,
    PartiallyApplied, Step, Traversable, TypeRep,
};
