//! Capability dispatch for payloads whose type is only known at runtime.
//!
//! The generic [`crate::Identity`] resolves capabilities at compile time
//! through trait bounds. When the payload sits behind type erasure (a
//! heterogeneous collection, a plugin boundary), that resolution has to
//! happen once at construction instead: [`DynIdentity`] probes the payload
//! type through [`Probed`] and keeps the resulting [`Witness`], a record of
//! the operations the payload actually supports, next to the boxed value.
//!
//! Two containers built from different payload types can therefore expose
//! different operation sets at runtime, which is exactly the per-instance
//! variance the probe exists to capture.

use std::any::Any;
use std::fmt;

use crate::semigroup::Semigroup;
use crate::show::Show;

type ShowFn = fn(&dyn Any) -> String;
type CmpFn = fn(&dyn Any, &dyn Any) -> bool;
type CombineFn = fn(&dyn Any, &dyn Any) -> Box<dyn Any>;

/// The capability record attached to a [`DynIdentity`] at construction.
///
/// Stringification is always present; equality, ordering, and combination
/// are optional. The constructor set enforces the probe order: ordering is
/// only obtainable via [`Witness::ord`], which installs equality alongside
/// it, while [`Witness::with_combine`] composes with any base. Holding `lte`
/// without `equals` is unrepresentable.
///
/// Every constructor must be instantiated at the payload type actually being
/// probed; the stored operations downcast to that type at call time.
#[derive(Clone, Copy)]
pub struct Witness {
    show: ShowFn,
    equals: Option<CmpFn>,
    lte: Option<CmpFn>,
    combine: Option<CombineFn>,
}

impl Witness {
    /// A payload supporting stringification only.
    pub fn showable<T: Show + 'static>() -> Self {
        Witness {
            show: show_value::<T>,
            equals: None,
            lte: None,
            combine: None,
        }
    }

    /// A payload additionally supporting decidable equality.
    pub fn setoid<T: Show + PartialEq + 'static>() -> Self {
        Witness {
            equals: Some(value_eq::<T>),
            ..Self::showable::<T>()
        }
    }

    /// A payload additionally supporting ordering. Ordering implies
    /// equality, so this installs both.
    pub fn ord<T: Show + PartialOrd + 'static>() -> Self {
        Witness {
            lte: Some(value_lte::<T>),
            ..Self::setoid::<T>()
        }
    }

    /// Add associative combination, orthogonally to the comparison
    /// capabilities.
    pub fn with_combine<T: Show + Semigroup + Clone + 'static>(self) -> Self {
        Witness {
            combine: Some(value_combine::<T>),
            ..self
        }
    }

    pub fn has_equals(&self) -> bool {
        self.equals.is_some()
    }

    pub fn has_lte(&self) -> bool {
        self.lte.is_some()
    }

    pub fn has_combine(&self) -> bool {
        self.combine.is_some()
    }
}

fn show_value<T: Show + 'static>(v: &dyn Any) -> String {
    v.downcast_ref::<T>()
        .expect("witness applied to a foreign payload")
        .show()
}

fn value_eq<T: PartialEq + 'static>(a: &dyn Any, b: &dyn Any) -> bool {
    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        // distinct runtime types are simply unequal
        _ => false,
    }
}

fn value_lte<T: PartialOrd + 'static>(a: &dyn Any, b: &dyn Any) -> bool {
    match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a <= b,
        _ => false,
    }
}

fn value_combine<T: Semigroup + Clone + 'static>(a: &dyn Any, b: &dyn Any) -> Box<dyn Any> {
    let a = a
        .downcast_ref::<T>()
        .expect("witness applied to a foreign payload");
    let b = b
        .downcast_ref::<T>()
        .expect("cannot combine payloads of different runtime types");
    Box::new(a.clone().combine(b.clone()))
}

/// The capability-probing facility: each payload type answers, once, which
/// operations it supports.
///
/// Third-party types participate by implementing this trait; dispatch is
/// plain interface polymorphism, not a registry. The provided instances
/// cover the scalar types (ordered, no combination: numbers do not combine),
/// `String` (ordered and combinable), and `Vec` (comparable and combinable).
pub trait Probed: Any {
    /// Capability probe, consulted exactly once per construction.
    fn probe() -> Witness;
}

macro_rules! probed_ord {
    ($($t:ty),* $(,)?) => {$(
        impl Probed for $t {
            fn probe() -> Witness {
                Witness::ord::<$t>()
            }
        }
    )*};
}

probed_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl Probed for String {
    fn probe() -> Witness {
        Witness::ord::<String>().with_combine::<String>()
    }
}

impl<T: Show + PartialEq + Clone + 'static> Probed for Vec<T> {
    fn probe() -> Witness {
        Witness::setoid::<Vec<T>>().with_combine::<Vec<T>>()
    }
}

impl<T: Show + PartialOrd + 'static> Probed for crate::Identity<T> {
    fn probe() -> Witness {
        Witness::ord::<crate::Identity<T>>()
    }
}

/// A type-erased single-value container with per-instance capabilities.
///
/// Construction never fails; it boxes the payload and stores the witness its
/// type probes to. The conditional operations ([`DynIdentity::equals`],
/// [`DynIdentity::lte`], [`DynIdentity::combine`]) are gated on that
/// witness and panic when invoked without the capability, the dynamic
/// equivalent of the method simply not existing. Check first with the
/// `has_*` probes when the payload's provenance is unknown.
///
/// ```rust
/// use identity::dynamic::DynIdentity;
///
/// let xs = DynIdentity::new(vec![1_i64, 2, 3]);
/// let n = DynIdentity::new(0_i64);
/// assert!(xs.has_combine());
/// assert!(!n.has_combine());
/// ```
pub struct DynIdentity {
    value: Box<dyn Any>,
    witness: Witness,
}

impl DynIdentity {
    pub fn new<T: Probed>(value: T) -> Self {
        DynIdentity {
            value: Box::new(value),
            witness: T::probe(),
        }
    }

    /// Wrap an already-erased container, deriving the outer capability set
    /// from the inner one: the nesting is itself comparable/orderable/
    /// combinable exactly when its payload is.
    ///
    /// ```rust
    /// use identity::dynamic::DynIdentity;
    ///
    /// let nested = DynIdentity::wrap(DynIdentity::wrap(DynIdentity::new(-0.0_f64)));
    /// assert_eq!(nested.show(), "Identity (Identity (Identity (-0.0)))");
    /// ```
    pub fn wrap(inner: DynIdentity) -> Self {
        let witness = Witness {
            show: nested_show,
            equals: inner.witness.equals.map(|_| nested_eq as CmpFn),
            lte: inner.witness.lte.map(|_| nested_lte as CmpFn),
            combine: inner.witness.combine.map(|_| nested_combine as CombineFn),
        };
        DynIdentity {
            value: Box::new(inner),
            witness,
        }
    }

    /// `Identity (<payload>)`, recursing through the payload's own
    /// stringification.
    pub fn show(&self) -> String {
        format!("Identity ({})", (self.witness.show)(self.value.as_ref()))
    }

    pub fn has_equals(&self) -> bool {
        self.witness.has_equals()
    }

    pub fn has_lte(&self) -> bool {
        self.witness.has_lte()
    }

    pub fn has_combine(&self) -> bool {
        self.witness.has_combine()
    }

    /// Whether the two payloads are equal. Payloads of different runtime
    /// types are never equal.
    ///
    /// # Panics
    ///
    /// Panics if this payload was not probed with the Setoid capability.
    pub fn equals(&self, other: &DynIdentity) -> bool {
        let equals = self
            .witness
            .equals
            .expect("equals invoked without the Setoid capability");
        equals(self.value.as_ref(), other.value.as_ref())
    }

    /// Whether this payload is less than or equal to the other.
    ///
    /// # Panics
    ///
    /// Panics if this payload was not probed with the Ord capability.
    pub fn lte(&self, other: &DynIdentity) -> bool {
        let lte = self
            .witness
            .lte
            .expect("lte invoked without the Ord capability");
        lte(self.value.as_ref(), other.value.as_ref())
    }

    /// Combine the two payloads and wrap the result.
    ///
    /// # Panics
    ///
    /// Panics if this payload was not probed with the Semigroup capability,
    /// or if the payloads have different runtime types.
    pub fn combine(&self, other: &DynIdentity) -> DynIdentity {
        let combine = self
            .witness
            .combine
            .expect("combine invoked without the Semigroup capability");
        DynIdentity {
            value: combine(self.value.as_ref(), other.value.as_ref()),
            witness: self.witness,
        }
    }

    /// Apply `f` to the payload and re-probe the result's capabilities.
    ///
    /// # Panics
    ///
    /// Panics if the payload is not a `T`.
    pub fn map<T: Any, U: Probed>(self, f: impl FnOnce(T) -> U) -> DynIdentity {
        match self.value.downcast::<T>() {
            Ok(v) => DynIdentity::new(f(*v)),
            Err(_) => panic!("map invoked at a different runtime type than the payload"),
        }
    }

    /// `chain` for an erased payload: `f` receives the bare value and
    /// produces the next container.
    ///
    /// # Panics
    ///
    /// Panics if the payload is not a `T`.
    pub fn chain<T: Any>(self, f: impl FnOnce(T) -> DynIdentity) -> DynIdentity {
        match self.value.downcast::<T>() {
            Ok(v) => f(*v),
            Err(_) => panic!("chain invoked at a different runtime type than the payload"),
        }
    }

    /// Recover the payload, or the untouched container if the type does not
    /// match.
    pub fn downcast<T: Any>(self) -> Result<T, DynIdentity> {
        let witness = self.witness;
        match self.value.downcast::<T>() {
            Ok(v) => Ok(*v),
            Err(value) => Err(DynIdentity { value, witness }),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Display for DynIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl fmt::Debug for DynIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

// `wrap` always boxes a DynIdentity, so these downcasts only see foreign
// types when the *other* side of a comparison is not itself a nesting.

fn as_wrapped(v: &dyn Any) -> &DynIdentity {
    v.downcast_ref::<DynIdentity>()
        .expect("witness applied to a foreign payload")
}

fn nested_show(v: &dyn Any) -> String {
    as_wrapped(v).show()
}

fn nested_eq(a: &dyn Any, b: &dyn Any) -> bool {
    match b.downcast_ref::<DynIdentity>() {
        Some(b) => as_wrapped(a).equals(b),
        None => false,
    }
}

fn nested_lte(a: &dyn Any, b: &dyn Any) -> bool {
    match b.downcast_ref::<DynIdentity>() {
        Some(b) => as_wrapped(a).lte(b),
        None => false,
    }
}

fn nested_combine(a: &dyn Any, b: &dyn Any) -> Box<dyn Any> {
    let b = b
        .downcast_ref::<DynIdentity>()
        .expect("cannot combine payloads of different runtime types");
    Box::new(as_wrapped(a).combine(b))
}
