//! Sealed helper traits naming the payload of nested values.
//!
//! They let the future extensions offer `flatten`, `unzip` and `transpose`
//! with the inner types fixed by associated types instead of inference.

use crate::types::{Fallible, Maybe};

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for crate::types::Maybe<T> {}
    impl<T, E> Sealed for crate::types::Fallible<T, E> {}
    impl<A, B> Sealed for (A, B) {}
}

/// Implemented by `Maybe<U>`.
pub trait MaybeShape: sealed::Sealed {
    type Inner;

    fn into_maybe(self) -> Maybe<Self::Inner>;
}

impl<U> MaybeShape for Maybe<U> {
    type Inner = U;

    #[inline]
    fn into_maybe(self) -> Maybe<U> {
        self
    }
}

/// Implemented by `Fallible<U, G>`.
pub trait FallibleShape: sealed::Sealed {
    type Value;
    type Error;

    fn into_fallible(self) -> Fallible<Self::Value, Self::Error>;
}

impl<U, G> FallibleShape for Fallible<U, G> {
    type Value = U;
    type Error = G;

    #[inline]
    fn into_fallible(self) -> Fallible<U, G> {
        self
    }
}

/// Implemented by two-element tuples.
pub trait PairShape: sealed::Sealed {
    type First;
    type Second;

    fn into_pair(self) -> (Self::First, Self::Second);
}

impl<A, B> PairShape for (A, B) {
    type First = A;
    type Second = B;

    #[inline]
    fn into_pair(self) -> (A, B) {
        self
    }
}
