//! Per-type choice of storage strategy.

use core::cell::{Cell, RefCell};
use core::marker::PhantomData;
use core::num;
use core::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

use crate::slot::{Slot, TrivialSlot, OwningSlot, NicheSlot};

/// A type that can live inside an `Optional`.
///
/// The associated `Slot` picks how the value is stored, and with it whether `Optional<Self>` is
/// `Copy`, whether it has drop glue, and how big it is:
///
/// * `TrivialSlot<Self>` for `Copy` types: the optional is `Copy` and never runs any code on
///   drop.
/// * `NicheSlot<Self>` for types with a zero niche: the optional is the same size as `Self`.
/// * `OwningSlot<Self>` for everything else: the value is dropped with the optional, and cloned
///   through `Self::clone` and `Self::clone_from`.
///
/// Implement it with the `contained!` macro, or `#[derive(Contained)]`.
///
/// Arrays and tuples always use `OwningSlot`, whatever their elements, so `Optional<[u8; 4]>`
/// and `Optional<(i32, i32)>` are `Clone` but never `Copy`. To get a `Copy` optional, wrap the
/// value in a `Copy` newtype declared trivial:
///
/// ```
/// use optional::{contained, Optional};
///
/// #[derive(Clone, Copy)]
/// struct Rgba([u8; 4]);
/// contained!(trivial: Rgba);
///
/// let a = Optional::new(Rgba([1, 2, 3, 4]));
/// let b = a;
/// assert_eq!(a.0, b.0);
/// ```
pub trait Contained : Sized {
    type Slot : Slot<Self>;
}

/// Implements `Contained` for non-generic types.
///
/// ```
/// use optional::{contained, Optional};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// #[derive(Clone, Debug)]
/// struct Name(String);
///
/// contained!(trivial: Point);
/// contained!(owning: Name);
///
/// let a = Optional::new(Point { x: 1, y: 2 });
/// let b = a;
/// assert_eq!(a, b);
/// ```
#[macro_export]
macro_rules! contained {
    (trivial: $( $t:ty ),+ $(,)?) => {
        $(
            impl $crate::Contained for $t {
                type Slot = $crate::slot::TrivialSlot<$t>;
            }
        )+
    };
    (owning: $( $t:ty ),+ $(,)?) => {
        $(
            impl $crate::Contained for $t {
                type Slot = $crate::slot::OwningSlot<$t>;
            }
        )+
    };
    (niche: $( $t:ty ),+ $(,)?) => {
        $(
            impl $crate::Contained for $t {
                type Slot = $crate::slot::NicheSlot<$t>;
            }
        )+
    };
}

contained! {
    trivial:
        (), bool, char,
        u8, u16, u32, u64, u128, usize,
        i8, i16, i32, i64, i128, isize,
        f32, f64,
}

contained! {
    niche:
        num::NonZeroU8, num::NonZeroU16, num::NonZeroU32, num::NonZeroU64, num::NonZeroU128,
        num::NonZeroUsize,
        num::NonZeroI8, num::NonZeroI16, num::NonZeroI32, num::NonZeroI64, num::NonZeroI128,
        num::NonZeroIsize,
}

contained!(owning: String);

impl<T: ?Sized> Contained for PhantomData<T> {
    type Slot = TrivialSlot<Self>;
}

impl<T: ?Sized> Contained for *const T {
    type Slot = TrivialSlot<Self>;
}

impl<T: ?Sized> Contained for *mut T {
    type Slot = TrivialSlot<Self>;
}

impl<T: ?Sized> Contained for &'_ T {
    type Slot = NicheSlot<Self>;
}

impl<T: ?Sized> Contained for &'_ mut T {
    type Slot = NicheSlot<Self>;
}

impl<T: ?Sized> Contained for Box<T> {
    type Slot = NicheSlot<Self>;
}

impl<T: ?Sized> Contained for NonNull<T> {
    type Slot = NicheSlot<Self>;
}

macro_rules! owning_impls {
    ( $( $t:ident, )* ) => {
        $(
            impl<T> Contained for $t<T> {
                type Slot = OwningSlot<Self>;
            }
        )*
    }
}

owning_impls! {
    Vec, Option, Cell, RefCell,
}

impl<T: ?Sized> Contained for Rc<T> {
    type Slot = OwningSlot<Self>;
}

impl<T: ?Sized> Contained for Arc<T> {
    type Slot = OwningSlot<Self>;
}

impl<T, const N: usize> Contained for [T; N] {
    type Slot = OwningSlot<Self>;
}

macro_rules! tuple_impls {
    ( $( ( $( $t:ident ),+ ), )* ) => {
        $(
            impl<$( $t ),+> Contained for ( $( $t, )+ ) {
                type Slot = OwningSlot<Self>;
            }
        )*
    }
}

tuple_impls! {
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::mem;

    fn is_trivial<T: Contained>() -> bool {
        <T::Slot as Slot<T>>::TRIVIAL
    }

    #[test]
    fn categories() {
        assert!(is_trivial::<u32>());
        assert!(is_trivial::<*const str>());
        assert!(is_trivial::<&str>());
        assert!(is_trivial::<[u8; 4]>());
        assert!(is_trivial::<(u8, char)>());

        assert!(!is_trivial::<String>());
        assert!(!is_trivial::<Box<u8>>());
        assert!(!is_trivial::<Vec<u8>>());
        assert!(!is_trivial::<(u8, String)>());
    }

    #[test]
    fn slot_sizes() {
        assert_eq!(mem::size_of::<<u32 as Contained>::Slot>(), 8);
        assert_eq!(mem::size_of::<<num::NonZeroU64 as Contained>::Slot>(), 8);
        assert_eq!(mem::size_of::<<&[u8] as Contained>::Slot>(), mem::size_of::<&[u8]>());
    }
}
