//! Flag-free storage for types with a zero niche.

use core::fmt;
use core::mem;
use core::num;
use core::ptr::NonNull;

use static_assertions::assert_eq_size;

use super::*;

/// Asserts that the bit representation of a value of this type is never all zeros, and that an
/// `Option<Self>` is the same size as `Self`.
///
/// # Safety
///
/// This is a less general concept than the niche-filling optimizations that Rust does! For
/// example `size_of::<Option<bool>>() == 1`, but `Niche` can't be implemented as Rust uses `2`
/// as `None`. Implementors should guard their impl with `assert_eq_size!(T, Option<T>)`.
pub unsafe trait Niche {}

macro_rules! niche_impls {
    ( $( $t:ty, )* ) => {
        $(
            assert_eq_size!($t, Option<$t>);
            unsafe impl Niche for $t {}
        )*
    }
}

niche_impls! {
    num::NonZeroU8, num::NonZeroU16, num::NonZeroU32, num::NonZeroU64, num::NonZeroU128,
    num::NonZeroUsize,
    num::NonZeroI8, num::NonZeroI16, num::NonZeroI32, num::NonZeroI64, num::NonZeroI128,
    num::NonZeroIsize,
}

assert_eq_size!(Box<()>, Option<Box<()>>);
assert_eq_size!(&(), Option<&()>);
unsafe impl<T: ?Sized> Niche for Box<T> {}
unsafe impl<T: ?Sized> Niche for &'_ T {}
unsafe impl<T: ?Sized> Niche for &'_ mut T {}
unsafe impl<T: ?Sized> Niche for NonNull<T> {}

/// Storage that keeps the empty state in `T`'s niche.
///
/// A `NicheSlot<T>` is exactly as big as a `T`: no separate occupancy flag exists.
#[repr(transparent)]
pub struct NicheSlot<T: Niche> {
    value: Option<T>,
}

impl<T: Niche + Clone> Clone for NicheSlot<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { value: self.value.clone() }
    }

    #[inline]
    fn clone_from(&mut self, src: &Self) {
        // Option::clone_from assigns value-to-value when both sides are Some.
        self.value.clone_from(&src.value)
    }
}
impl<T: Niche + Copy> Copy for NicheSlot<T> {}

impl<T: Niche> fmt::Debug for NicheSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(core::any::type_name::<Self>())
            .field("occupied", &self.value.is_some())
            .finish()
    }
}

impl<T: Niche> private::Sealed for NicheSlot<T> {}

impl<T: Niche> Slot<T> for NicheSlot<T> {
    const TRIVIAL: bool = !mem::needs_drop::<T>();

    #[inline(always)]
    fn empty() -> Self {
        Self { value: None }
    }

    #[inline(always)]
    fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    #[inline(always)]
    fn is_occupied(&self) -> bool {
        self.value.is_some()
    }

    #[inline(always)]
    fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline(always)]
    fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.value.is_some());
        match &self.value {
            Some(value) => value,
            None => core::hint::unreachable_unchecked(),
        }
    }

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.value.is_some());
        match &mut self.value {
            Some(value) => value,
            None => core::hint::unreachable_unchecked(),
        }
    }

    #[inline]
    fn reset(&mut self) {
        // Swap out before dropping so a panicking destructor leaves us empty.
        drop(self.value.take())
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline]
    fn insert(&mut self, value: T) -> &mut T {
        self.reset();
        self.value.get_or_insert(value)
    }
}
