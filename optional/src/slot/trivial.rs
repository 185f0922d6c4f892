use core::fmt;

use super::*;

/// Storage for types that can be copied and destroyed as plain bytes.
///
/// `TrivialSlot` has no `Drop` impl and is `Copy`, so an `Optional` built on it costs exactly a
/// `T` and a flag to create, copy and discard.
#[repr(transparent)]
pub struct TrivialSlot<T: Copy> {
    raw: RawSlot<T>,
}

impl<T: Copy> Clone for TrivialSlot<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Copy> Copy for TrivialSlot<T> {}

impl<T: Copy> fmt::Debug for TrivialSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

impl<T: Copy> private::Sealed for TrivialSlot<T> {}

impl<T: Copy> Slot<T> for TrivialSlot<T> {
    const TRIVIAL: bool = true;

    #[inline(always)]
    fn empty() -> Self {
        Self { raw: RawSlot::empty() }
    }

    #[inline(always)]
    fn new(value: T) -> Self {
        Self { raw: RawSlot::new(value) }
    }

    #[inline(always)]
    fn is_occupied(&self) -> bool {
        self.raw.is_occupied()
    }

    #[inline(always)]
    fn get(&self) -> Option<&T> {
        self.raw.get()
    }

    #[inline(always)]
    fn get_mut(&mut self) -> Option<&mut T> {
        self.raw.get_mut()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self) -> &T {
        self.raw.assume_init_ref()
    }

    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        self.raw.assume_init_mut()
    }

    #[inline(always)]
    fn reset(&mut self) {
        self.raw.reset()
    }

    #[inline(always)]
    fn take(&mut self) -> Option<T> {
        self.raw.take()
    }

    #[inline(always)]
    fn insert(&mut self, value: T) -> &mut T {
        // Copy types have nothing to drop; overwriting is always sound.
        *self = Self::new(value);
        unsafe { self.raw.assume_init_mut() }
    }
}
