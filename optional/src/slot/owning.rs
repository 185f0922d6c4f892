use core::fmt;
use core::mem;

use super::*;

/// Storage for types that manage their own copying or destruction.
///
/// Dropping the slot drops the value, if any. Cloning goes through `T::clone`, and `clone_from`
/// handles all four occupancy combinations explicitly so a value is never assigned into, or out
/// of, storage that doesn't hold one.
pub struct OwningSlot<T> {
    raw: RawSlot<T>,
}

impl<T> Drop for OwningSlot<T> {
    #[inline]
    fn drop(&mut self) {
        self.raw.reset()
    }
}

impl<T: Clone> Clone for OwningSlot<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self.raw.get() {
            Some(value) => Self::new(value.clone()),
            None => Self::empty(),
        }
    }

    fn clone_from(&mut self, src: &Self) {
        match (self.raw.get_mut(), src.raw.get()) {
            (Some(dst), Some(src)) => dst.clone_from(src),
            (None, Some(src)) => {
                let value = src.clone();
                unsafe { self.raw.write(value); }
            },
            (Some(_), None) => self.raw.reset(),
            (None, None) => {},
        }
    }
}

impl<T> fmt::Debug for OwningSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.raw, f)
    }
}

impl<T> private::Sealed for OwningSlot<T> {}

impl<T> Slot<T> for OwningSlot<T> {
    const TRIVIAL: bool = !mem::needs_drop::<T>();

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

    #[inline]
    fn reset(&mut self) {
        self.raw.reset()
    }

    #[inline]
    fn take(&mut self) -> Option<T> {
        self.raw.take()
    }

    #[inline]
    fn insert(&mut self, value: T) -> &mut T {
        self.raw.reset();
        unsafe { self.raw.write(value) }
    }
}
