//! Uninitialized storage for a single value, plus an occupancy flag.

use core::any::type_name;
use core::fmt;
use core::mem::{self, MaybeUninit};

/// Space for exactly one `T`, which may or may not be live.
///
/// Creating a `RawSlot` never runs any of `T`'s code. The slot itself never drops its contents;
/// that's the job of the layer above.
pub(crate) struct RawSlot<T> {
    value: MaybeUninit<T>,
    occupied: bool,
}

impl<T: Copy> Clone for RawSlot<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Copy> Copy for RawSlot<T> {}

impl<T> fmt::Debug for RawSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("occupied", &self.occupied)
            .finish()
    }
}

impl<T> RawSlot<T> {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            occupied: true,
        }
    }

    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Writes a value into an empty slot.
    ///
    /// # Safety
    ///
    /// The slot must be empty. Writing over a live value would leak it.
    #[inline(always)]
    pub unsafe fn write(&mut self, value: T) -> &mut T {
        debug_assert!(!self.occupied, "{}: write to occupied slot", type_name::<Self>());
        let r = self.value.write(value);
        self.occupied = true;
        r
    }

    /// # Safety
    ///
    /// The slot must be occupied.
    #[inline(always)]
    pub unsafe fn assume_init_ref(&self) -> &T {
        debug_assert!(self.occupied, "{}: read from empty slot", type_name::<Self>());
        &*self.value.as_ptr()
    }

    /// # Safety
    ///
    /// The slot must be occupied.
    #[inline(always)]
    pub unsafe fn assume_init_mut(&mut self) -> &mut T {
        debug_assert!(self.occupied, "{}: read from empty slot", type_name::<Self>());
        &mut *self.value.as_mut_ptr()
    }

    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        if self.occupied {
            unsafe { Some(self.assume_init_ref()) }
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            unsafe { Some(self.assume_init_mut()) }
        } else {
            None
        }
    }

    /// Moves the value out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if self.occupied {
            self.occupied = false;
            unsafe { Some(self.value.as_ptr().read()) }
        } else {
            None
        }
    }

    /// Destroys the value, if any, and marks the slot empty.
    ///
    /// When `T` has no drop glue this is just a store to the flag.
    #[inline]
    pub fn reset(&mut self) {
        if mem::needs_drop::<T>() {
            if self.occupied {
                // Cleared first: a panicking destructor must not leave us occupied.
                self.occupied = false;
                unsafe {
                    self.value.as_mut_ptr().drop_in_place();
                }
            }
        } else {
            self.occupied = false;
        }
    }
}
