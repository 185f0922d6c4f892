//! Inline optional values.
//!
//! An `Optional<T>` holds either one `T` or nothing, stored in place. How it is stored is picked
//! per type at compile time through `Contained`: `Copy` types get a plain value plus a flag and
//! make the optional `Copy` too, types with a zero niche get no flag at all, and everything else
//! gets storage that drops and clones the value explicitly.
//!
//! ```
//! use optional::Optional;
//!
//! let mut a: Optional<i32> = Optional::none();
//! assert!(!a.is_occupied());
//!
//! a.emplace(5);
//! assert!(a.is_occupied() && *a == 5);
//!
//! let b = a;
//! assert!(b.is_occupied() && *b == 5);
//!
//! a.reset();
//! assert!(!a.is_occupied() && b.is_occupied() && *b == 5);
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops;

pub mod slot;
use self::slot::Slot;

mod contained;
pub use self::contained::Contained;

mod error;
pub use self::error::EmptyError;

mod cmp;

#[cfg(feature = "derive")]
pub use optional_derive::Contained;

/// Marker for "no value".
///
/// `Optional::from(NULLOPT)` is an empty optional, and every optional can be compared against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nullopt;

pub const NULLOPT: Nullopt = Nullopt;

/// Either one `T`, stored inline, or nothing.
#[repr(transparent)]
pub struct Optional<T: Contained> {
    slot: T::Slot,
}

impl<T: Contained> Clone for Optional<T>
where T::Slot: Clone
{
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: self.slot.clone() }
    }

    /// Copy-assignment.
    ///
    /// If both sides are occupied the value is assigned with `T::clone_from`. Otherwise the
    /// destination's value is cloned into place, or dropped, to match the source.
    #[inline]
    fn clone_from(&mut self, src: &Self) {
        self.slot.clone_from(&src.slot)
    }
}

impl<T: Contained> Copy for Optional<T>
where T::Slot: Copy
{}

impl<T: Contained> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Contained> Optional<T> {
    /// `true` if discarding an `Optional<T>` never runs a destructor of `T`.
    ///
    /// Holds for every `Copy` type, and for any other `T` without drop glue.
    pub const TRIVIAL: bool = <T::Slot as Slot<T>>::TRIVIAL;

    /// Creates an empty optional.
    #[inline(always)]
    pub fn none() -> Self {
        Self { slot: <T::Slot as Slot<T>>::empty() }
    }

    /// Creates an optional holding `value`.
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self { slot: <T::Slot as Slot<T>>::new(value) }
    }

    /// Creates an optional whose value is produced by `f`.
    #[inline]
    pub fn new_with(f: impl FnOnce() -> T) -> Self {
        Self::new(f())
    }

    /// Returns `true` if a value is present.
    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        self.slot.is_occupied()
    }

    /// Returns `true` if no value is present.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        !self.slot.is_occupied()
    }

    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    #[inline(always)]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.get_mut()
    }

    #[inline]
    pub fn try_get(&self) -> Result<&T, EmptyError> {
        self.slot.get().ok_or(EmptyError)
    }

    #[inline]
    pub fn try_get_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.slot.get_mut().ok_or(EmptyError)
    }

    /// Gets the value without checking that there is one.
    ///
    /// # Safety
    ///
    /// The optional must be occupied. This is checked with `debug_assert!` only.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.is_occupied(), "get_unchecked() on empty Optional");
        self.slot.get_unchecked()
    }

    /// `get_unchecked` but mutable.
    ///
    /// # Safety
    ///
    /// The optional must be occupied.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_occupied(), "get_unchecked_mut() on empty Optional");
        self.slot.get_unchecked_mut()
    }

    /// Drops the current value, if any, then stores `value`.
    ///
    /// The optional is always occupied afterwards.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.slot.insert(value)
    }

    /// Drops the current value, if any, then stores the value produced by `f`.
    ///
    /// The old value is gone before `f` runs; if `f` panics the optional is left empty.
    #[inline]
    pub fn emplace_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        self.slot.reset();
        self.slot.insert(f())
    }

    /// Drops the value, if any, leaving the optional empty.
    ///
    /// Calling `reset()` on an empty optional does nothing.
    #[inline]
    pub fn reset(&mut self) {
        self.slot.reset()
    }

    /// Moves the value out into a new optional, leaving this one empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        match self.slot.take() {
            Some(value) => Self::new(value),
            None => Self::none(),
        }
    }

    /// Stores `value`, returning the previous contents.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::new(value))
    }

    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.slot.take()
    }

    #[inline]
    pub fn try_into_inner(self) -> Result<T, EmptyError> {
        self.into_option().ok_or(EmptyError)
    }

    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    #[inline]
    pub fn value_or_else(self, f: impl FnOnce() -> T) -> T {
        self.into_option().unwrap_or_else(f)
    }
}

#[cold]
#[track_caller]
fn deref_empty() -> ! {
    panic!("dereferenced an empty Optional")
}

impl<T: Contained> ops::Deref for Optional<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if the optional is empty. Use `get_unchecked()` to skip the check.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match self.slot.get() {
            Some(value) => value,
            None => deref_empty(),
        }
    }
}

impl<T: Contained> ops::DerefMut for Optional<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.slot.get_mut() {
            Some(value) => value,
            None => deref_empty(),
        }
    }
}

impl<T: Contained> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Contained> From<Nullopt> for Optional<T> {
    #[inline]
    fn from(_: Nullopt) -> Self {
        Self::none()
    }
}

impl<T: Contained> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::new(value),
            None => Self::none(),
        }
    }
}

impl<T: Contained> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T: Contained> fmt::Debug for Optional<T>
where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Occupied").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}

impl<T: Contained> Hash for Optional<T>
where T: Hash
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}
