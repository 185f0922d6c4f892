//! Storage strategies for `Optional`.
//!
//! Which strategy a type gets is decided at compile time by its `Contained` impl, so every
//! `Optional<T>` is monomorphized against exactly one of these; there is no runtime dispatch.

mod raw;
use self::raw::RawSlot;

mod trivial;
pub use self::trivial::TrivialSlot;

mod owning;
pub use self::owning::OwningSlot;

mod niche;
pub use self::niche::{Niche, NicheSlot};

mod private {
    pub trait Sealed {}
}

/// A place that holds zero or one `T`.
///
/// Sealed; implemented only by `TrivialSlot`, `OwningSlot` and `NicheSlot`.
pub trait Slot<T> : private::Sealed + Sized {
    /// `true` if discarding the slot never runs a destructor of `T`.
    const TRIVIAL: bool;

    fn empty() -> Self;

    fn new(value: T) -> Self;

    fn is_occupied(&self) -> bool;

    fn get(&self) -> Option<&T>;

    fn get_mut(&mut self) -> Option<&mut T>;

    /// # Safety
    ///
    /// The slot must be occupied.
    unsafe fn get_unchecked(&self) -> &T;

    /// # Safety
    ///
    /// The slot must be occupied.
    unsafe fn get_unchecked_mut(&mut self) -> &mut T;

    /// Destroys the value, if any. Idempotent.
    fn reset(&mut self);

    /// Moves the value out, leaving the slot empty.
    fn take(&mut self) -> Option<T>;

    /// Resets the slot, then writes a new value into it.
    fn insert(&mut self, value: T) -> &mut T;
}
