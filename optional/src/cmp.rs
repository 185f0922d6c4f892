//! Comparisons, with empty ordered before any value.
//!
//! Each operator is lifted from the same operator on `T`, so e.g. `a < b` on two occupied
//! optionals calls `T::lt`, never `T::partial_cmp`. An empty side is never dereferenced.

use core::cmp::Ordering;

use super::*;

impl<T: Contained, U: Contained> PartialEq<Optional<U>> for Optional<T>
where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &Optional<U>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }

    #[inline]
    fn ne(&self, other: &Optional<U>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a != b,
            (None, None) => false,
            _ => true,
        }
    }
}

impl<T: Contained + Eq> Eq for Optional<T> {}

impl<T: Contained, U: Contained> PartialOrd<Optional<U>> for Optional<T>
where T: PartialOrd<U>
{
    #[inline]
    fn partial_cmp(&self, other: &Optional<U>) -> Option<Ordering> {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }

    #[inline]
    fn lt(&self, other: &Optional<U>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a < b,
            (None, Some(_)) => true,
            (_, None) => false,
        }
    }

    #[inline]
    fn le(&self, other: &Optional<U>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a <= b,
            (None, _) => true,
            (Some(_), None) => false,
        }
    }

    #[inline]
    fn gt(&self, other: &Optional<U>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a > b,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    #[inline]
    fn ge(&self, other: &Optional<U>) -> bool {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a >= b,
            (_, None) => true,
            (None, Some(_)) => false,
        }
    }
}

impl<T: Contained + Ord> Ord for Optional<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.get(), other.get()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: Contained> PartialEq<Nullopt> for Optional<T> {
    #[inline]
    fn eq(&self, _: &Nullopt) -> bool {
        !self.is_occupied()
    }
}

impl<T: Contained> PartialEq<Optional<T>> for Nullopt {
    #[inline]
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.is_occupied()
    }
}
