use core::mem;
use core::num::NonZeroU32;
use core::ptr::NonNull;

use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any, const_assert};

use optional::{contained, Optional};

// Trivial types: a value plus a flag, Copy, no drop glue.
assert_impl_all!(Optional<u64>: Copy, Clone, Send, Sync);
assert_impl_all!(Optional<char>: Copy);
assert_impl_all!(Optional<*const u8>: Copy);
const_assert!(!mem::needs_drop::<Optional<u64>>());
const_assert!(mem::size_of::<Optional<u32>>() <= mem::size_of::<(u32, bool)>());
const_assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<u64>());

// Niche types: exactly the size of the value.
assert_eq_size!(Optional<NonZeroU32>, NonZeroU32);
assert_eq_size!(Optional<Box<[u8]>>, Box<[u8]>);
assert_eq_size!(Optional<&'static str>, &'static str);
assert_eq_size!(Optional<NonNull<u8>>, NonNull<u8>);
assert_impl_all!(Optional<&'static str>: Copy);

// Owning types: dropped with the optional, never Copy.
assert_not_impl_any!(Optional<String>: Copy);
assert_not_impl_any!(Optional<Box<u8>>: Copy);
assert_impl_all!(Optional<String>: Clone);
const_assert!(mem::needs_drop::<Optional<String>>());
const_assert!(Optional::<u64>::TRIVIAL && Optional::<NonZeroU32>::TRIVIAL);
const_assert!(!Optional::<String>::TRIVIAL);

// Copying an optional requires T: Clone.
pub struct NoClone(pub u8);
contained!(owning: NoClone);
assert_not_impl_any!(Optional<NoClone>: Clone, Copy);

// Arrays and tuples are owning even with Copy elements.
assert_not_impl_any!(Optional<[u8; 4]>: Copy);
assert_not_impl_any!(Optional<(i32, i32)>: Copy);
assert_impl_all!(Optional<[u8; 4]>: Clone);

// Thread safety is whatever T's is.
assert_not_impl_any!(Optional<std::rc::Rc<u8>>: Send, Sync);
assert_impl_all!(Optional<std::sync::Arc<u8>>: Send, Sync);

#[test]
fn ten_thousand_trivial_optionals() {
    let occupied = Optional::new(0xdead_beefu32);
    let empty = Optional::<u32>::none();

    let all: Vec<Optional<u32>> = (0 .. 10_000)
        .map(|i| if i % 2 == 0 { occupied } else { empty })
        .collect();

    let copies = all.clone();
    assert_eq!(copies.len(), 10_000);
    assert_eq!(copies.iter().filter(|o| o.is_occupied()).count(), 5_000);
    assert!(copies.iter().filter_map(|o| o.get()).all(|v| *v == 0xdead_beef));
    assert_eq!(all, copies);

    assert_eq!(mem::size_of_val(&all[..]), 10_000 * mem::size_of::<Optional<u32>>());
}

#[test]
fn copy_does_not_alias() {
    let mut a = Optional::new(1u64);
    let b = a;
    *a += 1;

    assert_eq!(*a, 2);
    assert_eq!(*b, 1);
}
