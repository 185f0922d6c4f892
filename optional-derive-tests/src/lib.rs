use std::marker::PhantomData;

use optional_derive::Contained;

#[derive(Contained, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[contained(trivial)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Contained, Debug, Clone, PartialEq)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Contained, Debug, Clone, Copy, PartialEq)]
#[contained(trivial)]
pub struct Tagged<T> {
    pub value: T,
    marker: PhantomData<fn() -> T>,
}

impl<T> Tagged<T> {
    pub fn new(value: T) -> Self {
        Self { value, marker: PhantomData }
    }
}

#[derive(Contained, Debug, Clone, PartialEq)]
#[contained(owning)]
pub enum Shape {
    Empty,
    Circle { radius: u32 },
    Label(String),
}

#[derive(Contained, Debug, Clone, Copy, PartialEq)]
#[contained(trivial)]
pub struct Pair(pub [u8; 2], pub (i16, i16));

#[derive(Contained, Debug, PartialEq)]
pub struct Handle(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    use core::mem;

    use optional::{Optional, NULLOPT};
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(Optional<Point>: Copy);
    assert_impl_all!(Optional<Tagged<u8>>: Copy);
    assert_not_impl_any!(Optional<Name>: Copy);
    assert_not_impl_any!(Optional<Shape>: Copy);
    assert_impl_all!(Optional<Shape>: Clone);
    assert_impl_all!(Optional<Pair>: Copy);
    assert_not_impl_any!(Optional<Handle>: Clone, Copy);

    #[test]
    fn trivial_struct() {
        let a = Optional::new(Point { x: 1, y: 2 });
        let mut b = a;
        b.x = 10;

        assert_eq!(a.x, 1);
        assert_eq!(b.x, 10);
        assert!(a < b);
        assert!(!mem::needs_drop::<Optional<Point>>());
    }

    #[test]
    fn owning_struct() {
        let name = Name { first: "Ada".into(), last: "Lovelace".into() };
        let a = Optional::new(name.clone());
        let mut b = Optional::<Name>::none();
        b.clone_from(&a);

        assert_eq!(a, b);
        assert_eq!(b.get(), Some(&name));

        b.reset();
        assert!(b == NULLOPT);
        assert!(a.is_occupied());
    }

    #[test]
    fn generic_trivial() {
        let a = Optional::new(Tagged::new(3u16));
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.value, 3);
    }

    #[test]
    fn trivial_wrapper_over_array_and_tuple() {
        let a = Optional::new(Pair([1, 2], (-3, 4)));
        let mut b = a;
        b.0[0] = 9;

        assert_eq!(a.0, [1, 2]);
        assert_eq!(b.0, [9, 2]);
        assert!(Optional::<Pair>::TRIVIAL);
    }

    #[test]
    fn non_clone_moves_only() {
        let mut a = Optional::new(Handle(7));
        let b = a.take();

        assert!(a.is_empty());
        assert_eq!(b.get(), Some(&Handle(7)));
        assert!(Optional::<Handle>::TRIVIAL);
    }

    #[test]
    fn owning_enum() {
        let mut shape = Optional::new(Shape::Label("x".into()));
        assert_eq!(*shape, Shape::Label("x".into()));

        shape.emplace(Shape::Circle { radius: 2 });
        assert_eq!(*shape, Shape::Circle { radius: 2 });

        let taken = shape.take();
        assert_eq!(taken.get(), Some(&Shape::Circle { radius: 2 }));
        assert!(!shape.is_occupied());

        shape.emplace(Shape::Empty);
        assert_eq!(format!("{:?}", shape), "Occupied(Empty)");
    }
}
