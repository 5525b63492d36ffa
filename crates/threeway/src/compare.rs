use crate::Order;
use core::cmp::Reverse;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

/// A type whose values can be classified against each other with a single comparison
///
/// Implementations must describe a strict total order:
///
/// - exactly one of [Order::Increasing], [Order::Equal], [Order::Decreasing] is returned
///   and repeated calls return the same result,
/// - `x.compare(&y)` is [Order::Increasing] iff `y.compare(&x)` is [Order::Decreasing],
///   and [Order::Equal] iff `y.compare(&x)` is [Order::Equal],
/// - the relation is transitive.
///
/// Types implementing this trait can get `PartialEq`, `Eq`, `PartialOrd` and `Ord` through
/// [impl_two_way](crate::impl_two_way). The other direction is offered by
/// [impl_three_way](crate::impl_three_way).
///
/// # Example
///
/// ```
/// use threeway::{Order, ThreeWayComparable};
///
/// struct Version {
///     major: u16,
///     minor: u16,
/// }
///
/// impl ThreeWayComparable for Version {
///     fn compare(&self, other: &Self) -> Order {
///         self.major
///             .compare(&other.major)
///             .then_with(|| self.minor.compare(&other.minor))
///     }
/// }
///
/// let old = Version { major: 1, minor: 4 };
/// let new = Version { major: 1, minor: 12 };
/// assert_eq!(old.compare(&new), Order::Increasing);
/// ```
pub trait ThreeWayComparable {
    /// Classifies `self` against `other`
    fn compare(&self, other: &Self) -> Order;
}

macro_rules! ord_impl {
    ($($type:ty),+ $(,)?) => {
        $(
            impl ThreeWayComparable for $type {
                #[inline]
                fn compare(&self, other: &Self) -> Order {
                    Order::from(Ord::cmp(self, other))
                }
            }
        )+
    };
}

ord_impl!(u8, u16, u32, u64, u128, usize);
ord_impl!(i8, i16, i32, i64, i128, isize);
ord_impl!(bool, char, str, String, ());

cfg_std! {
    ord_impl!(
        std::path::Path,
        std::path::PathBuf,
        std::ffi::OsStr,
        std::ffi::OsString,
    );
}

macro_rules! float_impl {
    ($($type:ty),+) => {
        $(
            /// Uses the IEEE 754 `totalOrder` predicate, so `-0.0` sorts before `0.0` and NaNs
            /// are ordered by sign and payload.
            impl ThreeWayComparable for $type {
                #[inline]
                fn compare(&self, other: &Self) -> Order {
                    Order::from(self.total_cmp(other))
                }
            }
        )+
    };
}

float_impl!(f32, f64);

impl<T: ThreeWayComparable + ?Sized> ThreeWayComparable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        (**self).compare(*other)
    }
}

impl<T: ThreeWayComparable + ?Sized> ThreeWayComparable for Box<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        (**self).compare(&**other)
    }
}

impl<T: ThreeWayComparable> ThreeWayComparable for Reverse<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        other.0.compare(&self.0)
    }
}

impl<T: ThreeWayComparable> ThreeWayComparable for Option<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        match (self, other) {
            (Some(l), Some(r)) => l.compare(r),
            (None, None) => Order::Equal,
            (None, Some(_)) => Order::Increasing,
            (Some(_), None) => Order::Decreasing,
        }
    }
}

/// Lexicographic order. Stops at the first element pair that is not [Order::Equal]; a
/// shorter slice that is a prefix of the other sorts first.
impl<T: ThreeWayComparable> ThreeWayComparable for [T] {
    fn compare(&self, other: &Self) -> Order {
        for (l, r) in self.iter().zip(other.iter()) {
            match l.compare(r) {
                Order::Equal => continue,
                order => return order,
            }
        }
        Order::from(self.len().cmp(&other.len()))
    }
}

impl<T: ThreeWayComparable, const N: usize> ThreeWayComparable for [T; N] {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        self.as_slice().compare(other.as_slice())
    }
}

impl<T: ThreeWayComparable> ThreeWayComparable for Vec<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        self.as_slice().compare(other.as_slice())
    }
}

macro_rules! tuple_impl {
    ( $( $name:ident $idx:tt )+ ) => {
        impl<$($name: ThreeWayComparable),+> ThreeWayComparable for ($($name,)+) {
            #[inline]
            fn compare(&self, other: &Self) -> Order {
                $(
                    match self.$idx.compare(&other.$idx) {
                        Order::Equal => {}
                        order => return order,
                    }
                )+
                Order::Equal
            }
        }
    };
}

tuple_impl!(A 0);
tuple_impl!(A 0 B 1);
tuple_impl!(A 0 B 1 C 2);
tuple_impl!(A 0 B 1 C 2 D 3);
tuple_impl!(A 0 B 1 C 2 D 3 E 4);
tuple_impl!(A 0 B 1 C 2 D 3 E 4 F 5);

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Debug;
    use proptest::prelude::*;

    /// Checks the order laws for a type that also has a reference `Ord` implementation
    fn check_laws<T: ThreeWayComparable + Ord + Debug + ?Sized>(x: &T, y: &T, z: &T) {
        let xy = x.compare(y);
        // determinism
        assert_eq!(xy, x.compare(y));
        // agrees with the reference order
        assert_eq!(xy, Order::from(x.cmp(y)), "{:?} vs {:?}", x, y);
        // antisymmetry
        assert_eq!(y.compare(x), xy.reverse());
        // transitivity
        let yz = y.compare(z);
        if xy == yz {
            assert_eq!(x.compare(z), xy);
        }
        if xy.is_eq() {
            assert_eq!(x.compare(z), yz);
        }
    }

    proptest! {
        #[test]
        fn integer_laws(x: i64, y: i64, z: i64) {
            check_laws(&x, &y, &z);
        }

        #[test]
        fn narrow_integer_laws(x in 0u8..4, y in 0u8..4, z in 0u8..4) {
            check_laws(&x, &y, &z);
        }

        #[test]
        fn string_laws(x in "[ab]{0,3}", y in "[ab]{0,3}", z in "[ab]{0,3}") {
            check_laws(x.as_str(), y.as_str(), z.as_str());
            check_laws(&x, &y, &z);
        }

        #[test]
        fn vec_laws(
            x in proptest::collection::vec(0u8..3, 0..4),
            y in proptest::collection::vec(0u8..3, 0..4),
            z in proptest::collection::vec(0u8..3, 0..4),
        ) {
            check_laws(&x, &y, &z);
            check_laws(x.as_slice(), y.as_slice(), z.as_slice());
        }

        #[test]
        fn option_and_tuple_laws(
            x: (Option<u8>, bool, i16),
            y: (Option<u8>, bool, i16),
            z: (Option<u8>, bool, i16),
        ) {
            check_laws(&x, &y, &z);
        }

        #[test]
        fn float_laws(x: f64, y: f64) {
            let xy = x.compare(&y);
            prop_assert_eq!(y.compare(&x), xy.reverse());
            if !x.is_nan() && !y.is_nan() && x != y {
                prop_assert_eq!(xy.is_lt(), x < y);
            }
        }
    }

    #[test]
    fn slices_short_circuit_on_first_difference() {
        assert_eq!([1, 9, 9].compare(&[2, 0, 0]), Order::Increasing);
        assert_eq!([1, 2][..].compare(&[1, 2, 0][..]), Order::Increasing);
        assert_eq!(Vec::<u8>::new().compare(&Vec::new()), Order::Equal);
    }

    #[test]
    fn floats_are_totally_ordered() {
        assert_eq!((-0.0f64).compare(&0.0), Order::Increasing);
        assert_eq!(f64::NAN.compare(&f64::NAN), Order::Equal);
        assert_eq!(1.5f32.compare(&f32::INFINITY), Order::Increasing);
    }

    #[test]
    fn option_none_sorts_first() {
        assert_eq!(None::<u8>.compare(&Some(0)), Order::Increasing);
        assert_eq!(Some(0u8).compare(&None), Order::Decreasing);
    }

    #[test]
    fn reverse_flips() {
        assert_eq!(Reverse(1).compare(&Reverse(2)), Order::Decreasing);
    }

    #[test]
    fn boxed_and_borrowed() {
        let a: Box<str> = "apple".into();
        let b: Box<str> = "banana".into();
        assert_eq!(a.compare(&b), Order::Increasing);
        assert_eq!(<&u8 as ThreeWayComparable>::compare(&&1, &&1), Order::Equal);
    }

    #[cfg(feature = "std")]
    #[test]
    fn paths() {
        use std::path::Path;
        assert_eq!(Path::new("/a/b").compare(Path::new("/a/c")), Order::Increasing);
    }
}
