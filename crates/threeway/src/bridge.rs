//! Bridging between [ThreeWayComparable] and Rust's two-way ordering traits
//!
//! Both directions are opt-in:
//!
//! - [impl_two_way](crate::impl_two_way) derives `PartialEq`, `Eq`, `PartialOrd` and `Ord`
//!   from a single [ThreeWayComparable::compare] call per relation.
//! - [impl_three_way](crate::impl_three_way) derives [ThreeWayComparable] from `<` and `==`,
//!   which may evaluate the two-way primitives twice.
//!
//! A type either implements a trait itself or asks for the bridged version; trait coherence
//! rejects having both. Only `==` and `<` are bridged: `>`, `<=` and `>=` keep the default
//! provided by `PartialOrd`.
//!
//! [TwoWay] and [ThreeWay] wrap foreign types that cannot receive the macros.
use crate::{Order, ThreeWayComparable};

/// Derives `PartialEq`, `Eq`, `PartialOrd` and `Ord` from [ThreeWayComparable]
///
/// `x == y` is `x.compare(&y) == Order::Equal` and `x < y` is
/// `x.compare(&y) == Order::Increasing`.
///
/// Generic types use the `impl<..>` form, which bounds the impls on the type itself
/// implementing [ThreeWayComparable].
///
/// # Example
///
/// ```
/// use threeway::{impl_two_way, Order, ThreeWayComparable};
///
/// struct Celsius(i32);
///
/// impl ThreeWayComparable for Celsius {
///     fn compare(&self, other: &Self) -> Order {
///         self.0.compare(&other.0)
///     }
/// }
///
/// impl_two_way!(Celsius);
///
/// assert!(Celsius(-4) < Celsius(12));
/// assert!(Celsius(3) >= Celsius(3));
///
/// struct Labeled<T>(&'static str, T);
///
/// impl<T: ThreeWayComparable> ThreeWayComparable for Labeled<T> {
///     fn compare(&self, other: &Self) -> Order {
///         self.1.compare(&other.1)
///     }
/// }
///
/// impl_two_way!(impl<T> Labeled<T>);
///
/// assert!(Labeled("a", 1) == Labeled("b", 1));
/// ```
#[macro_export]
macro_rules! impl_two_way {
    (@concrete $type:ty) => {
        impl ::core::cmp::PartialEq for $type {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $crate::ThreeWayComparable::compare(self, other).is_eq()
            }
        }

        impl ::core::cmp::Eq for $type {}

        impl ::core::cmp::PartialOrd for $type {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }

            #[inline]
            fn lt(&self, other: &Self) -> bool {
                $crate::ThreeWayComparable::compare(self, other).is_lt()
            }
        }

        impl ::core::cmp::Ord for $type {
            #[inline]
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $crate::ThreeWayComparable::compare(self, other).into()
            }
        }
    };
    (impl<$($generic:ident),+ $(,)?> $type:ty) => {
        impl<$($generic),+> ::core::cmp::PartialEq for $type
        where
            $type: $crate::ThreeWayComparable,
        {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $crate::ThreeWayComparable::compare(self, other).is_eq()
            }
        }

        impl<$($generic),+> ::core::cmp::Eq for $type where $type: $crate::ThreeWayComparable {}

        impl<$($generic),+> ::core::cmp::PartialOrd for $type
        where
            $type: $crate::ThreeWayComparable,
        {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }

            #[inline]
            fn lt(&self, other: &Self) -> bool {
                $crate::ThreeWayComparable::compare(self, other).is_lt()
            }
        }

        impl<$($generic),+> ::core::cmp::Ord for $type
        where
            $type: $crate::ThreeWayComparable,
        {
            #[inline]
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $crate::ThreeWayComparable::compare(self, other).into()
            }
        }
    };
    ($($type:ty),+ $(,)?) => {
        $(
            $crate::impl_two_way!(@concrete $type);
        )+
    };
}

/// Derives [ThreeWayComparable] from `Ord`
///
/// The derived `compare` evaluates `<` and, if that is false, `==`. A type that can classify
/// both sides in one step should implement [ThreeWayComparable] directly instead.
///
/// The type must be totally ordered. A `PartialOrd` with unordered values would break
/// reflexivity and antisymmetry of `compare`, so such types are rejected at compile time:
///
/// ```compile_fail
/// use threeway::impl_three_way;
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Ratio(f64);
///
/// impl_three_way!(Ratio);
/// ```
///
/// # Example
///
/// ```
/// use threeway::{impl_three_way, Order, ThreeWayComparable};
///
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// struct Meters(u64);
///
/// impl_three_way!(Meters);
///
/// assert_eq!(Meters(10).compare(&Meters(2)), Order::Decreasing);
/// ```
#[macro_export]
macro_rules! impl_three_way {
    (impl<$($generic:ident),+ $(,)?> $type:ty) => {
        impl<$($generic),+> $crate::ThreeWayComparable for $type
        where
            $type: ::core::cmp::Ord,
        {
            #[inline]
            fn compare(&self, other: &Self) -> $crate::Order {
                $crate::bridge::two_way_compare(self, other)
            }
        }
    };
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::ThreeWayComparable for $type
            where
                $type: ::core::cmp::Ord,
            {
                #[inline]
                fn compare(&self, other: &Self) -> $crate::Order {
                    $crate::bridge::two_way_compare(self, other)
                }
            }
        )+
    };
}

/// Classifies `x` against `y` with the two-way primitives
///
/// [Order::Increasing] if `x < y`, otherwise [Order::Equal] if `x == y`, otherwise
/// [Order::Decreasing]. Values that are unordered under a partial order fall into
/// [Order::Decreasing], so only a total order gives a lawful [ThreeWayComparable].
#[inline]
pub fn two_way_compare<T: PartialOrd + ?Sized>(x: &T, y: &T) -> Order {
    if x < y {
        Order::Increasing
    } else if x == y {
        Order::Equal
    } else {
        Order::Decreasing
    }
}

/// Classifies `x` against `y`
#[inline]
pub fn compare<T: ThreeWayComparable + ?Sized>(x: &T, y: &T) -> Order {
    x.compare(y)
}

/// Returns `true` if `x` and `y` compare [Order::Equal]
#[inline]
pub fn equal<T: ThreeWayComparable + ?Sized>(x: &T, y: &T) -> bool {
    x.compare(y).is_eq()
}

/// Returns `true` if `x` compares [Order::Increasing] against `y`
#[inline]
pub fn less_than<T: ThreeWayComparable + ?Sized>(x: &T, y: &T) -> bool {
    x.compare(y).is_lt()
}

/// Gives a [ThreeWayComparable] type the two-way ordering traits
///
/// Useful for handing such values to `BTreeMap`, `sort` and friends.
///
/// ```
/// use threeway::{bridge::TwoWay, Pair};
///
/// let mut pairs = vec![TwoWay(Pair::new(2, 0)), TwoWay(Pair::new(1, 5)), TwoWay(Pair::new(1, 3))];
/// pairs.sort();
/// assert_eq!(pairs[0].0, Pair::new(1, 3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[repr(transparent)]
pub struct TwoWay<T>(pub T);

impl<T: ThreeWayComparable> ThreeWayComparable for TwoWay<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        self.0.compare(&other.0)
    }
}

impl_two_way!(impl<T> TwoWay<T>);

/// Gives a totally ordered type that only has the two-way ordering traits a
/// [ThreeWayComparable] impl
///
/// Each comparison may cost two evaluations, see [two_way_compare]. Floats are not accepted;
/// they implement [ThreeWayComparable] directly through `total_cmp`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ThreeWay<T>(pub T);

impl_three_way!(impl<T> ThreeWay<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A type whose comparison logic is written once and bridged to the two-way traits
    #[derive(Debug, Clone, Copy)]
    struct Version {
        major: u8,
        minor: u8,
    }

    impl ThreeWayComparable for Version {
        fn compare(&self, other: &Self) -> Order {
            self.major
                .compare(&other.major)
                .then_with(|| self.minor.compare(&other.minor))
        }
    }

    impl_two_way!(Version);

    /// A type with independent two-way implementations bridged to a three-way compare
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct Legacy(u8, u8);

    impl_three_way!(Legacy);

    fn version() -> impl Strategy<Value = Version> {
        (0u8..3, 0u8..3).prop_map(|(major, minor)| Version { major, minor })
    }

    proptest! {
        #[test]
        fn two_way_from_three_way_agrees(x in version(), y in version()) {
            let order = x.compare(&y);
            prop_assert_eq!(x == y, order == Order::Equal);
            prop_assert_eq!(x < y, order == Order::Increasing);
            prop_assert_eq!(x > y, order == Order::Decreasing);
            prop_assert_eq!(x <= y, order.is_le());
            prop_assert_eq!(x >= y, order.is_ge());
            prop_assert_eq!(x != y, order.is_ne());
            prop_assert_eq!(Order::from(x.cmp(&y)), order);
        }

        #[test]
        fn three_way_from_two_way_agrees(a in 0u8..3, b in 0u8..3, c in 0u8..3, d in 0u8..3) {
            let (x, y) = (Legacy(a, b), Legacy(c, d));
            let order = x.compare(&y);
            prop_assert_eq!(x == y, order == Order::Equal);
            prop_assert_eq!(x < y, order == Order::Increasing);
            prop_assert_eq!(y.compare(&x), order.reverse());
        }

        #[test]
        fn free_functions_agree(x: i32, y: i32) {
            prop_assert_eq!(equal(&x, &y), x == y);
            prop_assert_eq!(less_than(&x, &y), x < y);
            prop_assert_eq!(compare(&x, &y), two_way_compare(&x, &y));
        }
    }

    #[test]
    fn wrappers() {
        assert!(TwoWay(Version { major: 1, minor: 0 }) > TwoWay(Version { major: 0, minor: 9 }));
        assert_eq!(ThreeWay(1u64).compare(&ThreeWay(1)), Order::Equal);
        assert_eq!(ThreeWay("b").compare(&ThreeWay("a")), Order::Decreasing);
    }

    proptest! {
        #[test]
        fn three_way_wrapper_is_reflexive_and_antisymmetric(x: Option<i16>, y: Option<i16>) {
            let (x, y) = (ThreeWay(x), ThreeWay(y));
            prop_assert_eq!(x.compare(&x), Order::Equal);
            prop_assert_eq!(y.compare(&x), x.compare(&y).reverse());
            prop_assert_eq!(x.compare(&y), x.0.compare(&y.0));
        }
    }

    #[test]
    fn floats_classify_lawfully_without_the_wrapper() {
        let (nan, one) = (f64::NAN, 1.0f64);
        assert_eq!(nan.compare(&nan), Order::Equal);
        assert_eq!(one.compare(&nan), nan.compare(&one).reverse());
    }

    #[test]
    fn two_way_compare_on_unsized() {
        assert_eq!(two_way_compare("abc", "abd"), Order::Increasing);
        assert_eq!(compare("abc", "abc"), Order::Equal);
    }
}
