use crate::{Order, ThreeWayComparable};

/// A two-field aggregate ordered lexicographically
///
/// `a` decides the order; `b` is only compared when the `a` fields are [Order::Equal].
/// Pairs nest by value, so `Pair<Pair<V>>` is a balanced tree with four `V` leaves. See
/// [Nested](crate::Nested) and the `DepthN` aliases for building deep trees.
///
/// `Pair<V>` implements `Default` only if `V` does.
///
/// # Example
///
/// ```
/// use threeway::{Order, Pair, ThreeWayComparable};
///
/// let lhs = Pair::new(Pair::new(1, 2), Pair::new(3, 4));
/// let rhs = Pair::new(Pair::new(1, 2), Pair::new(3, 5));
/// assert_eq!(lhs.compare(&rhs), Order::Increasing);
/// assert!(lhs < rhs);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Default, Clone, Copy)]
pub struct Pair<V> {
    /// The field that is compared first
    pub a: V,
    /// The field that breaks ties on `a`
    pub b: V,
}

impl<V> Pair<V> {
    /// Creates a new Pair
    #[inline]
    pub const fn new(a: V, b: V) -> Self {
        Self { a, b }
    }

    /// Creates a Pair where both fields hold `value`
    #[inline]
    pub fn splat(value: V) -> Self
    where
        V: Clone,
    {
        Self {
            a: value.clone(),
            b: value,
        }
    }

    /// Consumes the Pair and returns `(a, b)`
    #[inline]
    pub fn into_inner(self) -> (V, V) {
        (self.a, self.b)
    }
}

impl<V> From<(V, V)> for Pair<V> {
    #[inline]
    fn from((a, b): (V, V)) -> Self {
        Self::new(a, b)
    }
}

impl<V: ThreeWayComparable> ThreeWayComparable for Pair<V> {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        match self.a.compare(&other.a) {
            Order::Equal => self.b.compare(&other.b),
            order => order,
        }
    }
}

crate::impl_two_way!(impl<V> Pair<V>);
