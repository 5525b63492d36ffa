use core::cmp::Ordering;

/// The result of a three-way comparison
///
/// Every relation between two values (`==`, `!=`, `<`, `>`, `<=`, `>=`) can be read
/// from a single [Order] without evaluating the comparison again.
///
/// # Example
///
/// ```
/// use threeway::{Order, ThreeWayComparable};
///
/// let order = 1u32.compare(&2);
/// assert_eq!(order, Order::Increasing);
/// assert!(order.is_lt());
/// assert!(order.is_le());
/// assert!(order.is_ne());
/// assert!(!order.is_ge());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// The left-hand side sorts before the right-hand side.
    Increasing,
    /// Both sides are equal.
    Equal,
    /// The left-hand side sorts after the right-hand side.
    Decreasing,
}

impl Order {
    /// Returns `true` if the order is [Order::Equal]
    #[inline]
    pub const fn is_eq(self) -> bool {
        matches!(self, Order::Equal)
    }

    /// Returns `true` if the order is not [Order::Equal]
    #[inline]
    pub const fn is_ne(self) -> bool {
        !self.is_eq()
    }

    /// Returns `true` if the order is [Order::Increasing]
    #[inline]
    pub const fn is_lt(self) -> bool {
        matches!(self, Order::Increasing)
    }

    /// Returns `true` if the order is [Order::Decreasing]
    #[inline]
    pub const fn is_gt(self) -> bool {
        matches!(self, Order::Decreasing)
    }

    /// Returns `true` if the order is either [Order::Increasing] or [Order::Equal]
    #[inline]
    pub const fn is_le(self) -> bool {
        !self.is_gt()
    }

    /// Returns `true` if the order is either [Order::Decreasing] or [Order::Equal]
    #[inline]
    pub const fn is_ge(self) -> bool {
        !self.is_lt()
    }

    /// Swaps [Order::Increasing] and [Order::Decreasing]
    ///
    /// `y.compare(&x)` is always `x.compare(&y).reverse()` for a lawful implementation.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Order {
        match self {
            Order::Increasing => Order::Decreasing,
            Order::Equal => Order::Equal,
            Order::Decreasing => Order::Increasing,
        }
    }

    /// Chains two orders lexicographically
    ///
    /// Returns `self` unless it is [Order::Equal], in which case `other` is returned.
    #[inline]
    #[must_use]
    pub const fn then(self, other: Order) -> Order {
        match self {
            Order::Equal => other,
            _ => self,
        }
    }

    /// Chains a lazily computed order lexicographically
    ///
    /// `f` is only called when `self` is [Order::Equal].
    #[inline]
    #[must_use]
    pub fn then_with<F: FnOnce() -> Order>(self, f: F) -> Order {
        match self {
            Order::Equal => f(),
            _ => self,
        }
    }
}

impl From<Ordering> for Order {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Order::Increasing,
            Ordering::Equal => Order::Equal,
            Ordering::Greater => Order::Decreasing,
        }
    }
}

impl From<Order> for Ordering {
    #[inline]
    fn from(order: Order) -> Self {
        match order {
            Order::Increasing => Ordering::Less,
            Order::Equal => Ordering::Equal,
            Order::Decreasing => Ordering::Greater,
        }
    }
}
