use crate::Pair;

/// A balanced binary tree of [Pair]s over a single leaf type
///
/// A leaf has depth 0 and `Pair<V>` has depth `V::DEPTH + 1`, so a value of depth `d` holds
/// `2^d` leaves. Leaves are indexed from 0 in left-to-right order, which is also the order
/// in which [ThreeWayComparable](crate::ThreeWayComparable) visits them.
///
/// Leaf types are registered with [impl_leaf](crate::impl_leaf).
///
/// # Example
///
/// ```
/// use threeway::{Depth3, Nested, Order, ThreeWayComparable};
///
/// let lhs = Depth3::<u32>::from_leaves(|i| i as u32);
/// let mut rhs = lhs;
/// assert_eq!(Depth3::<u32>::LEAVES, 8);
/// assert_eq!(lhs.leaf(7), Some(&7));
///
/// *rhs.leaf_mut(5).unwrap() = 0;
/// assert_eq!(lhs.compare(&rhs), Order::Decreasing);
/// ```
pub trait Nested: Sized {
    /// The type stored at the bottom of the tree
    type Leaf;

    /// Number of [Pair] levels above the leaves
    const DEPTH: usize;

    /// Number of leaves, `2^DEPTH`
    const LEAVES: usize = 1 << Self::DEPTH;

    /// Builds a tree whose leaf `i` is `f(i)`
    ///
    /// `f` is called once per leaf in ascending index order.
    fn from_leaves<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> Self::Leaf,
    {
        Self::build(0, &mut f)
    }

    #[doc(hidden)]
    fn build<F>(offset: usize, f: &mut F) -> Self
    where
        F: FnMut(usize) -> Self::Leaf;

    /// Returns a reference to leaf `index` or `None` if out of range
    fn leaf(&self, index: usize) -> Option<&Self::Leaf>;

    /// Returns a mutable reference to leaf `index` or `None` if out of range
    fn leaf_mut(&mut self, index: usize) -> Option<&mut Self::Leaf>;

    /// Returns the leaf that is compared first
    fn first_leaf_mut(&mut self) -> &mut Self::Leaf;

    /// Returns the leaf that is compared last
    fn last_leaf_mut(&mut self) -> &mut Self::Leaf;
}

impl<V: Nested> Nested for Pair<V> {
    type Leaf = V::Leaf;

    const DEPTH: usize = V::DEPTH + 1;

    fn build<F>(offset: usize, f: &mut F) -> Self
    where
        F: FnMut(usize) -> Self::Leaf,
    {
        let a = V::build(offset, f);
        let b = V::build(offset + V::LEAVES, f);
        Pair { a, b }
    }

    #[inline]
    fn leaf(&self, index: usize) -> Option<&Self::Leaf> {
        if index < V::LEAVES {
            self.a.leaf(index)
        } else {
            self.b.leaf(index - V::LEAVES)
        }
    }

    #[inline]
    fn leaf_mut(&mut self, index: usize) -> Option<&mut Self::Leaf> {
        if index < V::LEAVES {
            self.a.leaf_mut(index)
        } else {
            self.b.leaf_mut(index - V::LEAVES)
        }
    }

    #[inline]
    fn first_leaf_mut(&mut self) -> &mut Self::Leaf {
        self.a.first_leaf_mut()
    }

    #[inline]
    fn last_leaf_mut(&mut self) -> &mut Self::Leaf {
        self.b.last_leaf_mut()
    }
}

/// Registers types as leaves of a [Nested] tree
///
/// ```
/// use threeway::{impl_leaf, Depth2, Nested};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq)]
/// struct Tick(u64);
///
/// impl_leaf!(Tick);
///
/// let ticks = Depth2::<Tick>::from_leaves(|i| Tick(i as u64 * 10));
/// assert_eq!(ticks.leaf(3), Some(&Tick(30)));
/// ```
#[macro_export]
macro_rules! impl_leaf {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::Nested for $type {
                type Leaf = $type;

                const DEPTH: usize = 0;

                #[inline]
                fn build<F>(offset: usize, f: &mut F) -> Self
                where
                    F: FnMut(usize) -> Self::Leaf,
                {
                    f(offset)
                }

                #[inline]
                fn leaf(&self, index: usize) -> ::core::option::Option<&Self::Leaf> {
                    if index == 0 { ::core::option::Option::Some(self) } else { ::core::option::Option::None }
                }

                #[inline]
                fn leaf_mut(&mut self, index: usize) -> ::core::option::Option<&mut Self::Leaf> {
                    if index == 0 { ::core::option::Option::Some(self) } else { ::core::option::Option::None }
                }

                #[inline]
                fn first_leaf_mut(&mut self) -> &mut Self::Leaf {
                    self
                }

                #[inline]
                fn last_leaf_mut(&mut self) -> &mut Self::Leaf {
                    self
                }
            }
        )+
    };
}

impl_leaf!(u8, u16, u32, u64, u128, usize);
impl_leaf!(i8, i16, i32, i64, i128, isize);
impl_leaf!(f32, f64, bool, char);

macro_rules! depth_aliases {
    ($($name:ident($depth:literal) => $inner:ty),+ $(,)?) => {
        $(
            #[doc = concat!("A [Pair] tree of depth ", stringify!($depth))]
            pub type $name<V> = Pair<$inner>;
        )+
    };
}

depth_aliases!(
    Depth1(1) => V,
    Depth2(2) => Depth1<V>,
    Depth3(3) => Depth2<V>,
    Depth4(4) => Depth3<V>,
    Depth5(5) => Depth4<V>,
    Depth6(6) => Depth5<V>,
    Depth7(7) => Depth6<V>,
    Depth8(8) => Depth7<V>,
    Depth9(9) => Depth8<V>,
    Depth10(10) => Depth9<V>,
    Depth11(11) => Depth10<V>,
    Depth12(12) => Depth11<V>,
    Depth13(13) => Depth12<V>,
    Depth14(14) => Depth13<V>,
    Depth15(15) => Depth14<V>,
    Depth16(16) => Depth15<V>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Order, ThreeWayComparable};

    #[test]
    fn depth_and_leaf_count() {
        assert_eq!(u8::DEPTH, 0);
        assert_eq!(u8::LEAVES, 1);
        assert_eq!(Depth1::<u8>::LEAVES, 2);
        assert_eq!(Depth5::<u8>::DEPTH, 5);
        assert_eq!(Depth16::<u8>::LEAVES, 65536);
    }

    #[test]
    fn leaves_are_indexed_in_compare_order() {
        let tree = Depth4::<u16>::from_leaves(|i| i as u16);
        for i in 0..Depth4::<u16>::LEAVES {
            assert_eq!(tree.leaf(i), Some(&(i as u16)));
        }
        assert_eq!(tree.leaf(16), None);

        // the first differing leaf decides
        let mut raised = tree;
        *raised.leaf_mut(3).unwrap() += 100;
        let mut lowered = tree;
        *lowered.leaf_mut(4).unwrap() = 0;
        assert_eq!(raised.compare(&tree), Order::Decreasing);
        assert_eq!(lowered.compare(&raised), Order::Increasing);
    }

    #[test]
    fn first_and_last_leaves() {
        let mut tree = Depth3::<i8>::default();
        *tree.first_leaf_mut() = 1;
        *tree.last_leaf_mut() = -1;
        assert_eq!(tree.leaf(0), Some(&1));
        assert_eq!(tree.leaf(7), Some(&-1));
        assert_eq!(tree.a.a.a, 1);
        assert_eq!(tree.b.b.b, -1);
    }

    #[test]
    fn from_leaves_calls_in_order() {
        let mut seen = Vec::new();
        let _tree = Depth2::<u8>::from_leaves(|i| {
            seen.push(i);
            0
        });
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn sixteen_levels() {
        let lhs = Depth16::<u8>::default();
        let mut rhs = lhs;
        *rhs.last_leaf_mut() = 1;
        assert_eq!(lhs.compare(&rhs), Order::Increasing);
        assert_eq!(rhs.compare(&lhs), Order::Decreasing);
    }
}
