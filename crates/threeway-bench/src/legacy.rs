//! The conventional two-way composite that three-way comparison is measured against

use core::cmp::Ordering;
use threeway::Nested;

/// A pair ordered through `<` and `==` alone
///
/// `<` is `a < a' || (a == a' && b < b')`, so every level may run two child comparisons and
/// telling `>` from `==` needs `<` followed by `==`. `>`, `<=` and `>=` are expressed through
/// `<` with swapped operands.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoWayPair<V> {
    pub a: V,
    pub b: V,
}

impl<V: PartialEq> PartialEq for TwoWayPair<V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl<V: PartialOrd> PartialOrd for TwoWayPair<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            Some(Ordering::Greater)
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.a < other.a || (self.a == other.a && self.b < other.b)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<V: Nested> Nested for TwoWayPair<V> {
    type Leaf = V::Leaf;

    const DEPTH: usize = V::DEPTH + 1;

    fn build<F>(offset: usize, f: &mut F) -> Self
    where
        F: FnMut(usize) -> Self::Leaf,
    {
        let a = V::build(offset, f);
        let b = V::build(offset + V::LEAVES, f);
        TwoWayPair { a, b }
    }

    fn leaf(&self, index: usize) -> Option<&Self::Leaf> {
        if index < V::LEAVES {
            self.a.leaf(index)
        } else {
            self.b.leaf(index - V::LEAVES)
        }
    }

    fn leaf_mut(&mut self, index: usize) -> Option<&mut Self::Leaf> {
        if index < V::LEAVES {
            self.a.leaf_mut(index)
        } else {
            self.b.leaf_mut(index - V::LEAVES)
        }
    }

    fn first_leaf_mut(&mut self) -> &mut Self::Leaf {
        self.a.first_leaf_mut()
    }

    fn last_leaf_mut(&mut self) -> &mut Self::Leaf {
        self.b.last_leaf_mut()
    }
}

macro_rules! two_way_aliases {
    ($($name:ident => $inner:ty),+ $(,)?) => {
        $(
            pub type $name<V> = TwoWayPair<$inner>;
        )+
    };
}

two_way_aliases!(
    TwoWayDepth1 => V,
    TwoWayDepth2 => TwoWayDepth1<V>,
    TwoWayDepth3 => TwoWayDepth2<V>,
    TwoWayDepth4 => TwoWayDepth3<V>,
    TwoWayDepth5 => TwoWayDepth4<V>,
    TwoWayDepth6 => TwoWayDepth5<V>,
    TwoWayDepth7 => TwoWayDepth6<V>,
    TwoWayDepth8 => TwoWayDepth7<V>,
    TwoWayDepth9 => TwoWayDepth8<V>,
    TwoWayDepth10 => TwoWayDepth9<V>,
    TwoWayDepth11 => TwoWayDepth10<V>,
    TwoWayDepth12 => TwoWayDepth11<V>,
    TwoWayDepth13 => TwoWayDepth12<V>,
    TwoWayDepth14 => TwoWayDepth13<V>,
    TwoWayDepth15 => TwoWayDepth14<V>,
    TwoWayDepth16 => TwoWayDepth15<V>,
);
