//! Evaluation counting for leaf comparisons
//!
//! [Counted] forwards every comparison to the wrapped value and bumps a per-thread counter,
//! which makes the number of leaf evaluations behind a composite comparison observable.
//!
//! ```
//! use threeway::{probe::{self, Counted}, Pair, ThreeWayComparable};
//!
//! let lhs = Pair::new(Counted(1), Counted(2));
//! let rhs = Pair::new(Counted(1), Counted(3));
//!
//! probe::reset();
//! assert!(lhs.compare(&rhs).is_lt());
//! assert_eq!(probe::evaluations(), 2);
//! ```
use crate::{Order, ThreeWayComparable};
use core::cmp::Ordering;
use std::cell::Cell;

thread_local! {
    static EVALUATIONS: Cell<usize> = const { Cell::new(0) };
}

/// Returns the number of [Counted] evaluations recorded on this thread since the last reset
#[inline]
pub fn evaluations() -> usize {
    EVALUATIONS.with(Cell::get)
}

/// Resets this thread's counter and returns the previous value
#[inline]
pub fn reset() -> usize {
    EVALUATIONS.with(|count| count.replace(0))
}

#[inline]
fn record() {
    EVALUATIONS.with(|count| count.set(count.get() + 1));
}

/// A leaf value whose comparisons are counted
///
/// Each call to `compare`, `eq`, `partial_cmp` or `cmp` is one evaluation.
#[derive(Debug, Default, Clone, Copy)]
#[repr(transparent)]
pub struct Counted<T>(pub T);

impl<T: ThreeWayComparable> ThreeWayComparable for Counted<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Order {
        record();
        self.0.compare(&other.0)
    }
}

impl<T: PartialEq> PartialEq for Counted<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        record();
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Counted<T> {}

impl<T: PartialOrd> PartialOrd for Counted<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        record();
        self.0.partial_cmp(&other.0)
    }
}

impl<T: Ord> Ord for Counted<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        record();
        self.0.cmp(&other.0)
    }
}

impl<T> crate::Nested for Counted<T> {
    type Leaf = Counted<T>;

    const DEPTH: usize = 0;

    #[inline]
    fn build<F>(offset: usize, f: &mut F) -> Self
    where
        F: FnMut(usize) -> Self::Leaf,
    {
        f(offset)
    }

    #[inline]
    fn leaf(&self, index: usize) -> Option<&Self::Leaf> {
        (index == 0).then_some(self)
    }

    #[inline]
    fn leaf_mut(&mut self, index: usize) -> Option<&mut Self::Leaf> {
        if index == 0 { Some(self) } else { None }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_kind_of_evaluation() {
        reset();
        let (x, y) = (Counted(1), Counted(2));
        let _ = x.compare(&y);
        let _ = x == y;
        let _ = x < y;
        let _ = x.cmp(&y);
        assert_eq!(evaluations(), 4);
        assert_eq!(reset(), 4);
        assert_eq!(evaluations(), 0);
    }

    #[test]
    fn counters_are_per_thread() {
        reset();
        let _ = Counted(1).compare(&Counted(1));
        let other = std::thread::spawn(evaluations).join().unwrap();
        assert_eq!(other, 0);
        assert_eq!(evaluations(), 1);
    }
}
