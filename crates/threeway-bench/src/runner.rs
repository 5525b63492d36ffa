use crate::config::{Args, Mode};
use std::time::Duration;
use threeway::{
    Nested, Order, ThreeWayComparable,
    bridge::two_way_compare,
    probe::{self, Counted},
};
use threeway_stats::{Percentiles, Profile, Report, profile_scope};

/// Leaf types the harness can place at the bottom of a tree
pub trait LeafValue: Sized {
    fn from_value(value: i64) -> Self;
}

impl LeafValue for i64 {
    #[inline]
    fn from_value(value: i64) -> Self {
        value
    }
}

impl LeafValue for Counted<i64> {
    #[inline]
    fn from_value(value: i64) -> Self {
        Counted(value)
    }
}

/// Result of running one strategy at one depth
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub strategy: Mode,
    pub depth: usize,
    pub order: Order,
    /// Leaf comparisons behind a single classification
    pub evaluations: usize,
    pub percentiles: Percentiles,
    pub total: Duration,
}

/// Builds `(lhs, rhs)` where all leaves are zero except leaf `index` of `rhs`, which is `delta`
pub fn trees<T>(index: usize, delta: i64) -> (T, T)
where
    T: Nested,
    T::Leaf: LeafValue,
{
    let lhs = T::from_leaves(|_| T::Leaf::from_value(0));
    let rhs = T::from_leaves(|i| T::Leaf::from_value(if i == index { delta } else { 0 }));
    (lhs, rhs)
}

/// Counts leaf evaluations of one classification with [Counted] leaves
fn count_evaluations<T, F>(index: usize, delta: i64, classify: F) -> (Order, usize)
where
    T: Nested<Leaf = Counted<i64>>,
    F: Fn(&T, &T) -> Order,
{
    let (lhs, rhs) = trees::<T>(index, delta);
    probe::reset();
    let order = classify(&lhs, &rhs);
    (order, probe::reset())
}

/// Times `iterations * trials` classifications, one sample per classification
fn time<T, F>(args: &Args, index: usize, classify: F) -> (Order, Report)
where
    T: Nested,
    T::Leaf: LeafValue,
    F: Fn(&T, &T) -> Order,
{
    let (lhs, rhs) = trees::<T>(index, args.delta);
    let mut profile = Profile::start();
    let mut order = Order::Equal;
    for trial in 0..args.trials {
        for _ in 0..args.iterations {
            profile_scope!(&mut profile);
            order = classify(std::hint::black_box(&lhs), std::hint::black_box(&rhs));
        }
        log::debug!(
            "finished trial {} of {}, p50 so far {:.2}ns",
            trial + 1,
            args.trials,
            profile.percentiles().p50
        );
    }
    (order, profile.finish())
}

/// Runs one strategy for tree types `T` (plain leaves) and `C` (counted leaves)
fn run_strategy<T, C, F, G>(args: &Args, strategy: Mode, index: usize, plain: F, counted: G) -> Outcome
where
    T: Nested<Leaf = i64>,
    C: Nested<Leaf = Counted<i64>>,
    F: Fn(&T, &T) -> Order,
    G: Fn(&C, &C) -> Order,
{
    let (counted_order, evaluations) = count_evaluations::<C, _>(index, args.delta, counted);
    let (order, Report { percentiles, total }) = time::<T, _>(args, index, plain);
    debug_assert_eq!(order, counted_order);
    log::info!(
        "{:?} at depth {} classified {:?} with {} leaf evaluations",
        strategy,
        T::DEPTH,
        order,
        evaluations
    );
    Outcome {
        strategy,
        depth: T::DEPTH,
        order,
        evaluations,
        percentiles,
        total,
    }
}

/// Single three-way classification
#[inline]
pub fn three_way<T: ThreeWayComparable>(lhs: &T, rhs: &T) -> Order {
    lhs.compare(rhs)
}

/// Two-way classification: `<`, and `==` when `<` fails
#[inline]
pub fn two_way<T: PartialOrd>(lhs: &T, rhs: &T) -> Order {
    two_way_compare(lhs, rhs)
}

/// Runs the selected strategies for one depth
///
/// `P`/`PC` are three-way `Pair` trees with plain and counted leaves, `L`/`LC` the
/// two-way trees.
pub fn run_depth<P, PC, L, LC>(args: &Args) -> anyhow::Result<Vec<Outcome>>
where
    P: Nested<Leaf = i64> + ThreeWayComparable + PartialOrd,
    PC: Nested<Leaf = Counted<i64>> + ThreeWayComparable + PartialOrd,
    L: Nested<Leaf = i64> + PartialOrd,
    LC: Nested<Leaf = Counted<i64>> + PartialOrd,
{
    let index = args.leaf.unwrap_or(P::LEAVES - 1);
    if index >= P::LEAVES {
        anyhow::bail!(
            "leaf index {} out of range for depth {} ({} leaves)",
            index,
            P::DEPTH,
            P::LEAVES
        );
    }

    let mut outcomes = Vec::new();
    if args.runs(Mode::ThreeWay) {
        outcomes.push(run_strategy::<P, PC, _, _>(
            args,
            Mode::ThreeWay,
            index,
            three_way,
            three_way,
        ));
    }
    if args.runs(Mode::Bridged) {
        outcomes.push(run_strategy::<P, PC, _, _>(
            args,
            Mode::Bridged,
            index,
            two_way,
            two_way,
        ));
    }
    if args.runs(Mode::TwoWay) {
        outcomes.push(run_strategy::<L, LC, _, _>(
            args,
            Mode::TwoWay,
            index,
            two_way,
            two_way,
        ));
    }
    Ok(outcomes)
}

/// Dispatches a runtime depth to the monomorphized tree types
macro_rules! dispatch_depth {
    ($args:expr, $($depth:literal => $three:ident, $two:ident);+ $(;)?) => {
        match $args.depth {
            $(
                $depth => $crate::runner::run_depth::<
                    threeway::$three<i64>,
                    threeway::$three<threeway::probe::Counted<i64>>,
                    $crate::legacy::$two<i64>,
                    $crate::legacy::$two<threeway::probe::Counted<i64>>,
                >($args),
            )+
            other => Err(anyhow::anyhow!("unsupported depth {}", other)),
        }
    };
}

/// Runs the harness for `args.depth`
pub fn run(args: &Args) -> anyhow::Result<Vec<Outcome>> {
    dispatch_depth!(args,
        1 => Depth1, TwoWayDepth1;
        2 => Depth2, TwoWayDepth2;
        3 => Depth3, TwoWayDepth3;
        4 => Depth4, TwoWayDepth4;
        5 => Depth5, TwoWayDepth5;
        6 => Depth6, TwoWayDepth6;
        7 => Depth7, TwoWayDepth7;
        8 => Depth8, TwoWayDepth8;
        9 => Depth9, TwoWayDepth9;
        10 => Depth10, TwoWayDepth10;
        11 => Depth11, TwoWayDepth11;
        12 => Depth12, TwoWayDepth12;
        13 => Depth13, TwoWayDepth13;
        14 => Depth14, TwoWayDepth14;
        15 => Depth15, TwoWayDepth15;
        16 => Depth16, TwoWayDepth16;
    )
}

/// Prints outcomes as a table
pub fn print_outcomes(outcomes: &[Outcome]) {
    use prettytable::{Table, row};

    let mut table = Table::new();
    table.add_row(row![
        "strategy", "depth", "order", "leaf evals", "samples", "min", "p50", "p99", "p99.9", "max",
        "total",
    ]);
    for outcome in outcomes {
        let Percentiles {
            count,
            min,
            p50,
            p99,
            p99_9,
            max,
        } = outcome.percentiles;
        table.add_row(row![
            format!("{:?}", outcome.strategy),
            outcome.depth,
            format!("{:?}", outcome.order),
            outcome.evaluations,
            count,
            format!("{:.2}ns", min),
            format!("{:.2}ns", p50),
            format!("{:.2}ns", p99),
            format!("{:.2}ns", p99_9),
            format!("{:.2}ns", max),
            format!("{:.2?}", outcome.total),
        ]);
    }
    table.printstd();
}
