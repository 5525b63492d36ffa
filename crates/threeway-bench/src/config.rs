use clap::{Parser, ValueEnum};

/// Deepest nesting the harness is compiled for
pub const MAX_DEPTH: u8 = 16;

/// Largest worker stack the harness asks for, in MiB
pub const MAX_STACK_MB: u16 = 4096;

/// Which classification strategies to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// A single `compare` on `Pair` trees
    ThreeWay,
    /// `<` then `==` on `Pair` trees, both bridged from `compare`
    Bridged,
    /// `<` then `==` on `TwoWayPair` trees
    TwoWay,
    /// Every strategy above
    All,
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Nesting depth of the compared trees
    #[clap(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_DEPTH as i64), default_value_t = 14)]
    pub depth: u8,
    /// Classifications per trial
    #[clap(short, long, value_parser, default_value_t = 10_000)]
    pub iterations: usize,
    /// Number of trials
    #[clap(short, long, value_parser, default_value_t = 5)]
    pub trials: usize,
    #[clap(short, long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,
    /// Amount added to the differing leaf of the right-hand tree
    #[clap(long, value_parser, default_value_t = -1, allow_hyphen_values = true)]
    pub delta: i64,
    /// Index of the differing leaf, defaults to the last leaf
    #[clap(long, value_parser)]
    pub leaf: Option<usize>,
    /// Stack size of the benchmark thread in MiB
    #[clap(long, value_parser = clap::value_parser!(u16).range(1..=MAX_STACK_MB as i64), default_value_t = 256)]
    pub stack_mb: u16,
}

impl Args {
    /// Returns `true` if `strategy` is selected by the mode
    pub fn runs(&self, strategy: Mode) -> bool {
        self.mode == Mode::All || self.mode == strategy
    }

    /// Stack size of the benchmark thread in bytes
    pub fn stack_bytes(&self) -> anyhow::Result<usize> {
        match usize::from(self.stack_mb).checked_mul(1024 * 1024) {
            Some(bytes) => Ok(bytes),
            None => anyhow::bail!("stack of {} MiB does not fit in usize", self.stack_mb),
        }
    }
}
