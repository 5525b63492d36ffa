use anyhow::Context;
use clap::Parser;
use threeway_bench::{
    config::Args,
    runner::{print_outcomes, run},
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    log::info!("Running with {:#?}", args);

    // deep trees live on the stack, so run on a thread sized by the caller
    let stack_size = args.stack_bytes()?;
    let worker_args = args.clone();
    let outcomes = std::thread::Builder::new()
        .name("classify".into())
        .stack_size(stack_size)
        .spawn(move || run(&worker_args))
        .context("failed to spawn benchmark thread")?
        .join()
        .map_err(|_| anyhow::anyhow!("benchmark thread panicked at depth {}", args.depth))??;

    print_outcomes(&outcomes);
    Ok(())
}
