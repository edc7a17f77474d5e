use clap::{Parser, Subcommand};
use dextools::{inspect, progress};

#[derive(Parser)]
struct Opts {
    #[command(subcommand)]
    tool: ToolOpts,
}

#[derive(Subcommand)]
enum ToolOpts {
    /// Print the contents of every box in a save.
    Inspect(inspect::Opts),
    /// Compare a save against an expected checklist.
    Progress(progress::Opts),
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().filter("RUST_LOG"));

    let opts = Opts::parse();
    match opts.tool {
        ToolOpts::Inspect(opts) => inspect::run(opts),
        ToolOpts::Progress(opts) => progress::run(opts),
    }
    .map_err(|err| {
        log::error!("Failed to execute command: {err:#}");
        err
    })
}
