mod command;

use clap::Parser;
use mimalloc::MiMalloc;

use crate::command::*;

#[global_allocator]
static ALLOC: MiMalloc = MiMalloc;

/// Shortest-path queries over named-link graphs.
#[derive(Parser)]
#[command(version, about)]
#[command(propagate_version = true)]
enum Command {
    /// Find the shortest path between two named vertices.
    Path(PathArgs),
    /// Find the shortest path between randomly sampled vertices.
    Random(RandomArgs),
    /// Print the statistics of a graph.
    Stats(StatsArgs),
}

fn main() {
    env_logger::init();
    let command = Command::parse();
    match command {
        Command::Path(args) => path(args),
        Command::Random(args) => random(args),
        Command::Stats(args) => stats(args),
    }
}
