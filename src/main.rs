mod cli;
mod difficulty;
mod display;
mod doomsday;
mod prompt;
mod round;
mod sampler;
mod session;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::run(cli);
}
