use clap::Parser;

use crate::session;

#[derive(Parser)]
#[command(name = "datle")]
#[command(about = "Guess the weekday of a random date", long_about = None)]
pub struct Cli {}

pub fn run(_cli: Cli) {
    session::play();
}
