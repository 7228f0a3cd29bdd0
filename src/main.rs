#[macro_use]
extern crate log;

mod cli;
mod config;

fn main() {
    env_logger::init();
    cli::run();
}
