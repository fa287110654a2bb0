//! Prosemeter CLI binary.

use clap::Parser;
use prosemeter::cli::{args::ProsemeterArgs, commands::execute_command};
use std::process;

fn main() {
    let args = ProsemeterArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
