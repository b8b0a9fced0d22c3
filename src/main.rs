#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! make-payload — build base64url(JSON) prefill payloads from the CLI.

mod cli;
mod commands;
mod payload;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, debug_requested, scan, write_error};

fn main() {
    let cli = Cli::parse();
    let flags = scan(&cli.args);

    let ctx = OutputCtx::new(debug_requested(&flags));

    match commands::run(&flags, &ctx) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
