use clap::Parser;

mod cli;
mod commands;
mod domain;
mod roster;
mod services;

pub use crate::cli::*;
pub use crate::domain::models::*;
pub use crate::services::output::*;
pub use crate::services::storage::*;

use crate::roster::RosterError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        let code = if e.downcast_ref::<RosterError>().is_some() {
            "NOT_FOUND"
        } else {
            "SOURCE_ERROR"
        };
        print_error(cli.json, code, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let people = roster::load_roster(&cli.source)?;
    commands::handle_query_commands(cli, &people)
}
