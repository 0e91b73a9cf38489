use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;
pub mod terminal;

pub use args::{Arguments, Command, CommonArgs, CreateCommand, InsertKeyCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args, verbose)
}
