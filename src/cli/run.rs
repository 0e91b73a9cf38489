//! Dispatch a parsed command line to its command handler.
//!
//! Editing commands report their outcome and map it to an exit status; `init`
//! decides its own status. `serve` never reaches this point.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{create::create, init::init, insert_key::insert_key},
    exit_status::ExitStatus,
    report,
};

pub fn run(Arguments { command }: Arguments, verbose: bool) -> Result<ExitStatus> {
    let outcome = match command {
        Some(Command::Create(cmd)) => create(cmd)?,
        Some(Command::InsertKey(cmd)) => insert_key(cmd)?,
        Some(Command::Init) => return init(),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    };

    report::print(&outcome, verbose);
    Ok(ExitStatus::from(&outcome))
}
