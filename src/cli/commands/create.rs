use std::io;

use anyhow::Result;

use super::super::{args::CreateCommand, terminal::TerminalHost};
use crate::core::{CommandContext, CommandOutcome, workflow::create_translation};

pub fn create(cmd: CreateCommand) -> Result<CommandOutcome> {
    let ctx = CommandContext::new(&cmd.common.root)?;
    let mut host = TerminalHost::new(io::stdin().lock(), io::stdout().lock())
        .with_active_document(cmd.active)
        .with_selection(cmd.selection)
        .with_key(cmd.key)
        .with_values(cmd.values);

    create_translation(&ctx, &mut host)
}
