use std::io;

use anyhow::Result;

use super::super::{args::InsertKeyCommand, terminal::TerminalHost};
use crate::core::{CommandContext, CommandOutcome, workflow::insert_existing_translation_key};

pub fn insert_key(cmd: InsertKeyCommand) -> Result<CommandOutcome> {
    let ctx = CommandContext::new(&cmd.common.root)?;
    let mut host = TerminalHost::new(io::stdin().lock(), io::stdout().lock())
        .with_active_document(cmd.active)
        .with_key(cmd.key);

    insert_existing_translation_key(&ctx, &mut host)
}
