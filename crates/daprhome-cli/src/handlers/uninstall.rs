//! Uninstall command handler.

use anyhow::Result;
use daprhome_runtime::{run_command, uninstall_args};

use crate::{CliContext, CliError};

pub async fn execute(ctx: &CliContext, args: &[String]) -> Result<()> {
    let full = uninstall_args(args, &ctx.settings);
    let output = run_command(ctx.dapr(), &full)
        .await
        .map_err(CliError::from)?;
    print!("{output}");
    Ok(())
}
