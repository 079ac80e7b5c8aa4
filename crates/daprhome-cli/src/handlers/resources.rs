//! Resources-dir command handler.

use anyhow::Result;
use daprhome_core::select_read_path;

use crate::CliContext;

pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", select_read_path(&ctx.layout).display());
    Ok(())
}
