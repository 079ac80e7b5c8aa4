//! Paths command handler.
//!
//! Displays every resolved path for diagnosing layout issues.

use anyhow::Result;
use daprhome_core::paths::ResolvedPaths;

use crate::CliContext;

/// Print resolved paths as `key = value` lines, or JSON with `--json`.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let paths = ResolvedPaths::resolve(&ctx.layout);
    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        println!("{paths}");
    }
    Ok(())
}
