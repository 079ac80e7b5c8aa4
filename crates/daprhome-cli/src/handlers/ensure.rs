//! Ensure command handler.

use anyhow::Result;
use daprhome_runtime::ensure_installation;

use crate::{CliContext, CliError};

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let report = ensure_installation(&ctx.layout, &ctx.settings, &ctx.installer)
        .await
        .map_err(CliError::from)?;

    if report.installed {
        println!("Installed Dapr into {}", ctx.layout.install_root().display());
    } else {
        println!("Dapr is installed at {}", ctx.layout.install_root().display());
    }
    for file in &report.slim_components {
        println!("Created {}", ctx.layout.resources_dir().join(file).display());
    }
    Ok(())
}
