//! Verify command handler.
//!
//! Runs `dapr` with the given arguments, optionally stops the app once the
//! session reports ready, and checks that everything exited cleanly.

use anyhow::Result;
use daprhome_runtime::{HarnessError, run_command, run_session, stop_args};
use tracing::info;

use crate::{CliContext, CliError};

pub async fn execute(ctx: &CliContext, args: &[String], stop_app_id: Option<&str>) -> Result<()> {
    let dapr = ctx.dapr();
    let stop_with = dapr.clone();

    let transcript = run_session(&dapr, args, move || async move {
        if let Some(app_id) = stop_app_id {
            info!(%app_id, "Stopping app");
            run_command(&stop_with, &stop_args(app_id)).await?;
        }
        Ok::<(), HarnessError>(())
    })
    .await
    .map_err(CliError::from)?;

    if !transcript.ready {
        info!("Readiness marker was never printed");
    }
    transcript.verify().map_err(CliError::from)?;

    println!("dapr exited cleanly");
    Ok(())
}
