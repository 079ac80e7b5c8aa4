//! Migrate command handler.

use anyhow::Result;
use daprhome_core::paths::{
    DirectoryCreationStrategy, InstallLayout, MigrationOutcome, ensure_directory,
    migrate_directory,
};

use crate::{CliContext, CliError};

/// Create the resources directory if needed, then migrate into it.
pub fn run(layout: &InstallLayout) -> Result<MigrationOutcome, CliError> {
    let resources = layout.resources_dir();
    ensure_directory(&resources, DirectoryCreationStrategy::AutoCreate)?;
    Ok(migrate_directory(&layout.components_dir(), &resources)?)
}

pub fn execute(ctx: &CliContext) -> Result<()> {
    let outcome = run(&ctx.layout)?;
    let components = ctx.layout.components_dir();
    let resources = ctx.layout.resources_dir();

    match &outcome {
        MigrationOutcome::AlreadyMigrated => {
            println!("{} is already linked to {}", components.display(), resources.display());
        }
        MigrationOutcome::Linked => {
            println!("Linked {} -> {}", components.display(), resources.display());
        }
        MigrationOutcome::Moved { files } | MigrationOutcome::Resumed { files } => {
            println!(
                "Moved {} file(s) from {} to {}",
                files.len(),
                components.display(),
                resources.display()
            );
            for file in files {
                println!("  {file}");
            }
        }
    }
    Ok(())
}
