//! CLI entry point, the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use daprhome_cli::error::exit_code_for;
use daprhome_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::from_env(cli.install_root));

    match command {
        Commands::Paths { json } => handlers::paths::execute(&ctx, json)?,
        Commands::ResourcesDir => handlers::resources::execute(&ctx)?,
        Commands::Migrate => handlers::migrate::execute(&ctx)?,
        Commands::Ensure => handlers::ensure::execute(&ctx).await?,
        Commands::Verify { stop_app_id, args } => {
            handlers::verify::execute(&ctx, &args, stop_app_id.as_deref()).await?;
        }
        Commands::Uninstall { args } => handlers::uninstall::execute(&ctx, &args).await?,
        Commands::CertCheck {
            expires_at,
            threshold_days,
        } => handlers::cert::execute(&expires_at, threshold_days)?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}
