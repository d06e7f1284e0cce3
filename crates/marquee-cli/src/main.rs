//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers, which reach the catalog only through
//! `CliContext`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use marquee_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so tables on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            neighbor_window,
        } => {
            handlers::serve::execute(&config, port, neighbor_window).await?;
        }
        Commands::List { page, jump } => {
            let ctx = bootstrap(&config)?;
            handlers::list::execute(&ctx, page, jump).await?;
        }
        Commands::Show { id } => {
            let ctx = bootstrap(&config)?;
            handlers::show::execute(&ctx, id).await?;
        }
        Commands::Browse { max_pages } => {
            let ctx = bootstrap(&config)?;
            handlers::browse::execute(&ctx, max_pages).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            eprintln!("{}", console::style(format!("Error: {cli_err}")).red());
            std::process::exit(cli_err.exit_code());
        }
        return Err(err);
    }

    Ok(())
}
