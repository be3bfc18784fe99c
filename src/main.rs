//! Shelf CLI - Terminal companion for browsing remote product catalogs

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod viewmodel;

use cli::{CacheCommands, Cli, CommandContext, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::init();
    }

    match cli.command {
        Commands::Init => cli::init::run(cli.config.as_deref()).await,
        Commands::Status => cli::status::run(cli.config.as_deref()),
        Commands::Version => {
            println!("shelf version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Categories { tree } => {
            let ctx = context(&cli)?;
            cli::categories::run(&ctx, tree).await
        }
        Commands::Browse {
            ref slug,
            ref subcategory,
            ref filter,
            fresh,
        } => {
            let ctx = context(&cli)?;
            cli::browse::run(
                &ctx,
                slug,
                subcategory.as_deref(),
                filter.as_deref(),
                fresh,
            )
            .await
        }
        Commands::Search {
            ref query,
            suggestions,
        } => {
            let ctx = context(&cli)?;
            cli::search::run(&ctx, query, suggestions).await
        }
        Commands::Product { ref id } => {
            let ctx = context(&cli)?;
            cli::product::run(&ctx, id).await
        }
        Commands::Featured => {
            let ctx = context(&cli)?;
            cli::featured::run(&ctx).await
        }
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Stats => cli::cache::stats(cli.format),
            CacheCommands::Clear => cli::cache::clear(cli.format),
            CacheCommands::Path => cli::cache::path(),
        },
    }
}

fn context(cli: &Cli) -> Result<CommandContext> {
    CommandContext::new(
        cli.format,
        cli.base_url.as_deref(),
        cli.config.as_deref(),
        cli.no_cache,
    )
}
