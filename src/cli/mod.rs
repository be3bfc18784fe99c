//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};

pub mod browse;
pub mod cache;
pub mod categories;
pub mod context;
pub mod featured;
pub mod init;
pub mod product;
pub mod search;
pub mod status;

pub use context::CommandContext;

/// Output format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - machine-parseable, one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// Shelf CLI - Terminal companion for browsing remote product catalogs
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SHELF_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override the catalog base URL
    #[arg(long, global = true, env = "SHELF_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "SHELF_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SHELF_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from the catalog
    #[arg(long, global = true, env = "SHELF_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize shelf configuration
    Init,

    /// Show configuration and cache status
    Status,

    /// Display version information
    Version,

    /// List catalog categories
    Categories {
        /// Render the category hierarchy as an indented tree
        #[arg(long)]
        tree: bool,
    },

    /// Browse products within a category
    #[command(after_help = "EXAMPLES:\n  \
            shelf browse tools/drills                     # All products\n  \
            shelf browse tools/drills -s \"Cordless\"       # One subcategory\n  \
            shelf browse tools/drills -f dewalt           # Title/brand filter\n  \
            shelf browse tools/drills --fresh             # Bypass all caches")]
    Browse {
        /// Category slug, e.g. "tools/drills"
        slug: String,

        /// Narrow to one subcategory tag
        #[arg(long, short = 's')]
        subcategory: Option<String>,

        /// Filter by title or brand substring
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Bypass every cache layer for this category
        #[arg(long)]
        fresh: bool,
    },

    /// Search the product index
    Search {
        /// Search query
        query: String,

        /// Show search suggestions instead of results
        #[arg(long)]
        suggestions: bool,
    },

    /// Show full details for one product
    Product {
        /// Product ID
        id: String,
    },

    /// Show featured content sections
    Featured,

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Stats,
    /// Clear all cached data
    Clear,
    /// Print cache directory path
    Path,
}
