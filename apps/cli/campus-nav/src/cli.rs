use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "campus-nav", version, about = "Find routes between campus locations")]
pub struct Cli {
    /// Directory holding config.json
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Routing service base URL, overrides config and CAMPUS_NAV_BASE_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory for campus-nav.log
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Echo debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the selectable locations of a campus
    Locations {
        /// Navigation context the campus is inferred from, e.g. a page URL
        #[arg(long)]
        context: Option<String>,
    },

    /// Find a path between two locations
    Route {
        #[arg(long, default_value = "")]
        from: String,

        #[arg(long, default_value = "")]
        to: String,

        /// Algorithm token passed to the routing service as typed (known: bfs, dijkstra)
        #[arg(long)]
        algorithm: Option<String>,

        /// Navigation context the campus is inferred from, e.g. a page URL
        #[arg(long)]
        context: Option<String>,
    },
}
