//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagdex")]
#[command(about = "Tag classification and collection builder for static sites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Build the tag collections and pass assets through
    Build {
        /// Output directory (default: site.output from tagdex.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the emitted JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the canonical tags in use
    Tags {
        /// Show the normalized slug next to each title
        #[arg(long)]
        slugs: bool,
    },

    /// Build a CDN image URL for a path
    MediaUrl {
        /// Image path or source URL
        path: String,

        /// CDN transformation string (e.g. w_300,h_200)
        transforms: String,
    },
}
