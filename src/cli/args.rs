//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Adverts API - users and adverts over HTTP
#[derive(Parser, Debug)]
#[command(name = "adverts-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the schema if needed and start the HTTP server
    Serve(ServeArgs),

    /// Create the database schema and exit
    InitDb,
}

/// Arguments for the serve command; unset values come from the configuration
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}
