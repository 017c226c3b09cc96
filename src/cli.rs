//! Command-line interface for the Mancala server.

use clap::{Parser, Subcommand};

/// Mancala game server
#[derive(Parser, Debug)]
#[command(name = "mancala_server")]
#[command(about = "Mancala game server with REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Path to the database file (created if it doesn't exist)
        #[arg(long, default_value = "mancala.db")]
        db_path: String,

        /// Keep games in memory instead of the database
        #[arg(long)]
        in_memory: bool,
    },
}
