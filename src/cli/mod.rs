//! CLI module - Command-line interface for depot

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// depot - transport registry API
#[derive(Parser)]
#[command(name = "depot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file, instead of the default search locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API until Ctrl+C
    #[command(alias = "daemon")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Create sample transport types and transports
    Seed {
        /// Number of transports to create
        #[arg(long, default_value_t = 12)]
        transports: u32,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a user and print its API token
    Add {
        email: String,
        password: String,
        /// Extra role, e.g. `ROLE_ADMIN` (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
    },
    /// List users
    #[command(alias = "ls")]
    List,
    /// Regenerate a user's API token
    Token { email: String },
}

pub use commands::*;
