//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the application.

use clap::{Parser, Subcommand};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Folio workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Install the necessary tools and targets for development
    Setup {},
    /// Serve the web app with hot reload
    Serve {
        /// Build with the release profile
        #[arg(short, long)]
        release: bool,

        /// Port of the development server
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
    /// Build the static site bundle (release profile)
    Bundle {
        /// Copy the bundle to this directory instead of the dx default
        #[arg(short, long)]
        out_dir: Option<String>,
    },
    /// List the workspace crates with their descriptions
    Crates {},
    /// Run tests (workspace by default)
    Test {
        /// Run tests for a specific crate (auto-prefixes with 'folio-' if missing)
        project: Option<String>,
    },
    /// Run doc tests (workspace by default)
    Doctest {
        /// Run doc tests for a specific crate (auto-prefixes with 'folio-' if missing)
        project: Option<String>,
    },
}
