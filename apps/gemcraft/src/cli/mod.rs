//! # Gemcraft CLI Module
//!
//! This module implements the CLI interface for gemcraft.
//!
//! ## Available Commands
//!
//! - `eval` - Build a recipe and show its valuation
//! - `flatten` - Turn a parenthesized expression into equations
//! - `colors` - Show the base gem table

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use gemcraft_core::GemError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Gemcraft - gem fusion calculator
///
/// Combines base gems into composites and reports what each combination
/// is worth.
#[derive(Parser, Debug)]
#[command(name = "gemcraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a recipe and show the resulting gem
    Eval {
        /// Recipe text: a parenthesized expression or `;`-separated equations
        recipe: Option<String>,

        /// Read the recipe from a file instead
        #[arg(short, long, conflicts_with = "recipe")]
        file: Option<PathBuf>,

        /// Include power and attributes in the readout
        #[arg(short = 'a', long)]
        show_all: bool,

        /// Group by color name instead of effect name
        #[arg(long)]
        use_colors: bool,
    },

    /// Flatten a parenthesized expression into equations
    Flatten {
        /// Expression such as `(o+o)+o`
        expression: String,
    },

    /// Show the base gem colors and their seed attributes
    Colors,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), GemError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Eval {
            recipe,
            file,
            show_all,
            use_colors,
        }) => {
            let options = EvalOptions {
                show_all: show_all || config.display.show_all,
                use_colors: use_colors || config.display.use_colors,
                json_mode,
            };
            cmd_eval(recipe.as_deref(), file.as_deref(), &options)
        }
        Some(Commands::Flatten { expression }) => cmd_flatten(&expression, json_mode),
        Some(Commands::Colors) | None => cmd_colors(config.display.use_colors, json_mode),
    }
}
