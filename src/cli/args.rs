//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Rust CRUD Starter - Layered CRUD API template
#[derive(Parser, Debug)]
#[command(name = "rust-crud-starter")]
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
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,

    /// Serve from the in-memory adapter instead of the database
    #[arg(long)]
    pub in_memory: bool,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_migrate_subcommands() {
        let cli = Cli::try_parse_from(["rust-crud-starter", "migrate", "status"]).unwrap();
        match cli.command {
            Commands::Migrate(args) => assert!(matches!(args.action, MigrateAction::Status)),
            _ => panic!("expected migrate command"),
        }

        let cli = Cli::try_parse_from(["rust-crud-starter", "migrate", "up"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Up
            })
        ));
    }

    #[test]
    fn parses_serve_flags() {
        let cli =
            Cli::try_parse_from(["rust-crud-starter", "serve", "--port", "8080", "--in-memory"])
                .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 8080);
                assert!(args.in_memory);
            }
            _ => panic!("expected serve command"),
        }
    }
}
