//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// SaaS Starter - users, blog posts and contact messages over MongoDB
#[derive(Parser, Debug)]
#[command(name = "saas-starter")]
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

    /// Print the store diagnostics report as JSON
    Diagnose(DiagnoseArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "PORT")]
    pub port: u16,

    /// Keep documents in process memory instead of MongoDB
    #[arg(long)]
    pub in_memory: bool,
}

/// Arguments for the diagnose command
#[derive(Parser, Debug)]
pub struct DiagnoseArgs {
    /// Print compact JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["saas-starter", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "0.0.0.0");
                assert_eq!(args.port, 8000);
                assert!(!args.in_memory);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "saas-starter",
            "-v",
            "serve",
            "--port",
            "9001",
            "--in-memory",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 9001);
                assert!(args.in_memory);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_diagnose_compact_flag() {
        let cli = Cli::try_parse_from(["saas-starter", "diagnose", "--compact"]).unwrap();
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Diagnose(DiagnoseArgs { compact: true })));
    }
}
