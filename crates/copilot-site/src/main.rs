//! copilot-site CLI - serve the Copilot demo site or freeze it to static HTML.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "copilot-site")]
#[command(about = "Serve the Copilot demo site or freeze it to static HTML")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Freeze every page into static HTML files
    Build {
        /// Output directory
        #[arg(default_value = "docs")]
        output: PathBuf,

        /// Prefix for rewritten links, ending with '/'
        #[arg(long, default_value = "/")]
        base_url: String,
    },

    /// Serve the site
    Serve {
        /// Host to bind to (defaults to config or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to config or 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the site in a browser
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Build { output, base_url } => {
            commands::build::run(&cli.config, output, base_url).await?;
        }
        Commands::Serve { host, port, open } => {
            commands::serve::run(&cli.config, host, port, open).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_defaults_to_docs() {
        let cli = Cli::parse_from(["copilot-site", "build"]);
        match cli.command {
            Commands::Build { output, base_url } => {
                assert_eq!(output, PathBuf::from("docs"));
                assert_eq!(base_url, "/");
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn build_takes_positional_output() {
        let cli = Cli::parse_from(["copilot-site", "build", "public"]);
        assert!(matches!(cli.command, Commands::Build { output, .. } if output == PathBuf::from("public")));
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli = Cli::parse_from(["copilot-site", "-v", "serve", "--port", "8080"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Serve { host: None, port: Some(8080), open: false }
        ));
    }
}
