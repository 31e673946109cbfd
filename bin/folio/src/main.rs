//! Folio CLI
//!
//! Builds the portfolio and blog into static pages.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use folio_core::ThemeMode;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(name = "folio", version, about = "Portfolio and blog static generator")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the site
    Build {
        /// Output directory; overrides build.output_dir
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Include draft posts
        #[arg(long)]
        drafts: bool,
        /// Paint pages in this theme (light or dark) instead of the configured default
        #[arg(long, value_parser = parse_theme)]
        theme: Option<ThemeMode>,
    },
    /// Create a new draft post
    New {
        /// Post slug or path under the content directory (e.g. my-article)
        path: std::path::PathBuf,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            drafts,
            theme,
        } => {
            folio::cmd::build::run(&cli.config, output.as_deref(), drafts, theme)?;
        }
        Commands::New { path } => {
            folio::cmd::new::run(&cli.config, &path)?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

fn parse_theme(name: &str) -> std::result::Result<ThemeMode, String> {
    ThemeMode::from_name(name)
        .ok_or_else(|| format!("unknown theme '{name}', expected light or dark"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["folio", "build", "--output", "dist"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build { output, drafts, theme } => {
                assert_eq!(output, Some(std::path::PathBuf::from("dist")));
                assert!(!drafts);
                assert_eq!(theme, None);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_defaults_to_config_output() {
        let cli = Cli::parse_from(["folio", "build", "--drafts"]);

        match cli.command {
            Commands::Build { output, drafts, .. } => {
                assert!(output.is_none());
                assert!(drafts);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_theme() {
        let cli = Cli::parse_from(["folio", "build", "--theme", "dark"]);
        match cli.command {
            Commands::Build { theme, .. } => assert_eq!(theme, Some(ThemeMode::Dark)),
            _ => panic!("Expected Build command"),
        }

        assert!(Cli::try_parse_from(["folio", "build", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_cli_new_command_parsing() {
        let cli = Cli::parse_from(["folio", "new", "my-article"]);

        match cli.command {
            Commands::New { path } => {
                assert_eq!(path, std::path::PathBuf::from("my-article"));
            }
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["folio", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["folio", "-vvv", "build"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["folio", "--config", "site.toml", "build"]);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
