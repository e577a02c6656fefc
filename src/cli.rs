//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::config::SortMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect the navigation menus of a tola site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: tola.toml)
    #[arg(short = 'C', long, default_value = "tola.toml")]
    pub config: PathBuf,

    /// Print cache and assembly diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List menu names and their top-level entry counts
    List,

    /// Print menu trees in the configured order
    Show {
        /// Only print this menu
        menu: Option<String>,

        /// Ordering to apply (overrides [navigation.default_sort])
        #[arg(short, long, value_enum)]
        by: Option<SortMode>,

        /// Reverse the ordering
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        reverse: Option<bool>,

        /// Maximum number of entries per level
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "tola-nav", "-C", "site.toml", "show", "main", "--by", "name", "--reverse", "-l", "3",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match cli.command {
            Commands::Show { menu, by, reverse, limit } => {
                assert_eq!(menu.as_deref(), Some("main"));
                assert_eq!(by, Some(SortMode::Name));
                assert_eq!(reverse, Some(true));
                assert_eq!(limit, Some(3));
            }
            Commands::List => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["tola-nav", "list"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("tola.toml"));
        assert!(cli.root.is_none());
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }
}
