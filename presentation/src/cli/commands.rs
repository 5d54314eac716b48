//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default orb document path for `validate` and `expand`
pub const DEFAULT_ORB_PATH: &str = "orb.yml";

/// CLI arguments for circleci
#[derive(Parser, Debug)]
#[command(name = "circleci")]
#[command(author, version, about = "Work with CircleCI orbs from the command line")]
#[command(long_about = r#"
List public orbs, and validate or expand a local orb.yml against the
CircleCI GraphQL API.

Configuration files are loaded from (in priority order):
1. CIRCLECI_ENDPOINT / CIRCLECI_TOKEN   Environment variables
2. --config <path>                      Explicit config file
3. ./.circleci.toml                     Project-level config
4. ~/.config/circleci/config.toml       Global config

Example:
  circleci orb list
  circleci orb validate -p src/orb.yml
  circleci orb expand > expanded.yml
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// GraphQL endpoint (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// API token (overrides configuration)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Operate on orbs
    Orb(OrbArgs),
}

#[derive(Args, Debug)]
pub struct OrbArgs {
    #[command(subcommand)]
    pub command: OrbCommand,
}

#[derive(Subcommand, Debug)]
pub enum OrbCommand {
    /// List orbs
    List,
    /// Validate an orb.yml
    Validate(OrbPathArgs),
    /// Expand an orb.yml
    Expand(OrbPathArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OrbPathArgs {
    /// Path to orb file
    #[arg(short, long, default_value = DEFAULT_ORB_PATH, value_name = "PATH")]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn orb_command(cli: Cli) -> OrbCommand {
        match cli.command {
            Some(Command::Orb(orb)) => orb.command,
            other => panic!("expected orb command, got {other:?}"),
        }
    }

    #[test]
    fn test_orb_list() {
        let cli = parse(&["circleci", "orb", "list"]);
        assert!(matches!(orb_command(cli), OrbCommand::List));
    }

    #[test]
    fn test_validate_default_path() {
        let cli = parse(&["circleci", "orb", "validate"]);
        match orb_command(cli) {
            OrbCommand::Validate(args) => assert_eq!(args.path, PathBuf::from("orb.yml")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_expand_with_short_path_flag() {
        let cli = parse(&["circleci", "orb", "expand", "-p", "src/my-orb.yml"]);
        match orb_command(cli) {
            OrbCommand::Expand(args) => assert_eq!(args.path, PathBuf::from("src/my-orb.yml")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "circleci",
            "orb",
            "list",
            "-vv",
            "--endpoint",
            "https://example.test/graphql",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.endpoint.as_deref(), Some("https://example.test/graphql"));
    }

    #[test]
    fn test_list_rejects_path_flag() {
        assert!(Cli::try_parse_from(["circleci", "orb", "list", "-p", "x.yml"]).is_err());
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = parse(&["circleci", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
