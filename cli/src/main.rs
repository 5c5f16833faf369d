//! covey - find the heaviest teams whose members resist every attacking type

mod data;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use covey_search::resistances;
use report::Format;

/// Find the heaviest teams in which every attacking type is resisted by someone
#[derive(Parser, Debug)]
#[command(name = "covey", version)]
struct Cli {
    /// Interaction rule file (TOML or JSON); defaults to the standard 18-type chart
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Roster file (TOML or JSON); defaults to the built-in reference roster
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank fully covering teams by total weight (the default)
    Search(SearchArgs),

    /// Show one member's multipliers against every attacking type
    Inspect {
        /// Member name (case-insensitive)
        name: String,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Team size
    #[arg(long, default_value_t = 6)]
    size: usize,

    /// Number of teams to show
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Rank partial covers too, fewest uncovered types first
    #[arg(long)]
    closest: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            size: 6,
            top: 10,
            closest: false,
            format: Format::Text,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run_search(cli: &Cli, args: &SearchArgs) -> Result<()> {
    let table = data::load_table(cli.rules.as_deref())?;
    let roster = data::load_roster(cli.roster.as_deref())?;

    let output = if args.closest {
        let results = covey_search::closest(roster.members(), &table, args.size, args.top)
            .context("Search failed")?;
        tracing::info!(results = results.len(), size = args.size, "Closest search finished");
        report::closest(&results, args.format)?
    } else {
        let teams = covey_search::search(roster.members(), &table, args.size, args.top)
            .context("Search failed")?;
        tracing::info!(teams = teams.len(), size = args.size, "Search finished");
        report::teams(&teams, args.format)?
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn run_inspect(cli: &Cli, name: &str, format: Format) -> Result<()> {
    let table = data::load_table(cli.rules.as_deref())?;
    let roster = data::load_roster(cli.roster.as_deref())?;

    let member = roster
        .find(name)
        .with_context(|| format!("No roster member named '{}'", name))?;
    let profile = resistances(member, &table)?;

    println!("{}", report::profile(member, &profile, &table, format)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        None => run_search(&cli, &SearchArgs::default()),
        Some(Command::Search(args)) => run_search(&cli, args),
        Some(Command::Inspect { name, format }) => run_inspect(&cli, name, *format),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_is_search() {
        let cli = Cli::parse_from(["covey"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::parse_from(["covey", "search", "--size", "3", "--top", "5", "--format", "json"]);
        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.size, 3);
                assert_eq!(args.top, 5);
                assert_eq!(args.format, Format::Json);
                assert!(!args.closest);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_roster_flag() {
        let cli = Cli::parse_from(["covey", "inspect", "Nemo", "--roster", "team.toml"]);
        assert_eq!(cli.roster, Some(PathBuf::from("team.toml")));
        assert!(matches!(cli.command, Some(Command::Inspect { ref name, .. }) if name == "Nemo"));
    }
}
