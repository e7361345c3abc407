use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use statement_engine::{RuleSet, StatementAnalyzer};
use statement_ingest::{StatementFormat, read_statement};
use std::fs;
use std::io::{Write, stderr, stdout};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod state;

use config::Config;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("STATEMENT_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "statement",
    version,
    long_version = LONG_VERSION,
    about = "Categorize bank/UPI statement transactions and summarize them as JSON"
)]
struct Cli {
    /// Log filter (error, warn, info, debug, trace); overrides RUST_LOG and the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a statement file and print the analysis JSON
    Analyze {
        /// Statement file (.json, .csv, or extracted statement text)
        input: PathBuf,

        /// Input layout (default: detect from extension/content)
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,

        /// Page count to report (default: from the input, else config)
        #[arg(long, allow_negative_numbers = true)]
        pages: Option<i64>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Write JSON here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print rejected records to stderr
        #[arg(long)]
        diagnostics: bool,
    },

    /// Print the category for each description
    Categorize {
        #[arg(required = true)]
        descriptions: Vec<String>,
    },

    /// Print the effective category rules in evaluation order
    Rules,

    /// Manage ~/.statement/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config as TOML
    Show,
    /// Print the config file location
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Json,
    Csv,
    Canara,
    Upi,
}

impl FormatArg {
    fn into_format(self) -> Option<StatementFormat> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Json => Some(StatementFormat::Json),
            FormatArg::Csv => Some(StatementFormat::Csv),
            FormatArg::Canara => Some(StatementFormat::CanaraText),
            FormatArg::Upi => Some(StatementFormat::UpiText),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    setup_logging(cli.log_level.as_deref(), &cfg)?;

    let analyzer = StatementAnalyzer::new(RuleSet::with_custom(cfg.rules.clone()));

    match cli.command {
        Command::Analyze {
            input,
            format,
            pages,
            pretty,
            output,
            diagnostics,
        } => {
            let parsed = read_statement(&input, format.into_format())?;
            let page_count = pages
                .or(parsed.page_count.map(i64::from))
                .unwrap_or(cfg.analysis.default_page_count);

            let analysis = analyzer
                .analyze(&parsed.transactions, page_count, parsed.account.as_ref())
                .with_context(|| format!("analyzing {}", input.display()))?;

            if diagnostics {
                let mut err = stderr().lock();
                writeln!(
                    err,
                    "Rejected {} of {} records",
                    analysis.rejected.len(),
                    parsed.transactions.len()
                )?;
                for r in &analysis.rejected {
                    writeln!(err, "  {r}")?;
                }
            }

            let json = if pretty || cfg.analysis.pretty {
                serde_json::to_string_pretty(&analysis.result)?
            } else {
                serde_json::to_string(&analysis.result)?
            };

            match output {
                Some(path) => {
                    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
                    info!(path = %path.display(), "wrote analysis");
                }
                None => {
                    let mut out = stdout().lock();
                    writeln!(out, "{json}")?;
                }
            }
        }

        Command::Categorize { descriptions } => {
            write_categories(analyzer.rules(), &descriptions, stdout().lock())?;
        }

        Command::Rules => {
            let mut out = stdout().lock();
            for (i, rule) in analyzer.rules().rules().iter().enumerate() {
                writeln!(out, "{:>2}. {}: {}", i + 1, rule.category, rule.keywords.join(", "))?;
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => print!("{}", toml::to_string_pretty(&cfg)?),
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

/// One label per description, in argument order.
fn write_categories(rules: &RuleSet, descriptions: &[String], mut out: impl Write) -> Result<()> {
    for d in descriptions {
        writeln!(out, "{}", rules.categorize(d))?;
    }
    Ok(())
}

/// Logs go to stderr; stdout carries the JSON.
fn setup_logging(cli_level: Option<&str>, cfg: &Config) -> Result<()> {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&cfg.logging.level))
            .with_context(|| format!("invalid logging.level {:?} in config", cfg.logging.level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(stderr)
        .init();

    Ok(())
}
