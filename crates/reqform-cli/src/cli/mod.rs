//! CLI for the reqform request-intake tooling.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use reqform_core::config;
use reqform_core::rules::{PageType, WorkType};

use commands::{run_calc, run_check, run_completions, run_rules, run_validate};

/// Top-level CLI for reqform.
#[derive(Debug, Parser)]
#[command(name = "reqform")]
#[command(about = "reqform: URL naming-rule validation and calculator tooling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate a URL against the naming rule for a page type.
    Validate {
        /// Candidate URL (e.g. https://example.com/lp_line/lp2/).
        url: String,
        /// Page-type category (see `reqform rules` for the list).
        #[arg(long, value_name = "TYPE")]
        page_type: PageType,
        /// Also probe whether the URL already resolves to live content
        /// (advisory; never affects the exit code).
        #[arg(long)]
        check_exists: bool,
        /// Print the structured result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Probe whether a URL currently resolves to live content (HEAD request).
    Check {
        /// URL to probe.
        url: String,
        /// Print the structured result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show URL naming conventions per page type and required URL fields
    /// per work type.
    Rules {
        /// Limit output to one page type.
        #[arg(long, value_name = "TYPE")]
        page_type: Option<PageType>,
        /// Show which URL fields the given work type requires.
        #[arg(long, value_name = "TYPE")]
        work_type: Option<WorkType>,
    },

    /// Feed a key sequence through the calculator engine (e.g. "5+3*2=").
    /// Keys: digits, '.', '+', '-', '*', '/', '%', '=', '<' delete, 'c' clear.
    Calc {
        /// Key sequence to press.
        keys: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate {
                url,
                page_type,
                check_exists,
                json,
            } => run_validate(&cfg, &url, page_type, check_exists, json).await?,
            CliCommand::Check { url, json } => run_check(&cfg, &url, json).await?,
            CliCommand::Rules {
                page_type,
                work_type,
            } => run_rules(page_type, work_type)?,
            CliCommand::Calc { keys } => run_calc(&keys)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
