use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use pathmatch_search::RankOptions;

use crate::error::{CliError, Result};

pub const USAGE: &str = "usage: pathmatch [-l LIMIT] [-su] QUERY [FILE...]";

#[derive(Parser, Debug)]
#[command(name = "pathmatch")]
#[command(about = "Rank paths read one per line by how well they fuzzy-match QUERY")]
#[command(version)]
#[command(override_usage = "pathmatch [-l LIMIT] [-su] QUERY [FILE...]")]
#[command(help_template = "usage: {usage}\n\n{about}\n\n{all-args}")]
pub struct Cli {
    /// Characters to match, in order, against each path
    pub query: String,

    /// Files to read paths from (stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Limit results to top N matches
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Prefix matched paths with their scores
    #[arg(short, long)]
    pub scores: bool,

    /// Do not sort matched paths by score
    #[arg(short = 'u', long)]
    pub no_sort: bool,

    /// Print matches as a JSON array of {path, score}
    #[arg(long, conflicts_with = "scores")]
    pub json: bool,

    /// Score paths on all cores
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn try_parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(from_clap)
    }

    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            sort: !self.no_sort,
            limit: self.limit,
            parallel: self.parallel,
        }
    }

    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            Some(log::LevelFilter::Warn)
        } else if self.verbose {
            Some(log::LevelFilter::Debug)
        } else {
            None
        }
    }
}

fn from_clap(err: clap::Error) -> CliError {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => CliError::Help(err.to_string()),
        ErrorKind::UnknownArgument => {
            let arg = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => String::from("?"),
            };
            CliError::Parse(format!("invalid option: {arg}\n{USAGE}"))
        }
        ErrorKind::MissingRequiredArgument => {
            CliError::Parse(format!("missing mandatory query argument\n{USAGE}"))
        }
        _ => {
            let rendered = err.to_string();
            let reason = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            CliError::Parse(format!("{reason}\n{USAGE}"))
        }
    }
}
