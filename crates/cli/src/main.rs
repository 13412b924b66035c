use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use pathmatch_cli::{run, Cli, CliError};

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(CliError::Help(text)) => {
            print!("{text}");
            io::stdout().flush()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.target(env_logger::Target::Stderr).init();

    let stdin = io::stdin().lock();
    let mut stdout = io::BufWriter::new(io::stdout().lock());
    match run(&cli, stdin, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_broken_pipe() => Ok(ExitCode::SUCCESS),
        Err(err) => Err(err.into()),
    }
}
