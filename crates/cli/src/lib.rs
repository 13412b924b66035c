use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use pathmatch_search::{rank, Query};

mod args;
mod error;
mod output;

pub use args::{Cli, USAGE};
pub use error::{CliError, Result};
pub use output::{score_prefix, write_matches, OutputFormat};

/// Parses `args` (program name first) and ranks the paths read from `input`
/// or from the files named on the command line.
pub fn invoke<I, T, R, W>(args: I, input: R, output: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let cli = Cli::try_parse_args(args)?;
    run(&cli, input, output)
}

pub fn run<R: BufRead, W: Write>(cli: &Cli, mut input: R, output: &mut W) -> Result<()> {
    let mut candidates = Vec::new();
    if cli.files.is_empty() {
        read_candidates(&mut input, &mut candidates)?;
    }
    for path in &cli.files {
        if path == Path::new("-") {
            read_candidates(&mut input, &mut candidates)?;
        } else {
            let file = File::open(path)?;
            read_candidates(&mut BufReader::new(file), &mut candidates)?;
        }
    }
    log::debug!("read {} candidate paths", candidates.len());

    let query = Query::build(&cli.query);
    let matches = rank(&query, &candidates, cli.rank_options());

    let format = if cli.json {
        OutputFormat::Json
    } else if cli.scores {
        OutputFormat::WithScores
    } else {
        OutputFormat::Plain
    };
    write_matches(output, &matches, format)
}

/// Appends one candidate per line, without the line terminator.
fn read_candidates<R: BufRead>(reader: &mut R, out: &mut Vec<String>) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        out.push(String::from_utf8_lossy(&buf).into_owned());
    }
}
