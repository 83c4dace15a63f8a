use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

use valid_data_url::{Base64Policy, ParserOptions};

pub const USAGE: &str = "usage: valid-data-url [--validate | --decode] [--forgiving] [--lowercase-names] [--file PATH] [URL ...]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One JSON report per input
    Report,
    /// `true`/`false` per input
    Validate,
    /// Raw payload bytes of a single input
    Decode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub mode: Mode,
    pub options: ParserOptions,
    pub file: Option<PathBuf>,
    pub urls: Vec<String>,
}

pub fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut mode = Mode::Report;
    let mut options = ParserOptions::default();
    let mut file = None;
    let mut urls = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--validate" | "--decode" => {
                let requested = if arg == "--validate" { Mode::Validate } else { Mode::Decode };
                if mode != Mode::Report && mode != requested {
                    bail!("--validate and --decode cannot be combined\n{}", USAGE);
                }
                mode = requested;
            }
            "--forgiving" => options.base64_policy = Base64Policy::Forgiving,
            "--lowercase-names" => options.preserve_name_case = false,
            "--file" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--file requires a path\n{}", USAGE))?;
                file = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{}'\n{}", flag, USAGE),
            url => urls.push(url.to_string()),
        }
    }

    Ok(Args { mode, options, file, urls })
}

/// Gather inputs from the command line, `--file`, or stdin when neither is given.
pub fn collect_inputs<R: BufRead>(args: &Args, stdin: R) -> Result<Vec<String>> {
    let mut inputs = args.urls.clone();

    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file '{}'", path.display()))?;
        inputs.extend(
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string),
        );
    }

    if args.urls.is_empty() && args.file.is_none() {
        for line in stdin.lines() {
            let line = line.context("Failed to read stdin")?;
            if !line.trim().is_empty() {
                inputs.push(line);
            }
        }
    }

    Ok(inputs)
}
