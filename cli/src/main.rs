use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use valid_data_url::Parser;

mod args;
mod report;

use crate::args::{Args, Mode};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    let args = args::parse_args(std::env::args().skip(1))?;
    debug!("Arguments: {:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let all_ok = run(&args, io::stdin().lock(), &mut out)?;
    out.flush()?;

    if !all_ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Process every input and write the results to `out`.
///
/// Returns `false` if any input was invalid or failed to decode.
fn run<R: BufRead, W: Write>(args: &Args, stdin: R, out: &mut W) -> Result<bool> {
    let parser = Parser::with_options(args.options);
    let inputs = args::collect_inputs(args, stdin)?;

    if inputs.is_empty() {
        bail!("No data URLs given\n{}", args::USAGE);
    }
    info!("Processing {} input(s)", inputs.len());

    match args.mode {
        Mode::Validate => {
            let mut all_valid = true;
            for input in &inputs {
                let valid = parser.validate(input);
                all_valid &= valid;
                writeln!(out, "{}", valid)?;
            }
            Ok(all_valid)
        }
        Mode::Decode => {
            if inputs.len() != 1 {
                bail!("--decode takes exactly one data URL, got {}", inputs.len());
            }
            let parsed = parser.parse(&inputs[0])?;
            let bytes = parsed
                .to_buffer()
                .context("Failed to materialize payload")?;
            out.write_all(&bytes)?;
            Ok(true)
        }
        Mode::Report => {
            let mut all_ok = true;
            for input in &inputs {
                let report = report::build_report(&parser, input);
                all_ok &= report.is_ok();
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
            Ok(all_ok)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(list: &[&str], stdin: &str) -> Result<(bool, String)> {
        let args = args::parse_args(list.iter().map(|s| s.to_string()))?;
        let mut out = Vec::new();
        let ok = run(&args, stdin.as_bytes(), &mut out)?;
        Ok((ok, String::from_utf8(out)?))
    }

    #[test]
    fn test_validate_mode() {
        let (ok, output) = run_with(&["--validate", "data:,x", "data:HelloWorld"], "").unwrap();
        assert!(!ok);
        assert_eq!(output, "true\nfalse\n");
    }

    #[test]
    fn test_decode_mode() {
        let (ok, output) = run_with(&["--decode", "data:text/plain;base64,SGVsbG8="], "").unwrap();
        assert!(ok);
        assert_eq!(output, "Hello");

        let (_, output) = run_with(&["--decode"], "data:text/html,%3Ch1%3E\n").unwrap();
        assert_eq!(output, "%3Ch1%3E");
    }

    #[test]
    fn test_decode_errors() {
        assert!(run_with(&["--decode", "data:,a", "data:,b"], "").is_err());
        assert!(run_with(&["--decode", "data:HelloWorld"], "").is_err());
        assert!(run_with(&["--decode", "data:;base64,SGVsbG8"], "").is_err());
        assert!(run_with(&["--decode", "--forgiving", "data:;base64,SGVsbG8"], "").is_ok());
    }

    #[test]
    fn test_report_mode() {
        let (ok, output) = run_with(&[], "data:,Hello\n").unwrap();
        assert!(ok);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["byteLength"], 5);
        assert_eq!(value["parsed"]["data"], "Hello");
    }

    #[test]
    fn test_no_inputs() {
        assert!(run_with(&[], "\n\n").is_err());
    }
}
