//! Command-line front end: prints the comparison report for each value.
//!
//! Usage:
//!   cargo run -p hexcmp --features cli -- 0x1A ff -ff
//!   echo 0x1A | cargo run -p hexcmp --features cli

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hexcmp::classifier::{Classifier, Label, LinearClassifier, Predictor};
use hexcmp::parser::parse;
use hexcmp::report::Report;
use serde::Serialize;

#[derive(Parser)]
#[command(version, about = "Compare hexadecimal values against 2", long_about = None)]
struct Cli {
    /// Hex values; read one per line from stdin when omitted.
    values: Vec<String>,

    /// Linear model (JSON) used to also label each value.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Print one JSON report per line.
    #[arg(long)]
    json: bool,
}

/// One `--json` output line: the report fields plus the optional label.
#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    prediction: Option<Label>,
}

fn read_inputs(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            out.push(line);
        }
    }
    Ok(out)
}

/// Report every input on `out`; problems go to `err` and processing
/// continues. Returns false if any input was invalid or unclassifiable.
fn run<C: Classifier>(
    inputs: &[String],
    predictor: Option<&Predictor<C>>,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut all_valid = true;
    for input in inputs {
        let parsed = match parse(input) {
            Ok(p) => p,
            Err(e) => {
                writeln!(err, "Invalid input: {}", e)?;
                all_valid = false;
                continue;
            }
        };
        let report = Report::from_parsed(input, &parsed);

        let prediction = match predictor.map(|p| p.predict_parsed(&parsed)) {
            Some(Ok(label)) => Some(label),
            Some(Err(e)) => {
                writeln!(err, "Prediction failed for {:?}: {}", input, e)?;
                all_valid = false;
                None
            }
            None => None,
        };

        if json {
            let line = JsonLine {
                report: &report,
                prediction,
            };
            writeln!(out, "{}", serde_json::to_string(&line)?)?;
        } else {
            writeln!(out, "{}", report)?;
            if let Some(label) = prediction {
                writeln!(out, "Model Prediction: {}", label)?;
            }
            writeln!(out, "---")?;
        }
    }
    Ok(all_valid)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("{} value(s) on the command line", cli.values.len());

    let predictor = match &cli.model {
        Some(path) => Some(Predictor::new(LinearClassifier::load(path)?)),
        None => None,
    };
    let inputs = if cli.values.is_empty() {
        read_inputs(io::stdin().lock())?
    } else {
        cli.values.clone()
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let ok = run(
        &inputs,
        predictor.as_ref(),
        cli.json,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
