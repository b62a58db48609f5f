use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use digitcalc::evaluate;
use log::{debug, info, warn};

/// Expressions evaluated by `--samples`: a mix of valid input and each kind
/// of rejection.
const SAMPLES: [&str; 9] = ["1+1*",
                            "(2+2)*2",
                            "2+2*2",
                            "1/2",
                            "-1*5+7-(-9/8)",
                            "3 + 5 * (2 -)",
                            ")+",
                            "22+22",
                            "12 + 5"];

/// digitcalc evaluates arithmetic expressions made of single digits,
/// `+ - * /`, parentheses and unary minus.
///
/// Without expressions or `--samples`, expressions are read from standard
/// input, one per line, until end of input or `quit`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat each argument as a file holding one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Evaluate the built-in sample expressions first.
    #[arg(short, long)]
    samples: bool,

    /// Print only the value or the error message.
    #[arg(short, long)]
    quiet: bool,

    expressions: Vec<String>,
}

/// Evaluates one expression and writes the outcome to `out`. Returns whether
/// the evaluation succeeded.
fn report(out: &mut impl Write, expression: &str, quiet: bool) -> io::Result<bool> {
    let result = evaluate(expression);
    debug!("'{expression}' -> {result:?}");

    match (result, quiet) {
        (Ok(value), false) => writeln!(out, "Result for expression '{expression}': {value}")?,
        (Ok(value), true) => writeln!(out, "{value}")?,
        (Err(e), false) => writeln!(out, "Error for expression '{expression}': {e}")?,
        (Err(e), true) => writeln!(out, "{e}")?,
    }
    Ok(result.is_ok())
}

/// Evaluates every expression in `expressions`. Returns `false` if any of
/// them was rejected or the output could not be written.
fn run_expressions(expressions: &[String], out: &mut impl Write, quiet: bool) -> bool {
    let mut failures = 0;
    for expression in expressions {
        match report(out, expression, quiet) {
            Ok(true) => {},
            Ok(false) => failures += 1,
            Err(e) => {
                warn!("cannot write result: {e}");
                return false;
            },
        }
    }
    info!("evaluated {} expressions, {failures} rejected", expressions.len());
    failures == 0
}

/// Evaluates `input` line by line until end of input or a `quit` line.
///
/// Surrounding whitespace only matters for recognizing `quit` and blank
/// lines; the evaluator sees each line minus its terminator. A read error
/// stops the loop and counts as a failure.
fn run_lines(input: impl BufRead, out: &mut impl Write, quiet: bool) -> bool {
    let mut all_ok = true;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("cannot read standard input: {e}");
                return false;
            },
        };
        let control = line.trim();
        if control == "quit" {
            break;
        }
        if control.is_empty() {
            continue;
        }
        match report(out, line.trim_end_matches('\r'), quiet) {
            Ok(ok) => all_ok &= ok,
            Err(e) => {
                warn!("cannot write result: {e}");
                return false;
            },
        }
    }
    all_ok
}

/// Reads every non-blank line of `path`. Lines are kept verbatim apart from
/// the line terminator, so spaces reach the evaluator untouched.
fn read_expressions(path: &str) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines()
               .map(|line| line.trim_end_matches('\r'))
               .filter(|line| !line.trim().is_empty())
               .map(str::to_string)
               .collect())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut expressions: Vec<String> = Vec::new();
    let mut all_ok = true;

    if args.samples {
        expressions.extend(SAMPLES.iter().map(|s| (*s).to_string()));
    }

    if args.file {
        for path in &args.expressions {
            match read_expressions(path) {
                Ok(lines) => {
                    debug!("read {} expressions from '{path}'", lines.len());
                    expressions.extend(lines);
                },
                Err(e) => {
                    warn!("cannot read '{path}': {e}");
                    eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                    all_ok = false;
                },
            }
        }
    } else {
        expressions.extend(args.expressions.iter().cloned());
    }

    let mut out = io::stdout().lock();
    if args.expressions.is_empty() && !args.samples {
        info!("no expressions given, reading standard input");
        all_ok &= run_lines(io::stdin().lock(), &mut out, args.quiet);
    } else {
        all_ok &= run_expressions(&expressions, &mut out, args.quiet);
    }

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
