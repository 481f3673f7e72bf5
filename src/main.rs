use std::fs;

use clap::Parser;
use duocalc::{CalcError, evaluate, format_with_causes, parse, util::num::format_decimal};

/// duocalc evaluates a single binary arithmetic expression such as
/// `-3,5 * 2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells duocalc to read expressions from a file, one per line, instead of
    /// taking the argument as the expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the normalized expression in front of each result.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn run(line: &str, verbose: bool) -> Result<String, CalcError> {
    let expr = parse(line)?;
    let result = format_decimal(evaluate(&expr)?);

    Ok(if verbose { format!("{expr} = {result}") } else { result })
}

fn main() {
    let args = Args::parse();

    let expressions: Vec<String> = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does \
                                    not exist?",
                                   &args.contents);
                         std::process::exit(1);
                     });
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .map(str::to_string)
              .collect()
    } else {
        vec![args.contents]
    };

    let mut failed = false;
    for expression in &expressions {
        match run(expression, args.verbose) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                failed = true;
                eprintln!("{}", format_with_causes(&e));
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
