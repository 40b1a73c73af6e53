//! Evaluates an arithmetic expression and prints the result.
//!
//! ```text
//! exp-eval [-d] [--max-depth N] [EXPRESSION]
//! ```
//!
//! With `-d`, every reduction is printed (tab-indented) before the result.
use anyhow::Result;
use clap::Parser as ClapParser;
use exprjit::{ArithGrammar, Evaluator};
use lrkit::{DEFAULT_MAX_DEPTH, ParserProdID};
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[command(version, about = "Evaluates an arithmetic expression", long_about = None)]
struct Args {
    /// Print each reduction as it happens
    #[arg(short, long)]
    debug: bool,
    /// Maximum parse stack depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Expression to evaluate
    #[arg(default_value = "1 + 1", allow_hyphen_values = true)]
    expression: String,
}

/// First line of a clap diagnostic, without its `error: ` prefix.
fn usage_error(e: &clap::Error) -> String {
    let text = e.to_string();
    let line = text.lines().next().unwrap_or_default();
    format!("usage: {}", line.strip_prefix("error: ").unwrap_or(line))
}

fn run(args: Args) -> Result<i64> {
    let mut evaluator = Evaluator::<ArithGrammar>::new().with_max_depth(args.max_depth);
    if args.debug {
        evaluator = evaluator.with_trace(|prod| println!("\t{}", prod.label()));
    }
    let value = evaluator.evaluate(&args.expression)?;
    log::info!("{:?} = {}", args.expression, value);
    Ok(value)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprintln!("{}", usage_error(&e));
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
