//! Compiles an arithmetic expression over `x`, `y`, `z` to x86-64 code, runs
//! it and prints the result.
//!
//! ```text
//! exp-jit [-d] [-x X] [-y Y] [-z Z] [--max-depth N] [EXPRESSION]
//! ```
//!
//! Parameter values accept C-style literals (`-5`, `0x10`, `010`). With `-d`,
//! every reduction is printed (tab-indented) followed by a hex dump of the
//! generated code.
use anyhow::Result;
use clap::Parser as ClapParser;
use exprjit::lexer::parse_integer;
use exprjit::{Bindings, CodeGenerator, ParamGrammar};
use lrkit::{DEFAULT_MAX_DEPTH, ParserProdID};
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[command(version, about = "Compiles and runs an arithmetic expression", long_about = None)]
struct Args {
    /// Print each reduction and the generated code
    #[arg(short, long)]
    debug: bool,
    /// Value of x
    #[arg(short, default_value_t = 0, value_parser = parse_int, allow_negative_numbers = true)]
    x: i64,
    /// Value of y
    #[arg(short, default_value_t = 0, value_parser = parse_int, allow_negative_numbers = true)]
    y: i64,
    /// Value of z
    #[arg(short, default_value_t = 0, value_parser = parse_int, allow_negative_numbers = true)]
    z: i64,
    /// Maximum parse stack depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Expression to compile
    #[arg(default_value = "1 + 1", allow_hyphen_values = true)]
    expression: String,
}

fn parse_int(s: &str) -> Result<i64, String> {
    parse_integer(s).ok_or_else(|| format!("invalid integer {s:?}"))
}

/// First line of a clap diagnostic, without its `error: ` prefix.
fn usage_error(e: &clap::Error) -> String {
    let text = e.to_string();
    let line = text.lines().next().unwrap_or_default();
    format!("usage: {}", line.strip_prefix("error: ").unwrap_or(line))
}

fn run(args: Args) -> Result<i64> {
    let mut generator = CodeGenerator::<ParamGrammar>::new().with_max_depth(args.max_depth);
    if args.debug {
        generator = generator.with_trace(|prod| println!("\t{}", prod.label()));
    }
    let code = generator.compile(&args.expression)?;
    if args.debug {
        println!("Code dump: {}", code.to_hex());
    }

    let function = code.load()?;
    let bindings = Bindings::new(args.x, args.y, args.z);
    let value = function.call(bindings)?;
    log::info!(
        "{:?} with {:?} = {} ({} bytes of code)",
        args.expression,
        bindings,
        value,
        code.len()
    );
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
