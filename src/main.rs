use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use polycalc::{interpret_all, Config, Interpreter, StatementResult};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,

  /// Convergence tolerance for finding zeroes
  #[arg(
    long,
    global = true,
    env = "POLYCALC_TOLERANCE",
    default_value_t = 0.0001
  )]
  tolerance: f64,

  /// Maximum Newton iterations per zero
  #[arg(
    long,
    global = true,
    env = "POLYCALC_MAX_ITERATIONS",
    default_value_t = 10_000
  )]
  max_iterations: usize,

  /// Decimal places shown for zeroes
  #[arg(long, global = true, env = "POLYCALC_PRECISION", default_value_t = 3)]
  precision: usize,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, global = true, action = ArgAction::Count)]
  verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate statements like `f(x) = x^2 - 1` and `zeroes f(x)`
  Eval {
    /// Statements, evaluated in order within one session
    #[arg(required = true)]
    statements: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
  },
  /// Evaluate every line of a file
  Run {
    file: PathBuf,
  },
  /// Start an interactive session (the default)
  Repl,
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
  let level = match verbose {
    0 => Level::WARN,
    1 => Level::INFO,
    2 => Level::DEBUG,
    _ => Level::TRACE,
  };
  let subscriber = FmtSubscriber::builder()
    .with_max_level(level)
    .with_writer(io::stderr)
    .finish();
  tracing::subscriber::set_global_default(subscriber)
    .context("Failed to set tracing subscriber")
}

fn print_results(results: &[StatementResult]) {
  for result in results {
    match &result.output {
      Ok(output) => println!("{output}"),
      Err(e) => eprintln!("Error: {e}"),
    }
  }
}

fn results_to_json(results: &[StatementResult]) -> serde_json::Value {
  results
    .iter()
    .map(|result| match &result.output {
      Ok(output) => serde_json::json!({
        "input": result.input,
        "output": output,
      }),
      Err(e) => serde_json::json!({
        "input": result.input,
        "error": e.to_string(),
      }),
    })
    .collect()
}

fn repl(config: Config) -> anyhow::Result<()> {
  let mut interpreter = Interpreter::new(config)?;
  let stdin = io::stdin();
  let mut stdout = io::stdout();

  println!("polycalc command line interface");
  loop {
    print!("> ");
    stdout.flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
      println!();
      return Ok(());
    }
    if line.trim().is_empty() {
      continue;
    }
    match interpreter.evaluate(&line) {
      Ok(output) => println!("{output}"),
      Err(e) => println!("{e}"),
    }
  }
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose)?;

  let config = Config {
    tolerance: cli.tolerance,
    max_iterations: cli.max_iterations,
    precision: cli.precision,
  };

  match cli.command.unwrap_or(Commands::Repl) {
    Commands::Eval { statements, json } => {
      let results =
        interpret_all(config, statements.iter().map(String::as_str))?;
      if json {
        let json = serde_json::to_string_pretty(&results_to_json(&results))?;
        println!("{json}");
      } else {
        print_results(&results);
      }
    }
    Commands::Run { file } => {
      let source = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
      print_results(&interpret_all(config, source.lines())?);
    }
    Commands::Repl => repl(config)?,
  }

  Ok(())
}
