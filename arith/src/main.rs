use std::ffi::OsString;
use std::io::{self, BufRead};

use arith_eval::evaluate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "arith",
    version,
    about = "Evaluate arithmetic expressions from the command line",
    long_about = "arith evaluates arithmetic expressions containing decimal numbers,\n\
        the four basic operators (+, -, *, /), and nested parentheses, with\n\
        standard operator precedence and left-to-right associativity.\n\n\
        EXAMPLES:\n\
        \n  arith eval '3 + 5 * 2'            Evaluate an expression\n\
        \n  arith '(3 + 5) * 2'               Same, the subcommand is implied\n\
        \n  echo '10 / 4' | arith eval        Read one line from stdin\n\
        \n  arith json '1 / 0'                Print a JSON report\n\
        \n  arith repl                        Start an interactive session"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an expression and print its value
    #[command(
        about = "Evaluate an expression and print its value",
        long_about = "Evaluates the expression given as an argument, or reads one\n\
            line from stdin when no argument is provided."
    )]
    Eval(EvalArgs),

    /// Output the evaluation result as JSON
    #[command(about = "Output the evaluation result as JSON for tooling integration")]
    Json(EvalArgs),

    /// Start an interactive Read-Eval-Print Loop
    #[command(
        about = "Start an interactive REPL session",
        long_about = "Start an interactive Read-Eval-Print Loop for evaluating expressions.\n\n\
            Commands:\n\
            \n  :help   Show available REPL commands\n\
            \n  :quit   Exit the REPL (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone)]
struct EvalArgs {
    /// Expression to evaluate (reads one line from stdin if not provided)
    #[arg(value_name = "EXPR")]
    expression: Option<String>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .try_init();
}

fn read_expression_from_input(expression: &Option<String>) -> Result<String, String> {
    if let Some(expr) = expression {
        Ok(expr.clone())
    } else {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_line(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_eval(source: &str, mode: OutputMode) -> i32 {
    match mode {
        OutputMode::Text => match evaluate(source) {
            Ok(value) => {
                println!("{value}");
                0
            }
            Err(err) => {
                eprintln!("error: {err}");
                1
            }
        },
        OutputMode::Json => {
            let report = arith::evaluate_report(source);
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: failed to serialize JSON: {e}");
                    return 2;
                }
            }
            if !report.errors.is_empty() {
                return 1;
            }
            0
        }
    }
}

/// Handle one REPL line; returns the output lines and whether to exit.
fn handle_repl_line(line: &str) -> (Vec<String>, bool) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (Vec::new(), false);
    }

    if trimmed.starts_with(':') {
        return match trimmed {
            ":help" => (
                vec!["commands: :help, :quit".to_string()],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            other => (vec![format!("error: unknown command '{other}'")], false),
        };
    }

    match evaluate(trimmed) {
        Ok(value) => (vec![value.to_string()], false),
        Err(err) => (vec![format!("error: {err}")], false),
    }
}

fn run_repl() -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    loop {
        match rl.readline("arith> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = handle_repl_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                return 0;
            }
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn normalize_cli_args(args: Vec<OsString>) -> Vec<OsString> {
    if args.len() <= 1 {
        return args;
    }

    let first = args[1].to_string_lossy();
    let is_known_subcommand = matches!(
        first.as_ref(),
        "eval" | "json" | "repl" | "help" | "--help" | "-h" | "--version" | "-V"
    );
    if is_known_subcommand {
        return args;
    }

    let mut out: Vec<OsString> = Vec::with_capacity(args.len() + 1);
    out.push(args[0].clone());

    let mut subcmd = OsString::from("eval");
    let mut rest: Vec<OsString> = Vec::with_capacity(args.len().saturating_sub(1));
    let iter = args.into_iter().skip(1);
    for a in iter {
        let s = a.to_string_lossy();
        if s == "--json" || s == "-j" {
            subcmd = OsString::from("json");
            continue;
        }
        rest.push(a);
    }

    out.push(subcmd);
    out.extend(rest);
    out
}

fn normalized_cli_args() -> Vec<OsString> {
    normalize_cli_args(std::env::args_os().collect())
}

fn run_cli() -> i32 {
    let cli = Cli::parse_from(normalized_cli_args());
    init_logging(cli.verbose);

    let cmd = cli
        .command
        .unwrap_or(Command::Eval(EvalArgs { expression: None }));

    match cmd {
        Command::Eval(args) => {
            let source = match read_expression_from_input(&args.expression) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: {e}");
                    return 2;
                }
            };
            run_eval(&source, OutputMode::Text)
        }
        Command::Json(args) => {
            let source = match read_expression_from_input(&args.expression) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: {e}");
                    return 2;
                }
            };
            run_eval(&source, OutputMode::Json)
        }
        Command::Repl => run_repl(),
    }
}

fn main() {
    std::process::exit(run_cli());
}
