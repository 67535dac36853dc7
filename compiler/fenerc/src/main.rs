//! fener command-line interface.

use fenerc::commands::{
    explain_error, format_file, lex_file, parse_file, run_file, run_repl, run_tests, RunOptions,
};
use fenerc::test::TestRunnerConfig;
use fenerc::{init_tracing, CliError, SOURCE_EXTENSION};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    if let Err(err) = dispatch(&args[1], &args[2..]) {
        if !err.is_reported() {
            eprintln!("error: {err}");
        }
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            eprintln!("Run 'fener help' for usage.");
        }
        std::process::exit(1);
    }
}

fn dispatch(command: &str, rest: &[String]) -> Result<(), CliError> {
    match command {
        "run" => {
            let mut options = RunOptions::default();
            let mut file_path = None;
            for arg in rest {
                match arg.as_str() {
                    "--print-ast" => options.print_ast = true,
                    "--test" => options.test_mode = true,
                    flag if flag.starts_with('-') => return Err(unknown_flag(flag)),
                    path if file_path.is_none() => file_path = Some(path),
                    extra => return Err(CliError::Usage(format!("unexpected argument '{extra}'"))),
                }
            }
            let path = file_path.ok_or_else(|| missing("file path"))?;
            run_file(path, options)
        }
        "repl" => {
            let mut print_ast = false;
            for arg in rest {
                match arg.as_str() {
                    "--print-ast" => print_ast = true,
                    other => return Err(unknown_flag(other)),
                }
            }
            run_repl(print_ast)
        }
        "test" => {
            let mut config = TestRunnerConfig::default();
            let mut path = None;
            for arg in rest {
                match arg.as_str() {
                    "--sequential" => config.parallel = false,
                    "--verbose" | "-v" => config.verbose = true,
                    flag if flag.starts_with('-') => return Err(unknown_flag(flag)),
                    other if path.is_none() => path = Some(other),
                    extra => return Err(CliError::Usage(format!("unexpected argument '{extra}'"))),
                }
            }
            run_tests(path.unwrap_or("."), &config)
        }
        "fmt" => format_file(single_path(rest)?),
        "parse" => parse_file(single_path(rest)?),
        "lex" => lex_file(single_path(rest)?),
        "explain" | "--explain" => explain_error(single_arg(rest, "error code")?),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("fener {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        path if path.ends_with(&format!(".{SOURCE_EXTENSION}")) => {
            run_file(path, RunOptions::default())
        }
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
}

fn single_arg<'a>(rest: &'a [String], what: &str) -> Result<&'a str, CliError> {
    match rest {
        [arg] => Ok(arg.as_str()),
        [] => Err(missing(what)),
        [_, extra, ..] => Err(CliError::Usage(format!("unexpected argument '{extra}'"))),
    }
}

fn single_path(rest: &[String]) -> Result<&str, CliError> {
    single_arg(rest, "file path")
}

fn missing(what: &str) -> CliError {
    CliError::Usage(format!("missing {what}"))
}

fn unknown_flag(flag: &str) -> CliError {
    CliError::Usage(format!("unknown option '{flag}'"))
}

fn print_usage() {
    println!("fener {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: fener <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.fn>        Run a program");
    println!("  repl                 Start an interactive session");
    println!("  test [path]          Run test blocks (default: current directory)");
    println!("  fmt <file.fn>        Print a file in canonical form");
    println!("  parse <file.fn>      Parse and display the syntax tree");
    println!("  lex <file.fn>        Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --print-ast          Print the syntax tree before running");
    println!("  --test               Run test blocks and report their results");
    println!();
    println!("Repl options:");
    println!("  --print-ast          Print the syntax tree of every line");
    println!();
    println!("Test options:");
    println!("  --sequential         Run files one at a time");
    println!("  --verbose, -v        Show passing tests and captured output");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=debug       Enable tracing output on stderr");
    println!("  FENER_LOG_TREE=1     Render tracing spans as a tree");
}
