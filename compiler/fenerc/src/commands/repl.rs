//! The interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use fener_eval::{stdout_handler, Environment, ErrorPolicy, Evaluator, SharedPrintHandler};

use crate::{parse_source, CliError};

const PROMPT: &str = ">> ";

const HELP: &str = "\
Enter fener statements to evaluate them.
  :help   show this message
  :quit   leave the REPL (Ctrl-D works too)";

/// One line of REPL output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplLine {
    Output(String),
    Error(String),
}

/// What the loop should do after a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplStep {
    Continue(Vec<ReplLine>),
    Quit,
}

/// State kept across lines: one root environment and one evaluator.
///
/// Runtime errors never end the session; the failing statement yields
/// `null` and later lines still see every earlier binding.
pub struct ReplSession {
    env: Environment,
    evaluator: Evaluator,
    print_ast: bool,
}

impl ReplSession {
    pub fn new(print_ast: bool, print: SharedPrintHandler) -> Self {
        ReplSession {
            env: Environment::with_builtins(),
            evaluator: Evaluator::builder()
                .policy(ErrorPolicy::Continue)
                .print_handler(print)
                .build(),
            print_ast,
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_line(&mut self, line: &str) -> ReplStep {
        let mut lines = Vec::new();
        match line.trim() {
            ":quit" | ":q" => return ReplStep::Quit,
            ":help" | ":h" => {
                lines.push(ReplLine::Output(HELP.to_string()));
                return ReplStep::Continue(lines);
            }
            "" => return ReplStep::Continue(lines),
            _ => {}
        }

        let output = parse_source(line);
        if output.has_errors() {
            lines.extend(output.error_messages().into_iter().map(ReplLine::Error));
            return ReplStep::Continue(lines);
        }
        if self.print_ast {
            lines.push(ReplLine::Output(format!("{:#?}", output.program)));
        }

        let value = self.evaluator.eval_program(&output.program, &self.env);
        lines.extend(
            self.evaluator
                .take_diagnostics()
                .iter()
                .map(|d| ReplLine::Error(d.to_string())),
        );
        if let Ok(value) = value {
            if !value.is_null() {
                lines.push(ReplLine::Output(value.inspect()));
            }
        }
        ReplStep::Continue(lines)
    }
}

/// Read lines from stdin until EOF or `:quit`.
pub fn run_repl(print_ast: bool) -> Result<(), CliError> {
    let mut session = ReplSession::new(print_ast, stdout_handler());
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("fener {} (type :help for help)", env!("CARGO_PKG_VERSION"));
    loop {
        print!("{PROMPT}");
        stdout.flush().map_err(|source| CliError::Write {
            target: "<stdout>",
            source,
        })?;

        line.clear();
        let read = input.read_line(&mut line).map_err(|source| CliError::Read {
            path: "<stdin>".into(),
            source,
        })?;
        if read == 0 {
            println!();
            return Ok(());
        }

        match session.eval_line(&line) {
            ReplStep::Quit => return Ok(()),
            ReplStep::Continue(lines) => {
                for out in lines {
                    match out {
                        ReplLine::Output(text) => println!("{text}"),
                        ReplLine::Error(text) => eprintln!("{text}"),
                    }
                }
            }
        }
    }
}
