use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser as _;
use ezc::{
    ast::{SyntaxNode, SyntaxTree},
    interpreter::evaluator::core::Evaluator,
    util::tree::render,
};

/// ezc parses and evaluates integer arithmetic expressions such as
/// `1 + 2 * (3 - 4)`.
///
/// Without an expression, ezc starts an interactive prompt that reads one line
/// at a time and stops at the first blank line.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ezc to read the expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Do not print the syntax tree before the result.
    #[arg(long)]
    no_tree: bool,

    /// The expression to evaluate, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let show_tree = !args.no_tree;

    let Some(contents) = args.contents else {
        repl(show_tree);
        return ExitCode::SUCCESS;
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut succeeded = true;
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        succeeded &= run_line(line, show_tree);
    }

    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Reads lines from standard input until a blank line or end of input.
fn repl(show_tree: bool) {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        if line.trim().is_empty() {
            return;
        }

        run_line(line.trim_end_matches(['\r', '\n']), show_tree);
    }
}

/// Parses, prints and evaluates one line. Returns `false` if the line produced
/// diagnostics or failed to evaluate.
fn run_line(line: &str, show_tree: bool) -> bool {
    let tree = SyntaxTree::parse(line);

    if show_tree {
        print!("{}", render(SyntaxNode::from(tree.root())));
    }

    if !tree.diagnostics().is_empty() {
        for diagnostic in tree.diagnostics() {
            eprintln!("{diagnostic}");
        }
        return false;
    }

    match Evaluator::new(tree.root()).evaluate() {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}
