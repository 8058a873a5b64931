//! Alpha OS Host Terminal
//!
//! Boots the seeded in-memory filesystem, starts the shell and feeds it
//! lines, either from a script file or interactively from stdin. Output is
//! rendered with ANSI colors.

mod ansi;

use std::io::{self, BufRead, Write};
use std::{env, fs, process};

use alpha_fs::RamFs;
use alpha_shell::{Outcome, Shell};

use ansi::AnsiConsole;

type Term = AnsiConsole<io::Stdout>;

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Some(code) = usage_exit(&args) {
        print_usage();
        process::exit(code);
    }

    let fs = match RamFs::with_skeleton() {
        Ok(fs) => fs,
        Err(e) => {
            eprintln!("Error: failed to seed filesystem: {}", e);
            process::exit(1);
        }
    };

    let mut shell = Shell::new(fs);
    let mut console = AnsiConsole::new(io::stdout());
    if let Err(e) = shell.greet(&mut console) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let result = match args.get(1) {
        Some(path) => run_script(&mut shell, &mut console, path),
        None => run_interactive(&mut shell, &mut console),
    };

    let _ = console.reset_terminal();
    let _ = console.flush();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Exit status when the arguments call for the usage text instead of a run.
fn usage_exit(args: &[String]) -> Option<i32> {
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        Some(0)
    } else if args.len() > 2 {
        Some(1)
    } else {
        None
    }
}

fn print_usage() {
    eprintln!("Usage: alpha-term [script-file]");
    eprintln!();
    eprintln!("Runs the Alpha OS shell over a freshly seeded in-memory filesystem.");
    eprintln!("With a script, each line is executed as if typed; otherwise stdin is read.");
}

/// Execute each line of `path`, echoing it after the prompt.
fn run_script(shell: &mut Shell<RamFs>, console: &mut Term, path: &str) -> io::Result<()> {
    let script = fs::read_to_string(path)
        .map_err(|e| io::Error::new(e.kind(), format!("cannot read script {}: {}", path, e)))?;

    for line in script.lines() {
        let secret = shell.awaiting_password();
        if shell.render_prompt(console).is_err() {
            return Err(io::Error::new(io::ErrorKind::Other, "console write failed"));
        }
        if !secret {
            writeln!(io::stdout(), "{}", line)?;
        }

        if shell.execute(line, console) == Outcome::Halt {
            break;
        }
    }
    console.flush()
}

/// Read lines from stdin until EOF or `halt`.
fn run_interactive(shell: &mut Shell<RamFs>, console: &mut Term) -> io::Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        if shell.render_prompt(console).is_err() {
            return Err(io::Error::new(io::ErrorKind::Other, "console write failed"));
        }
        console.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let input = line.trim_end_matches(['\n', '\r']);
        if shell.execute(input, console) == Outcome::Halt {
            return Ok(());
        }
    }
}
