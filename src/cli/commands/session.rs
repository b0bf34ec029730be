//! Interactive session shell.
//!
//! Reads one command per line and applies it to a `SessionState` that lives
//! only as long as the shell. The contraction timer never blocks: `timer`
//! prints the elapsed time on demand.

use crate::core::session::SessionState;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREEN, GREY, RED, RESET};
use crate::utils::format_seconds;
use crate::utils::table::{Column, Table};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  todo add <text>      add a task
  todo done <id>       mark / unmark a task as done
  todo del <id>        delete a task
  todo [list]          show tasks
  note add <text>      add a note (shown first)
  note del <id>        delete a note
  note [list]          show notes
  timer start          start timing a contraction
  timer stop           stop and record it
  timer [status]       show the running time
  timer history        show recorded contractions
  timer reset          clear the history and stop the timer
  help                 show this help
  quit                 leave the session (nothing is saved)";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle() -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut state = SessionState::new();
    run(&mut state, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    state: &mut SessionState,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    writeln!(out, "🤰 pregtrack session. Type `help` for commands.")?;

    loop {
        let prompt = if state.timer.is_counting() {
            "⏱ > "
        } else {
            "> "
        };
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match execute(state, line.trim(), out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e @ AppError::InvalidIndex(_)) => writeln!(out, "{RED}{e}{RESET}")?,
            Err(e) => return Err(e),
        }
    }

    writeln!(out, "Session closed.")?;
    Ok(())
}

/// Apply a single command line.
pub fn execute<W: Write>(state: &mut SessionState, line: &str, out: &mut W) -> AppResult<Flow> {
    let (cmd, rest) = split_word(line);

    match cmd {
        "" => {}
        "help" | "?" => writeln!(out, "{HELP}")?,
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        "todo" => todo(state, rest, out)?,
        "note" => note(state, rest, out)?,
        "timer" => timer(state, rest, out)?,
        other => writeln!(out, "Unknown command '{other}'. Type `help`.")?,
    }

    Ok(Flow::Continue)
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (s, ""),
    }
}

fn parse_id(raw: &str) -> Option<usize> {
    raw.trim().trim_start_matches('#').parse().ok()
}

fn todo<W: Write>(state: &mut SessionState, args: &str, out: &mut W) -> AppResult<()> {
    let (sub, rest) = split_word(args);

    match sub {
        "add" => {
            if let Some(id) = state.todos.add(rest) {
                writeln!(out, "{GREEN}✔{RESET} Task #{id} added")?;
            }
        }
        "done" | "toggle" => match parse_id(rest) {
            Some(id) => {
                let done = state.todos.toggle(id)?;
                let label = if done { "done" } else { "open" };
                writeln!(out, "Task #{id} is now {label}")?;
            }
            None => writeln!(out, "Usage: todo done <id>")?,
        },
        "del" | "rm" => match parse_id(rest) {
            Some(id) => {
                let item = state.todos.remove(id)?;
                writeln!(out, "Task #{id} deleted: {}", item.text)?;
            }
            None => writeln!(out, "Usage: todo del <id>")?,
        },
        "" | "list" | "ls" => {
            if state.todos.is_empty() {
                writeln!(out, "{GREY}No tasks.{RESET}")?;
            } else {
                for t in state.todos.items() {
                    let mark = if t.done { "[x]" } else { "[ ]" };
                    writeln!(out, "{:>3}. {} {}", t.id, mark, t.text)?;
                }
            }
        }
        other => writeln!(out, "Unknown todo command '{other}'.")?,
    }

    Ok(())
}

fn note<W: Write>(state: &mut SessionState, args: &str, out: &mut W) -> AppResult<()> {
    let (sub, rest) = split_word(args);

    match sub {
        "add" => {
            if let Some(id) = state.notes.add(rest) {
                writeln!(out, "{GREEN}✔{RESET} Note #{id} added")?;
            }
        }
        "del" | "rm" => match parse_id(rest) {
            Some(id) => {
                state.notes.remove(id)?;
                writeln!(out, "Note #{id} deleted")?;
            }
            None => writeln!(out, "Usage: note del <id>")?,
        },
        "" | "list" | "ls" => {
            if state.notes.is_empty() {
                writeln!(out, "{GREY}No notes.{RESET}")?;
            } else {
                for n in state.notes.items() {
                    writeln!(out, "{:>3}. {}", n.id, n.text)?;
                }
            }
        }
        other => writeln!(out, "Unknown note command '{other}'.")?,
    }

    Ok(())
}

fn timer<W: Write>(state: &mut SessionState, args: &str, out: &mut W) -> AppResult<()> {
    let (sub, _) = split_word(args);

    match sub {
        "start" => {
            if state.timer.start() {
                writeln!(out, "⏱ Contraction started. `timer stop` when it ends.")?;
            } else {
                writeln!(out, "A contraction is already being timed.")?;
            }
        }
        "stop" => match state.timer.stop() {
            Some(rec) => writeln!(
                out,
                "Contraction recorded: {} → {} ({} s)",
                rec.start_str(),
                rec.end_str(),
                rec.duration_seconds
            )?,
            None => writeln!(out, "No contraction is being timed.")?,
        },
        "" | "status" => match state.timer.elapsed() {
            Some(secs) => writeln!(out, "⏱ Counting: {}", format_seconds(secs))?,
            None => writeln!(out, "Idle. {} recorded.", state.timer.history().len())?,
        },
        "history" => {
            if state.timer.history().is_empty() {
                writeln!(out, "{GREY}No contractions recorded.{RESET}")?;
            } else {
                let mut table = Table::new(vec![
                    Column::new("Start", 8),
                    Column::new("End", 8),
                    Column::new("Duration (s)", 12),
                ]);
                for c in state.timer.history() {
                    table.add_row(vec![
                        c.start_str(),
                        c.end_str(),
                        format!("{:.1}", c.duration_seconds),
                    ]);
                }
                write!(out, "{}", table.render())?;
            }
        }
        "reset" => {
            state.timer.reset();
            writeln!(out, "Timer reset, history cleared.")?;
        }
        other => writeln!(out, "Unknown timer command '{other}'.")?,
    }

    Ok(())
}
