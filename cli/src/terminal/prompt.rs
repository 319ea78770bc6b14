//! Interactive game selection.
//!
//! Arrow keys (or `k`/`j`) move the cursor, Enter confirms, Esc or `q` aborts.

use std::io;

use colored::*;
use console::{Key, Term};
use loto_common::{LotoError, registry};

const LABEL: &str = "Select Lottery Type";

pub fn select_game() -> Result<String, LotoError> {
    let items = registry::identifiers();
    let term = Term::stderr();
    if !term.is_term() {
        return Err(LotoError::Prompt(
            "no interactive terminal, pass the lottery type as an argument".into(),
        ));
    }

    let picked = run(&term, LABEL, &items);
    // Restore the cursor even if reading keys failed
    let _ = term.show_cursor();
    let picked = picked.map_err(|e| LotoError::Prompt(e.to_string()))?;

    picked
        .map(|idx| items[idx].to_string())
        .ok_or_else(|| LotoError::Prompt("cancelled by user".into()))
}

fn run(term: &Term, label: &str, items: &[&str]) -> io::Result<Option<usize>> {
    let mut selection = Selection::new(items.len());

    term.hide_cursor()?;
    term.write_line(&format!("{} {}", "?".green().bold(), label.bold()))?;
    render(term, items, selection.cursor())?;

    loop {
        let outcome = selection.apply(term.read_key()?);
        term.clear_last_lines(items.len())?;

        match outcome {
            Outcome::Pending => render(term, items, selection.cursor())?,
            Outcome::Picked(idx) => {
                term.clear_last_lines(1)?;
                term.write_line(&format!(
                    "{} {}: {}",
                    "✔".green().bold(),
                    label.bold(),
                    items[idx].cyan()
                ))?;
                return Ok(Some(idx));
            }
            Outcome::Cancelled => {
                term.clear_last_lines(1)?;
                return Ok(None);
            }
        }
    }
}

fn render(term: &Term, items: &[&str], cursor: usize) -> io::Result<()> {
    for (idx, item) in items.iter().enumerate() {
        let line = if idx == cursor {
            format!("{} {}", "▸".cyan().bold(), item.cyan().underline())
        } else {
            format!("  {item}")
        };
        term.write_line(&line)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Pending,
    Picked(usize),
    Cancelled,
}

/// Cursor over a fixed number of entries, wrapping at both ends.
#[derive(Debug, Clone, Copy)]
struct Selection {
    cursor: usize,
    len: usize,
}

impl Selection {
    fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn apply(&mut self, key: Key) -> Outcome {
        if self.len == 0 {
            return Outcome::Cancelled;
        }
        match key {
            Key::ArrowUp | Key::Char('k') => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(self.len - 1);
                Outcome::Pending
            }
            Key::ArrowDown | Key::Char('j') | Key::Tab => {
                self.cursor = (self.cursor + 1) % self.len;
                Outcome::Pending
            }
            Key::Home => {
                self.cursor = 0;
                Outcome::Pending
            }
            Key::End => {
                self.cursor = self.len - 1;
                Outcome::Pending
            }
            Key::Enter => Outcome::Picked(self.cursor),
            Key::Escape | Key::Char('q') => Outcome::Cancelled,
            _ => Outcome::Pending,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
