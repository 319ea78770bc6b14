//! Box-drawn text tables for command output.
//!
//! ```text
//! ┌────┬────────────┐
//! │ NO │   RESULT   │
//! ├────┼────────────┤
//! │ 1  │ 01, 07, 38 │
//! └────┴────────────┘
//! ```

use std::io::Write;

use loto_common::LotoError;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn columns(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.columns()];
        let header = self.headers.iter().map(|h| h.to_uppercase());
        for (idx, cell) in header.enumerate() {
            widths[idx] = widths[idx].max(cell.width());
        }
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.width());
            }
        }
        widths
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), LotoError> {
        let widths = self.widths();

        writeln!(out, "{}", border(&widths, '┌', '┬', '┐'))?;
        let header: Vec<String> = self.headers.iter().map(|h| h.to_uppercase()).collect();
        writeln!(out, "{}", line(&header, &widths, center))?;
        writeln!(out, "{}", border(&widths, '├', '┼', '┤'))?;
        for row in &self.rows {
            writeln!(out, "{}", line(row, &widths, left))?;
        }
        writeln!(out, "{}", border(&widths, '└', '┴', '┘'))?;
        Ok(())
    }
}

fn border(widths: &[usize], start: char, mid: char, end: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{start}{}{end}", segments.join(&mid.to_string()))
}

fn line(cells: &[String], widths: &[usize], align: fn(&str, usize) -> String) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(idx, width)| {
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            format!(" {} ", align(cell, *width))
        })
        .collect();
    format!("│{}│", padded.join("│"))
}

fn left(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}

fn center(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.width());
    let before = fill / 2;
    format!("{}{cell}{}", " ".repeat(before), " ".repeat(fill - before))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
