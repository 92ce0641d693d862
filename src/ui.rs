//! Terminal table used by `--list`.
//!
//! Columns size to their widest cell; the last column is truncated when the
//! table would not fit the terminal.

use colored::*;
use console::{measure_text_width, truncate_str};

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows with the wrong number of cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| measure_text_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }
        widths
    }

    /// Render to a string, fitting into `max_width` columns where possible.
    pub fn render(&self, max_width: usize) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let mut widths = self.column_widths();
        // "  │ " + " │ " between columns + " │"
        let overhead = 2 + 3 * self.headers.len() + 1;
        let total: usize = widths.iter().sum::<usize>() + overhead;
        if total > max_width
            && let Some(last) = widths.last_mut()
        {
            *last = last.saturating_sub(total - max_width).max(8);
        }

        let sep = |left: &str, mid: &str, right: &str| {
            let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("  {}{}{}\n", left, cells.join(mid), right)
        };
        let line = |cells: Vec<String>| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| {
                    let cell = truncate_str(cell, w, "...");
                    let pad = w.saturating_sub(measure_text_width(&cell));
                    format!(" {}{} ", cell, " ".repeat(pad))
                })
                .collect();
            format!("  │{}│\n", padded.join("│"))
        };

        let mut out = sep("┌", "┬", "┐");
        out.push_str(&line(
            self.headers.iter().map(|h| h.bold().to_string()).collect(),
        ));
        out.push_str(&sep("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row.clone()));
        }
        out.push_str(&sep("└", "┴", "┘"));
        out
    }

    pub fn print(&self) {
        let (_rows, cols) = console::Term::stdout().size();
        print!("{}", self.render(cols as usize));
    }
}
