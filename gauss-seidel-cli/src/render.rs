//! Draws a report in the terminal: colored titles, boxed tables and status lines.
use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use gauss_seidel::{ReportSink, Section, StatusKind, Table};

pub struct TerminalSink<W> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn table(&mut self, table: &Table) -> io::Result<()> {
        let head: Option<Vec<String>> = table.head.clone();
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let num_cols = head
            .iter()
            .chain(rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        if num_cols == 0 {
            return Ok(());
        }
        let mut widths = vec![0; num_cols];
        for row in head.iter().chain(rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(self.out, "{}", border(&widths, '┌', '┬', '┐'))?;
        if let Some(head) = &head {
            writeln!(self.out, "{}", line(&widths, head, |s| s.blue()))?;
            writeln!(self.out, "{}", border(&widths, '├', '┼', '┤'))?;
        }
        for row in &rows {
            writeln!(self.out, "{}", line(&widths, row, |s| s.normal()))?;
        }
        writeln!(self.out, "{}", border(&widths, '└', '┴', '┘'))
    }
}

/// Horizontal rule, e.g. `┌───┬──────┐`.
fn border(widths: &[usize], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

/// One table row. Cells are padded before coloring, as escape codes have no width.
fn line(widths: &[usize], cells: &[String], color: impl Fn(&str) -> ColoredString) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or_default();
            let pad = width - cell.chars().count();
            format!(" {}{} ", color(cell), " ".repeat(pad))
        })
        .collect();
    format!("│{}│", padded.join("│"))
}

impl<W: Write> ReportSink for TerminalSink<W> {
    type Error = io::Error;

    fn section(&mut self, section: &Section) -> io::Result<()> {
        writeln!(self.out)?;
        if !section.title.is_empty() {
            writeln!(self.out, "{}", section.title.cyan())?;
        }
        if let Some(text) = &section.text {
            writeln!(self.out, "{text}")?;
        }
        if !section.table.is_empty() {
            self.table(&section.table)?;
        }
        if let Some(status) = &section.status {
            let status_line = status.to_string();
            let status_line = match status.kind {
                StatusKind::Ok => status_line.green().on_black(),
                StatusKind::Warn => status_line.bright_black().on_yellow(),
                StatusKind::Error => status_line.red().on_black(),
            };
            writeln!(self.out, "{status_line}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borders() {
        assert_eq!(border(&[1, 3], '┌', '┬', '┐'), "┌───┬─────┐");
    }

    #[test]
    fn draws_a_boxed_table() {
        colored::control::set_override(false);
        let system = gauss_seidel::LinearSystem::new(vec![vec![2.0]], vec![4.0]).unwrap();
        let config = gauss_seidel::Config::default().with_precision(Some(1));
        let report = gauss_seidel::gauss_seidel(&system, config).unwrap();
        let mut sink = TerminalSink::new(Vec::new());
        report.render(&mut sink).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let expected_results = "\
Result table
┌───┬─────┬───────┐
│ k │ x0  │ delta │
├───┼─────┼───────┤
│ 0 │ 0.0 │ -     │
│ 1 │ 2.0 │ 2.0   │
│ 2 │ 2.0 │ 0.0   │
└───┴─────┴───────┘
code: ok | msg: All is done!
";
        assert!(out.contains(expected_results), "{out}");
        assert!(out.starts_with("\nLinear system\n┌──────────────┐\n│ 2.0*x0 = 4.0 │"));
    }
}
