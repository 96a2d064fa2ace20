//! The step-by-step derivation produced by a solve, and the trait for rendering it.

use crate::format::{Position, format_number};

/// How a section turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Everything went fine.
    Ok,
    /// Finished, but something deserves a second look.
    Warn,
    /// This step failed, and later steps didn't run.
    Error,
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::Ok => write!(f, "ok"),
            StatusKind::Warn => write!(f, "warn"),
            StatusKind::Error => write!(f, "error"),
        }
    }
}

/// Status tag attached to a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Ok, warn or error.
    pub kind: StatusKind,
    /// Human-readable explanation.
    pub message: String,
}

impl Status {
    pub(crate) fn ok() -> Self {
        Self {
            kind: StatusKind::Ok,
            message: "All is done!".to_owned(),
        }
    }

    pub(crate) fn warn(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warn,
            message: message.into(),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "code: {} | msg: {}", self.kind, self.message)
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text, e.g. an equation.
    Text(String),
    /// A counter, e.g. the sweep number.
    Integer(usize),
    /// A pass/fail flag.
    Flag(bool),
    /// A number, and how many decimal places to show it with.
    Number {
        /// Value, already rounded to `precision`.
        value: f64,
        /// Decimal places, or `None` for the shortest exact representation.
        precision: Option<usize>,
    },
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Integer(i) => write!(f, "{i}"),
            Cell::Flag(b) => write!(f, "{b}"),
            Cell::Number { value, precision } => {
                write!(f, "{}", format_number(*value, Position::Leading, *precision))
            }
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Self::Integer(value)
    }
}

/// Rows of cells, with an optional header row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Column names.
    pub head: Option<Vec<String>>,
    /// Body rows, in order.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Empty table with these column names.
    pub fn with_head<S: Into<String>>(head: impl IntoIterator<Item = S>) -> Self {
        Self {
            head: Some(head.into_iter().map(Into::into).collect()),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Is there nothing to draw?
    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.rows.is_empty()
    }
}

/// A titled step of the derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Heading.
    pub title: String,
    /// Free text shown under the heading.
    pub text: Option<String>,
    /// Tabular body.
    pub table: Table,
    /// How this step turned out.
    pub status: Option<Status>,
}

impl Section {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: None,
            table: Table::default(),
            status: None,
        }
    }

    /// Status kind, if this section has a status.
    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.as_ref().map(|s| s.kind)
    }
}

/// A sequence of sections explaining how a system was solved, or why it wasn't.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub(crate) fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Sections, in order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by its title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Did any section end with an error?
    pub fn has_error(&self) -> bool {
        self.sections
            .iter()
            .any(|s| s.status_kind() == Some(StatusKind::Error))
    }

    /// Hand every section to `sink`, in order.
    pub fn render<S: ReportSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        for section in &self.sections {
            sink.section(section)?;
        }
        sink.finish()
    }
}

/// Something that can display a [`Report`], e.g. a terminal or a file.
pub trait ReportSink {
    /// What can go wrong while rendering.
    type Error;

    /// Render one section.
    fn section(&mut self, section: &Section) -> Result<(), Self::Error>;

    /// Called once after the last section.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Renders a report as uncolored text, following the layout:
/// title, text, one line per table row with cells separated by ` | `, then the status line.
#[derive(Debug, Default)]
pub struct PlainText {
    out: String,
}

impl PlainText {
    /// The text rendered so far.
    pub fn into_string(self) -> String {
        self.out
    }
}

impl ReportSink for PlainText {
    type Error = std::convert::Infallible;

    fn section(&mut self, section: &Section) -> Result<(), Self::Error> {
        self.out.push('\n');
        if !section.title.is_empty() {
            self.out.push_str(&section.title);
            self.out.push('\n');
        }
        if let Some(text) = &section.text {
            self.out.push_str(text);
            self.out.push('\n');
        }
        if let Some(head) = &section.table.head {
            self.out.push_str(&head.join(" | "));
            self.out.push('\n');
        }
        for row in &section.table.rows {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            self.out.push_str(&cells.join(" | "));
            self.out.push('\n');
        }
        if let Some(status) = &section.status {
            self.out.push_str(&status.to_string());
            self.out.push('\n');
        }
        Ok(())
    }
}
