//! Rendering of result tables as terminal tables, CSV or JSON lines.
//!
//! A report is printed as a sequence of titled sections. In table and CSV
//! output the title precedes the body; in JSON output every section is one
//! line holding `{"title", "data"}` (or `{"title", "message"}` for a notice).

use std::io::Write;

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use medal_core::TabularReport;

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Serialize)]
struct JsonSection<'a, R: ?Sized> {
    title: &'a str,
    data: &'a R,
}

#[derive(Serialize)]
struct JsonNotice<'a> {
    title: &'a str,
    message: &'a str,
}

/// Writes report sections in one output format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
    styled: bool,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            styled: false,
        }
    }

    /// Enable ANSI styling of terminal tables.
    #[must_use]
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes one titled table.
    pub fn section<W, R>(&self, out: &mut W, title: &str, report: &R) -> Result<()>
    where
        W: Write,
        R: TabularReport + Serialize + ?Sized,
    {
        match self.format {
            OutputFormat::Table => {
                writeln!(out, "{title}")?;
                writeln!(out, "{}", build_table(report, self.styled))?;
                writeln!(out)?;
            }
            OutputFormat::Csv => {
                writeln!(out, "# {title}")?;
                write_csv(out, report)?;
                writeln!(out)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &JsonSection { title, data: report })?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Writes a titled message in place of a table.
    pub fn notice<W: Write>(&self, out: &mut W, title: &str, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Table => writeln!(out, "{title}\n{message}\n")?,
            OutputFormat::Csv => writeln!(out, "# {title}\n# {message}\n")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &JsonNotice { title, message })?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Builds a terminal table with numeric columns right-aligned.
pub fn build_table<R: TabularReport + ?Sized>(report: &R, styled: bool) -> Table {
    let headers = report.headers();
    let rows = report.rows();

    let mut table = Table::new();
    if !styled {
        table.force_no_tty();
    }
    table.set_header(headers.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    for row in &rows {
        table.add_row(row);
    }
    for index in 0..headers.len() {
        if is_numeric_column(&rows, index) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    table
}

/// Writes headers and rows as CSV.
pub fn write_csv<W, R>(out: &mut W, report: &R) -> Result<()>
where
    W: Write,
    R: TabularReport + ?Sized,
{
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(report.headers())?;
    for row in report.rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn is_numeric_column(rows: &[Vec<String>], index: usize) -> bool {
    let mut cells = rows
        .iter()
        .filter_map(|row| row.get(index))
        .filter(|cell| !cell.is_empty())
        .peekable();
    cells.peek().is_some() && cells.all(|cell| cell.parse::<f64>().is_ok())
}
