// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Column-aligned tables for `surf list` and `surf show`.

use std::io::Write;

use crate::color;

/// Column text alignment.
pub enum Align {
    Left,
    Right,
}

/// How a cell's text is styled after padding.
pub enum CellStyle {
    Plain,
    /// Apply [`color::apply_muted()`].
    Muted,
    /// Apply [`color::apply_status()`]: green/yellow/red by first word.
    Status,
}

/// A column definition in a [`Table`].
pub struct Column {
    pub name: &'static str,
    pub align: Align,
    pub style: CellStyle,
    /// Maximum width in characters (`None` = unlimited). Longer values are cut.
    pub max_width: Option<usize>,
}

impl Column {
    fn new(name: &'static str, align: Align, style: CellStyle) -> Self {
        Self {
            name,
            align,
            style,
            max_width: None,
        }
    }

    pub fn left(name: &'static str) -> Self {
        Self::new(name, Align::Left, CellStyle::Plain)
    }

    pub fn right(name: &'static str) -> Self {
        Self::new(name, Align::Right, CellStyle::Plain)
    }

    pub fn muted(name: &'static str) -> Self {
        Self::new(name, Align::Left, CellStyle::Muted)
    }

    pub fn status(name: &'static str) -> Self {
        Self::new(name, Align::Left, CellStyle::Status)
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }
}

/// A tabular renderer that auto-computes column widths from data.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    colorize: bool,
}

/// Column separator: double space.
const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_color(columns, color::should_colorize())
    }

    pub fn with_color(columns: Vec<Column>, colorize: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize,
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render header and rows. Nothing is written for an empty table.
    ///
    /// The last left-aligned column is never padded. Color is applied after
    /// padding so escapes never count toward the width.
    pub fn render(&self, out: &mut impl Write) {
        if self.rows.is_empty() {
            return;
        }
        let widths = self.compute_widths();
        let last = self.columns.len().saturating_sub(1);

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let padded = fit(col.name, widths[i], &col.align, i == last);
                if self.colorize {
                    color::apply_header(&padded)
                } else {
                    padded
                }
            })
            .collect();
        let _ = writeln!(out, "{}", header.join(SEP));

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let raw = row.get(i).map(String::as_str).unwrap_or("");
                    let cut = truncate(raw, col.max_width);
                    let padded = fit(&cut, widths[i], &col.align, i == last);
                    stylize(&padded, &col.style, self.colorize)
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join(SEP));
        }
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .map(|row| {
                        let len = row.get(i).map_or(0, |s| s.chars().count());
                        col.max_width.map_or(len, |max| len.min(max))
                    })
                    .max()
                    .unwrap_or(0);
                widest.max(col.name.chars().count())
            })
            .collect()
    }
}

fn fit(text: &str, width: usize, align: &Align, is_last: bool) -> String {
    match align {
        Align::Left if is_last => text.to_string(),
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

fn truncate(s: &str, max: Option<usize>) -> String {
    match max {
        Some(m) => s.chars().take(m).collect(),
        None => s.to_string(),
    }
}

fn stylize(text: &str, style: &CellStyle, colorize: bool) -> String {
    if !colorize {
        return text.to_string();
    }
    match style {
        CellStyle::Plain => text.to_string(),
        CellStyle::Muted => color::apply_muted(text),
        CellStyle::Status => color::apply_status(text),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
