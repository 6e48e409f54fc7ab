//! Box-drawing layer grids.
//!
//! Renders one decoded layer as a bordered grid of key cells, one grid row
//! per matrix row. Column widths are sized per column position so vertically
//! adjacent cells line up; rows with differing cell counts close their
//! border and reopen a fresh one.

use std::fmt::Write as _;

use crate::keycodes::{compact_label, KeymapLayout};
use crate::models::{Cell, Layer, TapDance};

/// Renders a layer header plus its bordered key grid.
///
/// Empty cells render blank. Every other cell shows the compact display form
/// of its token, resolved with `layout` and the keymap's tap-dance table.
#[must_use]
pub fn render_layer(layer: &Layer, layout: KeymapLayout, tap_dances: &[TapDance]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Layer {}", layer.index);

    let labels: Vec<Vec<String>> = layer
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell_text(cell, layout, tap_dances))
                .collect()
        })
        .collect();
    if labels.is_empty() {
        return output;
    }

    let widths = column_widths(&labels);

    let mut previous_cols: Option<usize> = None;
    for row in &labels {
        match previous_cols {
            None => output.push_str(&border(&widths[..row.len()], '┌', '┬', '┐')),
            Some(cols) if cols == row.len() => {
                output.push_str(&border(&widths[..row.len()], '├', '┼', '┤'));
            }
            Some(cols) => {
                // Row shape changed: close the previous border and start over.
                output.push_str(&border(&widths[..cols], '└', '┴', '┘'));
                output.push_str(&border(&widths[..row.len()], '┌', '┬', '┐'));
            }
        }

        output.push('│');
        for (col, label) in row.iter().enumerate() {
            output.push_str(&centered(label, widths[col] + 2));
            output.push('│');
        }
        output.push('\n');

        previous_cols = Some(row.len());
    }
    if let Some(cols) = previous_cols {
        output.push_str(&border(&widths[..cols], '└', '┴', '┘'));
    }

    output
}

fn cell_text(cell: &Cell, layout: KeymapLayout, tap_dances: &[TapDance]) -> String {
    if cell.is_empty {
        String::new()
    } else {
        compact_label(&cell.token, layout, tap_dances)
    }
}

/// Widest label at each column position across all rows of the layer.
fn column_widths(labels: &[Vec<String>]) -> Vec<usize> {
    let cols = labels.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![1; cols];
    for row in labels {
        for (col, label) in row.iter().enumerate() {
            widths[col] = widths[col].max(label.chars().count());
        }
    }
    widths
}

/// One horizontal border line over the given column widths.
fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (col, width) in widths.iter().enumerate() {
        if col > 0 {
            line.push(mid);
        }
        for _ in 0..width + 2 {
            line.push('─');
        }
    }
    line.push(right);
    line.push('\n');
    line
}

/// Centers `text` in a field of `width` characters, truncating if needed.
fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let mut field = String::new();
    for _ in 0..left {
        field.push(' ');
    }
    field.push_str(text);
    for _ in 0..width - len - left {
        field.push(' ');
    }
    field
}
