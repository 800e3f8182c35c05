//! Table rendering utilities for CLI outputs.

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths grow to the widest cell; rows shorter than the column
    /// list render empty trailing cells.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.len());
                }
            }
        }

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(widths.iter()) {
            out.push_str(&format!("{:<width$}  ", col.header, width = w));
        }
        out.push('\n');

        // Separator
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        let empty = String::new();
        for row in &self.rows {
            for (i, (col, w)) in self.columns.iter().zip(widths.iter()).enumerate() {
                let cell = row.get(i).unwrap_or(&empty);
                match col.align {
                    Align::Left => out.push_str(&format!("{:<width$}  ", cell, width = w)),
                    Align::Right => out.push_str(&format!("{:>width$}  ", cell, width = w)),
                }
            }
            out.push('\n');
        }

        out
    }
}
