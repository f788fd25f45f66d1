use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: String,
    align: Align,
    cells: Vec<String>,
}

/// A builder for aligned tabular output where a cell may span several
/// lines (wrapped text, icon art).
///
/// Columns are added with `column()` (left-aligned) or `numeric_column()`
/// (right-aligned). Each cell is one string; embedded newlines make a
/// multi-line cell. A row is as tall as its tallest cell, and shorter
/// cells are padded with blank lines.
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Table { columns: Vec::new() }
    }

    /// Add a left-aligned column with the given header and cells.
    pub fn column(mut self, header: impl Into<String>, cells: Vec<String>) -> Self {
        self.columns.push(Column {
            header: header.into(),
            align: Align::Left,
            cells,
        });
        self
    }

    /// Add a right-aligned column, for numeric data.
    pub fn numeric_column(mut self, header: impl Into<String>, cells: Vec<String>) -> Self {
        self.columns.push(Column {
            header: header.into(),
            align: Align::Right,
            cells,
        });
        self
    }

    /// Render the table with aligned columns, without trailing whitespace.
    pub fn render(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        // Column width: max display width of the header and every cell line.
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| {
                col.cells
                    .iter()
                    .flat_map(|cell| cell.lines())
                    .map(|line| line.width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let headers: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| ljust(&col.header, w))
            .collect();
        out.push_str(headers.join("  ").trim_end());
        out.push('\n');

        let num_rows = self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
        for row_idx in 0..num_rows {
            let cells: Vec<Vec<&str>> = self
                .columns
                .iter()
                .map(|col| {
                    col.cells
                        .get(row_idx)
                        .map(|cell| cell.lines().collect())
                        .unwrap_or_default()
                })
                .collect();
            let height = cells.iter().map(|lines| lines.len()).max().unwrap_or(0);

            for line_idx in 0..height {
                let line: Vec<String> = cells
                    .iter()
                    .zip(&self.columns)
                    .zip(&widths)
                    .map(|((lines, col), &w)| {
                        let text = lines.get(line_idx).copied().unwrap_or("");
                        match col.align {
                            Align::Left => ljust(text, w),
                            Align::Right => rjust(text, w),
                        }
                    })
                    .collect();
                out.push_str(line.join("  ").trim_end());
                out.push('\n');
            }
        }
        out
    }
}

/// Left-justify string to given width (using Unicode display width).
fn ljust(s: &str, width: usize) -> String {
    let current_width = s.width();
    if current_width >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current_width))
    }
}

/// Right-justify string to given width (using Unicode display width).
fn rjust(s: &str, width: usize) -> String {
    let current_width = s.width();
    if current_width >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - current_width), s)
    }
}
