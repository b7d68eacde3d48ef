//! Box-drawn tables for list output.

use console::measure_text_width;

/// A simple table for formatted output.
///
/// Widths are measured in terminal columns, so styled cells and non-ASCII
/// names line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table. Cells beyond the header count are ignored.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();

        for (i, cell) in row.iter().enumerate() {
            self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.push(self.render_border('└', '┴', '┘'));

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let padding = width.saturating_sub(measure_text_width(cell));
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(padding));
            s.push_str(" │");
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Name", "Version"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Name"));
        assert!(output.contains("Version"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Name", "Version", "Modified"]);
        table.add_row(vec!["Game", "2021.3.5f1", "3 days ago"]);
        table.add_row(vec!["Jam", "unknown", ""]);

        assert_eq!(table.row_count(), 2);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();
        // top border, header, separator, 2 rows, bottom border
        assert_eq!(lines.len(), 6);
        assert!(output.contains("2021.3.5f1"));
        assert!(output.contains("┬"));
        assert!(output.contains("┼"));
        assert!(output.contains("┴"));
    }

    #[test]
    fn rows_are_aligned() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(vec!["longer_value".to_string()]);
        table.add_row(vec!["x".to_string()]);

        let output = table.render();
        let widths: Vec<usize> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn non_ascii_cells_are_aligned() {
        let mut table = Table::new(vec!["Name"]);
        table.add_row(vec!["Café"]);
        table.add_row(vec!["Cafe"]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(measure_text_width(lines[3]), measure_text_width(lines[4]));
    }

    #[test]
    fn table_handles_missing_and_extra_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);
        table.add_row(vec!["1", "2", "3", "4"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(!output.contains("4"));
    }
}
