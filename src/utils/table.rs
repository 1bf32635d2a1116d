/// A simple text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    right_aligned: Vec<bool>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let right_aligned = vec![false; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
            right_aligned,
        }
    }

    /// Right-align a column (numeric columns read better this way)
    pub fn align_right(mut self, column: usize) -> Self {
        if let Some(flag) = self.right_aligned.get_mut(column) {
            *flag = true;
        }
        self
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.len());
            }
        }

        self.rows.push(row);
    }

    /// Render the table, one line per row, with a trailing newline
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                if self.right_aligned[i] {
                    line.push_str(&format!("{:>width$}", col, width = width));
                } else {
                    line.push_str(&format!("{:<width$}", col, width = width));
                }
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line.trim_end().to_string()
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Date", "Predicted Price (USD)"]);
        table.add_row(vec!["2020-06-01".to_string(), "9.50".to_string()]);
        table.add_row(vec!["2020-06-02".to_string(), "10.25".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[0].contains("Predicted Price (USD)"));
        assert_eq!(lines[1], "-----------+----------------------");
        assert!(lines[2].contains("2020-06-01"));
    }

    #[test]
    fn test_right_alignment() {
        let mut table = Table::new(vec!["Date", "Price"]).align_right(1);
        table.add_row(vec!["2020-06-01".to_string(), "1.00".to_string()]);
        table.add_row(vec!["2020-06-02".to_string(), "100.00".to_string()]);

        let rendered = table.render();
        assert!(rendered.contains("2020-06-01 |   1.00"));
        assert!(rendered.contains("2020-06-02 | 100.00"));
    }
}
