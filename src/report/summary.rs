//! Analysis summary displayed at the end of a run

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Per-column outcome collected during the run.
#[derive(Debug, Clone)]
pub struct ColumnOutcome {
    pub column: String,
    pub coverage_rate: Option<f64>,
    pub skewness: Option<f64>,
    pub outlier_count: Option<usize>,
    /// First error hit for this column, if any step failed
    pub error: Option<String>,
}

/// Summary of the whole EDA run.
#[derive(Debug, Default)]
pub struct EdaSummary {
    pub rows: usize,
    pub numerical_columns: usize,
    pub categorical_columns: usize,
    pub confidence_level: f64,
    pub outcomes: Vec<ColumnOutcome>,
}

impl EdaSummary {
    pub fn new(rows: usize, numerical: usize, categorical: usize, confidence_level: f64) -> Self {
        Self {
            rows,
            numerical_columns: numerical,
            categorical_columns: categorical,
            confidence_level,
            ..Default::default()
        }
    }

    pub fn add_outcome(&mut self, outcome: ColumnOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ANALYSIS SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("📁 Rows"), Cell::new(self.rows)]);
        table.add_row(vec![
            Cell::new("🔢 Numerical columns"),
            Cell::new(self.numerical_columns),
        ]);
        table.add_row(vec![
            Cell::new("🏷️  Categorical columns"),
            Cell::new(self.categorical_columns),
        ]);
        table.add_row(vec![
            Cell::new("📈 Nominal confidence"),
            Cell::new(format!("{:.0}%", self.confidence_level * 100.0)),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if self.outcomes.is_empty() {
            return;
        }

        println!();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Column").add_attribute(Attribute::Bold),
            Cell::new("Coverage").add_attribute(Attribute::Bold),
            Cell::new("Skewness").add_attribute(Attribute::Bold),
            Cell::new("Outliers").add_attribute(Attribute::Bold),
        ]);

        for outcome in &self.outcomes {
            if let Some(error) = &outcome.error {
                table.add_row(vec![
                    Cell::new(&outcome.column),
                    Cell::new(format!("skipped: {}", error)).fg(Color::Red),
                    Cell::new("-"),
                    Cell::new("-"),
                ]);
                continue;
            }

            let coverage = match outcome.coverage_rate {
                Some(rate) => {
                    // Flag coverage far from the nominal level
                    let cell = Cell::new(format!("{:.1}%", rate * 100.0));
                    if (rate - self.confidence_level).abs() > 0.05 {
                        cell.fg(Color::Yellow)
                    } else {
                        cell.fg(Color::Green)
                    }
                }
                None => Cell::new("-"),
            };

            let skew = match outcome.skewness {
                Some(s) if s.abs() > crate::analysis::SKEWNESS_WARNING_THRESHOLD => {
                    Cell::new(format!("{:.2}", s)).fg(Color::Yellow)
                }
                Some(s) => Cell::new(format!("{:.2}", s)),
                None => Cell::new("-"),
            };

            let outliers = match outcome.outlier_count {
                Some(0) => Cell::new(0).fg(Color::Green),
                Some(n) => Cell::new(n).fg(Color::Red),
                None => Cell::new("-"),
            };

            table.add_row(vec![Cell::new(&outcome.column), coverage, skew, outliers]);
        }

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
