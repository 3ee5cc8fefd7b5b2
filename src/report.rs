/*!
 * Reporting functionality for srcdump
 *
 * Renders the summary of a finished run using the tabled library.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::ScanOutcome;
use crate::utils::format_file_size;

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for a finished run
    pub fn generate_report(&self, outcome: &ScanOutcome) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(outcome),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, outcome: &ScanOutcome) {
        println!("\n{}", self.generate_report(outcome));
    }

    fn create_summary_table(&self, outcome: &ScanOutcome) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &outcome.statistics;
        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: outcome.output_file.display().to_string(),
            },
            SummaryRow {
                key: "📄 Files Processed".to_string(),
                value: outcome.files_processed.to_string(),
            },
            SummaryRow {
                key: "✅ Files Read".to_string(),
                value: stats.files_read.to_string(),
            },
            SummaryRow {
                key: "⚠️ Unreadable Files".to_string(),
                value: stats.read_failures.len().to_string(),
            },
            SummaryRow {
                key: "📦 Content Size".to_string(),
                value: format_file_size(stats.content_bytes),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", outcome.duration),
            },
        ];

        styled(Table::new(rows))
    }

    fn create_failures_table(&self, outcome: &ScanOutcome) -> String {
        #[derive(Tabled)]
        struct FailureRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Error")]
            message: String,
        }

        let rows: Vec<FailureRow> = outcome
            .statistics
            .read_failures
            .iter()
            .map(|failure| FailureRow {
                path: failure.path.display().to_string(),
                message: failure.message.clone(),
            })
            .collect();

        styled(Table::new(rows))
    }

    fn generate_console_report(&self, outcome: &ScanOutcome) -> String {
        let summary = format!(
            "✅  PROCESS COMPLETE\n{}",
            self.create_summary_table(outcome)
        );

        if outcome.statistics.read_failures.is_empty() {
            return summary;
        }

        format!(
            "⚠️  UNREADABLE FILES\n{}\n\n{}",
            self.create_failures_table(outcome),
            summary
        )
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReadFailure, ScanStatistics};
    use std::path::PathBuf;
    use std::time::Duration;

    fn outcome(read_failures: Vec<ReadFailure>) -> ScanOutcome {
        ScanOutcome {
            files_processed: 3,
            output_file: PathBuf::from("/work/codigo_compilado.txt"),
            statistics: ScanStatistics {
                files_processed: 3,
                files_read: 3 - read_failures.len(),
                content_bytes: 2048,
                read_failures,
            },
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_summary_report() {
        let report = Reporter::new(ReportFormat::ConsoleTable).generate_report(&outcome(vec![]));
        assert!(report.contains("PROCESS COMPLETE"));
        assert!(report.contains("/work/codigo_compilado.txt"));
        assert!(report.contains("2.00 KB"));
        assert!(!report.contains("UNREADABLE FILES"));
    }

    #[test]
    fn test_report_lists_failures() {
        let report = Reporter::new(ReportFormat::ConsoleTable).generate_report(&outcome(vec![
            ReadFailure {
                path: PathBuf::from("bad.py"),
                message: "stream did not contain valid UTF-8".to_string(),
            },
        ]));
        assert!(report.contains("UNREADABLE FILES"));
        assert!(report.contains("bad.py"));
        assert!(report.contains("stream did not contain valid UTF-8"));
    }
}
