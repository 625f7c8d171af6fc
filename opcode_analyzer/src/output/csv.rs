//!
//! Serializing the report to CSV.
//!

use std::fmt::Write;

use crate::report::Report;

///
/// Serialize the time series points to CSV in the following format:
/// "chart", "opcode", "metric", "height", "value", "count", "restart"
///
/// The ranking follows in its own table:
/// "rank", "opcode", "metric", "value", "count"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The estimated length of one CSV line.
    const ESTIMATED_LINE_LENGTH: usize = 64;
}

impl From<Report> for Csv {
    fn from(report: Report) -> Csv {
        let points: usize = report
            .charts
            .iter()
            .flat_map(|chart| chart.series.iter())
            .map(|series| series.points.len())
            .sum();
        let mut content = String::with_capacity((points + 1) * Self::ESTIMATED_LINE_LENGTH);
        content.push_str(r#""chart", "opcode", "metric", "height", "value", "count", "restart""#);
        content.push('\n');

        for chart in report.charts.iter() {
            for series in chart.series.iter() {
                for point in series.points.iter() {
                    writeln!(
                        &mut content,
                        r#""{}", "{}", "{}", {}, {}, {}, {}"#,
                        chart.sheet,
                        series.name,
                        series.metric,
                        point.height,
                        point.value,
                        point.count,
                        point.restart,
                    )
                    .expect("Always valid");
                }
            }
        }

        if let Some(ranking) = report.ranking {
            content.push('\n');
            content.push_str(r#""rank", "opcode", "metric", "value", "count""#);
            content.push('\n');
            for (index, entry) in ranking.entries.iter().enumerate() {
                writeln!(
                    &mut content,
                    r#"{}, "{}", "{}", {}, {}"#,
                    index + 1,
                    entry.name,
                    ranking.metric,
                    entry.value,
                    entry.count,
                )
                .expect("Always valid");
            }
        }

        Csv { content }
    }
}
