//!
//! XLSX output format for the report.
//!

pub mod worksheet;

use rust_xlsxwriter::Chart as XlsxChart;
use rust_xlsxwriter::ChartType;

use crate::analysis::ranking::Ranking;
use crate::dataset::error::Error as DatasetError;
use crate::report::chart::Chart;
use crate::report::metadata::Metadata;
use crate::report::Report;

use self::worksheet::Worksheet;

///
/// XLSX output format for the report.
///
/// The workbook holds a metadata worksheet, one worksheet per chart with the
/// point columns and a line chart, and a ranking worksheet with a bar chart.
///
#[derive(Default)]
pub struct Xlsx {
    /// The worksheets in workbook order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    /// The maximum number of series in one chart. The columns of the rest are still written.
    const MAX_CHART_SERIES: usize = 255;

    /// The chart width in pixels.
    const CHART_WIDTH: u32 = 960;

    /// The chart height in pixels.
    const CHART_HEIGHT: u32 = 540;

    ///
    /// Writes the metadata worksheet.
    ///
    fn metadata(
        metadata: &Metadata,
        ranking_error: Option<&DatasetError>,
    ) -> anyhow::Result<Worksheet> {
        let mut worksheet = Worksheet::new("Metadata", "Opcode execution time report")?;
        worksheet.write_property(0, "Generated", metadata.generated.to_rfc3339().as_str())?;
        worksheet.write_property(1, "Checkpoints", metadata.checkpoints as f64)?;
        if let Some(first_height) = metadata.first_height {
            worksheet.write_property(2, "First height", first_height as f64)?;
        }
        if let Some(last_height) = metadata.last_height {
            worksheet.write_property(3, "Last height", last_height as f64)?;
        }
        worksheet.write_property(4, "Threshold", metadata.threshold as f64)?;
        worksheet.write_property(5, "From height", metadata.from_height as f64)?;
        let mut row = 6;
        for mark in metadata.forks.iter() {
            worksheet.write_property(row, mark.fork.to_string().as_str(), mark.height as f64)?;
            row += 1;
        }
        if let Some(error) = ranking_error {
            worksheet.write_property(row, "Ranking error", error.to_string().as_str())?;
        }
        Ok(worksheet)
    }

    ///
    /// Writes the worksheet of one chart.
    ///
    fn chart(chart: &Chart) -> anyhow::Result<Worksheet> {
        let mut worksheet = Worksheet::new(chart.sheet.as_str(), chart.title.as_str())?;
        let sheet = chart.sheet.clone();

        let mut xlsx_chart = XlsxChart::new(ChartType::ScatterStraight);
        xlsx_chart.title().set_name(chart.title.as_str());
        xlsx_chart.x_axis().set_name("Block number");
        xlsx_chart
            .y_axis()
            .set_name(format!("{} ({})", chart.metric, chart.unit).as_str());
        xlsx_chart.set_width(Self::CHART_WIDTH);
        xlsx_chart.set_height(Self::CHART_HEIGHT);

        for (index, series) in chart.series.iter().enumerate() {
            let points = series.points.iter().map(|point| (point.height as f64, point.value));
            let range = worksheet.write_pairs("Height", series.name.as_str(), points)?;
            if index >= Self::MAX_CHART_SERIES {
                continue;
            }
            if let Some(range) = range {
                xlsx_chart
                    .add_series()
                    .set_categories(range.categories(sheet.as_str()))
                    .set_values(range.values(sheet.as_str()))
                    .set_name(series.name.as_str());
            }
        }

        if let (Some(moving_average), Some(series)) = (&chart.moving_average, chart.series.first()) {
            let name = format!("Moving AVG {}", series.name);
            if let Some(range) = worksheet.write_pairs(
                "Height",
                name.as_str(),
                moving_average
                    .iter()
                    .map(|(height, value)| (*height as f64, *value)),
            )? {
                xlsx_chart
                    .add_series()
                    .set_categories(range.categories(sheet.as_str()))
                    .set_values(range.values(sheet.as_str()))
                    .set_name(name.as_str());
            }
        }

        if let Some(counts) = &chart.counts {
            if let Some(range) = worksheet.write_pairs(
                "Height",
                "Count",
                counts.iter().map(|(height, count)| (*height as f64, *count as f64)),
            )? {
                xlsx_chart
                    .add_series()
                    .set_categories(range.categories(sheet.as_str()))
                    .set_values(range.values(sheet.as_str()))
                    .set_name("Count")
                    .set_secondary_axis(true);
                xlsx_chart.y2_axis().set_name("Count");
            }
        }

        if !chart.series.is_empty() {
            worksheet.insert_chart(&xlsx_chart)?;
        }
        Ok(worksheet)
    }

    ///
    /// Writes the ranking worksheet.
    ///
    fn ranking(ranking: &Ranking) -> anyhow::Result<Worksheet> {
        let title = format!(
            "{} ({}) over {}..{}",
            ranking.metric,
            ranking.metric.unit(),
            ranking.start,
            ranking.end
        );
        let mut worksheet = Worksheet::new("Ranking", title.as_str())?;

        let range = worksheet.write_pairs(
            "Opcode",
            ranking.metric.to_string().as_str(),
            ranking
                .entries
                .iter()
                .map(|entry| (entry.name.as_str(), entry.value)),
        )?;
        worksheet.write_pairs(
            "Opcode",
            "Count",
            ranking
                .entries
                .iter()
                .map(|entry| (entry.name.as_str(), entry.count as f64)),
        )?;

        if let Some(range) = range {
            let mut chart = XlsxChart::new(ChartType::Bar);
            chart.title().set_name(title.as_str());
            chart.set_width(Self::CHART_WIDTH);
            chart.set_height(Self::CHART_HEIGHT);
            chart
                .add_series()
                .set_categories(range.categories("Ranking"))
                .set_values(range.values("Ranking"))
                .set_name(ranking.metric.to_string().as_str());
            chart.y_axis().set_reverse();
            worksheet.insert_chart(&chart)?;
        }
        Ok(worksheet)
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<Report> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(report: Report) -> Result<Self, Self::Error> {
        let mut worksheets = Vec::with_capacity(report.charts.len() + 2);
        worksheets.push(Self::metadata(&report.metadata, report.ranking_error.as_ref())?);
        for chart in report.charts.iter() {
            worksheets.push(Self::chart(chart)?);
        }
        if let Some(ranking) = &report.ranking {
            worksheets.push(Self::ranking(ranking)?);
        }
        Ok(Self { worksheets })
    }
}
