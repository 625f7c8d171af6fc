//!
//! The report output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod xlsx;


use std::path::PathBuf;

use crate::report::Report;

use self::csv::Csv;
use self::format::Format;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// The rendered report.
///
pub enum Output {
    /// The report is a single text file.
    SingleFile(String),
    /// The report is a single spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the rendered report to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(Report, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, output_format): (Report, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Json => Json::from(report).into(),
            Format::Csv => Csv::from(report).into(),
            Format::Xlsx => Xlsx::try_from(report)?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
