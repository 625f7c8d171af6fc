//!
//! The per-opcode execution time analyzer library.
//!

pub mod analysis;
pub mod dataset;
pub mod fee_schedule;
pub mod input;
pub mod metric;
pub mod opcode;
pub mod output;
pub mod report;
pub mod snapshot;

pub use crate::analysis::ranking::config::Config as RankingConfig;
pub use crate::analysis::ranking::entry::Entry as RankingEntry;
pub use crate::analysis::ranking::entry::Exclusion as RankingExclusion;
pub use crate::analysis::ranking::Ranking;
pub use crate::analysis::series::config::Config as SeriesConfig;
pub use crate::analysis::series::point::Point as SeriesPoint;
pub use crate::analysis::series::Series;
pub use crate::dataset::delta::Delta;
pub use crate::dataset::error::Error as DatasetError;
pub use crate::dataset::Dataset;
pub use crate::fee_schedule::cost::Cost;
pub use crate::fee_schedule::error::Error as FeeScheduleError;
pub use crate::fee_schedule::fork::Fork;
pub use crate::fee_schedule::Activation;
pub use crate::fee_schedule::FeeSchedule;
pub use crate::input::error::DecodeError;
pub use crate::input::error::Error as InputError;
pub use crate::metric::error::Error as MetricError;
pub use crate::metric::Metric;
pub use crate::opcode::group::Group as OpcodeGroup;
pub use crate::opcode::Opcode;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::report::plot::Plot as ReportPlot;
pub use crate::report::settings::Settings as ReportSettings;
pub use crate::report::Report;
pub use crate::snapshot::counter::Counter;
pub use crate::snapshot::Snapshot;
