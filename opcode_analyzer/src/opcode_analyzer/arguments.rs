//!
//! The opcode analyzer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The opcode analyzer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Aborts on the first unreadable checkpoint file instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Checkpoint files named `metrics_to_<height>`.
    /// If only one path is provided, it is treated as a directory with checkpoint files.
    pub input_paths: Vec<PathBuf>,

    /// Checkpoints below this height are ignored by the time series.
    #[arg(long, default_value_t = 0)]
    pub from_height: u64,

    /// Intervals with at most this many invocations are left out of the time series.
    #[arg(long, default_value_t = opcode_analyzer::SeriesConfig::DEFAULT_THRESHOLD)]
    pub threshold: i64,

    /// The ranking window start. Defaults to the first checkpoint.
    #[arg(long)]
    pub window_start: Option<u64>,

    /// The ranking window end. Defaults to the last checkpoint.
    #[arg(long)]
    pub window_end: Option<u64>,

    /// The number of ranked opcodes kept.
    #[arg(long, default_value_t = opcode_analyzer::RankingConfig::DEFAULT_TOP)]
    pub top: usize,

    /// The ranking metric: `count`, `time`, `total-gas`, `time-per-gas`, or `gas-per-second`.
    #[arg(long, default_value_t = opcode_analyzer::Metric::TimePerGas)]
    pub metric: opcode_analyzer::Metric,

    /// The moving average period of single-opcode charts.
    #[arg(long, default_value_t = opcode_analyzer::Series::DEFAULT_MOVING_AVERAGE_PERIOD)]
    pub moving_average_period: usize,

    /// Report output format: `json`, `csv`, or `xlsx`.
    #[arg(long, default_value_t = opcode_analyzer::OutputFormat::Xlsx)]
    pub output_format: opcode_analyzer::OutputFormat,

    /// Output file.
    #[arg(long)]
    pub output_path: PathBuf,
}
