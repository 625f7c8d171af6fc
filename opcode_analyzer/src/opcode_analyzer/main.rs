//!
//! The opcode analyzer binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let input_paths = if arguments.input_paths.len() == 1 {
        if !arguments.input_paths[0].is_dir() {
            anyhow::bail!(
                "Expected a directory with checkpoint files, but got a file: {:?}",
                arguments.input_paths[0]
            );
        }
        opcode_analyzer::input::resolve(arguments.input_paths[0].as_path())?
    } else if arguments.input_paths.is_empty() {
        anyhow::bail!("No input files provided.");
    } else {
        arguments.input_paths
    };

    let mut dataset = opcode_analyzer::Dataset::default();
    for path in input_paths.into_iter() {
        match opcode_analyzer::Snapshot::try_from(path.as_path()) {
            Ok(snapshot) => {
                let height = snapshot.height();
                if dataset.insert(snapshot).is_some() && !arguments.quiet {
                    eprintln!(
                        "{} Checkpoint height {height} is loaded more than once, {path:?} takes precedence.",
                        "Warning:".bright_yellow()
                    );
                }
            }
            Err(opcode_analyzer::InputError::EmptyFile { path }) if !arguments.strict => {
                if !arguments.quiet {
                    eprintln!(
                        "{} Checkpoint file {path:?} is empty and will be skipped.",
                        "Warning:".bright_yellow()
                    );
                }
                continue;
            }
            Err(error @ opcode_analyzer::InputError::Decoding { .. }) if !arguments.strict => {
                if !arguments.quiet {
                    eprintln!("{} {error}. Skipped.", "Warning:".bright_yellow());
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }
    if dataset.is_empty() {
        anyhow::bail!("No checkpoints loaded.");
    }
    if !arguments.quiet {
        eprintln!(
            "{} {} checkpoints, heights {}..{}",
            "Loaded".bright_green().bold(),
            dataset.len(),
            dataset.first_height().unwrap_or_default(),
            dataset.last_height().unwrap_or_default(),
        );
    }

    let settings = opcode_analyzer::ReportSettings {
        series: opcode_analyzer::SeriesConfig {
            threshold: arguments.threshold,
            from_height: arguments.from_height,
            cap: None,
        },
        ranking: Some(opcode_analyzer::RankingConfig {
            start: arguments.window_start,
            end: arguments.window_end,
            metric: arguments.metric,
            top: Some(arguments.top),
        }),
        moving_average_period: arguments.moving_average_period,
        ..Default::default()
    };
    let schedule = opcode_analyzer::FeeSchedule::mainnet();
    let report = opcode_analyzer::Report::build(&dataset, &schedule, &settings)?;

    if !arguments.quiet {
        if let Some(ranking) = report.ranking.as_ref() {
            ranking.write_all(&mut std::io::stdout())?;
        }
        if let Some(error) = report.ranking_error.as_ref() {
            eprintln!(
                "{} The ranking window is skipped: {error}.",
                "Warning:".bright_yellow()
            );
        }
    }

    let output: opcode_analyzer::Output = (report, arguments.output_format).try_into()?;
    output.write_to_file(arguments.output_path)?;

    Ok(())
}
