use std::path::PathBuf;

use strings_sort::{BatchOptions, sort_files};

use crate::{config::Config, error::CliError, path_glob::expand_input_globs};

/// Arguments of one sort run, after clap parsing.
#[derive(Debug, Clone, Default)]
pub struct SortCommand {
    pub inputs: Vec<String>,
    pub config: Option<PathBuf>,
    pub keep_going: bool,
    pub check: bool,
}

impl SortCommand {
    /// Resolves the final file list and batch options.
    ///
    /// Inputs given on the command line come first, followed by the files of an explicit
    /// `--config`. With neither, `strings-sort.toml` in the working directory is used.
    pub fn resolve(&self) -> Result<(Vec<String>, BatchOptions), CliError> {
        let config = match &self.config {
            Some(path) => Some(Config::load(path)?),
            None if self.inputs.is_empty() => Config::discover(".")?,
            None => None,
        };

        let mut inputs = self.inputs.clone();
        let mut keep_going = self.keep_going;
        if let Some(config) = &config {
            inputs.extend(config.resolved_files());
            keep_going |= config.keep_going;
        }
        if inputs.is_empty() {
            return Err(CliError::NoInput);
        }

        let files = expand_input_globs(&inputs)?;
        let options = BatchOptions::new()
            .with_keep_going(keep_going)
            .with_check(self.check);
        Ok((files, options))
    }
}

/// Run the sort command. Returns `Ok(false)` when some file failed or, with `--check`,
/// when some file is not sorted.
pub fn run_sort_command(command: SortCommand) -> Result<bool, CliError> {
    let (files, options) = command.resolve()?;
    tracing::info!(files = files.len(), check = options.check, "starting");

    let report = sort_files(&files, &options, |outcome| {
        if !options.check {
            println!("{} was sorted", outcome.path.display());
        } else if outcome.changed {
            println!("{} is not sorted", outcome.path.display());
        }
    })?;

    for (path, error) in &report.failures {
        eprintln!("Error: {}: {}", path.display(), error);
    }
    if !report.failures.is_empty() {
        eprintln!(
            "{} of {} files failed",
            report.failures.len(),
            report.failures.len() + report.outcomes.len()
        );
    }

    let unsorted = options.check && report.changed().next().is_some();
    Ok(report.is_success() && !unsorted)
}
