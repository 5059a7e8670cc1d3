//! Sorting resource files on disk, one file or a batch at a time.
//!
//! Files are handled sequentially in the order given. A batch stops at the first
//! failure unless [`BatchOptions::keep_going`] is set, in which case failures are
//! collected into the [`BatchReport`] and the remaining files are still processed.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::Error, format::ResourceFile, traits::Parser};

/// Result of sorting (or checking) a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub path: PathBuf,
    /// Number of entries written.
    pub entries: usize,
    /// Whether the sorted bytes differ from what was on disk.
    pub changed: bool,
}

/// Controls how [`sort_files`] treats a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOptions {
    /// Continue with the next file after a failure instead of stopping.
    pub keep_going: bool,
    /// Only report whether files are sorted; never write.
    pub check: bool,
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}

/// Everything a batch run produced.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SortOutcome>,
    /// Failed files, in processing order. Only filled when `keep_going` is set.
    pub failures: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Files whose content was not already in sorted form.
    pub fn changed(&self) -> impl Iterator<Item = &SortOutcome> {
        self.outcomes.iter().filter(|o| o.changed)
    }
}

/// Sorts the file at `path` in place.
///
/// The file is always rewritten, even when its content is already sorted.
pub fn sort_file<P: AsRef<Path>>(path: P) -> Result<SortOutcome, Error> {
    let path = path.as_ref();
    let (resources, outcome) = load(path)?;
    resources.write_to(path)?;
    tracing::debug!(path = %path.display(), entries = outcome.entries, changed = outcome.changed, "sorted");
    Ok(outcome)
}

/// Reports whether the file at `path` is already sorted, without writing it.
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<SortOutcome, Error> {
    let path = path.as_ref();
    let (_, outcome) = load(path)?;
    tracing::debug!(path = %path.display(), entries = outcome.entries, changed = outcome.changed, "checked");
    Ok(outcome)
}

/// Sorts (or checks) every path in order.
///
/// `on_outcome` is called as soon as each file is done, so callers can report progress
/// before a later file fails.
pub fn sort_files<I, P, F>(
    paths: I,
    options: &BatchOptions,
    mut on_outcome: F,
) -> Result<BatchReport, Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&SortOutcome),
{
    run_batch(paths, options.keep_going, &mut on_outcome, |path| {
        if options.check {
            check_file(path)
        } else {
            sort_file(path)
        }
    })
}

fn run_batch<I, P, F, S>(
    paths: I,
    keep_going: bool,
    on_outcome: &mut F,
    mut step: S,
) -> Result<BatchReport, Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&SortOutcome),
    S: FnMut(&Path) -> Result<SortOutcome, Error>,
{
    let mut report = BatchReport::default();

    for path in paths {
        let path = path.as_ref();
        match step(path) {
            Ok(outcome) => {
                on_outcome(&outcome);
                report.outcomes.push(outcome);
            }
            Err(e) if keep_going => {
                tracing::warn!(path = %path.display(), error = %e, "skipping file");
                report.failures.push((path.to_path_buf(), e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

fn load(path: &Path) -> Result<(ResourceFile, SortOutcome), Error> {
    let original = fs::read(path).map_err(|e| Error::file(path, e))?;
    let resources = ResourceFile::from_bytes(&original)?;
    let changed = resources.render().as_bytes() != original.as_slice();
    let outcome = SortOutcome {
        path: path.to_path_buf(),
        entries: resources.len(),
        changed,
    };
    Ok((resources, outcome))
}
