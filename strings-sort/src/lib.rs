#![forbid(unsafe_code)]
//! Sorting for Android `strings.xml` resource files.
//!
//! Entries (`<string>` and `<plurals>` blocks) are collected line by line, keyed by their
//! `name` attribute, and written back in ascending key order. Each entry keeps its exact
//! original text, so translation files stay diffable and merge-friendly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use strings_sort::sort_file;
//!
//! let outcome = sort_file("app/src/main/res/values/strings.xml")?;
//! println!("{} was sorted", outcome.path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Working on text directly:
//!
//! ```rust
//! use strings_sort::sort_str;
//!
//! let input = "<resources>\n<string name=\"b\">B</string>\n<string name=\"a\">A</string>\n</resources>\n";
//! let sorted = sort_str(input)?;
//! assert_eq!(
//!     sorted,
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?><resources><string name=\"a\">A</string>\n<string name=\"b\">B</string>\n</resources>"
//! );
//! # Ok::<(), strings_sort::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod sorter;
pub mod traits;
pub mod types;

pub use crate::{
    error::Error,
    format::{ResourceFile, sort_str},
    sorter::{BatchOptions, BatchReport, SortOutcome, check_file, sort_file, sort_files},
    traits::Parser,
    types::{Entry, EntryKind},
};
