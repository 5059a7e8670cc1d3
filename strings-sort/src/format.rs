//! Line-oriented reading and writing of Android `strings.xml` files.
//!
//! The file is scanned as text rather than parsed as XML so that every entry keeps its
//! exact formatting. A line whose trimmed text starts with `<string ` or `<plurals `
//! opens an entry, and the entry runs until a line ending in `</string>` or
//! `</plurals>`. Everything outside an entry (prolog, `<resources>` wrapper, blank
//! lines, comments) is dropped.
//!
//! Output is always written as
//! `<?xml version="1.0" encoding="utf-8"?><resources>ENTRY_1...ENTRY_N</resources>`,
//! with entries concatenated verbatim and no separators.

use lazy_static::lazy_static;
use regex::Regex;
use std::{
    borrow::Cow,
    collections::BTreeMap,
    io::{self, BufRead, Write},
};

use crate::{
    error::Error,
    traits::Parser,
    types::{Entry, EntryKind},
};

/// XML declaration written at the start of every sorted file.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
pub const RESOURCES_OPEN: &str = "<resources>";
pub const RESOURCES_CLOSE: &str = "</resources>";

lazy_static! {
    // Greedy: a value containing `"` extends to the last quote on the line.
    static ref NAME_REGEX: Regex = Regex::new(r#"name="(.+)""#).unwrap();
    static ref PROLOG_REGEX: Regex = Regex::new(r"^<\?xml[^>]*\?>").unwrap();
    static ref RESOURCES_OPEN_REGEX: Regex = Regex::new(r"^<resources\b[^>]*>").unwrap();
}

/// The entries of one resource file, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFile {
    pub entries: BTreeMap<String, Entry>,
    /// Names that appeared more than once; only the last block was kept.
    pub duplicates: Vec<String>,
}

impl ResourceFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Entries in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Inserts an entry, replacing any entry with the same name.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.name.clone(), entry)
    }

    /// Renders the sorted file contents.
    pub fn render(&self) -> String {
        let body_len: usize = self.iter().map(|e| e.text.len()).sum();
        let mut out = String::with_capacity(
            XML_DECLARATION.len() + RESOURCES_OPEN.len() + body_len + RESOURCES_CLOSE.len(),
        );
        out.push_str(XML_DECLARATION);
        out.push_str(RESOURCES_OPEN);
        for entry in self.iter() {
            out.push_str(&entry.text);
        }
        out.push_str(RESOURCES_CLOSE);
        out
    }
}

impl Parser for ResourceFile {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut resources = ResourceFile::new();
        let mut current: Option<String> = None;
        let mut line = String::new();
        let mut line_number = 0usize;

        loop {
            line.clear();
            let read = reader.read_line(&mut line).map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => Error::Encoding {
                    line: line_number + 1,
                },
                _ => Error::Io(e),
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let segment = strip_wrapper(&line);
            let trimmed = segment.trim();

            if let Some(kind) = EntryKind::opened_by(trimmed) {
                let name = extract_name(&segment).ok_or_else(|| {
                    Error::missing_name(line_number, line.trim_end_matches(['\r', '\n']))
                })?;
                if resources.insert(Entry::new(name, kind)).is_some() {
                    tracing::warn!(name, line = line_number, "duplicate entry, keeping the last one");
                    resources.duplicates.push(name.to_string());
                }
                current = Some(name.to_string());
            }

            if let Some(entry) = current
                .as_deref()
                .and_then(|name| resources.entries.get_mut(name))
            {
                entry.text.push_str(&segment);
            }

            if EntryKind::is_closing(trimmed) {
                current = None;
            }
        }

        if let Some(name) = current {
            tracing::debug!(name = %name, "entry still open at end of input");
        }

        Ok(resources)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Parses `input` and returns its sorted rendering.
pub fn sort_str(input: &str) -> Result<String, Error> {
    Ok(ResourceFile::from_str(input)?.render())
}

fn extract_name(line: &str) -> Option<&str> {
    NAME_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Removes wrapper tags that share a line with entry content.
///
/// The sorted output puts the declaration, `<resources>` and the first entry on one
/// line, so reading it back needs the entry separated from the wrapper. A leading
/// declaration and/or `<resources>` tag, or a trailing `</resources>`, is removed only
/// when something non-blank remains; the line terminator is kept.
fn strip_wrapper(line: &str) -> Cow<'_, str> {
    let body = line.trim_end_matches(['\r', '\n']);
    let terminator = &line[body.len()..];

    let mut content = body;

    let lead = body.trim_start();
    let mut rest = lead;
    if let Some(m) = PROLOG_REGEX.find(rest) {
        rest = rest[m.end()..].trim_start();
    }
    if let Some(m) = RESOURCES_OPEN_REGEX.find(rest) {
        rest = &rest[m.end()..];
    }
    if rest.len() != lead.len() && !rest.trim().is_empty() {
        content = rest;
    }

    if let Some(inner) = content.trim_end().strip_suffix(RESOURCES_CLOSE) {
        if !inner.trim().is_empty() {
            content = inner;
        }
    }

    if content.len() == body.len() {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(format!("{content}{terminator}"))
    }
}
