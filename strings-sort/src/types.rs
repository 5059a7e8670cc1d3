//! Entry types shared by the reader and the writer.

use std::fmt;

/// The element that opened an entry block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// `<string name="...">`
    String,
    /// `<plurals name="...">`
    Plurals,
}

impl EntryKind {
    /// Returns the kind of entry a trimmed line opens, if any.
    ///
    /// The tag name must be followed by a space, so `<string>` without
    /// attributes and `<string-array ...>` are not entry openers.
    pub fn opened_by(trimmed: &str) -> Option<Self> {
        if trimmed.starts_with("<string ") {
            Some(EntryKind::String)
        } else if trimmed.starts_with("<plurals ") {
            Some(EntryKind::Plurals)
        } else {
            None
        }
    }

    /// Whether a trimmed line ends an entry block.
    ///
    /// Either closing tag ends the current block, whichever kind opened it.
    pub fn is_closing(trimmed: &str) -> bool {
        trimmed.ends_with("</string>") || trimmed.ends_with("</plurals>")
    }

    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::String => "string",
            EntryKind::Plurals => "plurals",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One named resource block and its verbatim text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Value of the `name` attribute.
    pub name: String,
    pub kind: EntryKind,
    /// Every line of the block, each with its own line terminator.
    pub text: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Entry {
            name: name.into(),
            kind,
            text: String::new(),
        }
    }

    /// Number of source lines the block spans.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opened_by_string_and_plurals() {
        assert_eq!(
            EntryKind::opened_by(r#"<string name="a">A</string>"#),
            Some(EntryKind::String)
        );
        assert_eq!(
            EntryKind::opened_by(r#"<plurals name="apples">"#),
            Some(EntryKind::Plurals)
        );
    }

    #[test]
    fn test_opened_by_requires_attribute_space() {
        assert_eq!(EntryKind::opened_by("<string>no name</string>"), None);
        assert_eq!(EntryKind::opened_by(r#"<string-array name="x">"#), None);
        assert_eq!(EntryKind::opened_by("<resources>"), None);
    }

    #[test]
    fn test_is_closing_accepts_either_tag() {
        assert!(EntryKind::is_closing(r#"<string name="a">A</string>"#));
        assert!(EntryKind::is_closing("</plurals>"));
        assert!(!EntryKind::is_closing(r#"<item quantity="one">One</item>"#));
        assert!(!EntryKind::is_closing("</resources>"));
    }

    #[test]
    fn test_entry_line_count() {
        let mut entry = Entry::new("apples", EntryKind::Plurals);
        entry.text.push_str("<plurals name=\"apples\">\n");
        entry.text.push_str("    <item quantity=\"one\">One apple</item>\n");
        entry.text.push_str("</plurals>\n");
        assert_eq!(entry.line_count(), 3);
        assert_eq!(entry.kind.to_string(), "plurals");
    }
}
