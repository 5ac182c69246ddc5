use serde::Serialize;

/// Delimiter used when neither the caller nor a predecessor supplies one.
pub const DEFAULT_DELIMITER: &str = "|";

/// One segment of a label sequence: its text plus fully resolved delimiter options.
///
/// Options are resolved once, when the label is created, so a `Label` never
/// refers back to its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub(crate) text: String,
    pub(crate) delimiter: String,
    pub(crate) trailing_marker: String,
    pub(crate) include_trailing_delimiter: bool,
    pub(crate) leading_marker: String,
    pub(crate) include_leading_marker: bool,
}

impl Label {
    /// Segment text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Delimiter placed between this label and the next one.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Override for the trailing delimiter when this label is last.
    pub fn trailing_marker(&self) -> &str {
        &self.trailing_marker
    }

    /// Whether a trailing delimiter is rendered when this label is last.
    pub fn include_trailing_delimiter(&self) -> bool {
        self.include_trailing_delimiter
    }

    /// Prefix for the whole rendered sequence when this label is last.
    pub fn leading_marker(&self) -> &str {
        &self.leading_marker
    }

    /// Whether a leading prefix is rendered when this label is last.
    pub fn include_leading_marker(&self) -> bool {
        self.include_leading_marker
    }

    /// Text emitted after this label when it is the last one, if any.
    pub(crate) fn trailing(&self) -> Option<&str> {
        if !self.include_trailing_delimiter {
            return None;
        }
        Some(non_empty_or(&self.trailing_marker, &self.delimiter))
    }

    /// Text emitted before the whole sequence when this label is the last one, if any.
    pub(crate) fn leading(&self) -> Option<&str> {
        if !self.include_leading_marker {
            return None;
        }
        Some(non_empty_or(&self.leading_marker, &self.delimiter))
    }
}

fn non_empty_or<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}
