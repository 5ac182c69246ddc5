use crate::error::{Error, Result};
use crate::label::{Label, DEFAULT_DELIMITER};
use serde::Deserialize;
use serde_json::Value;

/// Per-label options. Every field left unset is inherited from the
/// predecessor label, or falls back to a default when there is none.
///
/// A plain string converts into options carrying only a delimiter:
///
/// ```
/// use label_maker::{label_maker, LabelOptions};
///
/// let labels = label_maker()
///     .push("foo", "+")
///     .push("bar", LabelOptions::new())
///     .push("baz", LabelOptions::new().delimiter("-").include_trailing_delimiter(true));
/// assert_eq!(labels.to_string(), "foo+bar+baz-");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LabelOptions {
    pub delimiter: Option<String>,
    #[serde(alias = "appendDelimiter")]
    pub trailing_marker: Option<String>,
    #[serde(alias = "includeFinalDelimiter")]
    pub include_trailing_delimiter: Option<bool>,
    #[serde(alias = "prependDelimiter")]
    pub leading_marker: Option<String>,
    #[serde(alias = "includePrependedDelimiter")]
    pub include_leading_marker: Option<bool>,
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    pub fn trailing_marker(mut self, marker: impl Into<String>) -> Self {
        self.trailing_marker = Some(marker.into());
        self
    }

    pub fn include_trailing_delimiter(mut self, include: bool) -> Self {
        self.include_trailing_delimiter = Some(include);
        self
    }

    pub fn leading_marker(mut self, marker: impl Into<String>) -> Self {
        self.leading_marker = Some(marker.into());
        self
    }

    pub fn include_leading_marker(mut self, include: bool) -> Self {
        self.include_leading_marker = Some(include);
        self
    }

    /// Validates a dynamic options payload.
    ///
    /// Accepts `null` (no options), a string (delimiter shorthand) or an
    /// object with camelCase keys. Anything else is rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::String(delimiter) => Ok(Self::from(delimiter.as_str())),
            Value::Object(_) => {
                Self::deserialize(value).map_err(|source| Error::InvalidOptions { source })
            }
            Value::Bool(_) => Err(Error::UnexpectedShape { found: "boolean" }),
            Value::Number(_) => Err(Error::UnexpectedShape { found: "number" }),
            Value::Array(_) => Err(Error::UnexpectedShape { found: "array" }),
        }
    }

    /// Builds a label, filling unset options from `predecessor`.
    ///
    /// A non-empty explicit marker switches its include flag on unless the
    /// flag itself was given.
    pub(crate) fn resolve(&self, text: String, predecessor: Option<&Label>) -> Label {
        let delimiter = self
            .delimiter
            .clone()
            .or_else(|| predecessor.map(|p| p.delimiter.clone()))
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());

        let trailing_marker = self
            .trailing_marker
            .clone()
            .or_else(|| predecessor.map(|p| p.trailing_marker.clone()))
            .unwrap_or_default();

        let include_trailing_delimiter = self
            .include_trailing_delimiter
            .or_else(|| implied_by(&self.trailing_marker))
            .or_else(|| predecessor.map(|p| p.include_trailing_delimiter))
            .unwrap_or(false);

        let leading_marker = self
            .leading_marker
            .clone()
            .or_else(|| predecessor.map(|p| p.leading_marker.clone()))
            .unwrap_or_default();

        let include_leading_marker = self
            .include_leading_marker
            .or_else(|| implied_by(&self.leading_marker))
            .or_else(|| predecessor.map(|p| p.include_leading_marker))
            .unwrap_or(false);

        Label {
            text,
            delimiter,
            trailing_marker,
            include_trailing_delimiter,
            leading_marker,
            include_leading_marker,
        }
    }
}

fn implied_by(marker: &Option<String>) -> Option<bool> {
    match marker {
        Some(marker) if !marker.is_empty() => Some(true),
        _ => None,
    }
}

impl From<&str> for LabelOptions {
    fn from(delimiter: &str) -> Self {
        Self::new().delimiter(delimiter)
    }
}

impl From<String> for LabelOptions {
    fn from(delimiter: String) -> Self {
        Self::new().delimiter(delimiter)
    }
}

impl From<&LabelOptions> for LabelOptions {
    fn from(options: &LabelOptions) -> Self {
        options.clone()
    }
}

impl TryFrom<Value> for LabelOptions {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn predecessor() -> Label {
        LabelOptions::new()
            .delimiter("+")
            .trailing_marker("!")
            .include_trailing_delimiter(false)
            .leading_marker(">")
            .include_leading_marker(false)
            .resolve("prev".to_string(), None)
    }

    #[test]
    fn test_defaults_without_predecessor() {
        let label = LabelOptions::new().resolve("foo".to_string(), None);
        assert_eq!(label.text(), "foo");
        assert_eq!(label.delimiter(), "|");
        assert_eq!(label.trailing_marker(), "");
        assert!(!label.include_trailing_delimiter());
        assert_eq!(label.leading_marker(), "");
        assert!(!label.include_leading_marker());
    }

    #[test]
    fn test_inherits_from_predecessor() {
        let prev = predecessor();
        let label = LabelOptions::new().resolve("foo".to_string(), Some(&prev));
        assert_eq!(label.delimiter(), "+");
        assert_eq!(label.trailing_marker(), "!");
        assert!(!label.include_trailing_delimiter());
        assert_eq!(label.leading_marker(), ">");
        assert!(!label.include_leading_marker());
    }

    #[test]
    fn test_explicit_overrides_predecessor() {
        let prev = predecessor();
        let label = LabelOptions::new()
            .delimiter("-")
            .include_leading_marker(true)
            .resolve("foo".to_string(), Some(&prev));
        assert_eq!(label.delimiter(), "-");
        assert!(label.include_leading_marker());
        assert_eq!(label.leading_marker(), ">");
    }

    #[test]
    fn test_non_empty_marker_implies_include() {
        let prev = predecessor();
        let label = LabelOptions::new()
            .trailing_marker("$")
            .leading_marker("^")
            .resolve("foo".to_string(), Some(&prev));
        assert!(label.include_trailing_delimiter());
        assert!(label.include_leading_marker());
    }

    #[test]
    fn test_explicit_flag_beats_implied_include() {
        let label = LabelOptions::new()
            .trailing_marker("$")
            .include_trailing_delimiter(false)
            .resolve("foo".to_string(), None);
        assert!(!label.include_trailing_delimiter());
        assert_eq!(label.trailing_marker(), "$");
    }

    #[test]
    fn test_empty_marker_does_not_imply_include() {
        let mut prev = predecessor();
        prev.include_trailing_delimiter = true;
        let label = LabelOptions::new()
            .trailing_marker("")
            .resolve("foo".to_string(), Some(&prev));
        assert_eq!(label.trailing_marker(), "");
        // Falls through to the predecessor's flag
        assert!(label.include_trailing_delimiter());
    }

    #[test]
    fn test_string_shorthand() {
        assert_eq!(LabelOptions::from("-"), LabelOptions::new().delimiter("-"));
    }

    #[test]
    fn test_from_json_string() {
        let options = LabelOptions::from_json(&json!("+")).unwrap();
        assert_eq!(options.delimiter.as_deref(), Some("+"));
    }

    #[test]
    fn test_from_json_record() {
        let options = LabelOptions::from_json(&json!({
            "delimiter": "-",
            "includeTrailingDelimiter": true,
            "leadingMarker": ">"
        }))
        .unwrap();
        assert_eq!(
            options,
            LabelOptions::new()
                .delimiter("-")
                .include_trailing_delimiter(true)
                .leading_marker(">")
        );
    }

    #[test]
    fn test_from_json_legacy_aliases() {
        let options = LabelOptions::from_json(&json!({
            "appendDelimiter": "!",
            "includeFinalDelimiter": true,
            "prependDelimiter": "^",
            "includePrependedDelimiter": false
        }))
        .unwrap();
        assert_eq!(options.trailing_marker.as_deref(), Some("!"));
        assert_eq!(options.include_trailing_delimiter, Some(true));
        assert_eq!(options.leading_marker.as_deref(), Some("^"));
        assert_eq!(options.include_leading_marker, Some(false));
    }

    #[test]
    fn test_from_json_null_and_empty() {
        assert_eq!(LabelOptions::from_json(&json!(null)).unwrap(), LabelOptions::new());
        assert_eq!(LabelOptions::from_json(&json!({})).unwrap(), LabelOptions::new());
    }

    #[test]
    fn test_from_json_rejects_non_records() {
        for value in [json!(42), json!(true), json!(["-"])] {
            let err = LabelOptions::from_json(&value).unwrap_err();
            assert!(matches!(err, Error::UnexpectedShape { .. }), "{value} accepted");
        }
    }

    #[test]
    fn test_from_json_rejects_malformed_records() {
        for value in [
            json!({ "delimiter": 3 }),
            json!({ "includeTrailingDelimiter": "yes" }),
            json!({ "separator": "-" }),
        ] {
            let err = LabelOptions::from_json(&value).unwrap_err();
            assert!(matches!(err, Error::InvalidOptions { .. }), "{value} accepted");
        }
    }

    #[test]
    fn test_try_from_value() {
        let options = LabelOptions::try_from(json!({ "delimiter": "." })).unwrap();
        assert_eq!(options.delimiter.as_deref(), Some("."));
        assert!(LabelOptions::try_from(json!(1.5)).is_err());
    }
}
