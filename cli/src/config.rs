use std::ops::Range;
use std::path::Path;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use serde::Deserialize;
use toml::Spanned;

use headsplit::{HeaderSpec, SplitError, Splitter};

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "headsplit.toml";

/// `headsplit.toml`: which headers to split on, and how.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub skip_fenced_code: bool,

    /// Replaces the built-in `#`..`####` list when present.
    #[serde(default)]
    pub headers: Option<Vec<HeaderEntry>>,
}

/// One `[[headers]]` table. The marker keeps its source span for diagnostics.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderEntry {
    pub marker: Spanned<String>,
    #[serde(default)]
    pub label: String,
}

impl HeaderEntry {
    pub fn to_spec(&self) -> HeaderSpec {
        HeaderSpec::new(self.marker.get_ref().clone(), self.label.clone())
    }
}

/// A config problem, located in the TOML source when possible.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub message: String,
    pub span: Option<Range<usize>>,
    pub notes: Vec<String>,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
            span: None,
            notes: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: Range<usize>) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Convert to a codespan-reporting Diagnostic for display.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let labels = match &self.span {
            Some(span) => vec![Label::primary(file_id, span.clone())],
            None => Vec::new(),
        };
        Diagnostic::new(Severity::Error)
            .with_message(&self.message)
            .with_labels(labels)
            .with_notes(self.notes.clone())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn parse(source: &str) -> Result<Config, ConfigError> {
        toml::from_str(source).map_err(|e| {
            let error = ConfigError::new(e.message().to_string());
            match e.span() {
                Some(span) => error.with_span(span),
                None => error,
            }
        })
    }

    /// The config file to use: `explicit` if given, else `headsplit.toml` in `dir` if it exists.
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<std::path::PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                candidate.is_file().then_some(candidate)
            }
        }
    }

    pub fn splitter(&self) -> Result<Splitter, ConfigError> {
        build_splitter(self.headers.as_deref(), self.skip_fenced_code)
    }
}

/// Build a splitter from `[[headers]]` entries, defaulting to the built-in list.
pub fn build_splitter(
    headers: Option<&[HeaderEntry]>,
    skip_fenced_code: bool,
) -> Result<Splitter, ConfigError> {
    let splitter = match headers {
        None => Splitter::default(),
        Some(entries) => Splitter::new(entries.iter().map(HeaderEntry::to_spec)).map_err(
            |err| {
                let SplitError::InvalidHeaderSpec { index, .. } = &err;
                let error = ConfigError::new(err.to_string())
                    .with_note("markers look like `#` or `###`: one character, repeated");
                match entries.get(*index) {
                    Some(entry) => error.with_span(entry.marker.span()),
                    None => error,
                }
            },
        )?,
    };
    Ok(splitter.skip_fenced_code(skip_fenced_code))
}

/// Parse a `--header MARKER=LABEL` argument. `MARKER=` yields an ignored spec.
pub fn parse_header_arg(arg: &str) -> Result<HeaderSpec, String> {
    let (marker, label) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected MARKER=LABEL, got '{}'", arg))?;
    let marker = marker.trim();
    if marker.is_empty() {
        return Err(format!("missing marker in '{}'", arg));
    }
    Ok(HeaderSpec::new(marker, label.trim()))
}
