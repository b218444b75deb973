use crate::header::HeaderSpec;

/// A document line after stripping and header detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Header {
        level: usize,
        label: &'a str,
        text: &'a str,
    },
    Content(&'a str),
    Blank,
}

/// Classify one raw line against `specs`, first match wins.
pub fn classify<'a>(raw: &'a str, specs: &'a [HeaderSpec]) -> Line<'a> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }

    for spec in specs.iter().filter(|s| !s.is_sentinel()) {
        if let Some(text) = spec.match_line(line) {
            return Line::Header {
                level: spec.level(),
                label: &spec.label,
                text,
            };
        }
    }

    Line::Content(line)
}

/// Same as [`classify`], but header-looking lines are plain content.
pub fn classify_as_content(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        Line::Blank
    } else {
        Line::Content(line)
    }
}
