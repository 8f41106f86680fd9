//! Playback log line parsing.
//!
//! Turns a raw log line into a CSV row: drops banner and route lines,
//! joins the timestamp, expands the dotted composite field and blanks
//! sentinel values. Nothing here validates dates or field counts.

use crate::constants::{
    COMPOSITE_FIELD_SEPARATOR, DISCARD_MARKERS, ISO_TIMESTAMP_SEPARATOR, MIN_LINE_TOKENS,
    RAW_TIMESTAMP_SEPARATOR, SENTINEL_VALUE, VERSION_LINE_PREFIX,
};
use crate::models::LogRow;

/// Result of parsing one raw line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Line produced a row
    Row(LogRow),
    /// Version banner or route/display line
    Discarded,
    /// Fewer than four whitespace tokens
    Malformed,
}

/// Check whether every keyword occurs somewhere in `text`
pub fn contains_keywords(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().all(|keyword| text.contains(keyword))
}

/// Check the discard rules against the raw, untrimmed line
pub fn is_discarded(line: &str) -> bool {
    line.starts_with(VERSION_LINE_PREFIX)
        || DISCARD_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Join date and time parts of a raw timestamp
///
/// Plain character substitution: `2024_01_15_10:30:00` becomes
/// `2024T01T15T10:30:00`.
pub fn convert_timestamp(timestamp: &str) -> String {
    timestamp.replace(RAW_TIMESTAMP_SEPARATOR, &ISO_TIMESTAMP_SEPARATOR.to_string())
}

/// Map the sentinel to `None`, everything else to an owned field
pub fn clean_field(field: &str) -> Option<String> {
    if field == SENTINEL_VALUE {
        None
    } else {
        Some(field.to_string())
    }
}

/// Split log content into lines, accepting `\n`, `\r\n` and lone `\r` breaks
pub fn log_lines(content: &str) -> impl Iterator<Item = &str> + '_ {
    content
        .split_terminator('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Parse one raw line, reporting why it was skipped if it was
pub fn classify_line(line: &str) -> LineOutcome {
    if is_discarded(line) {
        return LineOutcome::Discarded;
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_LINE_TOKENS {
        return LineOutcome::Malformed;
    }

    let timestamp = convert_timestamp(parts[0]);
    let sub_fields = parts[2].split(COMPOSITE_FIELD_SEPARATOR);

    let fields = std::iter::once(timestamp.as_str())
        .chain(std::iter::once(parts[1]))
        .chain(sub_fields)
        .chain(parts[3..].iter().copied())
        .map(clean_field)
        .collect();

    LineOutcome::Row(LogRow::new(fields))
}

/// Parse one raw line into a row, `None` when the line is skipped
pub fn parse_line(line: &str) -> Option<LogRow> {
    match classify_line(line) {
        LineOutcome::Row(row) => Some(row),
        LineOutcome::Discarded | LineOutcome::Malformed => None,
    }
}
