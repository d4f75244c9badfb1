use serde::Serialize;

use crate::entry::ParsedEntry;

/// The outcome of parsing a whole block of durations.
///
/// `total` only counts valid entries, and `is_valid` is `true` when every entry parsed
/// (including the case where there were no entries at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub entries: Vec<ParsedEntry>,
    pub total: u64,
    pub is_valid: bool,
}

impl ParseResult {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
            is_valid: true,
        }
    }

    /// Builds a result from parsed entries, deriving `total` and `is_valid` from them.
    pub fn from_entries(entries: Vec<ParsedEntry>) -> Self {
        let total = entries
            .iter()
            .filter(|entry| entry.valid)
            .map(|entry| u64::from(entry.minutes))
            .sum();
        let is_valid = entries.iter().all(|entry| entry.valid);
        Self {
            entries,
            total,
            is_valid,
        }
    }

    /// Entries that did not match any duration shape, in input order.
    pub fn invalid_entries(&self) -> impl Iterator<Item = &ParsedEntry> {
        self.entries.iter().filter(|entry| !entry.valid)
    }
}
