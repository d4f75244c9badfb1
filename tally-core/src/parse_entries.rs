//! Splits a block of free text into duration tokens and parses each one.

use crate::{
    entries::ParseResult,
    parse_entry::{parse_time_entry, trim_token},
};

/// Characters that separate one duration from the next.
const DELIMITERS: [char; 2] = ['\n', ','];

/// Parses a block of durations separated by newlines and/or commas.
///
/// Runs of delimiters, blank lines and trailing separators are tolerated: every piece is
/// trimmed and empty pieces are dropped before parsing. Entries keep the order in which
/// they appear in `text`. A blank block is valid and totals zero.
///
/// # Examples
///
/// ```
/// # use tally_core::parse_entries::parse_time_entries;
/// let result = parse_time_entries("1 hr, 30 min\n2 hr");
/// assert_eq!(result.entries.len(), 3);
/// assert_eq!(result.total, 210);
/// assert!(result.is_valid);
/// ```
pub fn parse_time_entries(text: &str) -> ParseResult {
    if trim_token(text).is_empty() {
        return ParseResult::empty();
    }

    let entries = text
        .split(DELIMITERS)
        .map(trim_token)
        .filter(|token| !token.is_empty())
        .map(parse_time_entry)
        .collect();

    ParseResult::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(text: &str) {
        let result = parse_time_entries(text);
        let expected_total: u64 = result
            .entries
            .iter()
            .filter(|e| e.valid)
            .map(|e| u64::from(e.minutes))
            .sum();
        assert_eq!(result.total, expected_total, "total for {text:?}");
        assert_eq!(
            result.is_valid,
            result.entries.iter().all(|e| e.valid),
            "validity for {text:?}"
        );
    }

    #[test]
    fn empty_input_is_valid() {
        let result = parse_time_entries("");
        assert!(result.is_valid);
        assert!(result.entries.is_empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn whitespace_only_input_is_valid() {
        assert_eq!(parse_time_entries("  \n\t "), ParseResult::empty());
    }

    #[test]
    fn delimiters_only_input_is_valid() {
        assert_eq!(parse_time_entries(" ,\n, ,"), ParseResult::empty());
    }

    #[test]
    fn mixed_delimiters_keep_order() {
        let result = parse_time_entries("1 hr, 30 min\n2 hr");
        let originals: Vec<&str> = result.entries.iter().map(|e| e.original.as_str()).collect();
        assert_eq!(originals, vec!["1 hr", "30 min", "2 hr"]);
        assert_eq!(result.total, 60 + 30 + 120);
        assert!(result.is_valid);
    }

    #[test]
    fn repeated_delimiters_are_dropped() {
        let result = parse_time_entries("1 hr,,\n\n2 hr");
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.total, 180);
    }

    #[test]
    fn trailing_delimiters_and_crlf() {
        let result = parse_time_entries("1:45 hr,\r\n30 min\r\n");
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[1].original, "30 min");
        assert_eq!(result.total, 135);
    }

    #[test]
    fn leading_byte_order_mark_keeps_first_entry() {
        let result = parse_time_entries("\u{FEFF}2 hr\n30 min\n");
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].original, "2 hr");
        assert_eq!(result.total, 150);
        assert!(result.is_valid);
    }

    #[test]
    fn byte_order_mark_alone_is_empty_input() {
        assert_eq!(parse_time_entries("\u{FEFF}\n"), ParseResult::empty());
    }

    #[test]
    fn invalid_entries_do_not_count_toward_total() {
        let result = parse_time_entries("1 hr, nope, 1:75 hr\n15 min");
        assert_eq!(result.entries.len(), 4);
        assert_eq!(result.total, 75);
        assert!(!result.is_valid);

        let invalid: Vec<&str> = result
            .invalid_entries()
            .map(|e| e.original.as_str())
            .collect();
        assert_eq!(invalid, vec!["nope", "1:75 hr"]);
    }

    #[test]
    fn tokens_are_trimmed_before_parsing() {
        let result = parse_time_entries("   2 hr   ,   5 m ");
        assert_eq!(result.entries[0].original, "2 hr");
        assert_eq!(result.entries[1].original, "5 m");
        assert_eq!(result.total, 125);
    }

    #[test]
    fn totals_can_exceed_a_single_entry_range() {
        let result = parse_time_entries("4294967295 min\n4294967295 min");
        assert!(result.is_valid);
        assert_eq!(result.total, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn invariants_hold() {
        for text in [
            "",
            "garbage",
            "1 hr, 30 min\n2 hr",
            "1 hr,,\n\n2 hr",
            "1:75 hr, 2 hr",
            ",,,",
            "3h\n\n\n4m,x,5 min",
        ] {
            assert_invariants(text);
        }
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(parse_time_entries("1 hr, oops")).unwrap();
        assert_eq!(value["total"], 60);
        assert_eq!(value["isValid"], false);
        assert_eq!(value["entries"][1]["original"], "oops");
        assert_eq!(value["entries"][1]["valid"], false);
    }
}
