//! Parses a single duration token (`1:45 hr`, `2h`, `30 min`) into a [`ParsedEntry`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::{entry::ParsedEntry, units::Unit};

/// `1:45 hr`, `1:45h`, `1:45`. The hour unit is optional because the colon already
/// says what the numbers mean.
static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+):([0-9]{1,2})\s*(?:hr|h)?$").expect("clock pattern compiles")
});

/// `2 hr`, `2h`, `30 min`, `30m`.
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\s*(hr|h|min|m)$").expect("amount pattern compiles")
});

/// Parses one token of user input into a [`ParsedEntry`].
///
/// The token is trimmed (whitespace and byte-order marks), its inner whitespace collapsed
/// and lower-cased before matching.
/// Three shapes are recognised and must cover the whole token:
/// 1.  **Hour:Minute**: `1:45 hr`, `1:45hr`, `1:45`. Minutes of 60 or more are rejected.
/// 2.  **Hour only**: `2 hr`, `2h`.
/// 3.  **Minute only**: `30 min`, `30m`.
///
/// Anything else (including numbers too large to count in minutes) produces an entry
/// with `valid == false` and `minutes == 0`. The returned `original` is always `token`
/// untouched, so parsing `original` again gives the same entry.
///
/// # Examples
///
/// ```
/// # use tally_core::parse_entry::parse_time_entry;
/// let entry = parse_time_entry(" 1:45 HR ");
/// assert!(entry.valid);
/// assert_eq!(entry.minutes, 105);
/// assert_eq!(entry.original, " 1:45 HR ");
///
/// assert!(!parse_time_entry("1:75 hr").valid);
/// assert!(!parse_time_entry("soon").valid);
/// ```
pub fn parse_time_entry(token: &str) -> ParsedEntry {
    let trimmed = trim_token(token);
    if trimmed.is_empty() {
        return ParsedEntry::invalid(token);
    }

    match match_minutes(&normalize(trimmed)) {
        Some(minutes) => ParsedEntry::valid(token, minutes),
        None => ParsedEntry::invalid(token),
    }
}

/// Trims whitespace and byte-order marks from both ends of `token`.
pub(crate) fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Collapses whitespace runs to a single space and lower-cases the token.
fn normalize(token: &str) -> String {
    token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn match_minutes(normalized: &str) -> Option<u32> {
    if let Some(caps) = CLOCK_PATTERN.captures(normalized) {
        let hours = caps[1].parse::<u32>().ok()?;
        let mins = caps[2].parse::<u32>().ok()?;
        if mins >= 60 {
            return None;
        }
        return hours.checked_mul(Unit::Hour.minutes())?.checked_add(mins);
    }

    let caps = AMOUNT_PATTERN.captures(normalized)?;
    let amount = caps[1].parse::<u32>().ok()?;
    let unit = Unit::from_str(&caps[2]).ok()?;
    amount.checked_mul(unit.minutes())
}
