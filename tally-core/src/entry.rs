use serde::Serialize;

/// One token of user input and the duration it denotes.
///
/// `original` keeps the token exactly as it was handed to the parser so callers can
/// point at the offending text. `minutes` is `0` whenever `valid` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEntry {
    pub original: String,
    pub minutes: u32,
    pub valid: bool,
}

impl ParsedEntry {
    pub fn valid(original: &str, minutes: u32) -> Self {
        Self {
            original: original.to_string(),
            minutes,
            valid: true,
        }
    }

    pub fn invalid(original: &str) -> Self {
        Self {
            original: original.to_string(),
            minutes: 0,
            valid: false,
        }
    }
}
