use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::parser::code::normalize;

/// Canonical booth identifier: uppercase section letters followed by a number in `1..=999`.
///
/// Ordering is by section (lexicographic), then by number (numeric), so `A2 < A10 < B1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BoothCode {
    section: String,
    number: u32,
}

impl BoothCode {
    pub const MIN_NUMBER: u32 = 1;
    pub const MAX_NUMBER: u32 = 999;

    /// Builds a code from already-separated parts. The section is uppercased.
    /// Returns `None` when the number is outside `1..=999`.
    #[must_use]
    pub fn new(section: &str, number: u32) -> Option<Self> {
        if !(Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&number) {
            return None;
        }
        Some(Self {
            section: section.to_uppercase(),
            number,
        })
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Same section, different number.
    #[must_use]
    pub fn with_number(&self, number: u32) -> Option<Self> {
        Self::new(&self.section, number)
    }
}

impl fmt::Display for BoothCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.section, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booth code '{0}'")]
pub struct InvalidBoothCode(pub String);

impl FromStr for BoothCode {
    type Err = InvalidBoothCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s).ok_or_else(|| InvalidBoothCode(s.to_string()))
    }
}

impl TryFrom<String> for BoothCode {
    type Error = InvalidBoothCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoothCode> for String {
    fn from(code: BoothCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn orders_by_section_then_number() {
        let mut codes: Vec<BoothCode> = ["B1", "A10", "A2", "12", "K3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        codes.sort();
        let rendered: Vec<String> = codes.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["12", "A2", "A10", "B1", "K3"]);
    }

    #[test]
    fn rejects_numbers_out_of_range() {
        assert!(BoothCode::new("A", 0).is_none());
        assert!(BoothCode::new("A", 1000).is_none());
        assert_eq!(BoothCode::new("a", 7).unwrap().to_string(), "A7");
    }

    #[test]
    fn serializes_as_canonical_string() {
        let code: BoothCode = "g013".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"G13\"");
        let back: BoothCode = serde_json::from_str("\"G13\"").unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<BoothCode>("\"nope\"").is_err());
    }
}
