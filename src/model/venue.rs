use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::BoothCode;

// Compact range keys like "G23-24", as organisers write them in the venue assets.
static RANGE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([0-9]+)-([0-9]+)").expect("valid regex"));

static CODE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([0-9]+)").expect("valid regex"));

/// Human-readable names for booths, keyed by single code or compact range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoothNames(pub BTreeMap<String, String>);

impl BoothNames {
    /// Exact key first, then the first range key covering the booth.
    #[must_use]
    pub fn lookup(&self, code: &BoothCode) -> Option<&str> {
        let key = code.to_string();
        if let Some(name) = self.0.get(&key) {
            return Some(name);
        }

        let booth = CODE_PREFIX_RE.captures(&key)?;
        let booth_section = &booth[1];
        let booth_number: u32 = booth[2].parse().ok()?;

        self.0.iter().find_map(|(range_key, name)| {
            let (section, start, end) = parse_range_key(range_key)?;
            (section == booth_section && (start..=end).contains(&booth_number))
                .then_some(name.as_str())
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A named set of booths visitors collect stamps from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampRally {
    pub name: String,
    #[serde(default)]
    pub rules: String,
    pub booths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl StampRally {
    /// Booth codes of this rally with compact ranges expanded.
    #[must_use]
    pub fn expanded_booths(&self) -> Vec<String> {
        expand_rally_booths(&self.booths)
    }

    #[must_use]
    pub fn contains(&self, code: &BoothCode) -> bool {
        let code = code.to_string();
        self.expanded_booths().iter().any(|b| *b == code)
    }
}

/// Expands compact ranges (`"G23-24"`) into individual codes; other entries
/// pass through unchanged. Rally ranges carry no span limit.
#[must_use]
pub fn expand_rally_booths(entries: &[String]) -> Vec<String> {
    let mut expanded = Vec::new();
    for entry in entries {
        match entry.contains('-').then(|| parse_range_key(entry)).flatten() {
            Some((section, start, end)) => {
                expanded.extend((start..=end).map(|n| format!("{section}{n}")));
            }
            None => expanded.push(entry.clone()),
        }
    }
    expanded
}

fn parse_range_key(key: &str) -> Option<(&str, u32, u32)> {
    let caps = RANGE_KEY_RE.captures(key)?;
    let section = caps.get(1)?.as_str();
    let start = caps[2].parse().ok()?;
    let end = caps[3].parse().ok()?;
    Some((section, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code(s: &str) -> BoothCode {
        s.parse().unwrap()
    }

    fn names() -> BoothNames {
        BoothNames(
            [
                ("A5", "Tea Corner"),
                ("G23-24", "Double Booth"),
                ("K1-3", "Sponsor Row"),
            ]
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        )
    }

    #[test]
    fn looks_up_exact_key() {
        assert_eq!(names().lookup(&code("A5")), Some("Tea Corner"));
    }

    #[test]
    fn looks_up_range_key() {
        assert_eq!(names().lookup(&code("G24")), Some("Double Booth"));
        assert_eq!(names().lookup(&code("K2")), Some("Sponsor Row"));
        assert_eq!(names().lookup(&code("G25")), None);
        assert_eq!(names().lookup(&code("A6")), None);
    }

    #[test]
    fn expands_rally_ranges_without_span_limit() {
        let entries = vec!["G23-24".to_string(), "A1".to_string(), "B1-20".to_string()];
        let expanded = expand_rally_booths(&entries);
        assert_eq!(expanded.len(), 23);
        assert_eq!(&expanded[..3], &["G23", "G24", "A1"]);
        assert_eq!(expanded.last().map(String::as_str), Some("B20"));
    }

    #[test]
    fn rally_membership() {
        let rally = StampRally {
            name: "Spring".to_string(),
            rules: String::new(),
            booths: vec!["C10-12".to_string(), "F3".to_string()],
            artists: None,
            link: None,
        };
        assert!(rally.contains(&code("C11")));
        assert!(rally.contains(&code("F3")));
        assert!(!rally.contains(&code("C13")));
    }
}
