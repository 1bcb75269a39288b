use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::model::{BoothCode, ParsedBooth};
use crate::parser::code::parse_code_cluster;

/// One or more codes, ranges or comma lists: `A1`, `A12-13`, `A1, A2`, `K25,26`.
const CLUSTER: &str = r"[A-Z]{0,2}[0-9]{1,2}(?:[-,\s]*(?:[A-Z]{0,2})?[0-9]{1,2})*";

/// A title shape, with the capture groups holding the code cluster and the
/// name fragments.
struct TitlePattern {
    regex: Regex,
    code_group: usize,
    name_groups: &'static [usize],
    /// Drop a trailing "at"/"booth" left over when the codes end the title.
    strip_connector: bool,
}

impl TitlePattern {
    fn new(pattern: &str, code_group: usize, name_groups: &'static [usize]) -> Self {
        Self {
            regex: Regex::new(&format!("(?i){pattern}")).expect("valid title pattern"),
            code_group,
            name_groups,
            strip_connector: false,
        }
    }

    fn stripping_connector(mut self) -> Self {
        self.strip_connector = true;
        self
    }

    fn name(&self, caps: &Captures<'_>) -> String {
        let name = self
            .name_groups
            .iter()
            .filter_map(|&group| caps.get(group))
            .map(|m| m.as_str().trim())
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if self.strip_connector {
            TRAILING_CONNECTOR_RE.replace(&name, "").trim().to_string()
        } else {
            name
        }
    }
}

static TRAILING_CONNECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s+)(?:at|booth)$").expect("valid regex"));

// Priority order matters: several shapes can match the same title, and the
// first one that yields a code wins.
static TITLE_PATTERNS: LazyLock<Vec<TitlePattern>> = LazyLock::new(|| {
    vec![
        // "A1 - Coffee Shop", "A12-13 - Shop", "K25,26 – Shop", "A1-Shop".
        // A dash glued to a digit belongs to a range, not the separator.
        TitlePattern::new(
            &format!(r"^({CLUSTER})\s*[-–—](?:\s+(.+)|([^0-9\s].*))$"),
            1,
            &[2, 3],
        ),
        // "G13-14: Rình Ai Tắm"
        TitlePattern::new(r"^([A-Z]{1,2}[0-9]{1,2}(?:-[0-9]{1,2})?)\s*:\s*(.+)$", 1, &[2]),
        // "D25-26 Túi rác", "B5-6 3 Ngọn Nến"
        TitlePattern::new(r"^([A-Z]{1,2}[0-9]{1,2}-[0-9]{1,2})\s+(.+)$", 1, &[2]),
        // "K25,26 Shop", "E1, 2 Shop"
        TitlePattern::new(r"^([A-Z]{1,2}[0-9]{1,2},\s*[0-9]{1,2})\s+(.+)$", 1, &[2]),
        // "A1 Shop"
        TitlePattern::new(&format!(r"^({CLUSTER})\s+(.+)$"), 1, &[2]),
        // "Shop (A1)", "Shop (A1, A2) extra"
        TitlePattern::new(&format!(r"^(.+?)\s*\(({CLUSTER})\)(.*)$"), 2, &[1, 3]),
        // "Shop A1", "Big Event at A12-13"
        TitlePattern::new(&format!(r"^(.+?)\s+({CLUSTER})$"), 2, &[1]).stripping_connector(),
        // "Event at A1 extra", "Event booth A12-13 extra"
        TitlePattern::new(
            &format!(r"^(.+?)\s+(?:at|booth)\s+({CLUSTER})\s*(.*)$"),
            2,
            &[1, 3],
        ),
        // "A1, A2"
        TitlePattern::new(&format!(r"^({CLUSTER})$"), 1, &[]),
    ]
});

/// Locates the booth code cluster in a listing title.
///
/// Returns `None` when no pattern yields at least one code; such listings have
/// no identifiable booth.
///
/// # Example
///
/// ```
/// use booth_map::parser::extract_booth;
///
/// let parsed = extract_booth("A1 - Coffee Shop").unwrap();
/// assert_eq!(parsed.label, "A1");
/// assert_eq!(parsed.booth_name, "Coffee Shop");
/// ```
#[must_use]
pub fn extract_booth(title: &str) -> Option<ParsedBooth> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    TITLE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(title)?;
        let cluster = caps.get(pattern.code_group)?.as_str();
        let codes = parse_code_cluster(cluster);
        if codes.is_empty() {
            return None;
        }
        Some(ParsedBooth {
            label: cluster.to_uppercase(),
            codes,
            booth_name: pattern.name(&caps),
        })
    })
}

/// Codes of [`extract_booth`], or nothing.
#[must_use]
pub fn extract_all_booth_codes(title: &str) -> Vec<BoothCode> {
    extract_booth(title).map(|p| p.codes).unwrap_or_default()
}
