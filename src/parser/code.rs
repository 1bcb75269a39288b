//! Booth code clusters: normalization, range expansion and cluster splitting.
//!
//! Every function here is best effort. Tokens that cannot be read as a booth
//! code are dropped instead of reported, since titles are free text that is
//! never validated at entry.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::BoothCode;

/// Largest span a dash range token (`"A12-A27"`) may cover before only its
/// endpoints are kept.
pub const RANGE_TOKEN_MAX_SPAN: u32 = 15;

/// Largest span of the compact `"K25-26"` shortcut. Wider compact ranges go
/// through the general path and fall under [`RANGE_TOKEN_MAX_SPAN`].
pub const COMPACT_RANGE_MAX_SPAN: u32 = 10;

static SINGLE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([A-Z]*)([0-9]+)$").expect("valid regex"));

static VALID_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{0,2}[0-9]{1,3}$").expect("valid regex"));

// "K25,26" / "E1, 2": one section, two numbers.
static COMPACT_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)([0-9]+),\s*([0-9]+)$").expect("valid regex"));

// "K25-26": one section, a range of numbers.
static COMPACT_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)([0-9]+)-([0-9]+)$").expect("valid regex"));

fn is_dash(c: char) -> bool {
    matches!(c, '-' | '–' | '—')
}

/// Splits `"a12"` into `("A", 12)`. Numbers that overflow are not codes.
fn split_code(token: &str) -> Option<(String, u32)> {
    let caps = SINGLE_CODE_RE.captures(token)?;
    let number = caps[2].parse::<u32>().ok()?;
    Some((caps[1].to_uppercase(), number))
}

/// Normalizes one token into canonical `<SECTION><NUMBER>` form.
///
/// ```
/// use booth_map::parser::code::normalize;
///
/// assert_eq!(normalize("b007").map(|c| c.to_string()), Some("B7".to_string()));
/// assert_eq!(normalize("A1000"), None);
/// ```
#[must_use]
pub fn normalize(token: &str) -> Option<BoothCode> {
    let (section, number) = split_code(token.trim())?;
    BoothCode::new(&section, number)
}

/// Checks the strict display form: up to two letters and up to three digits.
#[must_use]
pub fn is_valid_booth_code(code: &str) -> bool {
    VALID_CODE_RE.is_match(&code.to_uppercase())
}

/// Expands a two-endpoint range token such as `"A12-14"`, `"A12-A14"` or `"K25–26"`.
///
/// The end endpoint inherits the start section when it has none. Ranges across
/// sections, reversed ranges and ranges wider than [`RANGE_TOKEN_MAX_SPAN`]
/// keep only their endpoints.
#[must_use]
pub fn expand_range(token: &str) -> Vec<BoothCode> {
    let parts: Vec<&str> = token.split(is_dash).map(str::trim).collect();
    let [start_str, end_str] = parts.as_slice() else {
        return normalize(token).into_iter().collect();
    };

    let (Some((start_section, start)), Some((end_section, end))) =
        (split_code(start_str), split_code(end_str))
    else {
        let mut codes = Vec::new();
        let start_code = normalize(start_str);
        let end_code = normalize(end_str);
        if let Some(code) = &start_code {
            codes.push(code.clone());
        }
        if let Some(code) = end_code {
            if start_code.as_ref() != Some(&code) {
                codes.push(code);
            }
        }
        return codes;
    };

    let end_section = if end_section.is_empty() {
        start_section.clone()
    } else {
        end_section
    };

    if start_section == end_section && start <= end && end - start <= RANGE_TOKEN_MAX_SPAN {
        (start..=end)
            .filter_map(|n| BoothCode::new(&start_section, n))
            .collect()
    } else {
        [
            BoothCode::new(&start_section, start),
            BoothCode::new(&end_section, end),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Parses a code cluster (`"A1, A2"`, `"G19, 20"`, `"A12-13; B4"`) into a
/// sorted, deduplicated code list.
#[must_use]
pub fn parse_code_cluster(cluster: &str) -> Vec<BoothCode> {
    let trimmed = cluster.trim();

    if let Some(caps) = COMPACT_PAIR_RE.captures(trimmed) {
        let section = &caps[1];
        let codes = [&caps[2], &caps[3]]
            .into_iter()
            .filter_map(|n| n.parse().ok().and_then(|n| BoothCode::new(section, n)))
            .collect();
        return sorted_unique(codes);
    }

    if let Some(caps) = COMPACT_RANGE_RE.captures(trimmed) {
        let section = &caps[1];
        if let (Ok(start), Ok(end)) = (caps[2].parse::<u32>(), caps[3].parse::<u32>()) {
            if start <= end && end - start <= COMPACT_RANGE_MAX_SPAN {
                let codes = (start..=end)
                    .filter_map(|n| BoothCode::new(section, n))
                    .collect();
                return sorted_unique(codes);
            }
        }
    }

    let codes_part = truncate_at_title_dash(trimmed);

    let mut codes: Vec<BoothCode> = Vec::new();
    for part in codes_part.split([',', ';']).map(str::trim) {
        if part.is_empty() {
            continue;
        }

        if part.contains(is_dash) {
            codes.extend(expand_range(part));
            continue;
        }

        // "G19, 20": a bare number continues the section of the previous code.
        if part.bytes().all(|b| b.is_ascii_digit()) {
            let inherited = codes
                .last()
                .filter(|last| !last.section().is_empty())
                .and_then(|last| part.parse().ok().and_then(|n| last.with_number(n)));
            if let Some(code) = inherited {
                codes.push(code);
                continue;
            }
        }

        if let Some(code) = normalize(part) {
            codes.push(code);
        }
    }

    sorted_unique(codes)
}

/// Cuts the cluster before the first dash that is followed by a letter,
/// i.e. where a title word was glued onto the codes (`"G19, 20-Shop"`).
fn truncate_at_title_dash(cluster: &str) -> &str {
    for (idx, c) in cluster.char_indices() {
        if !is_dash(c) {
            continue;
        }
        let rest = &cluster[idx + c.len_utf8()..];
        if rest
            .trim_start()
            .chars()
            .next()
            .is_some_and(|next| next.is_ascii_alphabetic())
        {
            return cluster[..idx].trim();
        }
    }
    cluster
}

fn sorted_unique(mut codes: Vec<BoothCode>) -> Vec<BoothCode> {
    codes.sort();
    codes.dedup();
    codes
}
