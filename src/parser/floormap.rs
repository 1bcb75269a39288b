// Streaming reader for draw.io floor-map diagrams (`mxGraphModel` XML).
//
// Only what booth recovery needs is collected: every mxCell with its id,
// parent, value, style and first mxGeometry. Cells may appear directly under
// <root> or wrapped inside <object>/<UserObject>; both are read the same way.

use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::collections::HashMap;
use std::str;
use std::sync::LazyLock;

use crate::model::{BoothCode, BoothPosition};

#[derive(Debug, thiserror::Error)]
pub enum FloorMapError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("utf8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}

pub type FloorMapResult<T> = Result<T, FloorMapError>;

const DEFAULT_CELL_SIZE: f64 = 70.0;

// Booth labels are HTML fragments such as `<font style="...">12</font>`.
static NUMBER_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([0-9]+)<").expect("valid regex"));

/// Coordinate bands that map a diagram position to a venue section.
///
/// The defaults describe the convention hall diagram; other diagrams need
/// their own bands.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBands {
    /// Below this line is the bottom row (section A).
    pub bottom_y: f64,
    /// Above this line is the top row (section K).
    pub top_y: f64,
    /// Left of this line is the left block.
    pub left_x: f64,
    /// Right of this line is the right block.
    pub right_x: f64,
    /// Left block sections from the top, with the y each one ends at.
    pub left_block: Vec<(f64, &'static str)>,
    pub left_block_last: &'static str,
    pub right_block: Vec<(f64, &'static str)>,
    pub right_block_last: &'static str,
    pub bottom_section: &'static str,
    pub top_section: &'static str,
    pub fallback_section: &'static str,
}

impl Default for SectionBands {
    fn default() -> Self {
        Self {
            bottom_y: 2000.0,
            top_y: 200.0,
            left_x: 500.0,
            right_x: 1500.0,
            left_block: vec![(500.0, "E"), (1000.0, "D"), (1500.0, "C")],
            left_block_last: "B",
            right_block: vec![(500.0, "J"), (1000.0, "H"), (1500.0, "G")],
            right_block_last: "F",
            bottom_section: "A",
            top_section: "K",
            fallback_section: "A",
        }
    }
}

impl SectionBands {
    /// Infers the section from the cell position, then from its group's
    /// position, then falls back to the default section.
    #[must_use]
    pub fn infer_section(&self, x: f64, y: f64, group: Option<(f64, f64)>) -> &'static str {
        if y > self.bottom_y {
            return self.bottom_section;
        }
        if x < self.left_x {
            return Self::band(&self.left_block, self.left_block_last, y);
        }
        if x > self.right_x {
            return Self::band(&self.right_block, self.right_block_last, y);
        }
        if y < self.top_y {
            return self.top_section;
        }

        if let Some((gx, gy)) = group {
            if gy > self.bottom_y {
                return self.bottom_section;
            }
            if gx < self.left_x {
                return self.left_block_last;
            }
            if gx > self.right_x {
                return self.right_block_last;
            }
            if gy < self.top_y {
                return self.top_section;
            }
        }

        self.fallback_section
    }

    fn band(bands: &[(f64, &'static str)], last: &'static str, y: f64) -> &'static str {
        bands
            .iter()
            .find(|(limit, _)| y < *limit)
            .map_or(last, |&(_, section)| section)
    }
}

#[derive(Debug, Default)]
struct RawCell {
    id: String,
    parent: Option<String>,
    value: String,
    style: String,
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Clone, Copy)]
struct RawGeometry {
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

/// Recovers booth positions from a draw.io diagram.
///
/// Numbered labels become booths; their section is inferred from position
/// with `bands`. The result is sorted by section, then number.
pub fn parse_floor_map_xml(xml: &str, bands: &SectionBands) -> FloorMapResult<Vec<BoothPosition>> {
    let cells = read_cells(xml)?;

    let groups: HashMap<&str, (f64, f64)> = cells
        .iter()
        .filter(|cell| cell.style.contains("group"))
        .filter_map(|cell| {
            let geometry = cell.geometry?;
            Some((
                cell.id.as_str(),
                (geometry.x.unwrap_or(0.0), geometry.y.unwrap_or(0.0)),
            ))
        })
        .collect();

    let mut booths = Vec::new();
    for cell in &cells {
        let Some(number) = booth_number(&cell.value) else {
            continue;
        };
        let Some(geometry) = cell.geometry else {
            continue;
        };

        let x = geometry.x.unwrap_or(0.0);
        let y = geometry.y.unwrap_or(0.0);
        let group = cell
            .parent
            .as_deref()
            .and_then(|parent| groups.get(parent).copied());
        let section = bands.infer_section(x, y, group);

        let Some(code) = BoothCode::new(section, number) else {
            tracing::debug!(cell = %cell.id, number, "booth label out of range, skipped");
            continue;
        };

        booths.push(BoothPosition {
            code,
            section: section.to_string(),
            number,
            x,
            y,
            width: geometry.width.unwrap_or(DEFAULT_CELL_SIZE),
            height: geometry.height.unwrap_or(DEFAULT_CELL_SIZE),
            group: cell.parent.clone(),
        });
    }

    booths.sort_by(|a, b| {
        a.section
            .cmp(&b.section)
            .then_with(|| a.number.cmp(&b.number))
    });

    tracing::debug!(
        cells = cells.len(),
        groups = groups.len(),
        booths = booths.len(),
        "parsed floor map diagram"
    );

    Ok(booths)
}

fn booth_number(value: &str) -> Option<u32> {
    let digits = match NUMBER_LABEL_RE.captures(value) {
        Some(caps) => caps.get(1)?.as_str(),
        None => {
            let trimmed = value.trim();
            if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            trimmed
        }
    };
    digits.parse().ok()
}

fn read_cells(xml: &str) -> FloorMapResult<Vec<RawCell>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut cells: Vec<RawCell> = Vec::new();
    // Index of the open mxCell, and the <object> wrapper attributes it may inherit.
    let mut open_cell: Option<usize> = None;
    let mut wrapper: Option<HashMap<String, String>> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match local_name(&e)?.as_str() {
                "mxCell" => {
                    cells.push(parse_cell(&e, wrapper.as_ref())?);
                    open_cell = Some(cells.len() - 1);
                }
                "mxGeometry" => set_geometry(&mut cells, open_cell, &e)?,
                name if is_wrapper(name) => wrapper = Some(attrs_to_map(&e)?),
                _ => {}
            },
            Event::Empty(e) => match local_name(&e)?.as_str() {
                "mxCell" => cells.push(parse_cell(&e, wrapper.as_ref())?),
                "mxGeometry" => set_geometry(&mut cells, open_cell, &e)?,
                _ => {}
            },
            Event::End(e) => match str::from_utf8(e.name().as_ref())? {
                "mxCell" => open_cell = None,
                name if is_wrapper(name) => wrapper = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(cells)
}

fn is_wrapper(name: &str) -> bool {
    name == "object" || name.eq_ignore_ascii_case("userObject")
}

fn parse_cell(
    e: &BytesStart<'_>,
    wrapper: Option<&HashMap<String, String>>,
) -> FloorMapResult<RawCell> {
    let mut attrs = attrs_to_map(e)?;
    let inherited = |key: &str| wrapper.and_then(|w| w.get(key)).cloned();

    Ok(RawCell {
        id: attrs
            .remove("id")
            .or_else(|| inherited("id"))
            .unwrap_or_default(),
        parent: attrs.remove("parent"),
        value: attrs
            .remove("value")
            .or_else(|| inherited("label"))
            .unwrap_or_default(),
        style: attrs.remove("style").unwrap_or_default(),
        geometry: None,
    })
}

fn set_geometry(
    cells: &mut [RawCell],
    open_cell: Option<usize>,
    e: &BytesStart<'_>,
) -> FloorMapResult<()> {
    let Some(cell) = open_cell.and_then(|idx| cells.get_mut(idx)) else {
        return Ok(());
    };
    if cell.geometry.is_some() {
        return Ok(());
    }

    let attrs = attrs_to_map(e)?;
    cell.geometry = Some(RawGeometry {
        x: parse_f64_opt(attrs.get("x"), "x")?,
        y: parse_f64_opt(attrs.get("y"), "y")?,
        width: parse_f64_opt(attrs.get("width"), "width")?,
        height: parse_f64_opt(attrs.get("height"), "height")?,
    });
    Ok(())
}

fn attrs_to_map(e: &BytesStart<'_>) -> FloorMapResult<HashMap<String, String>> {
    let mut out = HashMap::new();
    for a in e.attributes() {
        let a = a?;
        let key = str::from_utf8(a.key.as_ref())?.to_string();
        let val = a.unescape_value()?.to_string();
        out.insert(key, val);
    }
    Ok(out)
}

fn local_name(e: &BytesStart<'_>) -> FloorMapResult<String> {
    Ok(str::from_utf8(e.name().as_ref())?.to_string())
}

fn parse_f64_opt(v: Option<&String>, field: &'static str) -> FloorMapResult<Option<f64>> {
    let Some(s) = v else { return Ok(None) };
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| FloorMapError::InvalidNumber {
            field,
            value: s.clone(),
        })?;
    Ok(Some(parsed))
}
