use crate::model::{BoothCode, BoothPosition};

pub const BOOTH_SIZE: f64 = 110.0;
pub const BOOTH_PITCH: f64 = 120.0;

/// Static geometry of one venue section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpec {
    pub section: &'static str,
    pub count: u32,
    pub base_x: f64,
    /// Row holding booths `1..=split`.
    pub bottom_y: f64,
    /// Facing row holding booths `split+1..=count`, column-aligned with the
    /// bottom row. `None` for single-row sections.
    pub top_row: Option<(u32, f64)>,
}

impl SectionSpec {
    const fn single_row(section: &'static str, count: u32, base_x: f64, y: f64) -> Self {
        Self {
            section,
            count,
            base_x,
            bottom_y: y,
            top_row: None,
        }
    }

    const fn facing_rows(
        section: &'static str,
        count: u32,
        base_x: f64,
        bottom_y: f64,
        top_y: f64,
    ) -> Self {
        Self {
            section,
            count,
            base_x,
            bottom_y,
            top_row: Some((count / 2, top_y)),
        }
    }

    /// Column index and row y of booth `number`.
    #[must_use]
    pub fn cell(&self, number: u32) -> (u32, f64) {
        match self.top_row {
            Some((split, top_y)) if number > split => (number - split - 1, top_y),
            _ => (number - 1, self.bottom_y),
        }
    }
}

/// The convention hall, in render order.
pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec::single_row("A", 30, 900.0, 2450.0),
    SectionSpec::facing_rows("B", 44, 500.0, 2100.0, 1950.0),
    SectionSpec::facing_rows("C", 44, 500.0, 1700.0, 1550.0),
    SectionSpec::facing_rows("D", 44, 500.0, 1300.0, 1150.0),
    SectionSpec::facing_rows("E", 44, 500.0, 900.0, 750.0),
    SectionSpec::facing_rows("F", 36, 4650.0, 2100.0, 1950.0),
    SectionSpec::facing_rows("G", 36, 4650.0, 1700.0, 1550.0),
    SectionSpec::facing_rows("H", 36, 4650.0, 1300.0, 1150.0),
    SectionSpec::facing_rows("J", 36, 4650.0, 900.0, 750.0),
    SectionSpec::single_row("K", 56, 300.0, 400.0),
];

/// Total number of booths in [`SECTIONS`].
#[must_use]
pub fn booth_count() -> usize {
    SECTIONS.iter().map(|s| s.count as usize).sum()
}

/// Produces every booth cell of the venue. Same output on every call.
#[must_use]
pub fn generate_layout() -> Vec<BoothPosition> {
    let mut booths = Vec::with_capacity(booth_count());

    for spec in SECTIONS {
        for number in 1..=spec.count {
            let Some(code) = BoothCode::new(spec.section, number) else {
                continue;
            };
            let (column, y) = spec.cell(number);
            booths.push(BoothPosition {
                code,
                section: spec.section.to_string(),
                number,
                x: spec.base_x + f64::from(column) * BOOTH_PITCH,
                y,
                width: BOOTH_SIZE,
                height: BOOTH_SIZE,
                group: None,
            });
        }
    }

    booths
}
