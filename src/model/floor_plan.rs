use serde::Serialize;

use super::{BoothCode, BoothEntry, BoothEventMap, BoothNames, BoothPosition, StampRally};

/// Floor-plan canvas size in floor-plan pixels.
pub const FLOOR_WIDTH: f64 = 7100.0;
pub const FLOOR_HEIGHT: f64 = 2700.0;

/// Everything needed to render or inspect the venue: booth cells, what is
/// placed at them, and the venue assets.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub booths: Vec<BoothPosition>,
    pub booth_map: BoothEventMap,
    pub booth_names: BoothNames,
    pub stamp_rallies: Vec<StampRally>,
    /// Listings whose title yielded at least one booth code.
    pub placed_listings: usize,
}

/// What a booth shows when hovered or selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoothInfo<'a> {
    Occupied(&'a BoothEntry),
    /// No listing, but the venue assets name the booth.
    Named(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloorStats {
    pub total_booths: usize,
    pub occupied_booths: usize,
    pub empty_booths: usize,
    pub placed_listings: usize,
}

impl FloorPlan {
    #[must_use]
    pub fn new(booths: Vec<BoothPosition>, booth_map: BoothEventMap) -> Self {
        Self {
            booths,
            booth_map,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_booth_names(mut self, booth_names: BoothNames) -> Self {
        self.booth_names = booth_names;
        self
    }

    #[must_use]
    pub fn with_stamp_rallies(mut self, stamp_rallies: Vec<StampRally>) -> Self {
        self.stamp_rallies = stamp_rallies;
        self
    }

    #[must_use]
    pub fn with_placed_listings(mut self, placed_listings: usize) -> Self {
        self.placed_listings = placed_listings;
        self
    }

    #[must_use]
    pub fn position(&self, code: &BoothCode) -> Option<&BoothPosition> {
        self.booths.iter().find(|b| &b.code == code)
    }

    #[must_use]
    pub fn entry(&self, code: &BoothCode) -> Option<&BoothEntry> {
        self.booth_map.get(code)
    }

    #[must_use]
    pub fn describe(&self, code: &BoothCode) -> Option<BoothInfo<'_>> {
        if let Some(entry) = self.booth_map.get(code) {
            return Some(BoothInfo::Occupied(entry));
        }
        self.booth_names.lookup(code).map(BoothInfo::Named)
    }

    #[must_use]
    pub fn rallies_for_booth(&self, code: &BoothCode) -> Vec<&StampRally> {
        self.stamp_rallies
            .iter()
            .filter(|rally| rally.contains(code))
            .collect()
    }

    /// Sections in first-seen order of the booth list.
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for booth in &self.booths {
            if !sections.contains(&booth.section.as_str()) {
                sections.push(&booth.section);
            }
        }
        sections
    }

    #[must_use]
    pub fn booths_in_section(&self, section: &str) -> Vec<&BoothPosition> {
        self.booths.iter().filter(|b| b.section == section).collect()
    }

    /// Event-map codes that have no cell in the current layout.
    #[must_use]
    pub fn unplaced_codes(&self) -> Vec<&BoothCode> {
        self.booth_map
            .keys()
            .filter(|code| self.position(code).is_none())
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> FloorStats {
        let occupied = self
            .booths
            .iter()
            .filter(|b| self.booth_map.contains_key(&b.code))
            .count();
        FloorStats {
            total_booths: self.booths.len(),
            occupied_booths: occupied,
            empty_booths: self.booths.len() - occupied,
            placed_listings: self.placed_listings,
        }
    }
}
