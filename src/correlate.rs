//! Joins parsed listings against the booth grid.

use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use crate::layout::LayoutSource;
use crate::model::{
    BoothEntry, BoothEvent, BoothEventMap, BoothNames, FloorPlan, Listing, StampRally,
};
use crate::parser::extract_booth;

static FIRST_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z]+[0-9]+)").expect("valid regex"));

/// Builds `booth code → listings` from listing titles.
///
/// Listings whose title has no booth code are left out. The first listing
/// seen for a booth is its primary summary; every listing at the booth is
/// kept in `all_events`, in input order.
#[must_use]
pub fn build_booth_event_map(listings: &[Listing]) -> BoothEventMap {
    build_with_count(listings).0
}

fn build_with_count(listings: &[Listing]) -> (BoothEventMap, usize) {
    let mut map: BoothEventMap = BTreeMap::new();
    let mut placed = 0;

    for listing in listings {
        let Some(parsed) = extract_booth(&listing.title) else {
            tracing::debug!(id = %listing.id, title = %listing.title, "no booth code in title");
            continue;
        };
        placed += 1;

        for code in parsed.codes {
            let event = BoothEvent {
                event_id: listing.id.clone(),
                title: listing.title.clone(),
                booth_label: parsed.label.clone(),
                booth_name: parsed.booth_name.clone(),
                images: listing.images.clone(),
                has_preorder: listing.has_preorder,
                start_date_time: listing.start_date_time.clone(),
                end_date_time: listing.end_date_time.clone(),
            };
            match map.get_mut(&code) {
                Some(entry) => entry.push(event),
                None => {
                    map.insert(code, BoothEntry::from_primary(event));
                }
            }
        }
    }

    (map, placed)
}

/// Number of distinct codes taken from the first code-like token of each title.
///
/// This is the quick count shown next to the map; it does not run the full
/// title grammar.
pub fn count_unique_title_codes<'a, I>(titles: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    titles
        .into_iter()
        .filter_map(|title| FIRST_CODE_RE.captures(title))
        .map(|caps| caps[1].to_uppercase())
        .collect::<HashSet<_>>()
        .len()
}

/// Assembles the floor plan from listings and venue assets.
#[must_use]
pub fn build_floor_plan(
    listings: &[Listing],
    layout: &LayoutSource,
    booth_names: BoothNames,
    stamp_rallies: Vec<StampRally>,
) -> FloorPlan {
    let (booth_map, placed) = build_with_count(listings);
    let plan = FloorPlan::new(layout.positions(), booth_map)
        .with_booth_names(booth_names)
        .with_stamp_rallies(stamp_rallies)
        .with_placed_listings(placed);

    let unplaced = plan.unplaced_codes();
    if !unplaced.is_empty() {
        let codes: Vec<String> = unplaced.iter().map(ToString::to_string).collect();
        tracing::warn!(
            count = unplaced.len(),
            codes = %codes.join(", "),
            "listings reference booths missing from the layout"
        );
    }

    plan
}
