//! # Booth Map
//!
//! Booth-code parsing and floor-plan correlation for convention listings.
//!
//! ## Features
//!
//! - Extract booth codes (`A12`, `G13-14`, `E1,2`) from free-text listing titles
//! - Generate the venue booth grid, or read it from a draw.io floor map
//! - Join listings, booth names and stamp rallies onto the floor plan
//! - Export to CSV and JSON, or browse in the terminal
//!
//! ## Example
//!
//! ```no_run
//! use booth_map::correlate::build_floor_plan;
//! use booth_map::layout::LayoutSource;
//! use booth_map::parser::load_listings;
//!
//! let listings = load_listings("events.json").expect("Failed to load");
//! let plan = build_floor_plan(&listings, &LayoutSource::Generated, Default::default(), Vec::new());
//! println!("Occupied: {}", plan.stats().occupied_booths);
//! ```

pub mod correlate;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod parser;
pub mod ui;
