pub mod code;
pub mod floormap;
pub mod listings;
pub mod title;

pub use crate::error::LoadError;
pub use code::{expand_range, is_valid_booth_code, normalize, parse_code_cluster};
pub use floormap::{parse_floor_map_xml, FloorMapError, SectionBands};
pub use listings::{load_booth_names, load_floor_map, load_listings, load_stamp_rallies};
pub use title::{extract_all_booth_codes, extract_booth};
