pub mod booth_code;
pub mod event_map;
pub mod floor_plan;
pub mod listing;
pub mod position;
pub mod venue;

pub use booth_code::{BoothCode, InvalidBoothCode};
pub use event_map::{BoothEntry, BoothEvent, BoothEventMap};
pub use floor_plan::{BoothInfo, FloorPlan, FloorStats, FLOOR_HEIGHT, FLOOR_WIDTH};
pub use listing::{Listing, ParsedBooth};
pub use position::{convert_to_svg_coordinates, BoothPosition, Bounds};
pub use venue::{expand_rally_booths, BoothNames, StampRally};
