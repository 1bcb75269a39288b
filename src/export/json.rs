use crate::error::ExportError;
use crate::model::{FloorPlan, FloorStats};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct FloorPlanDocument<'a> {
    stats: FloorStats,
    #[serde(flatten)]
    plan: &'a FloorPlan,
}

/// Writes the floor plan with its booth event map and summary counts.
pub fn export_json<P: AsRef<Path>>(plan: &FloorPlan, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let document = FloorPlanDocument {
        stats: plan.stats(),
        plan,
    };
    let json = serde_json::to_string_pretty(&document)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlate::build_floor_plan;
    use crate::layout::LayoutSource;
    use crate::model::{BoothNames, Listing};
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_event_map_keyed_by_code() {
        let listings = vec![Listing {
            id: "e1".to_string(),
            title: "B5-6 3 Ngọn Nến".to_string(),
            images: vec!["a.png".to_string()],
            has_preorder: true,
            start_date_time: None,
            end_date_time: None,
        }];
        let plan = build_floor_plan(
            &listings,
            &LayoutSource::Generated,
            BoothNames::default(),
            Vec::new(),
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        export_json(&plan, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["stats"]["occupied_booths"], 2);
        assert_eq!(value["stats"]["total_booths"], 406);
        assert_eq!(value["placedListings"], 1);
        assert_eq!(value["boothMap"]["B6"]["boothName"], "3 Ngọn Nến");
        assert_eq!(value["boothMap"]["B5"]["thumb"], "a.png");
        assert_eq!(value["booths"][0]["code"], "A1");
        assert_eq!(value["booths"].as_array().map(Vec::len), Some(406));
    }
}
