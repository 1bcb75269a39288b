use crate::error::ExportError;
use crate::model::{BoothInfo, FloorPlan};
use std::fs::File;
use std::path::Path;

/// Writes one row per booth cell, occupied or not.
pub fn export_csv<P: AsRef<Path>>(plan: &FloorPlan, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Code",
        "Section",
        "Number",
        "X",
        "Y",
        "Width",
        "Height",
        "Title",
        "Booth Name",
        "Events",
    ])?;

    for booth in &plan.booths {
        let (title, name, events) = match plan.describe(&booth.code) {
            Some(BoothInfo::Occupied(entry)) => (
                entry.title.as_str(),
                entry.booth_name.as_str(),
                entry.total_events,
            ),
            Some(BoothInfo::Named(name)) => ("", name, 0),
            None => ("", "", 0),
        };

        writer.write_record([
            booth.code.to_string().as_str(),
            &booth.section,
            &booth.number.to_string(),
            &booth.x.to_string(),
            &booth.y.to_string(),
            &booth.width.to_string(),
            &booth.height.to_string(),
            title,
            name,
            &events.to_string(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoothEntry, BoothEvent, BoothNames, BoothPosition};
    use pretty_assertions::assert_eq;

    fn plan() -> FloorPlan {
        let booth = |code: &str, x: f64| BoothPosition {
            code: code.parse().unwrap(),
            section: code[..1].to_string(),
            number: code[1..].parse().unwrap(),
            x,
            y: 10.0,
            width: 110.0,
            height: 110.0,
            group: None,
        };
        let event = BoothEvent {
            event_id: "e1".to_string(),
            title: "A1 - Coffee, Tea".to_string(),
            booth_label: "A1".to_string(),
            booth_name: "Coffee, Tea".to_string(),
            images: Vec::new(),
            has_preorder: false,
            start_date_time: None,
            end_date_time: None,
        };
        let booth_map = [("A1".parse().unwrap(), BoothEntry::from_primary(event))]
            .into_iter()
            .collect();
        let names = BoothNames([("A2".to_string(), "Info".to_string())].into_iter().collect());

        FloorPlan::new(
            vec![booth("A1", 0.0), booth("A2", 120.0), booth("A3", 240.0)],
            booth_map,
        )
        .with_booth_names(names)
    }

    #[test]
    fn writes_a_row_per_booth() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("booths.csv");
        export_csv(&plan(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Code,Section,Number,X,Y,Width,Height,Title,Booth Name,Events",
                "A1,A,1,0,10,110,110,\"A1 - Coffee, Tea\",\"Coffee, Tea\",1",
                "A2,A,2,120,10,110,110,,Info,0",
                "A3,A,3,240,10,110,110,,,0",
            ]
        );
    }

    #[test]
    fn reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_csv(&plan(), dir.path().join("missing/booths.csv")).unwrap_err();
        assert!(matches!(err, ExportError::FileCreate { .. }));
    }
}
