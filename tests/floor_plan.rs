use booth_map::correlate::{build_floor_plan, count_unique_title_codes};
use booth_map::export::{export_csv, export_json};
use booth_map::layout::LayoutSource;
use booth_map::model::{BoothCode, BoothInfo};
use booth_map::parser::{
    extract_booth, load_booth_names, load_floor_map, load_listings, load_stamp_rallies,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const LISTINGS: &str = r#"[
    {"_id": "1", "title": "A1 - Coffee Shop", "images": ["coffee.png"], "hasPreorder": "Yes"},
    {"_id": "2", "title": "Big Event at A12-13"},
    {"_id": "3", "title": "G13-14: Rình Ai Tắm", "hasPreorder": "No"},
    {"_id": "4", "title": "D25-26 Túi rác"},
    {"_id": "5", "title": "No code here"},
    {"_id": "6", "title": "Shop (E1, 2) extra"}
]"#;

const NAMES: &str = r#"{"B5": "Info Desk", "K1-3": "Sponsors"}"#;

const RALLIES: &str = r#"{"stampRallies": [
    {"name": "Spring", "rules": "Collect all", "booths": ["A12-13", "G14"]}
]}"#;

const DIAGRAM: &str = r#"<mxfile><diagram><mxGraphModel><root>
    <mxCell id="0"/>
    <mxCell id="g1" style="group" parent="0" vertex="1">
        <mxGeometry x="2000" y="100" width="400" height="100" as="geometry"/>
    </mxCell>
    <mxCell id="c1" value="&lt;div&gt;12&lt;/div&gt;" parent="g1" vertex="1">
        <mxGeometry x="1800" y="1600" width="60" height="60" as="geometry"/>
    </mxCell>
    <mxCell id="c2" value="1" parent="0" vertex="1">
        <mxGeometry x="800" y="2400" as="geometry"/>
    </mxCell>
</root></mxGraphModel></diagram></mxfile>"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn code(s: &str) -> BoothCode {
    s.parse().unwrap()
}

#[test]
fn title_scenarios() {
    let cases = [
        ("A1 - Coffee Shop", "A1", vec!["A1"], "Coffee Shop"),
        ("Big Event at A12-13", "A12-13", vec!["A12", "A13"], "Big Event"),
        ("G13-14: Rình Ai Tắm", "G13-14", vec!["G13", "G14"], "Rình Ai Tắm"),
        ("D25-26 Túi rác", "D25-26", vec!["D25", "D26"], "Túi rác"),
    ];
    for (title, label, codes, name) in cases {
        let parsed = extract_booth(title).unwrap();
        assert_eq!(parsed.label, label, "{title}");
        let got: Vec<String> = parsed.codes.iter().map(ToString::to_string).collect();
        assert_eq!(got, codes, "{title}");
        assert_eq!(parsed.booth_name, name, "{title}");
    }
    assert_eq!(extract_booth("No code here"), None);
}

#[test]
fn loads_assets_and_builds_generated_plan() {
    let dir = TempDir::new().unwrap();
    let listings = load_listings(write(&dir, "events.json", LISTINGS)).unwrap();
    let names = load_booth_names(write(&dir, "names.json", NAMES)).unwrap();
    let rallies = load_stamp_rallies(write(&dir, "rallies.json", RALLIES)).unwrap();

    assert_eq!(
        count_unique_title_codes(listings.iter().map(|l| l.title.as_str())),
        5
    );

    let plan = build_floor_plan(&listings, &LayoutSource::Generated, names, rallies);
    let stats = plan.stats();
    assert_eq!(stats.total_booths, 406);
    assert_eq!(stats.placed_listings, 5);
    assert_eq!(stats.occupied_booths, 9);

    match plan.describe(&code("A1")) {
        Some(BoothInfo::Occupied(entry)) => {
            assert_eq!(entry.booth_name, "Coffee Shop");
            assert!(entry.has_preorder);
            assert_eq!(entry.thumb.as_deref(), Some("coffee.png"));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(plan.describe(&code("K2")), Some(BoothInfo::Named("Sponsors")));
    assert_eq!(plan.entry(&code("E2")).map(|e| e.booth_name.as_str()), Some("Shop extra"));

    let spring: Vec<&str> = plan
        .rallies_for_booth(&code("A13"))
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(spring, vec!["Spring"]);
    assert!(plan.rallies_for_booth(&code("G13")).is_empty());
}

#[test]
fn diagram_layout_and_exports() {
    let dir = TempDir::new().unwrap();
    let listings = load_listings(write(&dir, "events.json", LISTINGS)).unwrap();
    let xml = load_floor_map(write(&dir, "floor.xml", DIAGRAM)).unwrap();

    let plan = build_floor_plan(
        &listings,
        &LayoutSource::diagram(xml),
        Default::default(),
        Vec::new(),
    );
    let codes: Vec<String> = plan.booths.iter().map(|b| b.code.to_string()).collect();
    assert_eq!(codes, vec!["A1", "F12"]);
    let a1 = plan.position(&code("A1")).unwrap();
    assert_eq!((a1.width, a1.height), (70.0, 70.0));
    assert_eq!(plan.stats().occupied_booths, 1);

    let csv_path = dir.path().join("out.csv");
    export_csv(&plan, &csv_path).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().nth(1).unwrap().starts_with("A1,A,1,800,2400,70,70,A1 - Coffee Shop"));

    let json_path = dir.path().join("out.json");
    export_json(&plan, &json_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["booths"][1]["group"], "g1");
    assert_eq!(value["boothMap"]["G14"]["boothLabel"], "G13-14");
}

#[test]
fn broken_diagram_falls_back_to_generated_grid() {
    let plan = build_floor_plan(
        &[],
        &LayoutSource::diagram("<mxfile><root></mxfile>"),
        Default::default(),
        Vec::new(),
    );
    assert_eq!(plan.booths.len(), 406);
    assert_eq!(plan.stats().placed_listings, 0);
}
