use serde::{Deserialize, Deserializer, Serialize};

use super::BoothCode;

/// A listing record as exported from the listings datastore. Only the fields
/// the floor plan consumes are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_preorder")]
    pub has_preorder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

/// Result of locating a booth code cluster inside a listing title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBooth {
    /// The matched cluster, uppercased, e.g. `"A12-13"`.
    pub label: String,
    pub codes: Vec<BoothCode>,
    /// Title text left after removing the cluster.
    pub booth_name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PreorderFlag {
    Bool(bool),
    Text(String),
}

// The event model stores the preorder flag as "Yes"/"No".
fn deserialize_preorder<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PreorderFlag::deserialize(deserializer)? {
        PreorderFlag::Bool(b) => b,
        PreorderFlag::Text(s) => matches!(s.trim().to_lowercase().as_str(), "yes" | "true"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_and_bool_preorder_flags() {
        let json = r#"[
            {"_id": "1", "title": "A1 - Shop", "hasPreorder": "Yes"},
            {"id": "2", "title": "B2 Shop", "hasPreorder": false, "images": ["x.png"]},
            {"id": "3", "title": "C3 Shop", "hasPreorder": "No"},
            {"id": "4", "title": "D4 Shop"}
        ]"#;
        let listings: Vec<Listing> = serde_json::from_str(json).unwrap();
        let flags: Vec<bool> = listings.iter().map(|l| l.has_preorder).collect();
        assert_eq!(flags, vec![true, false, false, false]);
        assert_eq!(listings[0].id, "1");
        assert_eq!(listings[1].images, vec!["x.png".to_string()]);
    }
}
