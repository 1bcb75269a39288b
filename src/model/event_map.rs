use serde::Serialize;
use std::collections::BTreeMap;

use super::BoothCode;

/// One listing placed at a booth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothEvent {
    pub event_id: String,
    pub title: String,
    pub booth_label: String,
    pub booth_name: String,
    pub images: Vec<String>,
    pub has_preorder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

/// Summary of everything placed at one booth. The top-level fields describe
/// the first listing seen for the booth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothEntry {
    pub event_id: String,
    pub title: String,
    pub booth_label: String,
    pub booth_name: String,
    pub thumb: Option<String>,
    pub images: Vec<String>,
    pub has_preorder: bool,
    pub all_events: Vec<BoothEvent>,
    pub total_events: usize,
}

impl BoothEntry {
    #[must_use]
    pub fn from_primary(event: BoothEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            title: event.title.clone(),
            booth_label: event.booth_label.clone(),
            booth_name: event.booth_name.clone(),
            thumb: event.images.first().cloned(),
            images: event.images.clone(),
            has_preorder: event.has_preorder,
            all_events: vec![event],
            total_events: 1,
        }
    }

    pub fn push(&mut self, event: BoothEvent) {
        self.all_events.push(event);
        self.total_events = self.all_events.len();
    }
}

pub type BoothEventMap = BTreeMap<BoothCode, BoothEntry>;
