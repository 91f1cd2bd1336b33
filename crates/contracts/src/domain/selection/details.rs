use serde::{Deserialize, Serialize};

use crate::domain::catalog::Item;

/// Content of the details panel for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub name: String,
    pub level: String,
    /// "{name} ({level})"
    pub heading: String,
    pub description: String,
    /// `None` when the item has no video; the panel then has no video region
    pub video_link: Option<String>,
}

impl ItemDetails {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            level: item.level.clone(),
            heading: format!("{} ({})", item.name, item.level),
            description: item.description.clone(),
            video_link: item.has_video().then(|| item.video_link.clone()),
        }
    }
}
