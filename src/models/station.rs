use serde::{Deserialize, Serialize};
use validator::Validate;

/// One weather station the plugin polls. The station id is a provider
/// code opaque to us; the label is what appears in graph legends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct StationEntry {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub label: String,
}

impl StationEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
