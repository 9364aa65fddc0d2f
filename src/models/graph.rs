use serde::{Deserialize, Serialize};
use validator::Validate;

/// Display metadata for one Munin graph: a human title, the unit string
/// shown on the axis, and the short code used in the graph legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GraphSpec {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub unit: String,

    #[validate(length(min = 1))]
    pub short_code: String,
}

impl GraphSpec {
    pub fn new(
        title: impl Into<String>,
        unit: impl Into<String>,
        short_code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            unit: unit.into(),
            short_code: short_code.into(),
        }
    }
}
