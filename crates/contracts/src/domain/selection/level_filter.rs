use serde::{Deserialize, Serialize};

/// Value of the level control that disables level filtering
pub const ALL_LEVELS: &str = "All";

/// Level constraint applied to the name list
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelFilter {
    #[default]
    All,
    Level(String),
}

impl LevelFilter {
    /// Parses a control value. `"All"` is always the sentinel, even if some
    /// item uses it as a level.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_LEVELS {
            LevelFilter::All
        } else {
            LevelFilter::Level(value.to_string())
        }
    }

    /// Value as shown in (and read back from) the level control
    pub fn as_value(&self) -> &str {
        match self {
            LevelFilter::All => ALL_LEVELS,
            LevelFilter::Level(level) => level,
        }
    }

    pub fn matches(&self, level: &str) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Level(wanted) => wanted == level,
        }
    }
}
