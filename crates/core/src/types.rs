//! Shared scalar aliases and the fixed category/tier enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Game-mode context a class ranking applies to.
///
/// The set is fixed; clients address categories by name and the server
/// resolves the name to a `categories` row id. Parsing an unknown name is a
/// validation error, not a missing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Farm,
    Pvp,
    Solo,
    Support,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Farm,
        Category::Pvp,
        Category::Solo,
        Category::Support,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Farm => "farm",
            Category::Pvp => "pvp",
            Category::Solo => "solo",
            Category::Support => "support",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farm" => Ok(Category::Farm),
            "pvp" => Ok(Category::Pvp),
            "solo" => Ok(Category::Solo),
            "support" => Ok(Category::Support),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'"
            ))),
        }
    }
}

/// Ranked desirability bucket, S highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    /// All tiers, best first. Rendering and grouping follow this order.
    pub const ALL: [Tier; 5] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Tier::S),
            "A" => Ok(Tier::A),
            "B" => Ok(Tier::B),
            "C" => Ok(Tier::C),
            "D" => Ok(Tier::D),
            other => Err(CoreError::Validation(format!("Invalid tier '{other}'"))),
        }
    }
}
