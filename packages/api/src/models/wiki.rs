//! Wiki article models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of wiki sections an article can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WikiCategory {
    #[default]
    Gameplay,
    Units,
    Buildings,
    Resources,
    History,
    Strategy,
}

impl WikiCategory {
    pub const ALL: [WikiCategory; 6] = [
        WikiCategory::Gameplay,
        WikiCategory::Units,
        WikiCategory::Buildings,
        WikiCategory::Resources,
        WikiCategory::History,
        WikiCategory::Strategy,
    ];

    /// Stable identifier stored in the `category` column.
    pub fn id(self) -> &'static str {
        match self {
            WikiCategory::Gameplay => "gameplay",
            WikiCategory::Units => "units",
            WikiCategory::Buildings => "buildings",
            WikiCategory::Resources => "resources",
            WikiCategory::History => "history",
            WikiCategory::Strategy => "strategy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WikiCategory::Gameplay => "Gameplay Mechanics",
            WikiCategory::Units => "Units & Characters",
            WikiCategory::Buildings => "Buildings & Structures",
            WikiCategory::Resources => "Resources & Economy",
            WikiCategory::History => "Historical Context",
            WikiCategory::Strategy => "Strategy Guides",
        }
    }
}

impl fmt::Display for WikiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WikiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WikiCategory::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| format!("Unknown wiki category: {s}"))
    }
}

/// Insert payload for a new article.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewWikiArticle {
    pub title: String,
    pub content: String,
    pub category: WikiCategory,
}

/// A stored article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WikiArticle {
    #[serde(deserialize_with = "super::id_string")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: WikiCategory,
    #[serde(default)]
    pub author_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
