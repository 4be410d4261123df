// src/models.rs

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- Catalog Models ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Numeric rank shared by every view that sorts on difficulty.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "green",
            Difficulty::Medium => "yellow",
            Difficulty::Hard => "red",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Site section a problem page lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    DataStructures,
    CompetitiveProgramming,
}

impl Section {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Section::DataStructures => "datastructures",
            Section::CompetitiveProgramming => "competitiveprogramming",
        }
    }
}

/// One practice problem. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default = "default_section")]
    pub section: Section,
}

fn default_section() -> Section {
    Section::DataStructures
}

impl CatalogEntry {
    /// Navigation target, `/<section>/problem/<id>`.
    pub fn link(&self) -> String {
        format!("/{}/problem/{}", self.section.path_segment(), self.id)
    }

    pub fn difficulty_rank(&self) -> u8 {
        self.difficulty.map_or(UNRANKED, |d| d.rank())
    }
}

// --- View Parameters ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Difficulty,
    Category,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// The listing pages that bind to a catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    DataStructures,
    Problems,
}

impl ViewKind {
    pub fn sortable_fields(&self) -> &'static [SortField] {
        match self {
            ViewKind::DataStructures => &[SortField::Name, SortField::Difficulty],
            ViewKind::Problems => &[SortField::Name, SortField::Category],
        }
    }

    pub fn supports(&self, field: SortField) -> bool {
        self.sortable_fields().contains(&field)
    }
}

// --- Display Preference ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than the enabled sentinel resolves to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(PREFERENCE_ENABLED) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            Theme::Dark => PREFERENCE_ENABLED,
            Theme::Light => PREFERENCE_DISABLED,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// --- Slideshow ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub caption: String,
    pub description: String,
}
