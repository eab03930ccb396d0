// src/specs/mod.rs
//! # Dataset description tables
//!
//! One module per target dataset, each holding the **static column →
//! description table** for that dataset's edit page. Pure data: the modules
//! know *what every column means*, nothing about pages or inputs.
//!
//! ## Conventions
//! - Tables are `&[(&str, &str)]` in source order of the upstream dataset.
//! - Keys are exact column names as they appear in the page's `title`
//!   attribute; no normalization is applied on lookup.
//! - Keys are unique per table (asserted by test) and every description is
//!   non-empty.
//!
//! Selecting a table and shaping it into a [`Mapping`] happens here via
//! [`DatasetKind`]; everything downstream (fill, report, CLI) is
//! table-agnostic.

pub mod batter_summary;
pub mod pitcher_arsenal;
pub mod pitcher_summary;
pub mod rosters;
pub mod statcast;

use crate::error::SetupError;
use crate::mapping::Mapping;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetKind {
    Statcast,
    BatterSummary,
    PitcherSummary,
    Rosters,
    PitcherArsenal,
}

impl DatasetKind {
    pub fn all() -> &'static [DatasetKind] {
        &[
            DatasetKind::Statcast,
            DatasetKind::BatterSummary,
            DatasetKind::PitcherSummary,
            DatasetKind::Rosters,
            DatasetKind::PitcherArsenal,
        ]
    }

    /// CLI identifier.
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Statcast => "statcast",
            DatasetKind::BatterSummary => "batter-summary",
            DatasetKind::PitcherSummary => "pitcher-summary",
            DatasetKind::Rosters => "rosters",
            DatasetKind::PitcherArsenal => "pitcher-arsenal",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            DatasetKind::Statcast => "pitch-level Statcast data (statcast_batters / statcast_pitchers)",
            DatasetKind::BatterSummary => "aggregated batter scouting summary",
            DatasetKind::PitcherSummary => "aggregated pitcher scouting summary",
            DatasetKind::Rosters => "WBC 2026 tournament rosters",
            DatasetKind::PitcherArsenal => "per-pitch-type arsenal metrics",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SetupError> {
        let lc = s.to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name() == lc)
            .ok_or_else(|| SetupError::UnknownDataset(s!(s)))
    }

    pub fn columns(self) -> &'static [(&'static str, &'static str)] {
        match self {
            DatasetKind::Statcast => statcast::COLUMNS,
            DatasetKind::BatterSummary => batter_summary::COLUMNS,
            DatasetKind::PitcherSummary => pitcher_summary::COLUMNS,
            DatasetKind::Rosters => rosters::COLUMNS,
            DatasetKind::PitcherArsenal => pitcher_arsenal::COLUMNS,
        }
    }

    pub fn mapping(self) -> Mapping {
        Mapping::from_table(self.columns())
    }
}
