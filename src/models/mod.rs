use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::{PanelError, PanelResult};

/// Identifier of the dataset whose recommendations are browsed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId(String);

impl DatasetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Extracts the dataset id from a page location path.
    ///
    /// Dataset pages live under `/dataset/{id}/...`; the segment after
    /// `dataset` is the id. Any other path shape is rejected.
    pub fn from_location_path(path: &str) -> PanelResult<Self> {
        let mut segments = path.split('/');
        // Leading '/' yields an empty first segment.
        segments.next();
        match (segments.next(), segments.next()) {
            (Some("dataset"), Some(id)) if !id.is_empty() => Ok(Self(id.to_string())),
            _ => Err(PanelError::InvalidLocation(path.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categorical filter narrowing which recommendations are returned
///
/// The hub recognizes `authors`, `tags` and `properties`; any other value is
/// passed through untouched so a newer server-side filter keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterType {
    /// Datasets sharing an author with the current one
    Authors,
    /// Datasets sharing a tag
    Tags,
    /// Datasets sharing a material property
    Properties,
    /// A filter this client does not know by name
    Custom(String),
}

impl FilterType {
    /// Wire value sent as the `filter_type` query parameter
    pub fn as_str(&self) -> &str {
        match self {
            FilterType::Authors => "authors",
            FilterType::Tags => "tags",
            FilterType::Properties => "properties",
            FilterType::Custom(value) => value,
        }
    }
}

impl FromStr for FilterType {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(PanelError::InvalidInput(
                "filter type cannot be empty".to_string(),
            ));
        }
        Ok(match value {
            "authors" => FilterType::Authors,
            "tags" => FilterType::Tags,
            "properties" => FilterType::Properties,
            other => FilterType::Custom(other.to_string()),
        })
    }
}

impl Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wire response from the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationsPage {
    /// Server-rendered recommendations markup, rendered verbatim
    pub html: String,
    /// 1-indexed page this response covers
    pub page: u32,
    /// Total number of pages for the active filter; 0 when nothing matches
    pub total_pages: u32,
}

/// A fetched page together with the moment it was received
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub body: RecommendationsPage,
    pub fetched_at: DateTime<Utc>,
}

/// One pagination control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub number: u32,
    pub active: bool,
}

/// Builds the pagination controls for a rendered page.
///
/// One control per page, numbered 1..=total, with the current page marked
/// active. A zero-page result set gets no controls.
pub fn page_controls(page: u32, total: u32) -> Vec<PageControl> {
    (1..=total)
        .map(|number| PageControl {
            number,
            active: number == page,
        })
        .collect()
}
