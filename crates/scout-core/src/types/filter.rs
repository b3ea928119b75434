//! Facet filter criteria entered in the filter popup.

use serde::{Deserialize, Serialize};

/// Alphabetical sort choice for filtered results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep incoming order.
    #[default]
    None,
    /// Title A-Z.
    Ascending,
    /// Title Z-A.
    Descending,
}

impl SortOrder {
    /// Parse the popup's select value (`"A-Z"`, `"Z-A"`, anything else is none).
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "A-Z" => Self::Ascending,
            "Z-A" => Self::Descending,
            _ => Self::None,
        }
    }

    /// Select value for this order.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascending => "A-Z",
            Self::Descending => "Z-A",
        }
    }
}

/// Rating bucket, release-year prefix and sort order.
///
/// Each criterion is optional; an unset criterion skips its filter step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Rating as entered; its floor selects a one-point bucket.
    pub rating: Option<f64>,
    /// Prefix matched against the release date, normally a 4-digit year.
    pub release_year: Option<String>,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    /// Build criteria from the raw popup inputs.
    ///
    /// A blank or unparsable rating and a blank year both leave the
    /// criterion unset.
    pub fn from_inputs(rating: &str, release_year: &str, sort_order: &str) -> Self {
        let rating = rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite());
        let release_year = Some(release_year.trim())
            .filter(|y| !y.is_empty())
            .map(str::to_string);

        Self {
            rating,
            release_year,
            sort_order: SortOrder::parse(sort_order),
        }
    }

    /// Lower bound of the rating bucket (`floor(rating)`), if set.
    pub fn rating_floor(&self) -> Option<f64> {
        self.rating.map(f64::floor)
    }

    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.release_year.is_none() && self.sort_order == SortOrder::None
    }
}
