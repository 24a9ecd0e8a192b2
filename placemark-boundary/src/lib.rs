use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "extra-derive")]
use thiserror::Error;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id                  : String,
    pub name                : String,
    pub description         : Option<String>,
    pub category            : PlaceCategory,
    pub latitude            : f64,
    pub longitude           : f64,
    pub visit_radius_meters : u32,
    #[serde(default)]
    pub group_ids           : Vec<String>,
    pub created_at          : String,
    pub updated_at          : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct PlaceGroup {
    pub id          : String,
    pub name        : String,
    pub description : Option<String>,
    #[serde(default)]
    pub place_ids   : Vec<String>,
    pub created_at  : String,
    pub updated_at  : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewPlace {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: PlaceCategory,
    pub latitude: f64,
    pub longitude: f64,
    pub visit_radius_meters: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewPlaceGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TrackIntersection {
    pub points: Vec<TrackPoint>,
}

/// One slice of a larger result set.
///
/// The flags `first`, `last` and `empty` are taken
/// as transmitted by the server and never recomputed.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content        : Vec<T>,
    pub number         : u32,
    pub size           : u32,
    pub total_elements : u64,
    pub total_pages    : u32,
    pub first          : bool,
    pub last           : bool,
    pub empty          : bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceCategory {
    Landmark,
    Museum,
    Park,
    Restaurant,
    City,
    Other,
}

impl PlaceCategory {
    pub const ALL: [Self; 6] = [
        Self::Landmark,
        Self::Museum,
        Self::Park,
        Self::Restaurant,
        Self::City,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landmark => "LANDMARK",
            Self::Museum => "MUSEUM",
            Self::Park => "PARK",
            Self::Restaurant => "RESTAURANT",
            Self::City => "CITY",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown place category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for PlaceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Error payload of non-2xx responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    #[serde(default)]
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
