use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for one placement of a catalog item.
///
/// Two placements of the same plant have different `PlacementId`s but share
/// a [`CatalogId`](catalog::CatalogId).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementId(uuid::Uuid);

/// Unique identifier for a design.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignId(uuid::Uuid);

impl PlacementId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Parse a full UUID string.
    pub fn parse(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(Self)
    }

    /// Create a PlacementId from a u128 (useful for tests).
    pub fn from_u128(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }

    /// Get the full UUID string.
    pub fn to_uuid_string(&self) -> String {
        self.0.to_string()
    }
}

impl DesignId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    pub fn to_uuid_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for PlacementId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for DesignId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlacementId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl fmt::Debug for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DesignId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
