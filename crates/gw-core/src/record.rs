//! Typed seed records for the reference tables.
//!
//! Records are immutable tuples of named string fields. `name` is the
//! natural key; uniqueness is enforced by the destination table, not by the
//! seeder.

use serde::Serialize;

/// One job board listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardRecord {
    pub name: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
}

impl BoardRecord {
    /// Column order used when rendering INSERT statements.
    pub const COLUMNS: &'static [&'static str] =
        &["name", "url", "category", "industry", "description"];

    /// Field values in [`Self::COLUMNS`] order.
    pub fn values(&self) -> [&'static str; 5] {
        [
            self.name,
            self.url,
            self.category,
            self.industry,
            self.description,
        ]
    }
}

/// One job role tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleRecord {
    pub name: &'static str,
    pub description: &'static str,
}

impl RoleRecord {
    /// Column order used when rendering INSERT statements.
    pub const COLUMNS: &'static [&'static str] = &["name", "description"];

    /// Field values in [`Self::COLUMNS`] order.
    pub fn values(&self) -> [&'static str; 2] {
        [self.name, self.description]
    }
}
