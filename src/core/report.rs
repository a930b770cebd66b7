//! Extraction results aggregated across source units.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Literals extracted from one source unit, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLiterals {
    /// Path relative to the scanned root.
    pub unit: String,
    pub literals: Vec<String>,
}

/// Mapping from unit identifier to its literals.
///
/// Only units with at least one literal are kept, in insertion order.
/// Serializes as a JSON object: `{ "<unit>": ["literal", ...], ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    units: Vec<UnitLiterals>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a unit's literals. Empty results are dropped.
    pub fn insert(&mut self, unit: impl Into<String>, literals: Vec<String>) {
        if literals.is_empty() {
            return;
        }
        self.units.push(UnitLiterals {
            unit: unit.into(),
            literals,
        });
    }

    pub fn get(&self, unit: &str) -> Option<&[String]> {
        self.units
            .iter()
            .find(|u| u.unit == unit)
            .map(|u| u.literals.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitLiterals> {
        self.units.iter()
    }

    /// Number of units with literals.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn literal_count(&self) -> usize {
        self.units.iter().map(|u| u.literals.len()).sum()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.units.len()))?;
        for unit in &self.units {
            map.serialize_entry(&unit.unit, &unit.literals)?;
        }
        map.end()
    }
}

/// A source unit that could not be read; excluded from the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReadFailure {
    pub unit: String,
    pub error: String,
}
