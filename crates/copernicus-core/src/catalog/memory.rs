use std::path::Path;

use async_trait::async_trait;

use crate::consts::CATALOG_RESULT_LIMIT;
use crate::error::{CopernicusError, Result};

use super::{BoundingBox, Catalog, CatalogRecord, Coordinate};

/// Catalog over an in-memory list of records, typically loaded from a JSON
/// export of the imagery index.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    records: Vec<CatalogRecord>,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Up to [`CATALOG_RESULT_LIMIT`] newest records containing `at`.
    pub fn records_at(&self, at: Coordinate) -> Result<Vec<CatalogRecord>> {
        let mut found = self.newest_first(|r| r.contains(at));
        found.truncate(CATALOG_RESULT_LIMIT);
        if found.is_empty() {
            return Err(CopernicusError::NotFound(format!(
                "no imagery at lon {}, lat {}",
                at.lon, at.lat
            )));
        }
        Ok(found)
    }

    /// Every record covering `area`, newest first.
    pub fn records_covering(&self, area: &BoundingBox) -> Result<Vec<CatalogRecord>> {
        let found = self.newest_first(|r| r.covers(area));
        if found.is_empty() {
            return Err(CopernicusError::NotFound(format!(
                "no imagery covering lon {}..{}, lat {}..{}",
                area.west_lon, area.east_lon, area.south_lat, area.north_lat
            )));
        }
        Ok(found)
    }

    fn newest_first(&self, keep: impl Fn(&CatalogRecord) -> bool) -> Vec<CatalogRecord> {
        let mut found: Vec<CatalogRecord> =
            self.records.iter().filter(|&r| keep(r)).cloned().collect();
        found.sort_by(|a, b| b.sensing_time.cmp(&a.sensing_time));
        found
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn images_at(&self, at: Coordinate) -> Result<Vec<CatalogRecord>> {
        self.records_at(at)
    }

    async fn images_covering(&self, area: BoundingBox) -> Result<Vec<CatalogRecord>> {
        self.records_covering(&area)
    }
}
