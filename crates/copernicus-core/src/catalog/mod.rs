//! Collaborators that turn a place into ranking candidates: a [`Locator`]
//! resolves an address, a [`Catalog`] finds imagery covering it, and
//! [`paths::band_paths`] derives the band paths of each record.

pub mod memory;
pub mod paths;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sample::Candidate;
use crate::scoring::ScoringMode;

pub use memory::InMemoryCatalog;
pub use paths::{band_paths, safe_root};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west_lon: f64,
    pub east_lon: f64,
    pub south_lat: f64,
    pub north_lat: f64,
}

/// One Sentinel-2 granule from the imagery index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// e.g. `L1C_T32UNG_A013497_20180104T103424`
    pub granule_id: String,
    /// e.g. `gs://gcp-public-data-sentinel-2/tiles/32/U/NG/S2A_MSIL1C_..._20180104T124213.SAFE`
    pub base_url: String,
    /// RFC 3339 UTC timestamp; these compare correctly as strings.
    pub sensing_time: String,
    pub west_lon: f64,
    pub east_lon: f64,
    pub south_lat: f64,
    pub north_lat: f64,
}

impl CatalogRecord {
    /// Whether the footprint strictly contains the coordinate.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.west_lon < at.lon
            && self.east_lon > at.lon
            && self.south_lat < at.lat
            && self.north_lat > at.lat
    }

    /// Whether the footprint strictly contains the whole box.
    pub fn covers(&self, area: &BoundingBox) -> bool {
        self.west_lon < area.west_lon
            && self.east_lon > area.east_lon
            && self.south_lat < area.south_lat
            && self.north_lat > area.north_lat
    }
}

/// Resolves a free-text address to its best-matching coordinate.
///
/// No geocoder ships with this crate. Applications plug one in here and hand
/// it to [`locate_candidates`] to rank imagery by address.
#[async_trait]
pub trait Locator: Send + Sync {
    async fn locate(&self, address: &str) -> Result<Coordinate>;
}

/// Imagery index lookups. Both queries return newest records first and fail
/// with `NotFound` when nothing matches.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// The most recent records whose footprint contains `at`.
    async fn images_at(&self, at: Coordinate) -> Result<Vec<CatalogRecord>>;

    /// Every record whose footprint contains `area`.
    async fn images_covering(&self, area: BoundingBox) -> Result<Vec<CatalogRecord>>;
}

/// Turn catalog records into candidates for `mode`: the blue band alone for
/// deviation ranking, all three bands for target-color ranking.
pub fn candidates_from_records(
    records: &[CatalogRecord],
    mode: &ScoringMode,
) -> Result<Vec<Candidate>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let paths = band_paths(record)?;
            let bands = paths.into_iter().take(mode.band_count()).collect();
            Ok(Candidate::new(i, bands))
        })
        .collect()
}

/// Locate an address and build candidates from the imagery that covers it.
///
/// The records are returned alongside the candidates; candidate `i` was built
/// from record `i`.
pub async fn locate_candidates(
    locator: &dyn Locator,
    catalog: &dyn Catalog,
    address: &str,
    mode: &ScoringMode,
) -> Result<(Vec<CatalogRecord>, Vec<Candidate>)> {
    let at = locator.locate(address).await?;
    tracing::info!(address, lon = at.lon, lat = at.lat, "Address located");
    let records = catalog.images_at(at).await?;
    let candidates = candidates_from_records(&records, mode)?;
    Ok((records, candidates))
}
