use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use copernicus_core::catalog::{band_paths, BoundingBox, Coordinate, InMemoryCatalog};

#[derive(Args)]
pub struct PathsArgs {
    /// Imagery index (JSON array of catalog records)
    pub index: PathBuf,

    /// Longitude of the point of interest
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Latitude of the point of interest
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Western edge of the area of interest
    #[arg(long, allow_hyphen_values = true)]
    pub west: Option<f64>,

    /// Eastern edge of the area of interest
    #[arg(long, allow_hyphen_values = true)]
    pub east: Option<f64>,

    /// Southern edge of the area of interest
    #[arg(long, allow_hyphen_values = true)]
    pub south: Option<f64>,

    /// Northern edge of the area of interest
    #[arg(long, allow_hyphen_values = true)]
    pub north: Option<f64>,
}

pub fn run(args: &PathsArgs) -> Result<()> {
    let catalog = InMemoryCatalog::load(&args.index)
        .with_context(|| format!("Failed to load index {}", args.index.display()))?;

    let records = match (args.lon, args.lat, args.west, args.east, args.south, args.north) {
        (Some(lon), Some(lat), None, None, None, None) => {
            catalog.records_at(Coordinate { lon, lat })?
        }
        (None, None, Some(west_lon), Some(east_lon), Some(south_lat), Some(north_lat)) => catalog
            .records_covering(&BoundingBox {
                west_lon,
                east_lon,
                south_lat,
                north_lat,
            })?,
        _ => bail!("Give either --lon and --lat, or --west, --east, --south and --north"),
    };

    for record in &records {
        println!("# {} ({})", record.granule_id, record.sensing_time);
        for path in band_paths(record)? {
            println!("{path}");
        }
    }

    Ok(())
}
