use crate::consts::{BAND_NAMES, COLOR_CHANNEL_COUNT, STORAGE_BROWSER_ROOT};
use crate::error::{CopernicusError, Result};

use super::CatalogRecord;

/// Storage paths of the B02, B03 and B04 images of a record, following the
/// SAFE product layout:
///
/// `<root>/<bucket path>.SAFE/GRANULE/L1C_<tile>_<orbit>_<granule time>/IMG_DATA/<tile>_<product time>_<band>.jp2`
pub fn band_paths(record: &CatalogRecord) -> Result<[String; COLOR_CHANNEL_COUNT]> {
    let malformed = |what: &str| {
        CopernicusError::MalformedRecord(format!("{what} (granule {:?})", record.granule_id))
    };

    let bucket_path = record
        .base_url
        .split_once("//")
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| malformed("base_url has no scheme"))?;

    // gs: / "" / bucket / tiles / <utm zone> / <latitude band> / <grid square> / ...
    let url_parts: Vec<&str> = record.base_url.split('/').collect();
    let tile = match url_parts.as_slice() {
        [_, _, _, _, zone, band, square, ..] => format!("T{zone}{band}{square}"),
        _ => return Err(malformed("base_url lacks tile components")),
    };

    let granule_parts: Vec<&str> = record.granule_id.split('_').collect();
    let (orbit, granule_time) = match granule_parts.as_slice() {
        [_, _, orbit, time, ..] => (*orbit, *time),
        _ => return Err(malformed("granule_id lacks orbit and time")),
    };

    let product_time = record
        .base_url
        .split('_')
        .nth(2)
        .ok_or_else(|| malformed("base_url lacks product time"))?;

    Ok(BAND_NAMES.map(|band| {
        format!(
            "{STORAGE_BROWSER_ROOT}/{bucket_path}/GRANULE/L1C_{tile}_{orbit}_{granule_time}/IMG_DATA/{tile}_{product_time}_{band}.jp2"
        )
    }))
}

/// The product root of a band path: everything up to and including the first
/// `SAFE`. Paths without one are returned unchanged.
pub fn safe_root(path: &str) -> &str {
    match path.find("SAFE") {
        Some(i) => &path[..i + "SAFE".len()],
        None => path,
    }
}
