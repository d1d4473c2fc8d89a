/// Minimum element count (h*w) to sum a pixel sample with row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Maximum 8-bit band intensity; the deviation score measures distance from it.
pub const MAX_INTENSITY: u32 = 255;

/// Number of bands in a three-channel candidate (B02, B03, B04).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Resolution level asking the sampler for the full-resolution image.
pub const FULL_RESOLUTION: i32 = -1;

/// Extra attempts the sampler makes after a failed call.
pub const DEFAULT_SAMPLE_RETRIES: u32 = 1;

/// Per-request timeout handed to the HTTP client, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sampler endpoint used when no configuration overrides it.
pub const DEFAULT_SAMPLER_ENDPOINT: &str = "http://127.0.0.1:8000/api/jp2";

/// Most recent records returned by a coordinate catalog query.
pub const CATALOG_RESULT_LIMIT: usize = 3;

/// Root of the human-readable storage browser paths built from catalog records.
pub const STORAGE_BROWSER_ROOT: &str = "console.cloud.google.com/storage/browser";

/// Prefix stripped from band paths before they are sent to the sampler,
/// which resolves paths relative to the Sentinel-2 bucket.
pub const SENTINEL_BUCKET_PREFIX: &str =
    "console.cloud.google.com/storage/browser/gcp-public-data-sentinel-2/";

/// Sentinel-2 band names for blue, green and red, in candidate band order.
pub const BAND_NAMES: [&str; COLOR_CHANNEL_COUNT] = ["B02", "B03", "B04"];
