pub mod http;
pub mod retry;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::pipeline::config::SamplerConfig;
use crate::sample::PixelSample;

pub use http::{HttpSampler, SampleResponse};
pub use retry::RetryingSampler;

/// Remote color sampling: fetch the pixel intensities of one band.
///
/// `resolution_level` selects the decimation level; negative values request
/// the full-resolution image.
#[async_trait]
pub trait ColorSampler: Send + Sync {
    fn name(&self) -> &str;

    async fn sample(&self, path: &str, resolution_level: i32) -> Result<PixelSample>;
}

/// Build the HTTP sampler described by `config`, wrapped with its retry policy.
pub fn create_sampler(config: &SamplerConfig) -> Result<Arc<dyn ColorSampler>> {
    let http = HttpSampler::new(config)?;
    info!(
        endpoint = http.endpoint(),
        retries = config.retries,
        timeout_s = config.request_timeout_secs,
        "Sampler ready"
    );
    Ok(Arc::new(RetryingSampler::new(http, config.retries)))
}
