use async_trait::async_trait;
use tracing::warn;

use crate::error::{CopernicusError, Result};
use crate::sample::PixelSample;

use super::ColorSampler;

/// Retries a failed sample with identical parameters, `retries` extra times.
///
/// Once the retries are spent the last failure is reported as
/// [`CopernicusError::Sampling`], carrying the band path.
pub struct RetryingSampler<S> {
    inner: S,
    retries: u32,
}

impl<S: ColorSampler> RetryingSampler<S> {
    pub fn new(inner: S, retries: u32) -> Self {
        Self { inner, retries }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }
}

#[async_trait]
impl<S: ColorSampler> ColorSampler for RetryingSampler<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn sample(&self, path: &str, resolution_level: i32) -> Result<PixelSample> {
        let mut attempt = 0;
        loop {
            match self.inner.sample(path, resolution_level).await {
                Ok(sample) => return Ok(sample),
                Err(err) if attempt < self.retries => {
                    attempt += 1;
                    warn!(path, attempt, error = %err, "Sample request failed, retrying");
                }
                Err(err) => {
                    return Err(CopernicusError::Sampling {
                        path: path.to_string(),
                        cause: Box::new(err),
                    });
                }
            }
        }
    }
}
