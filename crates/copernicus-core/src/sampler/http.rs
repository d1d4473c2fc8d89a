use std::time::Duration;

use async_trait::async_trait;
use ndarray::ShapeError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CopernicusError, Result};
use crate::pipeline::config::SamplerConfig;
use crate::sample::PixelSample;

use super::ColorSampler;

#[derive(Debug, Serialize)]
struct SampleRequest<'a> {
    path: &'a str,
    rlevel: i32,
}

/// Body returned by the sampler service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleResponse {
    #[serde(rename = "img_data")]
    pub image_data: Vec<Vec<u32>>,
    #[serde(default)]
    pub shape: Vec<usize>,
    #[serde(rename = "time_download", default)]
    pub download_time_seconds: f64,
    #[serde(rename = "time_processing", default)]
    pub processing_time_seconds: f64,
}

impl SampleResponse {
    pub fn into_sample(self) -> std::result::Result<PixelSample, ShapeError> {
        PixelSample::from_rows(self.image_data)
    }
}

/// Color sampler backed by the JPEG 2000 analysis service.
pub struct HttpSampler {
    client: reqwest::Client,
    endpoint: String,
    strip_prefix: String,
}

impl HttpSampler {
    pub fn new(config: &SamplerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CopernicusError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            strip_prefix: config.strip_prefix.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The path as the service expects it, relative to the imagery bucket.
    pub fn request_path<'a>(&self, path: &'a str) -> &'a str {
        path.strip_prefix(self.strip_prefix.as_str()).unwrap_or(path)
    }
}

#[async_trait]
impl ColorSampler for HttpSampler {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn sample(&self, path: &str, resolution_level: i32) -> Result<PixelSample> {
        let transport = |reason: String| CopernicusError::Transport {
            path: path.to_string(),
            reason,
        };
        let request = SampleRequest {
            path: self.request_path(path),
            rlevel: resolution_level,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!("sampler returned {status}")));
        }

        let body: SampleResponse = response
            .json()
            .await
            .map_err(|e| transport(format!("invalid sampler response: {e}")))?;
        debug!(
            path,
            shape = ?body.shape,
            download_s = body.download_time_seconds,
            processing_s = body.processing_time_seconds,
            "Sample received"
        );
        body.into_sample()
            .map_err(|e| transport(format!("ragged image data: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_service_field_names() {
        let request = SampleRequest {
            path: "tiles/32/U/NG/x.jp2",
            rlevel: -1,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["path"], "tiles/32/U/NG/x.jp2");
        assert_eq!(json["rlevel"], -1);
    }

    #[test]
    fn test_request_path_strips_prefix() {
        let sampler = HttpSampler::new(&SamplerConfig::default()).unwrap();
        let full = "console.cloud.google.com/storage/browser/gcp-public-data-sentinel-2/tiles/32/U/NG/a.jp2";
        assert_eq!(sampler.request_path(full), "tiles/32/U/NG/a.jp2");
        assert_eq!(sampler.request_path("tiles/x.jp2"), "tiles/x.jp2");
    }
}
