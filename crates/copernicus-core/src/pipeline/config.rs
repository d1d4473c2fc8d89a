use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SAMPLE_RETRIES, DEFAULT_SAMPLER_ENDPOINT,
    FULL_RESOLUTION, SENTINEL_BUCKET_PREFIX,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub distance: DistanceFormula,
}

/// Connection settings for the remote color sampler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// URL the sample requests are POSTed to.
    pub endpoint: String,
    /// Decimation level requested from the sampler; negative means full resolution.
    pub resolution_level: i32,
    /// Extra attempts after a failed sample request.
    pub retries: u32,
    /// Timeout applied to each HTTP request.
    pub request_timeout_secs: u64,
    /// Prefix removed from band paths before they are sent.
    pub strip_prefix: String,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SAMPLER_ENDPOINT.to_string(),
            resolution_level: FULL_RESOLUTION,
            retries: DEFAULT_SAMPLE_RETRIES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            strip_prefix: SENTINEL_BUCKET_PREFIX.to_string(),
        }
    }
}

/// Three-channel distance used for target-color ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceFormula {
    /// `sqrt((c0-c2)^2 + (c1-c1)^2 + (c2-c0)^2)`, the historical formula.
    #[default]
    Literal,
    /// Textbook Euclidean distance to the target.
    Euclidean,
}

impl std::fmt::Display for DistanceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal => write!(f, "Literal"),
            Self::Euclidean => write!(f, "Euclidean"),
        }
    }
}
