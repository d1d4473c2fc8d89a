use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use copernicus_core::error::{CopernicusError, Result};
use copernicus_core::sample::{Candidate, PixelSample};
use copernicus_core::sampler::ColorSampler;
use tokio::sync::Barrier;

#[derive(Clone, Default)]
struct Script {
    rows: Option<Vec<Vec<u32>>>,
    failures: usize,
    delay: Duration,
}

/// Sampler with per-path scripted outcomes, for driving the scheduler
/// without a network.
///
/// Paths without a script fail every call.
#[derive(Default)]
pub struct ScriptedSampler {
    scripts: HashMap<String, Script>,
    calls: Mutex<HashMap<String, usize>>,
    barrier: Option<Arc<Barrier>>,
}

impl ScriptedSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call for `path` returns a 4x4 grid filled with `value`.
    pub fn uniform(self, path: &str, value: u32) -> Self {
        self.rows(path, vec![vec![value; 4]; 4])
    }

    pub fn rows(mut self, path: &str, rows: Vec<Vec<u32>>) -> Self {
        self.scripts.entry(path.to_string()).or_default().rows = Some(rows);
        self
    }

    /// The first `count` calls for `path` fail with a transport error.
    pub fn failing_first(mut self, path: &str, count: usize) -> Self {
        self.scripts.entry(path.to_string()).or_default().failures = count;
        self
    }

    pub fn delayed(mut self, path: &str, millis: u64) -> Self {
        self.scripts.entry(path.to_string()).or_default().delay = Duration::from_millis(millis);
        self
    }

    /// First attempts block until `parties` of them are in flight at once.
    pub fn with_barrier(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    pub fn calls(&self, path: &str) -> usize {
        self.calls.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl ColorSampler for ScriptedSampler {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn sample(&self, path: &str, _resolution_level: i32) -> Result<PixelSample> {
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            let count = calls.entry(path.to_string()).or_insert(0);
            *count += 1;
            *count
        };
        let script = self.scripts.get(path).cloned().unwrap_or_default();

        if let Some(ref barrier) = self.barrier {
            if attempt == 1 {
                barrier.wait().await;
            }
        }
        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }

        if attempt <= script.failures {
            return Err(CopernicusError::Transport {
                path: path.to_string(),
                reason: format!("scripted failure on attempt {attempt}"),
            });
        }
        match script.rows {
            Some(rows) => Ok(PixelSample::from_rows(rows).expect("scripted rows are rectangular")),
            None => Err(CopernicusError::Transport {
                path: path.to_string(),
                reason: "no script for path".to_string(),
            }),
        }
    }
}

/// Band path `band` (0 = B02) of the candidate named `name`.
pub fn band_path(name: &str, band: usize) -> String {
    format!("{name}.SAFE/IMG_DATA/{name}_B0{}.jp2", band + 2)
}

/// Three-band candidates named after `names`, in order.
pub fn color_candidates(names: &[&str]) -> Vec<Candidate> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Candidate::new(i, (0..3).map(|b| band_path(name, b)).collect()))
        .collect()
}

/// Single-band (B02) candidates named after `names`, in order.
pub fn blue_candidates(names: &[&str]) -> Vec<Candidate> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Candidate::new(i, vec![band_path(name, 0)]))
        .collect()
}

/// Script uniform band values for a three-band candidate.
pub fn with_color(sampler: ScriptedSampler, name: &str, color: [u32; 3]) -> ScriptedSampler {
    color
        .iter()
        .enumerate()
        .fold(sampler, |s, (band, &value)| s.uniform(&band_path(name, band), value))
}
