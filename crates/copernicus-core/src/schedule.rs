//! Concurrent band sampling for a set of candidates.
//!
//! Every (candidate, band) pair gets its own task and its own one-shot
//! channel. Results are collected in completion order but stored by key, so a
//! band average can only ever land in the slot of the band that produced it.
//! The first failure ends the run: outstanding receivers are dropped and the
//! tasks behind them finish into closed channels.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::error::{CopernicusError, Result};
use crate::pipeline::{ProgressReporter, RankingStage};
use crate::sample::{BandAverage, Candidate, CandidateId, ColorVector, DistanceScore};
use crate::sampler::ColorSampler;
use crate::scoring::aggregate::average;
use crate::scoring::ScoringMode;

/// Aggregated color and score of one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateScore {
    pub id: CandidateId,
    pub color: ColorVector,
    pub score: DistanceScore,
}

/// Reject requests that could not be scored, before anything is dispatched.
pub fn check_candidates(candidates: &[Candidate], mode: &ScoringMode) -> Result<()> {
    if candidates.is_empty() {
        return Err(CopernicusError::InvalidInput(
            "no candidates to rank".to_string(),
        ));
    }
    let expected = mode.band_count();
    if let Some(bad) = candidates.iter().find(|c| c.band_count() != expected) {
        return Err(CopernicusError::InvalidInput(format!(
            "candidate {} has {} band(s), {mode} needs {expected}",
            bad.id,
            bad.band_count()
        )));
    }
    Ok(())
}

/// Sample every band of every candidate concurrently and score each candidate.
///
/// Scores are returned in input order. Any sampling or aggregation failure is
/// reported as a single [`CopernicusError::UpstreamUnavailable`]; no partial
/// scores are returned.
pub async fn score_candidates(
    sampler: Arc<dyn ColorSampler>,
    candidates: &[Candidate],
    resolution_level: i32,
    mode: &ScoringMode,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<Vec<CandidateScore>> {
    check_candidates(candidates, mode)?;

    let total: usize = candidates.iter().map(Candidate::band_count).sum();
    info!(
        candidates = candidates.len(),
        samples = total,
        sampler = sampler.name(),
        resolution_level,
        "Dispatching band samples"
    );
    reporter.begin_stage(RankingStage::Sampling, Some(total));

    let mut pending = FuturesUnordered::new();
    for (slot, candidate) in candidates.iter().enumerate() {
        for (band, path) in candidate.bands.iter().enumerate() {
            let rx = dispatch(Arc::clone(&sampler), path.clone(), resolution_level);
            pending.push(async move { (slot, band, rx.await) });
        }
    }

    let mut averages: Vec<Vec<Option<BandAverage>>> = candidates
        .iter()
        .map(|c| vec![None; c.band_count()])
        .collect();
    let mut remaining: Vec<usize> = candidates.iter().map(Candidate::band_count).collect();
    let mut scores: Vec<Option<CandidateScore>> = vec![None; candidates.len()];
    let mut done = 0;

    while let Some((slot, band, outcome)) = pending.next().await {
        let candidate = &candidates[slot];
        let path = &candidate.bands[band];
        let outcome = outcome.unwrap_or_else(|_| {
            Err(CopernicusError::Transport {
                path: path.clone(),
                reason: "sampling task ended without a result".to_string(),
            })
        });
        let avg = match outcome {
            Ok(avg) => avg,
            Err(err) => {
                warn!(
                    candidate = %candidate.id,
                    band,
                    path = %path,
                    error = %err,
                    "Band sampling failed, abandoning ranking"
                );
                return Err(CopernicusError::UpstreamUnavailable(Box::new(err)));
            }
        };
        debug!(candidate = %candidate.id, band, average = avg, "Band averaged");

        averages[slot][band] = Some(avg);
        done += 1;
        reporter.advance(done);

        remaining[slot] -= 1;
        if remaining[slot] == 0 {
            let bands: Vec<BandAverage> = averages[slot].iter().flatten().copied().collect();
            let color = ColorVector::from_averages(&bands)?;
            let score = mode.score(&color)?;
            debug!(candidate = %candidate.id, %color, score, "Candidate scored");
            scores[slot] = Some(CandidateScore {
                id: candidate.id,
                color,
                score,
            });
        }
    }
    reporter.finish_stage();

    scores
        .into_iter()
        .zip(candidates)
        .map(|(score, candidate)| {
            score.ok_or_else(|| {
                CopernicusError::InvalidInput(format!("candidate {} was never scored", candidate.id))
            })
        })
        .collect()
}

/// Spawn one sampling task and hand back the receiving end of its result slot.
fn dispatch(
    sampler: Arc<dyn ColorSampler>,
    path: String,
    resolution_level: i32,
) -> oneshot::Receiver<Result<BandAverage>> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = match sampler.sample(&path, resolution_level).await {
            // Full-resolution bands are large; keep the reduction off the async workers.
            Ok(sample) => tokio::task::spawn_blocking(move || average(&sample))
                .await
                .unwrap_or_else(|e| {
                    Err(CopernicusError::Transport {
                        path: path.clone(),
                        reason: format!("averaging task failed: {e}"),
                    })
                }),
            Err(err) => Err(err),
        };
        // The receiver is gone once the run has been abandoned.
        let _ = tx.send(outcome);
    });
    rx
}
