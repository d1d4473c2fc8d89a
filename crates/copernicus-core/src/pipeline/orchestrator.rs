use std::sync::Arc;

use tracing::info;

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::Result;
use crate::sample::{check_target, Candidate, CandidateId, DistanceScore};
use crate::sampler::ColorSampler;
use crate::schedule::score_candidates;
use crate::scoring::rank::rank_scored;
use crate::scoring::ScoringMode;

use super::config::RankingConfig;
use super::types::{NoOpReporter, ProgressReporter, RankedCandidate, RankingStage};

/// Sample, score and rank candidates with a thread-safe progress reporter.
///
/// Returns every candidate with its score, best (lowest) first.
pub async fn run_ranking_reported(
    sampler: Arc<dyn ColorSampler>,
    candidates: &[Candidate],
    mode: &ScoringMode,
    config: &RankingConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<Vec<RankedCandidate>> {
    if let ScoringMode::TargetColor { target, .. } = mode {
        check_target(*target)?;
    }

    let scored = score_candidates(
        sampler,
        candidates,
        config.sampler.resolution_level,
        mode,
        Arc::clone(&reporter),
    )
    .await?;

    reporter.begin_stage(RankingStage::Ranking, Some(scored.len()));
    let pairs: Vec<(CandidateId, DistanceScore)> =
        scored.iter().map(|s| (s.id, s.score)).collect();
    let ranked: Vec<RankedCandidate> = rank_scored(&pairs)
        .into_iter()
        .map(|(id, score)| RankedCandidate { id, score })
        .collect();
    reporter.advance(ranked.len());
    reporter.finish_stage();

    info!(
        mode = %mode,
        candidates = ranked.len(),
        best = ?ranked.first().map(|r| r.id),
        "Ranking complete"
    );
    Ok(ranked)
}

/// Sample, score and rank candidates without progress reporting.
pub async fn run_ranking(
    sampler: Arc<dyn ColorSampler>,
    candidates: &[Candidate],
    mode: &ScoringMode,
    config: &RankingConfig,
) -> Result<Vec<RankedCandidate>> {
    run_ranking_reported(sampler, candidates, mode, config, Arc::new(NoOpReporter)).await
}

/// Rank single-band candidates by how far their mean intensity is from 255.
pub async fn rank_by_deviation(
    sampler: Arc<dyn ColorSampler>,
    candidates: &[Candidate],
    config: &RankingConfig,
) -> Result<Vec<CandidateId>> {
    let ranked = run_ranking(sampler, candidates, &ScoringMode::Deviation, config).await?;
    Ok(ranked.into_iter().map(|r| r.id).collect())
}

/// Rank three-band candidates by their distance to `target`, using the
/// distance formula selected in `config`.
pub async fn rank_by_target_color(
    sampler: Arc<dyn ColorSampler>,
    candidates: &[Candidate],
    target: [u32; COLOR_CHANNEL_COUNT],
    config: &RankingConfig,
) -> Result<Vec<CandidateId>> {
    let mode = ScoringMode::TargetColor {
        target,
        formula: config.distance,
    };
    let ranked = run_ranking(sampler, candidates, &mode, config).await?;
    Ok(ranked.into_iter().map(|r| r.id).collect())
}
