use crate::sample::{CandidateId, DistanceScore};

/// Order `(candidate, score)` pairs by ascending score.
///
/// The sort key is `(score, input position)`, so candidates with equal scores
/// keep their input order and none is dropped.
pub fn rank_scored(scored: &[(CandidateId, DistanceScore)]) -> Vec<(CandidateId, DistanceScore)> {
    let mut order: Vec<(usize, CandidateId, DistanceScore)> = scored
        .iter()
        .enumerate()
        .map(|(i, &(id, score))| (i, id, score))
        .collect();
    order.sort_by_key(|&(i, _, score)| (score, i));
    order.into_iter().map(|(_, id, score)| (id, score)).collect()
}

/// Candidate identifiers by ascending score.
pub fn rank(scored: &[(CandidateId, DistanceScore)]) -> Vec<CandidateId> {
    rank_scored(scored).into_iter().map(|(id, _)| id).collect()
}
