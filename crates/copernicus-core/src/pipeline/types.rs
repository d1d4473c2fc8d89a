use crate::sample::{CandidateId, DistanceScore};

/// Ranking stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankingStage {
    Sampling,
    Ranking,
}

impl std::fmt::Display for RankingStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sampling => write!(f, "Sampling bands"),
            Self::Ranking => write!(f, "Ranking"),
        }
    }
}

/// A candidate and its score, in ranked position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedCandidate {
    pub id: CandidateId,
    pub score: DistanceScore,
}

/// Thread-safe progress reporting for a ranking run.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items in
    /// this stage (band samples, candidates), if known.
    fn begin_stage(&self, _stage: RankingStage, _total_items: Option<usize>) {}

    /// Work items completed so far within the current stage.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
