pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{rank_by_deviation, rank_by_target_color, run_ranking, run_ranking_reported};
pub use types::{NoOpReporter, ProgressReporter, RankedCandidate, RankingStage};
