pub mod aggregator;
pub mod tally;
pub mod types;

pub use aggregator::compute_statistics;
pub use types::{AggregateStatistics, MotmStanding, RatingStanding, ScorerStanding, TeamRecord};
