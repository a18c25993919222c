// Game layer: fight tuning, fighters, round flow and the leaderboard

pub mod config;
pub mod fighters;
pub mod leaderboard;
pub mod round;

pub use config::{ConfigError, FightConfig};
pub use fighters::Fighter;
pub use leaderboard::{JsonLeaderboard, LeaderboardEntry, LeaderboardStore, MemoryLeaderboard};
pub use round::{FrameInput, FrameOutcome, Round, RoundResult};
