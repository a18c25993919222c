// Persistent win counts keyed by fighter name
//
// The store is only touched at round boundaries. Every failure is recovered:
// unreadable data reads as an empty board, failed writes are logged and
// dropped, and the in-memory result is always returned.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Number of entries shown on the victory screen
pub const VICTORY_SCREEN_ROWS: usize = 5;

/// Leaderboard persistence errors
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed leaderboard data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    #[serde(default)]
    pub wins: u32,
}

impl LeaderboardEntry {
    pub fn new(name: &str, wins: u32) -> Self {
        Self {
            name: name.to_string(),
            wins,
        }
    }
}

/// Storage capability consumed at the end of a round
pub trait LeaderboardStore {
    /// All entries, most wins first. Empty when nothing usable is stored.
    fn load(&self) -> Vec<LeaderboardEntry>;

    /// Add one win for `name` (inserting it at 1 if new), persist, and
    /// return the updated board sorted by wins.
    fn record_win(&mut self, name: &str) -> Vec<LeaderboardEntry>;
}

/// Sort descending by wins. Stable, so ties keep their stored order.
pub fn sort_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.wins.cmp(&a.wins));
}

/// The first `n` rows of an already sorted board
pub fn top(entries: &[LeaderboardEntry], n: usize) -> &[LeaderboardEntry] {
    &entries[..n.min(entries.len())]
}

fn add_win(entries: &mut Vec<LeaderboardEntry>, name: &str) {
    match entries.iter_mut().find(|entry| entry.name == name) {
        Some(entry) => entry.wins = entry.wins.saturating_add(1),
        None => entries.push(LeaderboardEntry::new(name, 1)),
    }
    sort_entries(entries);
}

/// Leaderboard stored as a JSON array of `{ "name", "wins" }` objects
#[derive(Debug, Clone)]
pub struct JsonLeaderboard {
    path: PathBuf,
}

impl JsonLeaderboard {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl LeaderboardStore for JsonLeaderboard {
    fn load(&self) -> Vec<LeaderboardEntry> {
        let mut entries = match self.read() {
            Ok(entries) => entries,
            Err(LeaderboardError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard at {}, starting empty", self.path.display());
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Ignoring unreadable leaderboard {}: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        };
        sort_entries(&mut entries);
        entries
    }

    fn record_win(&mut self, name: &str) -> Vec<LeaderboardEntry> {
        let mut entries = self.load();
        add_win(&mut entries, name);

        match self.write(&entries) {
            Ok(()) => info!("Recorded win for {name} in {}", self.path.display()),
            Err(e) => warn!(
                "Failed to save leaderboard {}: {e}",
                self.path.display()
            ),
        }

        entries
    }
}

/// Leaderboard kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryLeaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl MemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        sort_entries(&mut entries);
        Self { entries }
    }
}

impl LeaderboardStore for MemoryLeaderboard {
    fn load(&self) -> Vec<LeaderboardEntry> {
        self.entries.clone()
    }

    fn record_win(&mut self, name: &str) -> Vec<LeaderboardEntry> {
        add_win(&mut self.entries, name);
        self.entries.clone()
    }
}
