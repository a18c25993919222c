// Round controller: fixed-order frame updates, hit resolution and knockout

use log::{debug, info};

use crate::engine::input::InputSnapshot;
use crate::game::config::FightConfig;
use crate::game::fighters::Fighter;
use crate::game::leaderboard::{LeaderboardEntry, LeaderboardStore};

/// Result of simulating one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nobody is down, keep going
    Continue,
    /// A fighter reached zero health. Indices into `Round::fighters`.
    KnockOut { winner: usize, loser: usize },
}

/// How a round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    Victory {
        winner: String,
        leaderboard: Vec<LeaderboardEntry>,
    },
    /// Aborted before a knockout; the leaderboard was not touched
    Cancelled,
}

/// Per-frame input fed to [`Round::run`]
#[derive(Debug, Clone)]
pub enum FrameInput {
    Keys(InputSnapshot),
    Cancel,
}

/// Simulation context for one fight
///
/// Created at round start and dropped at round end; nothing but the
/// leaderboard outlives it.
#[derive(Debug, Clone)]
pub struct Round {
    config: FightConfig,
    fighters: [Fighter; 2],
    frame: u64,
    knockout: Option<FrameOutcome>,
}

impl Round {
    /// Start a round with the two standard fighter slots
    pub fn new(config: FightConfig, names: [&str; 2]) -> Self {
        let fighters = [
            Fighter::player_one(names[0], &config),
            Fighter::player_two(names[1], &config),
        ];
        Self::with_fighters(config, fighters)
    }

    /// Start a round with pre-built fighters
    pub fn with_fighters(config: FightConfig, fighters: [Fighter; 2]) -> Self {
        info!("Round start: {} vs {}", fighters[0].name, fighters[1].name);
        Self {
            config,
            fighters,
            frame: 0,
            knockout: None,
        }
    }

    pub fn config(&self) -> &FightConfig {
        &self.config
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulate one frame.
    ///
    /// Order: each fighter moves, falls, dodges and regenerates; then fighter
    /// 0 attacks 1 and 1 attacks 0; then skills in the same order; then the
    /// knockout check. Damage lands immediately, so both fighters can trade
    /// hits in the same frame. Once a knockout has been reported further
    /// calls return it again without simulating.
    pub fn step(&mut self, input: &InputSnapshot) -> FrameOutcome {
        if let Some(outcome) = self.knockout {
            return outcome;
        }

        let cfg = &self.config;
        self.frame += 1;

        for fighter in &mut self.fighters {
            fighter.handle_movement(input, cfg);
            fighter.apply_gravity(cfg);
            fighter.update_dodge(input, cfg);
            fighter.regenerate_energy(cfg);
        }

        let [first, second] = &mut self.fighters;

        if first.attempt_attack(second, input, cfg) {
            second.take_damage(cfg.attack_damage);
            debug!("{} hits {} ({} hp left)", first.name, second.name, second.health());
        }
        if second.attempt_attack(first, input, cfg) {
            first.take_damage(cfg.attack_damage);
            debug!("{} hits {} ({} hp left)", second.name, first.name, first.health());
        }

        if first.attempt_special_skill(second, input, cfg) {
            second.take_damage(cfg.skill_damage);
            debug!(
                "{} lands a skill on {} ({} hp left)",
                first.name, second.name, second.health()
            );
        }
        if second.attempt_special_skill(first, input, cfg) {
            first.take_damage(cfg.skill_damage);
            debug!(
                "{} lands a skill on {} ({} hp left)",
                second.name, first.name, first.health()
            );
        }

        // Fighter 0 is checked first, so a double knockout goes to fighter 1
        let outcome = match self.fighters.iter().position(Fighter::is_knocked_out) {
            Some(loser) => FrameOutcome::KnockOut {
                winner: 1 - loser,
                loser,
            },
            None => FrameOutcome::Continue,
        };

        if let FrameOutcome::KnockOut { winner, loser } = outcome {
            info!(
                "{} knocks out {} on frame {}",
                self.fighters[winner].name, self.fighters[loser].name, self.frame
            );
            self.knockout = Some(outcome);
        }

        outcome
    }

    /// Close the round after a knockout and record the win
    pub fn finish(self, store: &mut dyn LeaderboardStore) -> RoundResult {
        let Some(FrameOutcome::KnockOut { winner, .. }) = self.knockout else {
            return self.cancel();
        };

        let [first, second] = self.fighters;
        let winner = if winner == 0 { first.name } else { second.name };
        let leaderboard = store.record_win(&winner);

        RoundResult::Victory {
            winner,
            leaderboard,
        }
    }

    /// Abandon the round without a winner
    pub fn cancel(self) -> RoundResult {
        info!("Round cancelled on frame {}", self.frame);
        RoundResult::Cancelled
    }

    /// Drive the round from a stream of per-frame inputs.
    ///
    /// Stops at the first knockout or cancel. Running out of input before
    /// either is treated as a cancel.
    pub fn run<I>(mut self, inputs: I, store: &mut dyn LeaderboardStore) -> RoundResult
    where
        I: IntoIterator<Item = FrameInput>,
    {
        for input in inputs {
            let keys = match input {
                FrameInput::Keys(keys) => keys,
                FrameInput::Cancel => return self.cancel(),
            };

            if let FrameOutcome::KnockOut { .. } = self.step(&keys) {
                return self.finish(store);
            }
        }

        self.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::leaderboard::MemoryLeaderboard;
    use winit::keyboard::KeyCode;

    const P1_ATTACK: KeyCode = KeyCode::KeyF;
    const P1_SKILL: KeyCode = KeyCode::KeyH;
    const P2_ATTACK: KeyCode = KeyCode::KeyK;
    const P2_DODGE: KeyCode = KeyCode::KeyL;
    const P2_SKILL: KeyCode = KeyCode::Semicolon;

    fn keys(keys: &[KeyCode]) -> InputSnapshot {
        InputSnapshot::from_keys(keys.iter().copied())
    }

    /// Fighters facing each other with a 40 unit gap, inside attack range
    fn close_round() -> Round {
        let cfg = FightConfig::default();
        let mut p1 = Fighter::player_one("Ryu", &cfg);
        let mut p2 = Fighter::player_two("Ken", &cfg);
        p1.body.rect.set_x(400);
        p2.body.rect.set_x(500);
        Round::with_fighters(cfg, [p1, p2])
    }

    fn assert_invariants(round: &Round) {
        let cfg = round.config();
        for fighter in round.fighters() {
            assert!((0..=cfg.max_health).contains(&fighter.health()));
            assert!(fighter.energy() >= 0.0 && fighter.energy() <= cfg.max_energy);
            assert!(fighter.rect().left() >= 0);
            assert!(fighter.rect().right() <= cfg.arena_width);
        }
    }

    #[test]
    fn test_new_round_uses_standard_slots() {
        let round = Round::new(FightConfig::default(), ["Ryu", "Ken"]);
        assert_eq!(round.fighters()[0].name, "Ryu");
        assert!(round.fighters()[0].facing_right);
        assert!(!round.fighters()[1].facing_right);
        assert_eq!(round.frame(), 0);
    }

    #[test]
    fn test_idle_frame_continues() {
        let mut round = Round::new(FightConfig::default(), ["Ryu", "Ken"]);
        assert_eq!(round.step(&InputSnapshot::empty()), FrameOutcome::Continue);
        assert_eq!(round.frame(), 1);
    }

    #[test]
    fn test_basic_attack_deals_damage() {
        let mut round = close_round();
        round.step(&keys(&[P1_ATTACK]));

        assert_eq!(round.fighters()[1].health(), 88);
        assert_eq!(
            round.fighters()[0].attack_cooldown(),
            round.config().attack_cooldown
        );
    }

    #[test]
    fn test_fighters_trade_hits_in_same_frame() {
        let mut round = close_round();
        round.step(&keys(&[P1_ATTACK, P2_ATTACK]));

        assert_eq!(round.fighters()[0].health(), 88);
        assert_eq!(round.fighters()[1].health(), 88);
    }

    #[test]
    fn test_skill_then_blocked_followup() {
        let mut round = close_round();
        round.step(&keys(&[P2_SKILL]));

        let caster = &round.fighters()[1];
        assert_eq!(round.fighters()[0].health(), 75);
        assert_eq!(caster.skill_cooldown(), round.config().skill_cooldown);
        // 100 energy regenerates nothing at cap, then 50 is spent
        assert!((caster.energy() - 50.0).abs() < 1e-4);

        round.step(&keys(&[P2_SKILL]));
        let caster = &round.fighters()[1];
        assert_eq!(round.fighters()[0].health(), 75);
        assert!((caster.energy() - 50.3).abs() < 1e-4);
    }

    #[test]
    fn test_dodging_fighter_takes_no_damage() {
        let mut round = close_round();
        round.step(&keys(&[P2_DODGE]));
        assert!(round.fighters()[1].is_dodging());

        // P2 dashes left into P1 while invulnerable
        round.step(&keys(&[P1_ATTACK, P1_SKILL]));
        assert!(round.fighters()[1].is_dodging());
        assert_eq!(round.fighters()[1].health(), 100);
    }

    #[test]
    fn test_dodge_on_landing_frame() {
        let mut round = Round::new(FightConfig::default(), ["Ryu", "Ken"]);
        round.step(&keys(&[KeyCode::KeyW]));
        assert!(!round.fighters()[0].on_ground());

        let dodge = keys(&[KeyCode::KeyG]);
        for _ in 0..100 {
            round.step(&dodge);
            if round.fighters()[0].on_ground() {
                break;
            }
            assert!(!round.fighters()[0].is_dodging());
        }

        // Gravity lands the fighter before the dodge checks for ground
        assert!(round.fighters()[0].on_ground());
        assert!(round.fighters()[0].is_dodging());
    }

    #[test]
    fn test_knockout_by_skill_records_winner() {
        let mut round = close_round();
        round.fighters[1].take_damage(90);

        let outcome = round.step(&keys(&[P1_SKILL]));
        assert_eq!(outcome, FrameOutcome::KnockOut { winner: 0, loser: 1 });
        assert_eq!(round.fighters()[1].health(), 0);

        let mut store = MemoryLeaderboard::with_entries(vec![
            LeaderboardEntry::new("Ken", 4),
            LeaderboardEntry::new("Ryu", 4),
        ]);
        match round.finish(&mut store) {
            RoundResult::Victory {
                winner,
                leaderboard,
            } => {
                assert_eq!(winner, "Ryu");
                assert_eq!(leaderboard[0], LeaderboardEntry::new("Ryu", 5));
                assert_eq!(leaderboard[1], LeaderboardEntry::new("Ken", 4));
            }
            RoundResult::Cancelled => panic!("expected a victory"),
        }
    }

    #[test]
    fn test_double_knockout_goes_to_second_fighter() {
        let mut round = close_round();
        round.fighters[0].take_damage(95);
        round.fighters[1].take_damage(95);

        let outcome = round.step(&keys(&[P1_ATTACK, P2_ATTACK]));
        assert_eq!(outcome, FrameOutcome::KnockOut { winner: 1, loser: 0 });
    }

    #[test]
    fn test_step_after_knockout_is_frozen() {
        let mut round = close_round();
        round.fighters[1].take_damage(99);
        let outcome = round.step(&keys(&[P1_ATTACK]));
        let frame = round.frame();

        assert_eq!(round.step(&keys(&[P2_ATTACK])), outcome);
        assert_eq!(round.frame(), frame);
        assert_eq!(round.fighters()[0].health(), 100);
    }

    #[test]
    fn test_cancel_leaves_leaderboard_untouched() {
        let round = close_round();
        let mut store = MemoryLeaderboard::new();
        let inputs = vec![
            FrameInput::Keys(keys(&[P1_ATTACK])),
            FrameInput::Cancel,
            FrameInput::Keys(keys(&[P1_ATTACK])),
        ];

        assert_eq!(round.run(inputs, &mut store), RoundResult::Cancelled);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_finish_without_knockout_is_cancel() {
        let round = close_round();
        let mut store = MemoryLeaderboard::new();
        assert_eq!(round.finish(&mut store), RoundResult::Cancelled);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_run_until_knockout() {
        let round = close_round();
        let mut store = MemoryLeaderboard::new();

        // P1 holds attack; one hit every 21 frames, 9 hits to drop 100 hp
        let inputs = std::iter::repeat(FrameInput::Keys(keys(&[P1_ATTACK]))).take(1000);
        match round.run(inputs, &mut store) {
            RoundResult::Victory {
                winner,
                leaderboard,
            } => {
                assert_eq!(winner, "Ryu");
                assert_eq!(leaderboard, vec![LeaderboardEntry::new("Ryu", 1)]);
            }
            RoundResult::Cancelled => panic!("expected a victory"),
        }
    }

    #[test]
    fn test_run_out_of_input_cancels() {
        let round = close_round();
        let mut store = MemoryLeaderboard::new();
        let inputs = vec![FrameInput::Keys(InputSnapshot::empty()); 3];
        assert_eq!(round.run(inputs, &mut store), RoundResult::Cancelled);
    }

    #[test]
    fn test_invariants_hold_under_button_mashing() {
        let mut round = Round::new(FightConfig::default(), ["Ryu", "Ken"]);
        let patterns = [
            keys(&[KeyCode::KeyD, KeyCode::KeyW, P1_ATTACK]),
            keys(&[KeyCode::ArrowLeft, P2_DODGE, P2_SKILL]),
            keys(&[KeyCode::KeyA, KeyCode::KeyD, KeyCode::KeyG, P1_SKILL]),
            keys(&[KeyCode::ArrowRight, KeyCode::ArrowUp, P2_ATTACK]),
            InputSnapshot::empty(),
        ];

        for frame in 0..2000 {
            let outcome = round.step(&patterns[frame % patterns.len()]);
            assert_invariants(&round);
            if outcome != FrameOutcome::Continue {
                break;
            }
        }
    }
}
