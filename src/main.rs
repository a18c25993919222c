use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use rusted_fighter::engine::game_loop::FrameClock;
use rusted_fighter::engine::input::InputManager;
use rusted_fighter::game::leaderboard::{top, VICTORY_SCREEN_ROWS};
use rusted_fighter::game::{FightConfig, FrameOutcome, JsonLeaderboard, Round, RoundResult};

const CONFIG_ENV: &str = "FIGHTER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "fighter.toml";
const LEADERBOARD_ENV: &str = "FIGHTER_LEADERBOARD";
const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.json";

/// Refresh the title bar status every N frames
const STATUS_INTERVAL: u64 = 6;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Rusted Fighter...");

    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let config = FightConfig::load(&config_path);

    let leaderboard_path =
        std::env::var(LEADERBOARD_ENV).unwrap_or_else(|_| DEFAULT_LEADERBOARD_PATH.into());
    let mut leaderboard = JsonLeaderboard::new(leaderboard_path);

    // Name entry lives outside the simulation; take names from the command line
    let mut args = std::env::args().skip(1);
    let p1 = args.next().unwrap_or_else(|| "Player 1".to_string());
    let p2 = args.next().unwrap_or_else(|| "Player 2".to_string());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Fighter")
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.arena_width as u32,
            config.arena_height as u32,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut clock = FrameClock::new(config.target_fps);
    let mut input = InputManager::new();
    let mut round = Some(Round::new(config, [p1.as_str(), p2.as_str()]));

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                input.request_cancel();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => input.process_keyboard_event(&event),
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => input.release_all(),
            Event::AboutToWait => {
                if input.cancel_requested() {
                    if let Some(active) = round.take() {
                        report(active.cancel());
                    }
                    elwt.exit();
                    return;
                }

                let Some(active) = round.as_mut() else {
                    elwt.exit();
                    return;
                };

                let ticks = clock.begin_frame();
                let knocked_out = (0..ticks)
                    .any(|_| active.step(input.snapshot()) != FrameOutcome::Continue);

                if ticks > 0 && active.frame() % STATUS_INTERVAL == 0 {
                    window.set_title(&status_line(active, clock.fps()));
                }

                if knocked_out {
                    if let Some(finished) = round.take() {
                        report(finished.finish(&mut leaderboard));
                    }
                    elwt.exit();
                    return;
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(clock.next_tick_at()));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// One-line HUD shown in the title bar
fn status_line(round: &Round, fps: f32) -> String {
    let cfg = round.config();
    let fighters = round
        .fighters()
        .iter()
        .map(|fighter| {
            let mut line = format!(
                "{}: {} HP ({:.0}%), {:.0}% energy",
                fighter.name,
                fighter.health(),
                fighter.health_ratio(cfg) * 100.0,
                fighter.energy_ratio(cfg) * 100.0
            );
            if let Some(secs) = fighter.skill_cooldown_secs(cfg.target_fps) {
                line.push_str(&format!(", skill in {secs}s"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("  |  ");
    format!("{fighters}  |  {fps:.0} FPS")
}

fn report(result: RoundResult) {
    match result {
        RoundResult::Victory {
            winner,
            leaderboard,
        } => {
            info!("{winner} wins!");
            if leaderboard.is_empty() {
                info!("No wins recorded yet");
            }
            for (rank, entry) in top(&leaderboard, VICTORY_SCREEN_ROWS).iter().enumerate() {
                info!("{}. {} - {} wins", rank + 1, entry.name, entry.wins);
            }
        }
        RoundResult::Cancelled => info!("Round cancelled, no result recorded"),
    }
}
