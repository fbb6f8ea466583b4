//! Grid Snake entry point
//!
//! Headless demo: the autopilot plays a few rounds in real time while the
//! board and results go to the log (`RUST_LOG=debug` shows every frame).

use std::path::Path;
use std::thread;
use std::time::Instant;

use grid_snake::autopilot::Autopilot;
use grid_snake::input::{InputRouter, Key};
use grid_snake::render;
use grid_snake::scheduler::Scheduler;
use grid_snake::{JsonScoreStore, Settings, SimulationEngine};

fn main() {
    env_logger::init();
    log::info!("Grid Snake (headless) starting...");

    let settings = Settings::load(Path::new(Settings::DEFAULT_FILE));
    let store = JsonScoreStore::new(&settings.score_file);
    let mut engine = SimulationEngine::new(&settings, store);
    let mut scheduler = Scheduler::from_settings(&settings);
    let router = InputRouter::new();
    let autopilot = Autopilot::new();

    let mut rounds = 0;
    router.apply(Key::Space, &mut engine);
    let mut last_time = Instant::now();

    while rounds < settings.demo_rounds {
        thread::sleep(scheduler.interval());

        let now = Instant::now();
        let game_over =
            scheduler.update_with(&mut engine, now.duration_since(last_time), |engine| {
                autopilot.steer(engine)
            });
        last_time = now;
        log::debug!("\n{}", render::board(&engine.snapshot()));

        let finished = if let Some(over) = game_over {
            log::info!("{}", over.message(engine.mode()));
            true
        } else if engine.round().ticks >= settings.demo_max_ticks {
            log::info!(
                "Round cut short after {} ticks (P1 {}, P2 {})",
                engine.round().ticks,
                engine.round().score1,
                engine.round().score2
            );
            engine.stop();
            true
        } else {
            false
        };

        if finished {
            scheduler.cancel();
            engine.reset(engine.mode());
            rounds += 1;
            log::info!("{}", render::score_line(&engine.snapshot()));
            router.apply(Key::Space, &mut engine);
        }
    }

    log::info!("Done. High score: {}", engine.high_score());
}
