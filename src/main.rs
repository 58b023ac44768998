//! Dog Jump headless driver
//!
//! Runs one session with a scripted tilt until the character falls out of
//! the world. An optional JSON config path may be passed as the first
//! argument.

use dog_jump::consts::FRAME_DT;
use dog_jump::sim::{GameEvent, World};
use dog_jump::{ConfigError, WorldConfig};

/// Give up after this many frames (10 minutes at 60 Hz)
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn load_config() -> Result<WorldConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => WorldConfig::load(path),
        None => Ok(WorldConfig::default()),
    }
}

fn main() {
    env_logger::init();
    log::info!("Dog Jump (headless) starting...");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Bad config: {}", e);
            std::process::exit(1);
        }
    };

    let mut world = match World::new(&config) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Can't build world: {}", e);
            std::process::exit(1);
        }
    };

    let sensor = world.accelerometer();
    let mut events: Vec<GameEvent> = Vec::new();
    let interval = config.sensor_interval_ms as f32 / 1000.0;
    let mut sensor_clock = 0.0;
    let mut sensor_due = 0.0;
    let mut frames = 0;
    while frames < MAX_FRAMES && !world.is_game_over() {
        // Slow side-to-side sway, sampled on the sensor's own schedule
        sensor_clock += FRAME_DT;
        while sensor_due <= sensor_clock {
            sensor.push_sample((sensor_due * 0.7).sin() * 0.4, 0.0, -1.0);
            sensor_due += interval;
        }

        world.update(FRAME_DT, &mut events);
        frames += 1;
    }

    let scrolls = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ScoreChanged(_)))
        .count();
    log::info!(
        "Session over after {} frames: score {:.0} ({} scroll events)",
        frames,
        world.score(),
        scrolls
    );
    println!("{:.0}", world.score());
}
