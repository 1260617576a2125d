//! Lunar Lander entry point
//!
//! Runs a headless session: the autopilot flies, draw calls go to a counting
//! renderer, and the outcome is logged. Set `RUST_LOG=info` to follow along.

fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    match session::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("lunar-lander: {}", e);
            ExitCode::FAILURE
        }
    }
}

mod session {
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use lunar_lander::renderer::{HeadlessRenderer, TextureRegistry};
    use lunar_lander::sim::Autopilot;
    use lunar_lander::{Game, LanderError, Settings};

    /// Target frame pacing
    const FRAME_INTERVAL: Duration = Duration::from_millis(16);

    pub fn run() -> Result<(), LanderError> {
        let settings = Settings::from_env()?;
        let seed = settings.seed.unwrap_or_else(clock_seed);

        let mut textures = TextureRegistry::new();
        let mut game = Game::new(&settings, seed, &mut textures)?;
        let mut input = Autopilot;
        let mut renderer = HeadlessRenderer::default();

        let mut previous = Instant::now();
        while game.is_running() {
            std::thread::sleep(FRAME_INTERVAL);
            let now = Instant::now();
            let dt = now.duration_since(previous).as_secs_f32();
            previous = now;

            game.frame(dt, &mut input, &mut renderer);
        }

        log::info!(
            "Session over: {:?} after {} ticks, {} frames",
            game.state.phase,
            game.state.time_ticks,
            renderer.frames
        );
        Ok(())
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}
