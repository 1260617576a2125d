//! Frame driver
//!
//! One `frame` call is one pass of the loop: poll input, spend banked time in
//! fixed ticks, draw.

use glam::Vec3;

use crate::error::AssetError;
use crate::input::{InputSource, apply_controls};
use crate::renderer::{BACKGROUND, Renderer, SceneTextures, TextureLoader, text};
use crate::settings::Settings;
use crate::sim::{FixedTimestep, GamePhase, GameState, step_frame};

const TEXT_SIZE: f32 = 0.25;

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    timestep: FixedTimestep,
    textures: SceneTextures,
    running: bool,
}

impl Game {
    /// Load textures and lay out a fresh descent
    pub fn new(
        settings: &Settings,
        seed: u64,
        loader: &mut dyn TextureLoader,
    ) -> Result<Self, AssetError> {
        let textures = SceneTextures::load(loader, &settings.assets)?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self::from_state(
            GameState::new(settings, seed, &textures),
            FixedTimestep::from_settings(settings),
            textures,
        ))
    }

    pub fn from_state(state: GameState, timestep: FixedTimestep, textures: SceneTextures) -> Self {
        Self {
            state,
            timestep,
            textures,
            running: true,
        }
    }

    /// False once the input source has asked to quit
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame; returns the number of physics ticks it ran
    pub fn frame(
        &mut self,
        dt: f32,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> u32 {
        let controls = input.poll(&self.state);
        if controls.quit {
            self.running = false;
        }
        apply_controls(&mut self.state.player, controls);

        let ticks = step_frame(&mut self.state, &mut self.timestep, dt);
        self.render(renderer);
        ticks
    }

    /// Draw the scene and, once decided, the outcome banner
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.clear(BACKGROUND);

        self.state.player.render(renderer);
        for platform in &self.state.platforms {
            platform.render(renderer);
        }

        let banner = match self.state.phase {
            GamePhase::Descending => None,
            GamePhase::Landed => Some(("YOU LANDED SAFELY!", 0.0, Vec3::new(-1.75, 2.0, 0.0))),
            GamePhase::Crashed => Some(("YOU CRASHED!", 0.01, Vec3::new(-1.25, 2.0, 0.0))),
        };
        if let Some((message, spacing, position)) = banner {
            text::draw_text(renderer, self.textures.font, message, TEXT_SIZE, spacing, position);
        }

        renderer.present();
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::consts::*;
    use crate::error::AssetError;
    use crate::input::{Controls, Scripted};
    use crate::renderer::{HeadlessRenderer, TextureId, TextureRegistry};
    use crate::sim::{Autopilot, Entity, Role};

    fn game_with(platforms: Vec<Entity>) -> Game {
        let settings = Settings::default();
        let textures = SceneTextures {
            ship: TextureId(1),
            win_platform: TextureId(2),
            death_platform: TextureId(3),
            font: TextureId(4),
        };
        Game::from_state(
            GameState::with_platforms(&settings, 0, &textures, platforms),
            FixedTimestep::from_settings(&settings),
            textures,
        )
    }

    #[test]
    fn frame_draws_every_entity() {
        let mut registry = TextureRegistry::new();
        let mut game = Game::new(&Settings::default(), 5, &mut registry).unwrap();
        let mut renderer = HeadlessRenderer::default();
        let mut input = Scripted::default();

        let ticks = game.frame(FIXED_TIMESTEP * 2.5, &mut input, &mut renderer);
        assert_eq!(ticks, 2);
        assert_eq!(renderer.draw_calls, 1 + PLATFORM_COUNT);
        assert_eq!(renderer.frames, 1);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn slow_frames_run_zero_ticks_but_still_render() {
        let mut game = game_with(Vec::new());
        let mut renderer = HeadlessRenderer::default();
        let mut input = Scripted::default();

        assert_eq!(game.frame(FIXED_TIMESTEP * 0.4, &mut input, &mut renderer), 0);
        assert_eq!(renderer.frames, 1);
        assert_eq!(game.state.time_ticks, 0);
    }

    #[test]
    fn crash_shows_banner_in_font_texture() {
        let mut game = game_with(vec![Entity::platform(
            Role::DeathPlatform,
            Vec3::new(0.0, 2.0, 0.0),
            PLATFORM_SIZE,
            TextureId(3),
        )]);
        game.state.player.position.y = 2.95;
        let mut renderer = HeadlessRenderer::default();
        let mut input = Scripted::default();

        for _ in 0..30 {
            game.frame(FIXED_TIMESTEP, &mut input, &mut renderer);
        }
        assert_eq!(game.state.phase, GamePhase::Crashed);
        assert_eq!(renderer.textures.last(), Some(&TextureId(4)));
        assert_eq!(renderer.last_vertices.len(), "YOU CRASHED!".len() * 6);
        // Player + platform + banner
        assert_eq!(renderer.draw_calls, 3);
    }

    #[test]
    fn no_banner_while_descending() {
        let game = game_with(Vec::new());
        let mut renderer = HeadlessRenderer::default();
        game.render(&mut renderer);
        assert!(!renderer.textures.contains(&TextureId(4)));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut game = game_with(Vec::new());
        let mut renderer = HeadlessRenderer::default();
        let mut input = Scripted::new(vec![Controls {
            quit: true,
            ..Default::default()
        }]);
        game.frame(0.0, &mut input, &mut renderer);
        assert!(!game.is_running());
    }

    #[test]
    fn autopilot_session_ends_and_quits() {
        let mut registry = TextureRegistry::new();
        let mut game = Game::new(&Settings::default(), 2024, &mut registry).unwrap();
        let mut renderer = HeadlessRenderer::default();
        let mut input = Autopilot;

        let mut frames = 0;
        while game.is_running() && frames < 10_000 {
            game.frame(1.0 / 60.0, &mut input, &mut renderer);
            frames += 1;
        }
        assert!(game.state.is_over());
        assert!(!game.is_running());
    }

    #[test]
    fn missing_asset_aborts_startup() {
        let settings = Settings {
            assets: crate::settings::AssetPaths {
                font: Path::new("").to_path_buf(),
                ..Default::default()
            },
            ..Settings::default()
        };
        let mut registry = TextureRegistry::new();
        let err = Game::new(&settings, 1, &mut registry).err();
        assert!(matches!(err, Some(AssetError::EmptyPath)));
    }
}
