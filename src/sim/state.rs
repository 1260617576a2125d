//! Game state and platform layout
//!
//! Everything the simulation mutates lives in `GameState`, owned by the frame
//! driver and passed down by reference.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Outcome;
use super::entity::{Entity, PlayerTuning, Role};
use crate::renderer::SceneTextures;
use crate::settings::Settings;

/// Where the descent stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Falling; physics runs
    #[default]
    Descending,
    /// Touched a win platform; frozen
    Landed,
    /// Touched a death platform; frozen
    Crashed,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Descending
    }
}

impl From<Outcome> for GamePhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Landed => GamePhase::Landed,
            Outcome::Crashed => GamePhase::Crashed,
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Layout seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Physics ticks run so far
    pub time_ticks: u64,
    pub player: Entity,
    /// Platforms in left-to-right order; collision ties resolve in this order
    pub platforms: Vec<Entity>,
}

impl GameState {
    /// Create a fresh descent with a platform field generated from `seed`
    pub fn new(settings: &Settings, seed: u64, textures: &SceneTextures) -> Self {
        let platforms = generate_platforms(settings, seed, textures);
        Self::with_platforms(settings, seed, textures, platforms)
    }

    /// Create a descent over a hand-built platform field
    pub fn with_platforms(
        settings: &Settings,
        seed: u64,
        textures: &SceneTextures,
        platforms: Vec<Entity>,
    ) -> Self {
        Self {
            seed,
            phase: GamePhase::Descending,
            time_ticks: 0,
            player: Entity::player(PlayerTuning::from(settings), textures.ship),
            platforms,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Descending => None,
            GamePhase::Landed => Some(Outcome::Landed),
            GamePhase::Crashed => Some(Outcome::Crashed),
        }
    }
}

/// Lay out one row of platforms, centred on x = 0, one platform width apart
///
/// Heights are whole units drawn uniformly from the configured range and each
/// platform is a coin flip between win and death.
pub fn generate_platforms(settings: &Settings, seed: u64, textures: &SceneTextures) -> Vec<Entity> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let count = settings.platform_count;
    let first_x = -(count.saturating_sub(1) as f32) * settings.platform_size / 2.0;

    let platforms: Vec<Entity> = (0..count)
        .map(|i| {
            let y = rng.random_range(settings.platform_min_y..=settings.platform_max_y) as f32;
            let role = if rng.random_bool(0.5) {
                Role::WinPlatform
            } else {
                Role::DeathPlatform
            };
            let x = first_x + i as f32 * settings.platform_size;
            Entity::platform(role, Vec3::new(x, y, 0.0), settings.platform_size, textures.for_role(role))
        })
        .collect();

    log::debug!(
        "Platform layout (seed {}): {}",
        seed,
        platforms
            .iter()
            .map(|p| format!(
                "{}@({:.0},{:.0})",
                if p.role() == Role::WinPlatform { "win" } else { "death" },
                p.position.x,
                p.position.y
            ))
            .collect::<Vec<_>>()
            .join(" ")
    );

    platforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::TextureId;

    fn textures() -> SceneTextures {
        SceneTextures {
            ship: TextureId(1),
            win_platform: TextureId(2),
            death_platform: TextureId(3),
            font: TextureId(4),
        }
    }

    #[test]
    fn new_state_has_one_player_and_full_field() {
        let state = GameState::new(&Settings::default(), 42, &textures());
        assert_eq!(state.player.role(), Role::Player);
        assert_eq!(state.platforms.len(), PLATFORM_COUNT);
        assert!(state.platforms.iter().all(|p| p.role().is_platform()));
        assert_eq!(state.phase, GamePhase::Descending);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn platforms_span_the_row() {
        let platforms = generate_platforms(&Settings::default(), 7, &textures());
        let xs: Vec<f32> = platforms.iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0]);

        for p in &platforms {
            let y = p.position.y;
            assert!(y >= PLATFORM_MIN_Y as f32 && y <= PLATFORM_MAX_Y as f32);
            assert_eq!(y.fract(), 0.0);
            let expected = match p.role() {
                Role::WinPlatform => TextureId(2),
                _ => TextureId(3),
            };
            assert_eq!(p.texture, expected);
        }
    }

    #[test]
    fn layout_is_reproducible_from_seed() {
        let settings = Settings::default();
        let a = generate_platforms(&settings, 1234, &textures());
        let b = generate_platforms(&settings, 1234, &textures());
        assert_eq!(a, b);
    }

    #[test]
    fn seeds_produce_both_roles() {
        let settings = Settings::default();
        let roles: Vec<Role> = (0..20)
            .flat_map(|seed| generate_platforms(&settings, seed, &textures()))
            .map(|p| p.role())
            .collect();
        assert!(roles.contains(&Role::WinPlatform));
        assert!(roles.contains(&Role::DeathPlatform));
    }

    #[test]
    fn phase_from_outcome() {
        assert_eq!(GamePhase::from(Outcome::Landed), GamePhase::Landed);
        assert_eq!(GamePhase::from(Outcome::Crashed), GamePhase::Crashed);
        assert!(GamePhase::Landed.is_terminal());
        assert!(!GamePhase::Descending.is_terminal());
    }
}
