//! Host settings
//!
//! Persisted as JSON next to the binary's working directory. Missing fields
//! fall back to their defaults.

use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAME_RATE;
use crate::error::BallError;
use crate::sim::{Arena, Ball};

/// Default settings file name
pub const SETTINGS_FILE: &str = "bouncing-ball.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play area bounds
    pub arena: Arena,
    /// Target frames per second for the host loop
    pub frame_rate: u32,
    /// Number of frames to run before exiting
    pub frames: u32,
    /// Reject balls with negative or non-finite extents
    pub validate: bool,
    /// Starting ball
    pub ball: Ball,
    /// When set, replaces `ball` with a randomly spawned one
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            frames: 300,
            validate: true,
            ball: Ball::default().with_velocity(150.0, 220.0),
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings, rejecting arenas with negative or non-finite bounds
    pub fn from_json(json: &str) -> Result<Self, BallError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.arena.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, BallError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Ball the host should start with (seeded spawn if a seed is set)
    pub fn initial_ball(&self) -> Result<Ball, BallError> {
        match self.seed {
            Some(seed) => Ball::spawn(&mut Pcg32::seed_from_u64(seed), &self.arena),
            None => Ok(self.ball),
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BallError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bouncing-ball-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "frame_rate": 60 }"#).unwrap();
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.arena, Arena::default());
        assert_eq!(settings.frames, 300);
        assert!(settings.validate);
    }

    #[test]
    fn test_ball_from_json() {
        let json = r#"{
            "ball": { "pos": [5.0, 6.0], "size": [10.0, 12.0], "vel": [1.0, -1.0] }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.ball, Ball::new(5.0, 6.0, 10.0, 12.0).with_velocity(1.0, -1.0));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(Settings::from_json("{ not json"), Err(BallError::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            frame_rate: 120,
            seed: Some(42),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let loaded = Settings::load(temp_path("does-not-exist"));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_initial_ball_seeded() {
        let settings = Settings {
            seed: Some(9),
            ..Default::default()
        };
        let a = settings.initial_ball().unwrap();
        assert_eq!(a, settings.initial_ball().unwrap());
        assert!(settings.arena.contains(&a));

        let unseeded = Settings::default();
        assert_eq!(unseeded.initial_ball().unwrap(), unseeded.ball);
    }

    #[test]
    fn test_overflowing_bound_rejected() {
        // 1e39 overflows f32 and parses as infinity
        let json = r#"{ "arena": { "bound_x": 1e39, "bound_y": 1280.0 }, "seed": 3 }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(BallError::InvalidBound { .. })
        ));

        let path = temp_path("infinite-arena");
        std::fs::write(&path, json).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, Settings::default());
        assert!(loaded.initial_ball().is_ok());
    }

    #[test]
    fn test_negative_bound_rejected() {
        let json = r#"{ "arena": { "bound_x": 720.0, "bound_y": -5.0 } }"#;
        assert!(Settings::from_json(json).is_err());
    }

    #[test]
    fn test_load_malformed_file_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ this is not json ]").unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, Settings::default());
    }
}
