//! # Configuration
//!
//! Centralizes the tunables with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.dashcard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerTuning;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    /// Minimum frame duration in milliseconds.
    pub frame_ms: Option<u64>,
    /// How long the correct/incorrect acknowledgment stays on screen.
    pub ack_dwell_ms: Option<u64>,
    pub starting_lives: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PhysicsConfig {
    pub gravity: Option<f32>,
    pub jump_impulse: Option<f32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FRAME_MS: u64 = 10;
pub const DEFAULT_ACK_DWELL_MS: u64 = 2000;
pub const DEFAULT_STARTING_LIVES: u8 = 3;
pub const DEFAULT_GRAVITY: f32 = -0.05;
pub const DEFAULT_JUMP_IMPULSE: f32 = 0.7;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub frame: Duration,
    pub ack_dwell: Duration,
    pub tuning: PlayerTuning,
    /// Seed for the hazard stream; `None` means derive one at session start.
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dashcard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dashcard").join("config.toml"))
}

/// Load config from `override_path` if given, otherwise
/// `~/.dashcard/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out template and
/// returns `DashConfig::default()`. A missing override path or a malformed
/// file is an error.
pub fn load_config(override_path: Option<&Path>) -> Result<DashConfig, ConfigError> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(DashConfig::default());
            }
        },
    };

    if override_path.is_none() && !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(DashConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: DashConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Dashcard Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [game]
# frame_ms = 10            # minimum frame duration
# ack_dwell_ms = 2000      # how long quiz feedback stays on screen
# starting_lives = 3

# [physics]
# gravity = -0.05          # per-tick downward acceleration (must be <= 0)
# jump_impulse = 0.7       # upward velocity granted by a jump (must be >= 0)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_seed` comes from `--seed` (None = not specified). Physics values are
/// clamped to their documented signs: gravity must pull down, a jump must
/// push up.
pub fn resolve(config: &DashConfig, cli_seed: Option<u64>) -> ResolvedConfig {
    let gravity = config.physics.gravity.unwrap_or(DEFAULT_GRAVITY);
    let gravity = if gravity > 0.0 {
        warn!(
            "configured gravity {} is positive, using {}",
            gravity, DEFAULT_GRAVITY
        );
        DEFAULT_GRAVITY
    } else {
        gravity
    };

    let jump_impulse = config.physics.jump_impulse.unwrap_or(DEFAULT_JUMP_IMPULSE);
    let jump_impulse = if jump_impulse < 0.0 {
        warn!(
            "configured jump_impulse {} is negative, using {}",
            jump_impulse, DEFAULT_JUMP_IMPULSE
        );
        DEFAULT_JUMP_IMPULSE
    } else {
        jump_impulse
    };

    ResolvedConfig {
        frame: Duration::from_millis(config.game.frame_ms.unwrap_or(DEFAULT_FRAME_MS)),
        ack_dwell: Duration::from_millis(config.game.ack_dwell_ms.unwrap_or(DEFAULT_ACK_DWELL_MS)),
        tuning: PlayerTuning {
            gravity,
            jump_impulse,
            starting_lives: config.game.starting_lives.unwrap_or(DEFAULT_STARTING_LIVES),
        },
        seed: cli_seed,
    }
}
