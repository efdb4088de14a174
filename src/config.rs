use configparser::ini::Ini;
use log::{info, warn};
use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Mutex;

pub const CONFIG_INI_PATH: &str = "dancegraph.ini";

// --- Gameplay Constants ---
/// Symmetric hit window in seconds around a note boundary.
pub const TOLERANCE: f64 = 0.15;
/// Seconds of inactivity after which the player is hidden.
pub const DEATH_DELAY: f64 = 20.0;
/// Time to select track/difficulty when joining mid-game.
pub const JOIN_DELAY: f64 = 5.0;
/// Streak distance between two milestone popups.
pub const STREAK_MILESTONE_STEP: u32 = 10;
/// Score a flawless clear normalizes to, on any difficulty.
pub const MAX_NORMALIZED_SCORE: f64 = 10000.0;

// Draw range relative to playback time.
pub const VIEW_PAST: f64 = -0.4;
pub const VIEW_FUTURE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Seconds subtracted from the playback clock before matching input.
    pub controller_delay: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { controller_delay: 0.0 }
    }
}

impl Config {
    /// Reads `[audio] controller_delay` from INI text. Unknown or malformed
    /// values keep their defaults.
    pub fn from_ini_str(text: &str) -> Self {
        let mut conf = Ini::new();
        if let Err(e) = conf.read(text.to_string()) {
            warn!("Failed to parse config: {}", e);
            return Self::default();
        }
        Self::from_ini(&conf)
    }

    fn from_ini(conf: &Ini) -> Self {
        let mut config = Self::default();
        match conf.getfloat("audio", "controller_delay") {
            Ok(Some(delay)) if delay.is_finite() => config.controller_delay = delay,
            Ok(Some(delay)) => warn!("Ignoring non-finite controller_delay {}", delay),
            Ok(None) => {}
            Err(e) => warn!("Invalid controller_delay: {}", e),
        }
        config
    }
}

// Global static for the current configuration.
static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

/// Loads the configuration from `path` into the global slot. A missing or
/// unreadable file leaves the defaults in place.
pub fn load(path: &Path) -> Config {
    let loaded = if path.exists() {
        let mut conf = Ini::new();
        match conf.load(path) {
            Ok(_) => Config::from_ini(&conf),
            Err(e) => {
                warn!("Failed to load '{}': {}, using defaults.", path.display(), e);
                Config::default()
            }
        }
    } else {
        info!("Config '{}' not found, using defaults.", path.display());
        Config::default()
    };

    let mut current = CONFIG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *current = loaded;
    loaded
}

/// Returns a copy of the currently loaded configuration.
pub fn get() -> Config {
    *CONFIG.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
