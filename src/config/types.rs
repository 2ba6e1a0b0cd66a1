// termpong configuration types
// Gameplay constants (speeds, win score) are fixed; only presentation and
// controls are configurable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Player paddle controls (any listed key works)
    pub paddle_up: Vec<String>,
    pub paddle_down: Vec<String>,

    // Game over prompt
    pub restart: Vec<String>,
    pub decline: Vec<String>,

    // Leave immediately, in any state (Ctrl+C always works too)
    pub quit: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: keys(&["W", "Up"]),
            paddle_down: keys(&["S", "Down"]),
            restart: keys(&["Y", "Enter"]),
            decline: keys(&["N", "Esc"]),
            quit: keys(&["Q"]),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    // How long a key press counts as held on terminals that don't report releases
    pub hold_window_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            hold_window_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Simulation and redraw rate
    pub target_fps: u32,

    // Colors as RGB values 0-255
    pub foreground: [u8; 3],
    pub background: [u8; 3],
    pub game_over_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            foreground: [255, 255, 255], // White
            background: [0, 0, 0],       // Black
            game_over_color: [255, 0, 0], // Red
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioBackend {
    /// Terminal bell
    Bell,
    /// Synthesized sine beep (requires the `tone` feature)
    Tone,
    Off,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioConfig {
    pub backend: AudioBackend,

    // Beep parameters for the tone backend
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            backend: AudioBackend::Bell,
            frequency_hz: 440.0,
            duration_secs: 0.05,
            volume: 0.5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    // Write diagnostics to a log file (TERMPONG_LOG also turns this on)
    pub enabled: bool,

    // Defaults to termpong.log in the system temp directory
    pub path: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("termpong.log"))
    }
}
