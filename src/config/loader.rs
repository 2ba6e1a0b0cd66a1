// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("termpong");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config, io::Error> {
    if config_path.exists() {
        let contents = fs::read_to_string(config_path)?;
        Ok(parse_config(&contents))
    } else {
        create_default_config(config_path)?;
        Ok(Config::default())
    }
}

/// Parse config text, falling back to defaults when it is malformed
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            // Logging isn't set up yet; the terminal is still in normal mode
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).map_err(io::Error::other)?;

    let commented_toml = format!(
        "# termpong configuration file\n\
         # Edit this file to customize controls, colors and sound\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key names: \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\",\n\
         #            \"Tab\", \"Backspace\" or single characters like \"W\", \"S\", \"Q\"\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # Audio backends: \"bell\", \"tone\" (needs the `tone` build feature), \"off\"\n\
         # Logging: set enabled = true or export TERMPONG_LOG=debug\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AudioBackend;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.keybindings.paddle_up, config.keybindings.paddle_up);
        assert_eq!(parsed.keybindings.restart, config.keybindings.restart);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.audio.backend, AudioBackend::Bell);
        assert_eq!(parsed.input.hold_window_ms, 200);
        assert!(!parsed.logging.enabled);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let partial_toml = r#"
            [display]
            target_fps = 30

            [audio]
            backend = "off"
        "#;

        let config = parse_config(partial_toml);

        // Custom values
        assert_eq!(config.display.target_fps, 30);
        assert_eq!(config.audio.backend, AudioBackend::Off);

        // Default values should still be there
        assert_eq!(config.display.foreground, [255, 255, 255]);
        assert_eq!(config.audio.frequency_hz, 440.0);
        assert_eq!(config.keybindings.paddle_down, vec!["S", "Down"]);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let config = parse_config("[display]\ntarget_fps = \"fast\"\n");
        assert_eq!(config.display.target_fps, 60);
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = std::env::temp_dir().join(format!("termpong-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.display.target_fps, 60);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# termpong configuration file"));
        assert_eq!(parse_config(&written).keybindings.quit, vec!["Q"]);

        fs::remove_dir_all(&dir).ok();
    }
}
