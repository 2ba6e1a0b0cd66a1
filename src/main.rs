use anyhow::Context;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use termpong::audio;
use termpong::clock::FrameClock;
use termpong::config::{self, Config};
use termpong::game::{Bindings, RandomSigns, TerminalInput};
use termpong::logging;
use termpong::match_loop::{Devices, MatchLoop, Settings};
use termpong::ui::{Palette, TerminalRenderer};

fn main() -> anyhow::Result<()> {
    // Config and logging come first, while the terminal is still in normal mode
    let config = config::load_config().context("failed to load configuration")?;
    logging::init(&config.logging)?;
    let settings = Settings {
        bindings: Bindings::from_config(&config.keybindings)?,
        palette: Palette::from(&config.display),
        target_fps: config.display.target_fps,
    };

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let reports_release = enter_game_screen();

    let result = run_game(&config, settings, reports_release);

    // Restore terminal even if the game failed
    restore_terminal(reports_release);

    result
}

/// Switch to the alternate screen and ask for key release events.
/// Returns whether the terminal will report releases.
fn enter_game_screen() -> bool {
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
        tracing::warn!("failed to enter alternate screen: {}", e);
    }

    let reports_release = matches!(supports_keyboard_enhancement(), Ok(true))
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();
    tracing::info!(reports_release, "keyboard input ready");
    reports_release
}

fn restore_terminal(reports_release: bool) {
    let mut stdout = io::stdout();
    if reports_release {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen, cursor::Show);
}

fn run_game(config: &Config, settings: Settings, reports_release: bool) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend).context("failed to open terminal")?;

    let devices = Devices {
        renderer: TerminalRenderer::new(terminal).context("failed to query terminal size")?,
        input: TerminalInput::new(
            reports_release,
            Duration::from_millis(config.input.hold_window_ms),
        ),
        audio: audio::open_sink(&config.audio),
        clock: Box::new(FrameClock::new()),
    };

    let mut game = MatchLoop::new(devices, Box::new(RandomSigns::new()), settings);
    game.run().context("terminal I/O failed")?;

    tracing::info!("exiting");
    Ok(())
}
