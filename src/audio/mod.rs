// Tone cues for bounces and goals
// Every sink is fire-and-forget: play() never blocks and never reports errors.

#[cfg(feature = "tone")]
mod tone;

use std::io::{self, Write};

use crate::config::{AudioBackend, AudioConfig};

#[cfg(feature = "tone")]
pub use tone::ToneSink;

/// Handle for the sound to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCue {
    /// Short beep for wall/paddle bounces and goals
    Beep,
}

pub trait AudioSink {
    fn play(&mut self, cue: ToneCue);
}

/// Rings the terminal bell
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, _cue: ToneCue) {
        // A missed beep is not worth interrupting the game for
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }
}

/// Discards every cue
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: ToneCue) {}
}

/// Open the sink selected in the config, falling back to the bell when
/// synthesized tones are unavailable
pub fn open_sink(config: &AudioConfig) -> Box<dyn AudioSink> {
    match config.backend {
        AudioBackend::Off => Box::new(Silent),
        AudioBackend::Bell => Box::new(TerminalBell::new(io::stdout())),
        AudioBackend::Tone => open_tone(config),
    }
}

#[cfg(feature = "tone")]
fn open_tone(config: &AudioConfig) -> Box<dyn AudioSink> {
    match ToneSink::open(config) {
        Ok(sink) => {
            tracing::info!(frequency_hz = config.frequency_hz, "tone audio ready");
            Box::new(sink)
        }
        Err(e) => {
            tracing::warn!("no audio output device ({}), using terminal bell", e);
            Box::new(TerminalBell::new(io::stdout()))
        }
    }
}

#[cfg(not(feature = "tone"))]
fn open_tone(_config: &AudioConfig) -> Box<dyn AudioSink> {
    tracing::warn!("built without the `tone` feature, using terminal bell");
    Box::new(TerminalBell::new(io::stdout()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_writes_bel() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(ToneCue::Beep);
        bell.play(ToneCue::Beep);
        assert_eq!(bell.out, b"\x07\x07");
    }
}
