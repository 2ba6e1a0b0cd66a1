// Synthesized sine beep played through rodio

use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

use super::{AudioSink, ToneCue};
use crate::config::AudioConfig;

const SAMPLE_RATE: u32 = 44_100;

pub struct ToneSink {
    // Dropping the stream stops playback, so it lives as long as the sink
    _stream: OutputStream,
    handle: OutputStreamHandle,
    beep: Vec<f32>,
}

impl ToneSink {
    pub fn open(config: &AudioConfig) -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            beep: sine_wave(
                config.frequency_hz,
                config.duration_secs,
                config.volume,
                SAMPLE_RATE,
            ),
        })
    }
}

impl AudioSink for ToneSink {
    fn play(&mut self, cue: ToneCue) {
        let samples = match cue {
            ToneCue::Beep => self.beep.clone(),
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }
}

/// Mono sine samples in [-volume, volume]
pub fn sine_wave(frequency_hz: f32, duration_secs: f32, volume: f32, sample_rate: u32) -> Vec<f32> {
    let n_samples = (sample_rate as f32 * duration_secs) as usize;
    let amplitude = volume.clamp(0.0, 1.0);
    (0..n_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            amplitude * (2.0 * std::f32::consts::PI * frequency_hz * t).sin()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_beep_shape() {
        let samples = sine_wave(440.0, 0.05, 0.5, SAMPLE_RATE);
        assert_eq!(samples.len(), 2205);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
        assert!(samples.iter().any(|s| *s > 0.49));
    }
}
