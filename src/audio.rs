//! A module to contain the audio output of the program.
//! The callback setup follows the example provided by the SDL2 crate.
//! Web-viewable documentation [here](https://docs.rs/sdl2/latest/sdl2/audio/index.html).

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use sdl2::AudioSubsystem;

use crate::pcm::Format;

/// Cycles endlessly through one period of samples. The cursor survives
/// across callback invocations, so the loop never skips a phase at buffer
/// boundaries.
pub struct WaveLoop {
    samples: Vec<i16>,
    position: usize,
}

impl WaveLoop {
    #[must_use]
    pub fn silent() -> WaveLoop {
        WaveLoop {
            samples: Vec::new(),
            position: 0,
        }
    }

    /// Swaps in a new period and restarts it from the beginning.
    pub fn replace(&mut self, samples: Vec<i16>) {
        self.samples = samples;
        self.position = 0;
    }
}

impl AudioCallback for WaveLoop {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        if self.samples.is_empty() {
            out.fill(0);
            return;
        }

        for x in out.iter_mut() {
            *x = self.samples[self.position];
            self.position = (self.position + 1) % self.samples.len();
        }
    }
}

/// The playback half of the program: one audio device looping the most
/// recently played period.
///
/// The device is opened on the first play rather than at startup, so a
/// busy or missing audio device only fails the play attempts and never the
/// drawing surface. Each play retries the open until one succeeds; the
/// device is then reused for the rest of the process.
pub struct Speaker {
    audio_subsystem: AudioSubsystem,
    format: Format,
    device: Option<AudioDevice<WaveLoop>>,
}

impl Speaker {
    #[must_use]
    pub fn new(audio_subsystem: AudioSubsystem, format: Format) -> Speaker {
        Speaker {
            audio_subsystem,
            format,
            device: None,
        }
    }

    /// Starts looping the given period, replacing whatever was playing.
    /// The swap happens under the device lock, so the callback only ever
    /// observes a complete buffer.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the audio device cannot be opened.
    pub fn play(&mut self, samples: Vec<i16>) -> Result<(), String> {
        if self.device.is_none() {
            #[allow(clippy::cast_possible_wrap)]
            let desired_spec = AudioSpecDesired {
                freq: Some(self.format.sample_rate_hz as i32),
                channels: Some(self.format.channels),
                samples: None,
            };

            let device = self.audio_subsystem.open_playback(None, &desired_spec, |_spec| WaveLoop::silent())?;
            self.device = Some(device);
        }

        if let Some(device) = self.device.as_mut() {
            device.lock().replace(samples);
            device.resume();
        }

        Ok(())
    }

    /// Pauses playback. The current period stays loaded and a later play
    /// starts a fresh one.
    pub fn stop(&self) {
        if let Some(device) = &self.device {
            device.pause();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_loop_fills_silence_when_empty() {
        let mut wave_loop = WaveLoop::silent();

        let mut out = [5_i16; 8];
        wave_loop.callback(&mut out);
        assert_eq!(out, [0; 8], "Empty loop did not fill silence.");
    }

    #[test]
    fn wave_loop_cycles_the_period() {
        let mut wave_loop = WaveLoop::silent();
        wave_loop.replace(vec![10, -10, 30]);

        let mut out = [0_i16; 7];
        wave_loop.callback(&mut out);
        assert_eq!(out, [10, -10, 30, 10, -10, 30, 10], "Period not cycled into the output.");
    }

    #[test]
    fn wave_loop_keeps_its_phase_across_callbacks() {
        let mut wave_loop = WaveLoop::silent();
        wave_loop.replace(vec![1, 2, 3]);

        let mut first = [0_i16; 4];
        wave_loop.callback(&mut first);
        let mut second = [0_i16; 4];
        wave_loop.callback(&mut second);
        assert_eq!(second, [2, 3, 1, 2], "Phase not carried over from the previous callback.");
    }

    #[test]
    fn replace_restarts_the_period() {
        let mut wave_loop = WaveLoop::silent();
        wave_loop.replace(vec![1, 2, 3]);

        let mut out = [0_i16; 2];
        wave_loop.callback(&mut out);

        wave_loop.replace(vec![7, 8]);
        let mut out = [0_i16; 3];
        wave_loop.callback(&mut out);
        assert_eq!(out, [7, 8, 7], "Replaced period did not restart from its first sample.");
    }
}
