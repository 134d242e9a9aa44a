//! A module to contain the top-level state of the program and the handling
//! of user commands against it.

use line_2d::Coord;

use crate::audio::Speaker;
use crate::command::Command;
use crate::pcm;
use crate::quirks::ColumnScanQuirk;
use crate::sketch::Sketch;
use crate::synth;

pub const FREQUENCY_MIN_HZ: u32 = 55;
pub const FREQUENCY_MAX_HZ: u32 = 1_760;
pub const DEFAULT_FREQUENCY_HZ: u32 = 440;

/// Owns the sketch, the selected frequency, the stroke in progress, and the
/// speaker. Every state change goes through [`handle_command`](Controller::handle_command).
pub struct Controller {
    sketch: Sketch,
    frequency_hz: u32,
    column_scan: ColumnScanQuirk,
    stroke_anchor: Option<Coord>,
    speaker: Option<Speaker>,
}

impl Controller {
    /// Creates a controller with no audio output. Play still synthesizes
    /// and validates; the samples just have nowhere to go.
    #[must_use]
    pub fn new(frequency_hz: u32, column_scan: ColumnScanQuirk) -> Controller {
        Controller {
            sketch: Sketch::new(),
            frequency_hz,
            column_scan,
            stroke_anchor: None,
            speaker: None,
        }
    }

    #[must_use]
    pub fn with_speaker(frequency_hz: u32, column_scan: ColumnScanQuirk, speaker: Speaker) -> Controller {
        Controller {
            speaker: Some(speaker),
            ..Controller::new(frequency_hz, column_scan)
        }
    }

    /// Applies one command to the program state.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a play command cannot synthesize (unplayable
    /// frequency) or cannot reach the audio device. Both leave the sketch
    /// untouched and the program running.
    pub fn handle_command(&mut self, command: Command) -> Result<(), String> {
        match command {
            Command::BeginStroke(coord) => {
                self.sketch.fill(coord);
                self.stroke_anchor = Some(coord);
                Ok(())
            }
            Command::StrokeTo(coord) => {
                match self.stroke_anchor {
                    Some(anchor) => self.sketch.draw_line(anchor, coord),
                    None => self.sketch.fill(coord),
                }
                self.stroke_anchor = Some(coord);
                Ok(())
            }
            Command::EndStroke => {
                self.stroke_anchor = None;
                Ok(())
            }
            Command::Clear => {
                self.sketch.clear();
                Ok(())
            }
            Command::Play => self.play(),
            Command::Stop => {
                if let Some(speaker) = &self.speaker {
                    speaker.stop();
                }
                Ok(())
            }
            Command::SetFrequency(frequency_hz) => {
                self.frequency_hz = frequency_hz.clamp(FREQUENCY_MIN_HZ, FREQUENCY_MAX_HZ);
                Ok(())
            }
            Command::StepFrequency(delta) => {
                self.frequency_hz = self
                    .frequency_hz
                    .saturating_add_signed(delta)
                    .clamp(FREQUENCY_MIN_HZ, FREQUENCY_MAX_HZ);
                Ok(())
            }
            Command::StepOctave(delta) => {
                let stepped = match delta.signum() {
                    1 => self.frequency_hz.saturating_mul(2),
                    -1 => self.frequency_hz / 2,
                    _ => self.frequency_hz,
                };
                self.frequency_hz = stepped.clamp(FREQUENCY_MIN_HZ, FREQUENCY_MAX_HZ);
                Ok(())
            }
        }
    }

    fn play(&mut self) -> Result<(), String> {
        let samples = synth::synthesize(
            &self.sketch,
            self.frequency_hz,
            pcm::FORMAT.sample_rate_hz,
            &self.column_scan,
        )
        .map_err(|synth_error| synth_error.to_string())?;

        match self.speaker.as_mut() {
            Some(speaker) => speaker.play(samples),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    #[must_use]
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}
