//! A module to contain the operations turning a sketch into one period of audio.
//! The sketch is read column by column; each column's topmost marked cell sets the
//! amplitude of the samples mapped onto it.

use std::fmt::{Display, Formatter};

use crate::quirks::ColumnScanQuirk;
use crate::sketch::Sketch;

/// Reasons a tone cannot be synthesized. Both are detected before any
/// samples are allocated.
#[derive(PartialEq, Eq, Debug)]
pub enum SynthError {
    /// The requested frequency was zero.
    ZeroFrequency,

    /// The requested frequency is above the sample rate, so one period does
    /// not span even a single sample.
    EmptyPeriod { frequency_hz: u32, sample_rate_hz: u32 },
}

impl Display for SynthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthError::ZeroFrequency => write!(f, "the tone frequency must be above zero"),
            SynthError::EmptyPeriod { frequency_hz, sample_rate_hz } => {
                write!(f, "a {frequency_hz} Hz tone does not span a whole sample at {sample_rate_hz} Hz")
            }
        }
    }
}

/// Produces one period of the sketched waveform as signed 16-bit samples.
///
/// The period holds `sample_rate_hz / frequency_hz` samples (integer
/// division). Each sample index picks a column according to `column_scan`,
/// and the column's topmost marked cell sets the amplitude: the top row maps
/// to +1.0, the middle row to 0.0, the bottom row to just short of -1.0. A
/// column with no marked cell counts as marked at the top row, so an empty
/// sketch plays at full positive scale.
///
/// # Parameters
///
/// * `sketch` - The drawing to read. It is only read, never modified.
/// * `frequency_hz` - The tone frequency. The UI keeps this within
///   [`FREQUENCY_MIN_HZ`](crate::controller::FREQUENCY_MIN_HZ) and
///   [`FREQUENCY_MAX_HZ`](crate::controller::FREQUENCY_MAX_HZ); direct
///   callers may pass anything representable.
/// * `sample_rate_hz` - The playback sample rate.
/// * `column_scan` - How sample indices map to sketch columns.
///
/// # Errors
///
/// Will return `Err` if the frequency is zero or exceeds the sample rate.
pub fn synthesize(
    sketch: &Sketch,
    frequency_hz: u32,
    sample_rate_hz: u32,
    column_scan: &ColumnScanQuirk,
) -> Result<Vec<i16>, SynthError> {
    if frequency_hz == 0 {
        return Err(SynthError::ZeroFrequency);
    }

    let period_len = (sample_rate_hz / frequency_hz) as usize;
    if period_len == 0 {
        return Err(SynthError::EmptyPeriod { frequency_hz, sample_rate_hz });
    }

    let mut samples = Vec::with_capacity(period_len);
    for i in 0..period_len {
        let col = match column_scan {
            ColumnScanQuirk::Sweep => ((i * sketch.width()) / period_len).min(sketch.width() - 1),
            ColumnScanQuirk::FirstColumn => 0,
        };
        let row = sketch.top_filled_row(col).unwrap_or(0);
        samples.push(quantize(amplitude_at(row, sketch.height())));
    }

    Ok(samples)
}

/// Maps a normalized amplitude to a signed 16-bit sample, rounding and then
/// clamping. The clamp bounds every sample to the 16-bit range no matter
/// what amplitude a caller produces.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn quantize(amplitude: f64) -> i16 {
    let scaled = (amplitude * f64::from(i16::MAX)).round();
    scaled.clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

#[allow(clippy::cast_precision_loss)]
fn amplitude_at(row: usize, height: usize) -> f64 {
    let half_height = (height / 2) as f64;
    ((height - row) as f64 - half_height) / half_height
}
