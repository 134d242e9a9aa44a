//! The PCM contract shared by the synthesizer and the speaker.

/// The sample layout of a synthesized period.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Format {
    pub sample_rate_hz: u32,
    pub bits_per_sample: u16,
    pub channels: u8,
    pub signed: bool,
    pub little_endian: bool,
}

/// The one format this program plays: mono, signed 16-bit little-endian at
/// 41000 Hz. The sample rate is fixed; only the tone frequency varies.
pub const FORMAT: Format = Format {
    sample_rate_hz: 41_000,
    bits_per_sample: 16,
    channels: 1,
    signed: true,
    little_endian: true,
};

/// Encodes samples for a byte-oriented sink, low byte first. The output
/// holds exactly two bytes per sample.
#[must_use]
pub fn encode(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|sample| sample.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_format_descriptor() {
        assert_eq!(FORMAT.sample_rate_hz, 41_000);
        assert_eq!(FORMAT.bits_per_sample, 16);
        assert_eq!(FORMAT.channels, 1);
        assert!(FORMAT.signed);
        assert!(FORMAT.little_endian);
    }

    #[test]
    fn encode_writes_the_low_byte_first() {
        let bytes = encode(&[0x0102, -2]);
        assert_eq!(bytes, vec![0x02, 0x01, 0xFE, 0xFF], "Samples not encoded little-endian.");
    }

    #[test]
    fn encode_produces_two_bytes_per_sample() {
        assert_eq!(encode(&[]).len(), 0, "Empty buffer not encoded to zero bytes.");
        assert_eq!(encode(&[0; 93]).len(), 186, "Byte count incorrect.");
    }
}
