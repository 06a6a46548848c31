//! Audio test clip generation
//!
//! Generates deterministic WAV clips in memory so tests can exercise the
//! upload path without fixture files on disk.

use hound::{SampleFormat, WavSpec, WavWriter};
use std::f32::consts::PI;
use std::io::Cursor;

/// Generate a 16-bit PCM WAV holding a sine tone
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz
/// * `channels` - Channel count (every channel carries the same tone)
/// * `duration_ms` - Duration in milliseconds
/// * `frequency_hz` - Tone frequency in Hz (e.g., 440.0 for A4)
/// * `amplitude` - Amplitude 0.0-1.0 (0.5 recommended to avoid clipping)
pub fn sine_wav_bytes(
    sample_rate: u32,
    channels: u16,
    duration_ms: u64,
    frequency_hz: f32,
    amplitude: f32,
) -> Result<Vec<u8>, hound::Error> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        let total_frames = (sample_rate as u64 * duration_ms) / 1000;

        for frame_idx in 0..total_frames {
            let t = frame_idx as f32 / sample_rate as f32;
            let value = (2.0 * PI * frequency_hz * t).sin() * amplitude;
            let sample = (value * i16::MAX as f32) as i16;
            for _ in 0..channels {
                writer.write_sample(sample)?;
            }
        }

        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}
