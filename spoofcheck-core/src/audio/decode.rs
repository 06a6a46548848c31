//! Audio decoding using symphonia
//!
//! Decodes WAV/FLAC files to mono f32 PCM samples. Multi-channel sources are
//! collapsed to one channel by averaging across channels during decode.

use crate::error::{Error, Result};
use std::path::Path;
use symphonia::core::audio::{AudioBuffer, AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::conv::FromSample;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use tracing::debug;

/// Decoded audio result
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Mono audio samples (f32, range [-1.0, 1.0])
    pub samples: Vec<f32>,
    /// Native sample rate in Hz
    pub sample_rate: u32,
    /// Original channel count before the mono mix
    pub channels: usize,
    /// Duration in seconds at the native rate
    pub duration_seconds: f64,
}

/// Decode an audio file to mono f32 PCM samples
///
/// **Algorithm:**
/// 1. Open file and probe format using symphonia (extension as a hint)
/// 2. Find the default audio track
/// 3. Create a decoder for the track codec
/// 4. Decode all packets, averaging channels to mono
///
/// # Errors
/// * File I/O errors
/// * Unsupported or unrecognized format
/// * Corrupt audio data
pub fn decode_audio_file(file_path: &Path) -> Result<DecodedAudio> {
    debug!(path = %file_path.display(), "Decoding audio file");

    let file = std::fs::File::open(file_path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = file_path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| Error::Decode(format!("Failed to probe audio format: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| Error::Decode("No audio track found in file".to_string()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| Error::Decode("Sample rate unknown".to_string()))?;
    let channel_count = track
        .codec_params
        .channels
        .ok_or_else(|| Error::Decode("Channel layout unknown".to_string()))?
        .count();

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| Error::Decode(format!("Failed to create decoder: {}", e)))?;

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                // End of stream
                break;
            }
            Err(e) => {
                return Err(Error::Decode(format!("Error reading packet: {}", e)));
            }
        };

        // Skip packets from other tracks
        if packet.track_id() != track_id {
            continue;
        }

        let decoded = decoder
            .decode(&packet)
            .map_err(|e| Error::Decode(format!("Failed to decode packet: {}", e)))?;

        convert_to_mono(&decoded, &mut all_samples);
    }

    let duration_seconds = all_samples.len() as f64 / sample_rate as f64;

    debug!(
        path = %file_path.display(),
        sample_rate,
        channels = channel_count,
        total_samples = all_samples.len(),
        "Audio decoding complete"
    );

    Ok(DecodedAudio {
        samples: all_samples,
        sample_rate,
        channels: channel_count,
        duration_seconds,
    })
}

/// Append a decoded buffer to `out` as mono f32 samples
///
/// Mono input is converted directly; multi-channel input is averaged across
/// all channels, frame by frame.
fn convert_to_mono(decoded: &AudioBufferRef, out: &mut Vec<f32>) {
    match decoded {
        AudioBufferRef::U8(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::U16(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::U24(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::U32(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::S8(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::S16(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::S24(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::S32(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::F32(buf) => mix_to_mono(buf.as_ref(), out),
        AudioBufferRef::F64(buf) => mix_to_mono(buf.as_ref(), out),
    }
}

fn mix_to_mono<S>(buf: &AudioBuffer<S>, out: &mut Vec<f32>)
where
    S: Sample,
    f32: FromSample<S>,
{
    let num_channels = buf.spec().channels.count();
    let num_frames = buf.frames();
    out.reserve(num_frames);

    for frame_idx in 0..num_frames {
        let mut sum = 0.0f32;
        for ch in 0..num_channels {
            sum += f32::from_sample(buf.chan(ch)[frame_idx]);
        }
        out.push(sum / num_channels as f32);
    }
}
