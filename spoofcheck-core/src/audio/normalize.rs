//! Waveform shaping and normalization
//!
//! Takes decoded mono audio at any rate and produces the fixed-length,
//! z-score normalized waveform the classifier expects.

use crate::audio::resample::resample;
use crate::error::Result;
use tracing::debug;

/// Sample rate the classifier was trained at, in Hz
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Divisor guard added to the standard deviation before normalizing
const STD_EPSILON: f64 = 1e-9;

/// Prepare a decoded mono waveform for inference
///
/// **Pipeline:**
/// 1. Resample from `source_rate` to 16 kHz
/// 2. Pad with trailing zeros or truncate to exactly `target_len` samples
/// 3. Z-score normalize: `(x - mean) / (std + 1e-9)`
///
/// The result always has exactly `target_len` samples. Silent or empty input
/// comes out as all zeros rather than NaN.
pub fn prepare_waveform(samples: Vec<f32>, source_rate: u32, target_len: usize) -> Result<Vec<f32>> {
    let mut waveform = resample(&samples, source_rate, TARGET_SAMPLE_RATE)?;

    let native_len = waveform.len();
    fix_length(&mut waveform, target_len);
    zscore(&mut waveform);

    debug!(
        source_rate,
        resampled_samples = native_len,
        target_len,
        "Waveform prepared for inference"
    );

    Ok(waveform)
}

/// Pad with trailing zeros or truncate so `samples.len() == target_len`
fn fix_length(samples: &mut Vec<f32>, target_len: usize) {
    samples.resize(target_len, 0.0);
}

/// Z-score normalize in place: `(x - mean) / (std + 1e-9)`
///
/// Standard deviation uses the sample (n-1) form. Accumulation is done in
/// f64 to keep the statistics stable over long waveforms.
fn zscore(samples: &mut [f32]) {
    let n = samples.len();
    if n == 0 {
        return;
    }

    let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n as f64;

    let std = if n > 1 {
        let variance = samples
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / (n - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    let denom = std + STD_EPSILON;
    for s in samples.iter_mut() {
        *s = ((*s as f64 - mean) / denom) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(sample_rate: u32, seconds: f32) -> Vec<f32> {
        let n = (sample_rate as f32 * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * PI * 440.0 * i as f32 / sample_rate as f32).sin() * 0.5)
            .collect()
    }

    #[test]
    fn test_fix_length_pads_short_input_with_zeros() {
        let mut samples = vec![1.0, 2.0, 3.0];
        fix_length(&mut samples, 6);
        assert_eq!(samples, vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fix_length_truncates_long_input() {
        let mut samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        fix_length(&mut samples, 2);
        assert_eq!(samples, vec![1.0, 2.0]);
    }

    #[test]
    fn test_fix_length_exact_input_unchanged() {
        let mut samples = vec![1.0, 2.0];
        fix_length(&mut samples, 2);
        assert_eq!(samples, vec![1.0, 2.0]);
    }

    #[test]
    fn test_zscore_produces_unit_statistics() {
        let mut samples = sine(16000, 1.0);
        zscore(&mut samples);

        let n = samples.len() as f64;
        let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
        let var = samples
            .iter()
            .map(|&s| (s as f64 - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);

        assert!(mean.abs() < 1e-4, "mean was {}", mean);
        assert!((var.sqrt() - 1.0).abs() < 1e-3, "std was {}", var.sqrt());
    }

    #[test]
    fn test_zscore_constant_input_is_all_zeros() {
        let mut samples = vec![0.25f32; 1000];
        zscore(&mut samples);
        assert!(samples.iter().all(|s| *s == 0.0));
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_zscore_silence_stays_silent() {
        let mut samples = vec![0.0f32; 1000];
        zscore(&mut samples);
        assert!(samples.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_prepare_waveform_length_invariant_across_rates() {
        let target_len = 64_600;
        for rate in [8000u32, 16000, 44100, 48000] {
            let waveform = prepare_waveform(sine(rate, 2.0), rate, target_len).unwrap();
            assert_eq!(waveform.len(), target_len, "rate {}", rate);
            assert!(waveform.iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn test_prepare_waveform_empty_input_is_silence() {
        let waveform = prepare_waveform(Vec::new(), 44100, 64_600).unwrap();
        assert_eq!(waveform.len(), 64_600);
        assert!(waveform.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_prepare_waveform_truncates_long_clip() {
        // 10 seconds at 16 kHz is well past the window
        let waveform = prepare_waveform(sine(16000, 10.0), 16000, 64_600).unwrap();
        assert_eq!(waveform.len(), 64_600);
    }
}
