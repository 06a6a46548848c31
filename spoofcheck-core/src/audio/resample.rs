//! Sample rate conversion using rubato
//!
//! High-quality sinc interpolation for arbitrary rate conversion. The whole
//! clip is processed as a single chunk and the filter is then drained, since
//! inputs are short uploads, not streams.

use crate::error::{Error, Result};
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};
use tracing::debug;

/// Resample mono audio from `source_rate` to `target_rate`
///
/// Returns the input unchanged when the rates already match. Otherwise the
/// output holds the input length scaled by the rate ratio (rounded), aligned
/// so frame `k` of the output falls at input time `k / ratio`.
pub fn resample(input: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    if source_rate == target_rate {
        return Ok(input.to_vec());
    }
    if input.is_empty() {
        return Ok(Vec::new());
    }

    debug!(
        source_rate,
        target_rate,
        input_samples = input.len(),
        "Resampling audio"
    );

    let ratio = target_rate as f64 / source_rate as f64;
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, input.len(), 1)
        .map_err(|e| Error::Resample(format!("Failed to create resampler: {}", e)))?;

    let delay = resampler.output_delay();
    let expected_len = (input.len() as f64 * ratio).round() as usize;

    let mut output = resampler
        .process(&[input], None)
        .map_err(|e| Error::Resample(format!("Resampling failed: {}", e)))?;
    let mut samples = output.remove(0);

    // The sinc filter holds the clip tail back by its group delay; it only
    // comes out once zero input is pushed through behind it.
    while samples.len() < expected_len + delay {
        let mut flushed = resampler
            .process_partial::<&[f32]>(None, None)
            .map_err(|e| Error::Resample(format!("Resampler flush failed: {}", e)))?;
        let tail = flushed.remove(0);
        if tail.is_empty() {
            break;
        }
        samples.extend(tail);
    }

    // The first `delay` frames are filter ramp-in, not clip content.
    samples.drain(..delay.min(samples.len()));
    samples.truncate(expected_len);
    Ok(samples)
}
