//! WAV file export
//!
//! Renders a track through the register model and the vblank timing loop
//! into a 16-bit stereo WAV file, one refresh period per chunk. The
//! render stops exactly when the timing monitor does, so the output
//! length reflects the same one-refresh-granular termination as live
//! playback.

use std::path::Path;

use crate::hardware::DirectSound;
use crate::playback::{PlaybackController, VblankMonitor};
use crate::track::Track;
use crate::{GbaSoundError, Result};

/// Render `track` to a stereo WAV file at its native sample rate
pub fn export_track_to_wav<P: AsRef<Path>>(track: &Track, output_path: P) -> Result<()> {
    let sample_rate = track.sample_rate();
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(output_path.as_ref(), spec)
        .map_err(|e| GbaSoundError::AudioFileError(format!("failed to create WAV file: {e}")))?;

    let mut controller = PlaybackController::new(DirectSound::new(), track.clone());
    let monitor = VblankMonitor::for_sample_rate(sample_rate);
    controller.start();

    // One vblank worth of interleaved stereo frames per chunk
    let mut chunk = vec![0.0f32; monitor.per_tick() as usize * 2];
    loop {
        controller.sink_mut().generate_samples_into(&mut chunk);
        for &sample in &chunk {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(value)
                .map_err(|e| GbaSoundError::AudioFileError(format!("failed to write sample: {e}")))?;
        }

        if !monitor.tick(&mut controller) {
            break;
        }
    }

    writer
        .finalize()
        .map_err(|e| GbaSoundError::AudioFileError(format!("failed to finalize WAV file: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_expected_length() {
        let track = Track::from_raw(vec![0x40; 2048], vec![0x40; 2048]);
        let dir = std::env::temp_dir();
        let path = dir.join("gbasound_export_test.wav");

        export_track_to_wav(&track, &path).expect("export should succeed");

        let reader = hound::WavReader::open(&path).expect("WAV should be readable");
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, track.sample_rate());

        // ceil(2048 / 549) = 4 refresh periods of stereo frames
        assert_eq!(reader.duration(), 4 * 549);

        let _ = std::fs::remove_file(&path);
    }
}
