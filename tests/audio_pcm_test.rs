use std::io::Write;

use minutemaker::infrastructure::audio::pcm::{decode_audio_to_pcm, probe_duration};

fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn wav_file(sample_rate: u32, samples: &[i16]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".wav")
        .tempfile()
        .unwrap();
    file.write_all(&build_wav(sample_rate, samples)).unwrap();
    file
}

#[test]
fn given_one_second_wav_when_probing_duration_then_seconds_are_computed() {
    let samples: Vec<i16> = vec![0i16; 16_000];
    let file = wav_file(16_000, &samples);

    let duration = probe_duration(file.path());

    assert!(duration.is_some());
    assert!((duration.unwrap() - 1.0).abs() < 0.05);
}

#[test]
fn given_non_audio_bytes_when_probing_duration_then_unknown() {
    let mut file = tempfile::Builder::new()
        .suffix(".mp3")
        .tempfile()
        .unwrap();
    file.write_all(b"definitely not audio").unwrap();

    let duration = probe_duration(file.path());

    assert!(duration.is_none());
}

#[test]
fn given_missing_file_when_probing_duration_then_unknown() {
    let duration = probe_duration(std::path::Path::new("/nonexistent/meeting.wav"));

    assert!(duration.is_none());
}

#[test]
fn given_16khz_wav_when_decoding_then_samples_pass_through_without_resampling() {
    let samples: Vec<i16> = vec![0i16; 16_000];
    let file = wav_file(16_000, &samples);

    let pcm = decode_audio_to_pcm(file.path()).unwrap();

    assert_eq!(pcm.len(), 16_000);
}

#[test]
fn given_8khz_wav_when_decoding_then_output_is_resampled_towards_16khz() {
    let samples: Vec<i16> = vec![0i16; 8_000];
    let file = wav_file(8_000, &samples);

    let pcm = decode_audio_to_pcm(file.path()).unwrap();

    assert!(!pcm.is_empty());
    assert!(pcm.len() <= 16_000);
    assert!(pcm.len() > 12_000);
}

#[test]
fn given_non_audio_bytes_when_decoding_then_decoding_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".wav")
        .tempfile()
        .unwrap();
    file.write_all(b"definitely not audio").unwrap();

    let result = decode_audio_to_pcm(file.path());

    assert!(result.is_err());
}
