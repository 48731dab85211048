//! Tests for PCM encoding.

use super::*;
use crate::synthesis::Sample;
use pretty_assertions::assert_eq;

#[test]
fn test_encode_length_is_twice_samples() {
    let samples: Vec<Sample> = (0..1000).map(|i| i * 37 - 18_000).collect();
    let pcm = encode16(&samples, 44100, 1).unwrap();
    assert_eq!(pcm.data.len(), 2 * samples.len());
    assert_eq!(pcm.num_frames(), 1000);
}

#[test]
fn test_encode_little_endian() {
    let pcm = encode16(&[0, 1, -1, 0x1234], 44100, 1).unwrap();
    assert_eq!(
        pcm.data,
        vec![0x00, 0x00, 0x01, 0x00, 0xFF, 0xFF, 0x34, 0x12]
    );
}

#[test]
fn test_encode_clamps_out_of_range() {
    let samples = vec![40_000, -40_000, i32::MAX, i32::MIN, 32_767, -32_768];
    let pcm = encode16(&samples, 44100, 1).unwrap();
    let decoded: Vec<i16> = pcm.samples().collect();
    assert_eq!(
        decoded,
        vec![32_767, -32_768, 32_767, -32_768, 32_767, -32_768]
    );
}

#[test]
fn test_max_amplitude_boundary_saturates() {
    // 32768 is one past i16::MAX and must not wrap negative
    assert_eq!(clamp_sample(32_768), 32_767);
    assert_eq!(clamp_sample(-32_768), -32_768);
    assert_eq!(clamp_sample(-32_769), -32_768);
}

#[test]
fn test_encode_empty() {
    let pcm = encode16(&[], 44100, 1).unwrap();
    assert!(pcm.data.is_empty());
    assert_eq!(pcm.duration_seconds(), 0.0);
}

#[test]
fn test_metadata_only_channels() {
    let samples = vec![1, 2, 3, 4];
    let mono = encode16(&samples, 22050, 1).unwrap();
    let stereo = encode16(&samples, 22050, 2).unwrap();

    // same bytes, different header
    assert_eq!(mono.data, stereo.data);
    assert_eq!(mono.block_align(), 2);
    assert_eq!(stereo.block_align(), 4);
    assert_eq!(mono.byte_rate(), 44100);
    assert_eq!(stereo.byte_rate(), 88200);
    assert_eq!(stereo.num_frames(), 2);
    assert!(stereo.is_pcm16());
}

#[test]
fn test_encode_rejects_bad_format() {
    assert!(encode16(&[0], 0, 1).is_err());
    assert!(encode16(&[0], 44100, 0).is_err());
}

#[test]
fn test_pcm_hash() {
    let a = encode16(&[1, 2, 3], 44100, 1).unwrap();
    let b = encode16(&[1, 2, 3], 44100, 1).unwrap();
    let c = encode16(&[1, 2, 4], 44100, 1).unwrap();

    assert_eq!(a.pcm_hash(), b.pcm_hash());
    assert_ne!(a.pcm_hash(), c.pcm_hash());
    assert_eq!(a.pcm_hash().len(), 64);
    assert!(a.pcm_hash().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_duration() {
    let pcm = encode16(&vec![0; 44100], 44100, 1).unwrap();
    assert_eq!(pcm.duration_seconds(), 1.0);
}
