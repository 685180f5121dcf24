//! Decoding of base64-encoded 16-bit PCM payloads.

use base64::Engine;

use crate::error::{LecternError, Result};

/// Sample rate of synthesized speech payloads, in Hz.
pub const SAMPLE_RATE: u32 = 24_000;

/// Decode a base64 payload of raw little-endian 16-bit signed mono PCM
/// into normalized `f32` samples in `[-1.0, 1.0]`.
///
/// Fails when the input is not valid base64 or the byte length is odd
/// (no silent truncation of a half sample). Callers treat a decode
/// failure as "no audio available" and skip playback.
pub fn decode_pcm16(base64_payload: &str) -> Result<Vec<f32>> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(base64_payload)
        .map_err(|e| LecternError::Decode(format!("invalid base64: {e}")))?;

    if bytes.len() % 2 != 0 {
        return Err(LecternError::Decode(format!(
            "odd PCM byte length: {}",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn encode(bytes: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    #[test]
    fn decodes_little_endian_pairs_normalized() {
        // 0x0000 = 0, 0x7FFF = 32767, 0x8000 = -32768
        let payload = encode(&[0x00, 0x00, 0xFF, 0x7F, 0x00, 0x80]);
        let samples = decode_pcm16(&payload).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[1], 32767.0 / 32768.0);
        assert_eq!(samples[2], -1.0);
    }

    #[test]
    fn sample_count_is_half_the_byte_count() {
        let payload = encode(&[1u8; 64]);
        assert_eq!(decode_pcm16(&payload).unwrap().len(), 32);
    }

    #[test]
    fn all_samples_stay_in_unit_range() {
        let bytes: Vec<u8> = (0u16..512).flat_map(|v| v.wrapping_mul(129).to_le_bytes()).collect();
        for sample in decode_pcm16(&encode(&bytes)).unwrap() {
            assert!((-1.0..=1.0).contains(&sample), "out of range: {sample}");
        }
    }

    #[test]
    fn odd_byte_length_is_a_decode_error() {
        let payload = encode(&[0x01, 0x02, 0x03]);
        let err = decode_pcm16(&payload).unwrap_err();
        assert!(matches!(err, LecternError::Decode(_)));
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        let err = decode_pcm16("not$$base64!!").unwrap_err();
        assert!(matches!(err, LecternError::Decode(_)));
    }

    #[test]
    fn empty_payload_decodes_to_no_samples() {
        assert!(decode_pcm16("").unwrap().is_empty());
    }
}
