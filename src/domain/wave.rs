const RIFF_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;
const FORMAT_PCM: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WavError {
    Truncated,
    BadRiffSignature,
    BadWaveSignature,
    UnsupportedFormat(u16),
    UnsupportedBits(u16),
    UnsupportedChannels(u16),
    MissingDataChunk,
}

/// Decoded PCM audio: 16-bit signed little-endian samples, interleaved when
/// stereo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudio {
    channels: u16,
    sample_rate: u32,
    bits: u16,
    data: Vec<u8>,
}

fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl WavAudio {
    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The sample stream as signed 16-bit values. A trailing odd byte, if
    /// present, is dropped.
    pub fn samples(&self) -> impl Iterator<Item = i16> + '_ {
        self.data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
    }

    /// Parses a RIFF/WAVE container, walking chunks until the `fmt ` and
    /// `data` chunks are found. Only 16-bit mono or stereo PCM is accepted.
    pub fn decode(bytes: &[u8]) -> Result<Self, WavError> {
        if bytes.len() < RIFF_HEADER_LEN {
            return Err(WavError::Truncated);
        }
        if &bytes[0..4] != b"RIFF" {
            return Err(WavError::BadRiffSignature);
        }
        if &bytes[8..12] != b"WAVE" {
            return Err(WavError::BadWaveSignature);
        }

        let mut offset = RIFF_HEADER_LEN;
        let mut format = None;
        let mut data = None;
        while offset + CHUNK_HEADER_LEN <= bytes.len() {
            let id = &bytes[offset..offset + 4];
            let size = read_u32_le(bytes, offset + 4) as usize;
            let body_start = offset + CHUNK_HEADER_LEN;
            let body_end = body_start
                .checked_add(size)
                .ok_or(WavError::Truncated)?;
            if body_end > bytes.len() {
                return Err(WavError::Truncated);
            }
            let body = &bytes[body_start..body_end];
            match id {
                b"fmt " => {
                    if body.len() < 16 {
                        return Err(WavError::Truncated);
                    }
                    format = Some((
                        read_u16_le(body, 0),
                        read_u16_le(body, 2),
                        read_u32_le(body, 4),
                        read_u16_le(body, 14),
                    ));
                }
                b"data" => {
                    data = Some(body.to_vec());
                }
                _ => {}
            }
            // Chunk bodies are word-aligned; odd sizes carry a pad byte.
            offset = body_end + size % 2;
        }

        let (audio_format, channels, sample_rate, bits) =
            format.ok_or(WavError::MissingDataChunk)?;
        if audio_format != FORMAT_PCM {
            return Err(WavError::UnsupportedFormat(audio_format));
        }
        if bits != 16 {
            return Err(WavError::UnsupportedBits(bits));
        }
        if channels != 1 && channels != 2 {
            return Err(WavError::UnsupportedChannels(channels));
        }
        let data = data.ok_or(WavError::MissingDataChunk)?;

        Ok(Self {
            channels,
            sample_rate,
            bits,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{WavAudio, WavError};

    fn build_wav(format: u16, channels: u16, sample_rate: u32, bits: u16, samples: &[i16]) -> Vec<u8> {
        let mut data = Vec::new();
        for sample in samples {
            data.extend_from_slice(&sample.to_le_bytes());
        }

        let block_align = channels * bits / 8;
        let byte_rate = sample_rate * block_align as u32;
        let mut fmt = Vec::new();
        fmt.extend_from_slice(&format.to_le_bytes());
        fmt.extend_from_slice(&channels.to_le_bytes());
        fmt.extend_from_slice(&sample_rate.to_le_bytes());
        fmt.extend_from_slice(&byte_rate.to_le_bytes());
        fmt.extend_from_slice(&block_align.to_le_bytes());
        fmt.extend_from_slice(&bits.to_le_bytes());

        let riff_size = 4 + 8 + fmt.len() + 8 + data.len();
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(riff_size as u32).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&(fmt.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&fmt);
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&data);
        bytes
    }

    #[test]
    fn decodes_mono_pcm() {
        let bytes = build_wav(1, 1, 22050, 16, &[0, 1000, -1000, i16::MAX]);
        let audio = WavAudio::decode(&bytes).unwrap();

        assert_eq!(audio.channels(), 1);
        assert_eq!(audio.sample_rate(), 22050);
        assert_eq!(audio.bits(), 16);
        let samples: Vec<i16> = audio.samples().collect();
        assert_eq!(samples, vec![0, 1000, -1000, i16::MAX]);
    }

    #[test]
    fn decodes_stereo_pcm() {
        let bytes = build_wav(1, 2, 44100, 16, &[1, 2, 3, 4]);
        let audio = WavAudio::decode(&bytes).unwrap();

        assert_eq!(audio.channels(), 2);
        assert_eq!(audio.data().len(), 8);
    }

    #[test]
    fn rejects_bad_riff_signature() {
        let mut bytes = build_wav(1, 1, 22050, 16, &[0]);
        bytes[0] = b'X';

        assert_eq!(WavAudio::decode(&bytes), Err(WavError::BadRiffSignature));
    }

    #[test]
    fn rejects_bad_wave_signature() {
        let mut bytes = build_wav(1, 1, 22050, 16, &[0]);
        bytes[8] = b'X';

        assert_eq!(WavAudio::decode(&bytes), Err(WavError::BadWaveSignature));
    }

    #[test]
    fn rejects_non_pcm_format() {
        let bytes = build_wav(3, 1, 22050, 16, &[0]);

        assert_eq!(WavAudio::decode(&bytes), Err(WavError::UnsupportedFormat(3)));
    }

    #[test]
    fn rejects_8_bit_samples() {
        let bytes = build_wav(1, 1, 22050, 8, &[0]);

        assert_eq!(WavAudio::decode(&bytes), Err(WavError::UnsupportedBits(8)));
    }

    #[test]
    fn rejects_more_than_two_channels() {
        let bytes = build_wav(1, 6, 48000, 16, &[0]);

        assert_eq!(
            WavAudio::decode(&bytes),
            Err(WavError::UnsupportedChannels(6))
        );
    }

    #[test]
    fn rejects_missing_data_chunk() {
        let full = build_wav(1, 1, 22050, 16, &[0]);
        // Keep RIFF header plus the fmt chunk, drop the data chunk.
        let bytes = &full[..full.len() - 8 - 2];

        assert_eq!(WavAudio::decode(bytes), Err(WavError::MissingDataChunk));
    }

    #[test]
    fn rejects_truncated_header() {
        assert_eq!(WavAudio::decode(b"RIFF"), Err(WavError::Truncated));
    }

    #[test]
    fn rejects_chunk_running_past_the_buffer() {
        let mut bytes = build_wav(1, 1, 22050, 16, &[0, 0]);
        let data_size_offset = bytes.len() - 4 - 4;
        bytes[data_size_offset..data_size_offset + 4]
            .copy_from_slice(&u32::MAX.to_le_bytes());

        assert_eq!(WavAudio::decode(&bytes), Err(WavError::Truncated));
    }

    #[test]
    fn skips_unknown_chunks() {
        let mut bytes = build_wav(1, 1, 22050, 16, &[7]);
        // Splice a LIST chunk between the header and fmt.
        let mut spliced = bytes[..12].to_vec();
        spliced.extend_from_slice(b"LIST");
        spliced.extend_from_slice(&4u32.to_le_bytes());
        spliced.extend_from_slice(b"INFO");
        spliced.extend_from_slice(&bytes.split_off(12));

        let audio = WavAudio::decode(&spliced).unwrap();
        assert_eq!(audio.samples().collect::<Vec<i16>>(), vec![7]);
    }
}

#[cfg(test)]
mod proptests {
    use super::WavAudio;
    use proptest::prelude::*;

    // Property: arbitrary input never panics the parser
    proptest! {
        #[test]
        fn prop_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let _ = WavAudio::decode(&bytes);
        }
    }

    // Property: decoded sample count equals data bytes over two
    proptest! {
        #[test]
        fn prop_sample_view_length(samples in proptest::collection::vec(any::<i16>(), 0..64)) {
            let mut data = Vec::new();
            for sample in &samples {
                data.extend_from_slice(&sample.to_le_bytes());
            }
            let mut bytes = Vec::new();
            bytes.extend_from_slice(b"RIFF");
            bytes.extend_from_slice(&((28 + data.len()) as u32).to_le_bytes());
            bytes.extend_from_slice(b"WAVE");
            bytes.extend_from_slice(b"fmt ");
            bytes.extend_from_slice(&16u32.to_le_bytes());
            bytes.extend_from_slice(&1u16.to_le_bytes());
            bytes.extend_from_slice(&1u16.to_le_bytes());
            bytes.extend_from_slice(&22050u32.to_le_bytes());
            bytes.extend_from_slice(&44100u32.to_le_bytes());
            bytes.extend_from_slice(&2u16.to_le_bytes());
            bytes.extend_from_slice(&16u16.to_le_bytes());
            bytes.extend_from_slice(b"data");
            bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
            bytes.extend_from_slice(&data);

            let audio = WavAudio::decode(&bytes).unwrap();
            prop_assert_eq!(audio.samples().count(), samples.len());
        }
    }
}
