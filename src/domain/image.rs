const TGA_HEADER_LEN: usize = 18;
const TGA_TYPE_RAW: u8 = 2;
const TGA_TYPE_RLE: u8 = 10;
const PCX_HEADER_LEN: usize = 128;
const PCX_RUN_MARKER: u8 = 192;
const PIXEL_BYTES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    HeaderTooShort { actual: usize },
    PixelDataTruncated,
    UnsupportedTga { color_map: u8, depth: u8 },
    UnsupportedTgaType(u8),
    UnsupportedPcx { depth: u8, planes: u8, compression: u8 },
}

/// Decoded raster image: uncompressed 3-bytes-per-pixel RGB, row-major.
/// Transient: a decode produces one, a surface consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

impl Image {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Decoded length in bytes: `width * height * 3`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Decodes a minimal-variant TGA: 24-bit truecolor, no color map,
    /// type 2 (raw) or type 10 (run-length encoded).
    pub fn decode_tga(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() < TGA_HEADER_LEN {
            return Err(ImageError::HeaderTooShort {
                actual: bytes.len(),
            });
        }
        let color_map = bytes[1];
        let image_type = bytes[2];
        let width = read_u16_le(bytes, 12) as u32;
        let height = read_u16_le(bytes, 14) as u32;
        let depth = bytes[16];

        if color_map != 0 || depth != 24 {
            return Err(ImageError::UnsupportedTga { color_map, depth });
        }
        if image_type != TGA_TYPE_RAW && image_type != TGA_TYPE_RLE {
            return Err(ImageError::UnsupportedTgaType(image_type));
        }

        let pixel_len = width as usize * height as usize * PIXEL_BYTES;
        let source = &bytes[TGA_HEADER_LEN..];
        let data = if image_type == TGA_TYPE_RAW {
            if source.len() < pixel_len {
                return Err(ImageError::PixelDataTruncated);
            }
            source[..pixel_len].to_vec()
        } else {
            decode_tga_rle(source, pixel_len)?
        };

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Decodes a 24-bit RLE PCX. The acceptance gate is deliberately the
    /// original's: an image is rejected only when the depth check AND the
    /// compression check fail together.
    pub fn decode_pcx(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() < PCX_HEADER_LEN {
            return Err(ImageError::HeaderTooShort {
                actual: bytes.len(),
            });
        }
        let compression = bytes[2];
        let depth = bytes[3];
        let min_x = read_u16_le(bytes, 4) as u32;
        let min_y = read_u16_le(bytes, 6) as u32;
        let max_x = read_u16_le(bytes, 8) as u32;
        let max_y = read_u16_le(bytes, 10) as u32;
        let planes = bytes[65];
        let plane_length = read_u16_le(bytes, 66) as usize;

        if depth as usize * planes as usize != 24 && compression != 1 {
            return Err(ImageError::UnsupportedPcx {
                depth,
                planes,
                compression,
            });
        }

        let width = max_x.wrapping_sub(min_x).wrapping_add(1);
        let height = max_y.wrapping_sub(min_y).wrapping_add(1);
        let line = planes as usize * plane_length;
        let planar = decode_pcx_rle(&bytes[PCX_HEADER_LEN..], line * height as usize);

        // Planar scan lines to packed RGB: red plane sits two plane
        // lengths in, green one, blue at the base of each line.
        let row = PIXEL_BYTES * width as usize;
        let mut data = vec![0u8; row * height as usize];
        for y in 0..height as usize {
            for x in 0..width as usize {
                let index = x * PIXEL_BYTES + y * row;
                let position = x + y * line;
                data[index] = plane_byte(&planar, position + 2 * plane_length);
                data[index + 1] = plane_byte(&planar, position + plane_length);
                data[index + 2] = plane_byte(&planar, position);
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// TGA packet stream: a control byte below 128 introduces `n+1` verbatim
/// pixels; 128 and above replicate the following single pixel `n-127`
/// times. Decoding stops once the expected pixel area is filled.
fn decode_tga_rle(source: &[u8], pixel_len: usize) -> Result<Vec<u8>, ImageError> {
    // Capacity grows with the decoded output, not the declared area, so a
    // corrupt header cannot demand an absurd allocation up front.
    let mut data = Vec::new();
    let mut position = 0usize;
    while data.len() < pixel_len {
        let packet = *source.get(position).ok_or(ImageError::PixelDataTruncated)?;
        if packet < 128 {
            let amount = (packet as usize + 1) * PIXEL_BYTES;
            let raw = source
                .get(position + 1..position + 1 + amount)
                .ok_or(ImageError::PixelDataTruncated)?;
            data.extend_from_slice(raw);
            position += 1 + amount;
        } else {
            let repeat = packet as usize - 127;
            let pixel = source
                .get(position + 1..position + 1 + PIXEL_BYTES)
                .ok_or(ImageError::PixelDataTruncated)?;
            for _ in 0..repeat {
                data.extend_from_slice(pixel);
            }
            position += 1 + PIXEL_BYTES;
        }
    }
    data.truncate(pixel_len);
    Ok(data)
}

/// PCX byte-level RLE: a byte below 192 is literal; otherwise its low six
/// bits count replications of the next byte, and the pair consumes two
/// source bytes regardless of the count.
fn decode_pcx_rle(source: &[u8], planar_len: usize) -> Vec<u8> {
    let mut planar = vec![0u8; planar_len];
    let mut index = 0usize;
    let mut position = 0usize;
    while index < source.len() && position < planar_len {
        let byte = source[index];
        if byte < PCX_RUN_MARKER {
            planar[position] = byte;
            position += 1;
            index += 1;
        } else {
            let repeat = byte - PCX_RUN_MARKER;
            let Some(&value) = source.get(index + 1) else {
                break;
            };
            for _ in 0..repeat {
                if position >= planar_len {
                    break;
                }
                planar[position] = value;
                position += 1;
            }
            index += 2;
        }
    }
    planar
}

// Plane reads past the decoded block happen only for files admitted by
// the permissive gate with fewer than three planes; they read as 0.
fn plane_byte(planar: &[u8], position: usize) -> u8 {
    planar.get(position).copied().unwrap_or(0)
}


#[cfg(test)]
mod proptests {
    use super::Image;
    use proptest::prelude::*;

    // Property: a raw TGA decode reproduces its pixel bytes exactly
    proptest! {
        #[test]
        fn prop_tga_raw_round_trip(pixels in prop::collection::vec(any::<u8>(), 12)) {
            let mut bytes = vec![0u8; 18];
            bytes[2] = 2;
            bytes[12..14].copy_from_slice(&2u16.to_le_bytes());
            bytes[14..16].copy_from_slice(&2u16.to_le_bytes());
            bytes[16] = 24;
            bytes.extend_from_slice(&pixels);

            let image = Image::decode_tga(&bytes).expect("decode");
            prop_assert_eq!(image.data(), pixels.as_slice());
        }
    }

    // Property: run packets always fill the declared area with one pixel
    proptest! {
        #[test]
        fn prop_tga_run_fills_area(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), extent in 1u8..64) {
            let mut bytes = vec![0u8; 18];
            bytes[2] = 10;
            bytes[12..14].copy_from_slice(&(extent as u16).to_le_bytes());
            bytes[14..16].copy_from_slice(&1u16.to_le_bytes());
            bytes[16] = 24;
            bytes.push(127 + extent);
            bytes.extend_from_slice(&[r, g, b]);

            let image = Image::decode_tga(&bytes).expect("decode");
            prop_assert_eq!(image.len(), extent as usize * 3);
            for pixel in image.data().chunks(3) {
                prop_assert_eq!(pixel, &[r, g, b]);
            }
        }
    }

    // Property: TGA decoding never panics on arbitrary input
    proptest! {
        #[test]
        fn prop_tga_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = Image::decode_tga(&bytes);
        }
    }

    // Property: PCX decoding never panics on arbitrary pixel streams
    proptest! {
        #[test]
        fn prop_pcx_never_panics(tail in prop::collection::vec(any::<u8>(), 0..64)) {
            let mut bytes = vec![0u8; 128];
            bytes[0] = 0x0A;
            bytes[2] = 1;
            bytes[3] = 8;
            bytes[8..10].copy_from_slice(&3u16.to_le_bytes());
            bytes[10..12].copy_from_slice(&3u16.to_le_bytes());
            bytes[65] = 3;
            bytes[66..68].copy_from_slice(&4u16.to_le_bytes());
            bytes.extend_from_slice(&tail);

            let _ = Image::decode_pcx(&bytes);
        }
    }
}
