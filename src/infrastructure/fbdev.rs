use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use crate::domain::DisplayDevice;

pub const DEFAULT_DEVICE: &str = "/dev/fb0";

/// Geometry of the kernel framebuffer, as reported by the variable and
/// fixed screen info ioctls. Pixels are assumed 16-bit RGB565.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub x_offset: u32,
    pub y_offset: u32,
    pub line_length: u32,
}

impl DisplayInfo {
    /// Byte offset of the visible origin inside the mapped buffer. Panned
    /// displays put the first visible pixel past the start of the device.
    pub fn start_offset(&self) -> u64 {
        let pixel_bytes = self.bits_per_pixel as u64 / 8;
        self.x_offset as u64 * pixel_bytes + self.y_offset as u64 * self.line_length as u64
    }
}

/// Linux framebuffer output. Presenting seeks to the visible origin and
/// writes the packed pixels as one little-endian block.
#[derive(Debug)]
pub struct FramebufferDevice {
    file: File,
    start: u64,
}

impl FramebufferDevice {
    pub fn open(path: impl AsRef<Path>, info: &DisplayInfo) -> std::io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Self {
            file,
            start: info.start_offset(),
        })
    }
}

impl DisplayDevice for FramebufferDevice {
    fn present(&mut self, pixels: &[u16]) -> std::io::Result<()> {
        self.file.seek(SeekFrom::Start(self.start))?;
        let mut bytes = Vec::with_capacity(pixels.len() * 2);
        for pixel in pixels {
            bytes.extend_from_slice(&pixel.to_le_bytes());
        }
        self.file.write_all(&bytes)?;
        self.file.flush()
    }
}
