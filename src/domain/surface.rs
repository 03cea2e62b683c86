use super::frame::DrawTarget;
use super::image::Image;

/// One image pixel, 8 bits per channel, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Horizontal,
    Vertical,
}

/// How a canvas buffer is partitioned into frames: one single frame, or
/// equal slices along either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripKind {
    #[default]
    Single,
    Horizontal,
    Vertical,
}

/// 1-indexed frame selector over a strip of `frames` sub-images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStrip {
    frames: u32,
    frame: u32,
}

impl Default for FrameStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStrip {
    pub fn new() -> Self {
        Self { frames: 1, frame: 1 }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Amounts of 1 or less leave the strip as a single frame.
    pub fn set_frames(&mut self, amount: u32) {
        if amount > 1 {
            self.frames = amount;
        }
    }

    /// Out-of-range targets are silently ignored; the previous selection
    /// stays in effect.
    pub fn set_frame(&mut self, target: u32) {
        if target >= 1 && target <= self.frames {
            self.frame = target;
        }
    }

    /// Round-robin: wraps back to frame 1 past the last frame.
    pub fn advance(&mut self) {
        self.frame += 1;
        if self.frame > self.frames {
            self.frame = 1;
        }
    }
}

/// The addressable sub-rectangle a strip selection resolves to: a start
/// offset into the full-width buffer plus the region dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripRegion {
    pub start: usize,
    pub width: u32,
    pub height: u32,
}

/// Resolves the current frame of a strip against an image of the given
/// dimensions. Widths not evenly divisible by the frame count truncate;
/// the remainder columns (or rows) are never addressed.
pub fn strip_region(kind: StripKind, image_width: u32, image_height: u32, strip: &FrameStrip) -> StripRegion {
    match kind {
        StripKind::Single => StripRegion {
            start: 0,
            width: image_width,
            height: image_height,
        },
        StripKind::Horizontal => {
            let width = image_width / strip.frames();
            StripRegion {
                start: (strip.frame() as usize - 1) * width as usize,
                width,
                height: image_height,
            }
        }
        StripKind::Vertical => {
            let height = image_height / strip.frames();
            StripRegion {
                start: (strip.frame() as usize - 1) * image_width as usize * height as usize,
                width: image_width,
                height,
            }
        }
    }
}

/// An owned pixel buffer plus the drawing and transform operations shared
/// by backgrounds, sprites and tilesets. Always `width * height` pixels.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a decoded image. The decoder hands the buffer over; it is
    /// never copied or shared.
    pub fn from_image(image: Image) -> Self {
        let width = image.width();
        let height = image.height();
        let data = image.into_data();
        let pixels = data
            .chunks_exact(3)
            .map(|chunk| Pixel {
                red: chunk[0],
                green: chunk[1],
                blue: chunk[2],
            })
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Buffer offset of `(x, y)` inside a region beginning at `start`.
    /// The stride is always the full image width: regions are embedded
    /// sub-rectangles, not repacked slices.
    pub fn offset(&self, start: usize, x: u32, y: u32) -> usize {
        start + x as usize + y as usize * self.width as usize
    }

    pub fn pixel(&self, offset: usize) -> Pixel {
        self.pixels.get(offset).copied().unwrap_or_default()
    }

    /// Writes the pixel at `offset` to the target at on-screen `(x, y)`.
    pub fn draw_pixel_to(&self, target: &mut dyn DrawTarget, offset: usize, x: u32, y: u32) {
        let pixel = self.pixel(offset);
        target.draw_pixel(x, y, pixel.red, pixel.green, pixel.blue);
    }

    /// Reflects the buffer along one axis. A fresh buffer is computed and
    /// swapped in wholesale.
    pub fn mirror(&mut self, kind: Mirror) {
        let mut mirrored = vec![Pixel::default(); self.pixels.len()];
        for y in 0..self.height {
            for x in 0..self.width {
                let index = self.offset(0, x, y);
                let source = match kind {
                    Mirror::Horizontal => self.offset(0, self.width - x - 1, y),
                    Mirror::Vertical => self.offset(0, x, self.height - y - 1),
                };
                mirrored[index] = self.pixels[source];
            }
        }
        self.pixels = mirrored;
    }

    /// Nearest-neighbor rescale via per-axis `old/new` ratios. Replaces
    /// the buffer and dimensions.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        let mut scaled = vec![Pixel::default(); new_width as usize * new_height as usize];
        let x_ratio = self.width as f32 / new_width as f32;
        let y_ratio = self.height as f32 / new_height as f32;
        for y in 0..new_height {
            for x in 0..new_width {
                let index = x as usize + y as usize * new_width as usize;
                let source_x = (x_ratio * x as f32) as usize;
                let source_y = (y_ratio * y as f32) as usize;
                scaled[index] = self.pixels[source_x + source_y * self.width as usize];
            }
        }
        self.pixels = scaled;
        self.width = new_width;
        self.height = new_height;
    }
}

#[cfg(test)]
pub(crate) fn surface_from_pixels(width: u32, height: u32, bytes: &[u8]) -> Surface {
    let pixels = bytes
        .chunks_exact(3)
        .map(|chunk| Pixel {
            red: chunk[0],
            green: chunk[1],
            blue: chunk[2],
        })
        .collect();
    Surface {
        width,
        height,
        pixels,
    }
}
