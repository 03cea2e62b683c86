/// Packs an 8-bit RGB triple into the 16-bit 5-6-5 layout the display
/// device consumes. Lossy and one-way: the low bits of each channel are
/// truncated.
pub fn pack_rgb565(red: u8, green: u8, blue: u8) -> u16 {
    ((blue >> 3) as u16) + (((green >> 2) as u16) << 5) + (((red >> 3) as u16) << 11)
}

/// Recovers the truncated channels from a packed value:
/// `(r & 0xF8, g & 0xFC, b & 0xF8)`.
pub fn unpack_rgb565(value: u16) -> (u8, u8, u8) {
    let red = ((value >> 11) & 0x1F) as u8;
    let green = ((value >> 5) & 0x3F) as u8;
    let blue = (value & 0x1F) as u8;
    (red << 3, green << 2, blue << 3)
}

/// Drawing seam shared by [`Frame`] and the display adapter. Backgrounds,
/// sprites, tiles and text draw through this trait so render targets can
/// be substituted in tests.
pub trait DrawTarget {
    fn draw_pixel(&mut self, x: u32, y: u32, red: u8, green: u8, blue: u8);
    fn save(&mut self);
    fn restore(&mut self);
}

/// Packed pixel buffer plus a shadow copy of identical shape. The shadow
/// holds a snapshot taken by `save` and written back by `restore`, which
/// is how a static backdrop is redrawn without re-blitting it.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
    shadow: Vec<u16>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![0; len],
            shadow: vec![0; len],
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

    pub fn as_slice(&self) -> &[u16] {
        &self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Reads back a packed pixel. Out-of-bounds coordinates return 0.
    pub fn pixel(&self, x: u32, y: u32) -> u16 {
        if x < self.width && y < self.height {
            self.pixels[self.offset(x, y)]
        } else {
            0
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Restores only the `[x, x+width) x [y, y+height)` sub-rectangle from
    /// the shadow buffer. Silently ignored when the rectangle exceeds the
    /// frame bounds.
    pub fn restore_region(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let stop_x = x + width;
        let stop_y = y + height;
        if x >= self.width || y >= self.height {
            return;
        }
        if stop_x > self.width || stop_y > self.height {
            return;
        }
        for target_y in y..stop_y {
            for target_x in x..stop_x {
                let position = self.offset(target_x, target_y);
                self.pixels[position] = self.shadow[position];
            }
        }
    }
}

impl DrawTarget for Frame {
    /// Out-of-bounds writes are clipped, not reported.
    fn draw_pixel(&mut self, x: u32, y: u32, red: u8, green: u8, blue: u8) {
        if x < self.width && y < self.height {
            let offset = self.offset(x, y);
            self.pixels[offset] = pack_rgb565(red, green, blue);
        }
    }

    fn save(&mut self) {
        self.shadow.copy_from_slice(&self.pixels);
    }

    fn restore(&mut self) {
        self.pixels.copy_from_slice(&self.shadow);
    }
}
