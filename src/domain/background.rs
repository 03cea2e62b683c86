use super::frame::DrawTarget;
use super::image::Image;
use super::surface::{FrameStrip, Mirror, StripKind, StripRegion, Surface, strip_region};

/// Opaque backdrop layer with the dirty-draw optimization: the full blit
/// runs only when the selected frame changed since the last draw; every
/// other draw is a single shadow-buffer restore.
#[derive(Debug, Clone, Default)]
pub struct Background {
    surface: Surface,
    strip: FrameStrip,
    kind: StripKind,
    region: StripRegion,
    cached_frame: u32,
}

impl Background {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_image(&mut self, image: Image) {
        self.surface = Surface::from_image(image);
        self.refresh_region();
    }

    /// Region width of the current frame.
    pub fn width(&self) -> u32 {
        self.region.width
    }

    /// Region height of the current frame.
    pub fn height(&self) -> u32 {
        self.region.height
    }

    pub fn kind(&self) -> StripKind {
        self.kind
    }

    pub fn frames(&self) -> u32 {
        self.strip.frames()
    }

    pub fn frame(&self) -> u32 {
        self.strip.frame()
    }

    pub fn set_kind(&mut self, kind: StripKind) {
        self.kind = kind;
        self.refresh_region();
    }

    pub fn set_setting(&mut self, kind: StripKind, frames: u32) {
        self.strip.set_frames(frames);
        self.set_kind(kind);
    }

    /// Selects a frame (1-indexed; out-of-range requests keep the current
    /// frame) and re-derives the region.
    pub fn set_target(&mut self, target: u32) {
        self.strip.set_frame(target);
        self.refresh_region();
    }

    /// Advances to the next frame, wrapping past the last one.
    pub fn step(&mut self) {
        self.strip.advance();
        self.refresh_region();
    }

    pub fn mirror(&mut self, kind: Mirror) {
        self.surface.mirror(kind);
        self.refresh_region();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.refresh_region();
    }

    fn refresh_region(&mut self) {
        self.region = strip_region(self.kind, self.surface.width(), self.surface.height(), &self.strip);
    }

    /// Draws the backdrop. On a frame change this blits every region pixel
    /// and snapshots the result; otherwise it restores the snapshot.
    pub fn draw(&mut self, target: &mut dyn DrawTarget) {
        if self.cached_frame != self.strip.frame() {
            self.slow_draw(target);
            target.save();
            self.cached_frame = self.strip.frame();
        } else {
            target.restore();
        }
    }

    fn slow_draw(&self, target: &mut dyn DrawTarget) {
        for x in 0..self.region.width {
            for y in 0..self.region.height {
                let offset = self.surface.offset(self.region.start, x, y);
                self.surface.draw_pixel_to(target, offset, x, y);
            }
        }
    }
}
