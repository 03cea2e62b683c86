use super::collision::CollisionBox;
use super::frame::DrawTarget;
use super::image::Image;
use super::surface::{FrameStrip, Mirror, StripKind, StripRegion, Surface, strip_region};

/// Movable image layer drawn with chroma-key transparency: the buffer's
/// first pixel is the key color and every matching pixel is skipped. The
/// key check can be disabled to blit opaquely.
#[derive(Debug, Clone, Default)]
pub struct Sprite {
    surface: Surface,
    strip: FrameStrip,
    kind: StripKind,
    region: StripRegion,
    transparent: bool,
    x: u32,
    y: u32,
}

impl Sprite {
    pub fn new() -> Self {
        Self {
            transparent: true,
            ..Self::default()
        }
    }

    /// Loads an image without touching the configured kind or frame count.
    pub fn load_image(&mut self, image: Image) {
        self.surface = Surface::from_image(image);
        self.refresh_region();
    }

    /// Loads an image and configures the strip in one step.
    pub fn load_sprite(&mut self, image: Image, kind: StripKind, frames: u32) {
        self.surface = Surface::from_image(image);
        self.strip.set_frames(frames);
        self.kind = kind;
        self.refresh_region();
    }

    pub fn set_transparent(&mut self, enabled: bool) {
        self.transparent = enabled;
    }

    pub fn transparent(&self) -> bool {
        self.transparent
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn set_x(&mut self, x: u32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: u32) {
        self.y = y;
    }

    pub fn set_position(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
    }

    pub fn increase_x(&mut self, amount: u32) {
        self.x += amount;
    }

    pub fn decrease_x(&mut self, amount: u32) {
        self.x = self.x.saturating_sub(amount);
    }

    pub fn increase_y(&mut self, amount: u32) {
        self.y += amount;
    }

    pub fn decrease_y(&mut self, amount: u32) {
        self.y = self.y.saturating_sub(amount);
    }

    /// Per-frame width of the current region.
    pub fn width(&self) -> u32 {
        self.region.width
    }

    /// Per-frame height of the current region.
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

    pub fn set_frames(&mut self, amount: u32) {
        self.strip.set_frames(amount);
        self.refresh_region();
    }

    pub fn set_kind(&mut self, kind: StripKind) {
        self.kind = kind;
        self.refresh_region();
    }

    /// Selects a frame; out-of-range targets keep the current selection.
    pub fn set_target(&mut self, target: u32) {
        self.strip.set_frame(target);
        self.refresh_region();
    }

    /// Advances the animation to the next frame, wrapping.
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

    pub fn collision_box(&self) -> CollisionBox {
        CollisionBox {
            x: self.x,
            y: self.y,
            width: self.region.width,
            height: self.region.height,
        }
    }

    fn refresh_region(&mut self) {
        self.region = strip_region(self.kind, self.surface.width(), self.surface.height(), &self.strip);
    }

    #[cfg(test)]
    pub(crate) fn from_surface(surface: Surface) -> Self {
        let mut sprite = Self::new();
        sprite.surface = surface;
        sprite.refresh_region();
        sprite
    }

    /// Draws the current frame at the stored position.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        let key = self.surface.pixel(0);
        for x in 0..self.region.width {
            for y in 0..self.region.height {
                let offset = self.surface.offset(self.region.start, x, y);
                if self.transparent && self.surface.pixel(offset) == key {
                    continue;
                }
                self.surface.draw_pixel_to(target, offset, self.x + x, self.y + y);
            }
        }
    }

    /// Moves to `(x, y)` and draws there.
    pub fn draw_at(&mut self, target: &mut dyn DrawTarget, x: u32, y: u32) {
        self.set_position(x, y);
        self.draw(target);
    }
}
