use super::frame::DrawTarget;
use super::sprite::Sprite;
use super::surface::StripKind;

const FONT_FRAMES: u32 = 128;
const FIRST_PRINTABLE: u8 = 32;

/// Fixed-width sprite-font text: the font image is a 128-frame horizontal
/// strip, one glyph per ASCII code, frame index = code + 1.
#[derive(Debug, Clone)]
pub struct Text {
    x: u32,
    y: u32,
    font: Sprite,
}

impl Text {
    /// Takes ownership of the font sprite and reconfigures it as the
    /// glyph strip.
    pub fn new(mut font: Sprite) -> Self {
        font.set_frames(FONT_FRAMES);
        font.set_kind(StripKind::Horizontal);
        Self { x: 0, y: 0, font }
    }

    pub fn set_position(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
        self.font.set_position(x, y);
    }

    /// Per-glyph width (the font is fixed-width by construction).
    pub fn glyph_width(&self) -> u32 {
        self.font.width()
    }

    pub fn glyph_height(&self) -> u32 {
        self.font.height()
    }

    pub fn draw_character(&mut self, target: &mut dyn DrawTarget, character: u8) {
        self.font.set_target(character as u32 + 1);
        self.font.draw(target);
    }

    /// Draws the string at the cursor. Control codes (below 32) are
    /// skipped without advancing; every drawn glyph advances the cursor
    /// by the glyph width. The cursor is restored afterwards.
    pub fn draw_text(&mut self, target: &mut dyn DrawTarget, text: &str) {
        self.font.set_position(self.x, self.y);
        for character in text.bytes() {
            if character < FIRST_PRINTABLE {
                continue;
            }
            self.draw_character(target, character);
            let next_x = self.font.x() + self.font.width();
            self.font.set_x(next_x);
        }
        self.font.set_position(self.x, self.y);
    }

    /// Moves the cursor, then draws.
    pub fn draw_text_at(&mut self, target: &mut dyn DrawTarget, x: u32, y: u32, text: &str) {
        self.set_position(x, y);
        self.draw_text(target, text);
    }
}
