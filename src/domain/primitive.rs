use crate::domain::frame::DrawTarget;
use crate::domain::surface::Pixel;

/// Immediate-mode pen for lines and rectangles. Holds the current color;
/// every draw call renders through a [`DrawTarget`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pen {
    color: Pixel,
}

impl Pen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        self.color = Pixel { red, green, blue };
    }

    pub fn color(&self) -> Pixel {
        self.color
    }

    /// Steps along the dominant axis, advancing both coordinates by
    /// fractional increments. Endpoints are included.
    pub fn draw_line(&self, target: &mut dyn DrawTarget, x1: u32, y1: u32, x2: u32, y2: u32) {
        let delta_x = x2 as f32 - x1 as f32;
        let delta_y = y2 as f32 - y1 as f32;
        let steps = delta_x.abs().max(delta_y.abs()) as u32;

        let mut x = x1 as f32;
        let mut y = y1 as f32;
        if steps == 0 {
            self.plot(target, x, y);
            return;
        }
        let step_x = delta_x / steps as f32;
        let step_y = delta_y / steps as f32;
        for _ in 0..=steps {
            self.plot(target, x, y);
            x += step_x;
            y += step_y;
        }
    }

    /// Outline only, drawn as four lines.
    pub fn draw_rectangle(&self, target: &mut dyn DrawTarget, x: u32, y: u32, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;
        self.draw_line(target, x, y, right, y);
        self.draw_line(target, x, bottom, right, bottom);
        self.draw_line(target, x, y, x, bottom);
        self.draw_line(target, right, y, right, bottom);
    }

    pub fn draw_filled_rectangle(&self, target: &mut dyn DrawTarget, x: u32, y: u32, width: u32, height: u32) {
        for row in y..y + height {
            for column in x..x + width {
                target.draw_pixel(column, row, self.color.red, self.color.green, self.color.blue);
            }
        }
    }

    fn plot(&self, target: &mut dyn DrawTarget, x: f32, y: f32) {
        target.draw_pixel(x as u32, y as u32, self.color.red, self.color.green, self.color.blue);
    }
}

#[cfg(test)]
mod tests {
    use super::Pen;
    use crate::domain::frame::{DrawTarget, Frame, pack_rgb565};

    fn white_pen() -> Pen {
        let mut pen = Pen::new();
        pen.set_color(0xFF, 0xFF, 0xFF);
        pen
    }

    #[test]
    fn horizontal_line_covers_every_column() {
        let mut frame = Frame::new(8, 8);
        white_pen().draw_line(&mut frame, 1, 3, 6, 3);

        for x in 1..=6 {
            assert_eq!(frame.pixel(x, 3), 0xFFFF, "column {x}");
        }
        assert_eq!(frame.pixel(0, 3), 0);
        assert_eq!(frame.pixel(7, 3), 0);
    }

    #[test]
    fn diagonal_line_visits_both_endpoints() {
        let mut frame = Frame::new(8, 8);
        white_pen().draw_line(&mut frame, 0, 0, 5, 5);

        assert_eq!(frame.pixel(0, 0), 0xFFFF);
        assert_eq!(frame.pixel(5, 5), 0xFFFF);
        assert_eq!(frame.pixel(3, 3), 0xFFFF);
    }

    #[test]
    fn zero_length_line_plots_a_single_pixel() {
        let mut frame = Frame::new(4, 4);
        white_pen().draw_line(&mut frame, 2, 2, 2, 2);

        let lit: usize = frame
            .as_slice()
            .iter()
            .filter(|&&pixel| pixel != 0)
            .count();
        assert_eq!(lit, 1);
        assert_eq!(frame.pixel(2, 2), 0xFFFF);
    }

    #[test]
    fn rectangle_outline_leaves_the_interior_untouched() {
        let mut frame = Frame::new(8, 8);
        white_pen().draw_rectangle(&mut frame, 1, 1, 5, 5);

        assert_eq!(frame.pixel(1, 1), 0xFFFF);
        assert_eq!(frame.pixel(5, 1), 0xFFFF);
        assert_eq!(frame.pixel(1, 5), 0xFFFF);
        assert_eq!(frame.pixel(5, 5), 0xFFFF);
        assert_eq!(frame.pixel(3, 3), 0x0000);
    }

    #[test]
    fn filled_rectangle_covers_the_interior() {
        let mut frame = Frame::new(8, 8);
        let mut pen = Pen::new();
        pen.set_color(0xFF, 0x00, 0x00);
        pen.draw_filled_rectangle(&mut frame, 2, 2, 3, 3);

        let red = pack_rgb565(0xFF, 0x00, 0x00);
        for y in 2..5 {
            for x in 2..5 {
                assert_eq!(frame.pixel(x, y), red);
            }
        }
        assert_eq!(frame.pixel(1, 1), 0);
        assert_eq!(frame.pixel(5, 5), 0);
    }

    #[test]
    fn lines_clip_at_the_frame_edge() {
        let mut frame = Frame::new(4, 4);
        white_pen().draw_line(&mut frame, 0, 0, 10, 0);

        for x in 0..4 {
            assert_eq!(frame.pixel(x, 0), 0xFFFF);
        }
    }
}
