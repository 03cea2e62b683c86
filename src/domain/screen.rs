use std::io;
use std::time::{Duration, Instant};

use super::frame::{DrawTarget, Frame};

/// The one operation that touches the physical display: transfer the
/// packed buffer to the device. Implemented by the fbdev adapter and by
/// test doubles.
pub trait DisplayDevice {
    fn present(&mut self, pixels: &[u16]) -> io::Result<()>;
}

/// Frames-per-second counter over a one-second wall-clock window.
#[derive(Debug)]
pub struct FpsCounter {
    window_start: Instant,
    current: u32,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            current: 0,
            fps: 0,
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.current == 0 {
            self.window_start = now;
        }
        self.current += 1;
        if now.duration_since(self.window_start) >= Duration::from_secs(1) {
            self.fps = self.current;
            self.current = 0;
        }
    }

    /// Frame count of the last completed one-second window. Zero until the
    /// first window closes.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Display adapter: owns the pixel buffer and the device it is flushed
/// to, and tracks the frame rate. `update` is called once per game loop
/// iteration.
#[derive(Debug)]
pub struct Screen<D: DisplayDevice> {
    frame: Frame,
    device: D,
    fps: FpsCounter,
}

impl<D: DisplayDevice> Screen<D> {
    pub fn new(device: D, width: u32, height: u32) -> Self {
        Self {
            frame: Frame::new(width, height),
            device,
            fps: FpsCounter::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    pub fn clear_screen(&mut self) {
        self.frame.clear();
    }

    pub fn restore_region(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.frame.restore_region(x, y, width, height);
    }

    /// Flushes the pixel buffer to the device and ticks the FPS counter.
    pub fn update(&mut self) -> io::Result<()> {
        self.device.present(self.frame.as_slice())?;
        self.fps.tick();
        Ok(())
    }
}

impl<D: DisplayDevice> DrawTarget for Screen<D> {
    fn draw_pixel(&mut self, x: u32, y: u32, red: u8, green: u8, blue: u8) {
        self.frame.draw_pixel(x, y, red, green, blue);
    }

    fn save(&mut self) {
        self.frame.save();
    }

    fn restore(&mut self) {
        self.frame.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayDevice, FpsCounter, Screen};
    use crate::domain::frame::DrawTarget;
    use std::io;
    use std::time::{Duration, Instant};

    #[derive(Debug, Default)]
    struct RecordingDevice {
        presents: usize,
        last_len: usize,
    }

    impl DisplayDevice for &mut RecordingDevice {
        fn present(&mut self, pixels: &[u16]) -> io::Result<()> {
            self.presents += 1;
            self.last_len = pixels.len();
            Ok(())
        }
    }

    #[test]
    fn update_presents_the_whole_buffer() {
        let mut device = RecordingDevice::default();
        let mut screen = Screen::new(&mut device, 8, 4);
        screen.update().expect("update");
        screen.update().expect("update");

        assert_eq!(device.presents, 2);
        assert_eq!(device.last_len, 32);
    }

    #[test]
    fn screen_draws_through_to_its_frame() {
        let mut device = RecordingDevice::default();
        let mut screen = Screen::new(&mut device, 4, 4);
        screen.draw_pixel(1, 1, 0xFF, 0x00, 0x00);
        screen.save();
        screen.clear_screen();
        screen.restore();

        assert_eq!(screen.frame().pixel(1, 1), 0xF800);
    }

    #[test]
    fn fps_counter_reports_after_one_second() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        for i in 0..30 {
            counter.tick_at(start + Duration::from_millis(i * 10));
        }
        assert_eq!(counter.fps(), 0);

        counter.tick_at(start + Duration::from_millis(1000));
        assert_eq!(counter.fps(), 31);
    }

    #[test]
    fn fps_counter_restarts_its_window() {
        let mut counter = FpsCounter::new();
        let start = Instant::now();
        counter.tick_at(start);
        counter.tick_at(start + Duration::from_secs(1));
        assert_eq!(counter.fps(), 2);

        counter.tick_at(start + Duration::from_secs(2));
        counter.tick_at(start + Duration::from_secs(4));
        assert_eq!(counter.fps(), 2);
    }
}
