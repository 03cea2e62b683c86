use std::path::PathBuf;
use std::time::Duration;

use crate::application::app;
use crate::domain::{Mirror, Screen, StripKind, Timer};
use crate::infrastructure::backlight::Backlight;
use crate::infrastructure::fbdev::{self, DisplayInfo, FramebufferDevice};
use crate::infrastructure::settings::Settings;

#[cfg(feature = "gamepad")]
use crate::domain::{Button, GamepadState};
#[cfg(feature = "gamepad")]
use crate::interface::gamepad::GamepadBackend;

#[cfg(feature = "audio")]
use crate::interface::audio::AudioOutput;

const SCREEN_WIDTH: u32 = 320;
const SCREEN_HEIGHT: u32 = 240;
const MOVE_STEP: u32 = 4;
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Demo scene: a scrolling-free backdrop, a two-frame animated ship moved
/// with the d-pad, and an FPS readout. Exercises the whole stack against
/// the real framebuffer.
pub fn run() {
    let assets = assets_dir();

    let settings = match Settings::load(assets.join("settings.cfg")) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Failed to load settings, using defaults: {:?}", err);
            Settings::default()
        }
    };
    // Not every dev machine exposes the panel sysfs node.
    if let Err(err) = Backlight::new().set_level(settings.backlight) {
        eprintln!("Backlight unavailable: {}", err);
    }

    let info = DisplayInfo {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        bits_per_pixel: 16,
        x_offset: 0,
        y_offset: 0,
        line_length: SCREEN_WIDTH * 2,
    };
    let device = match FramebufferDevice::open(fbdev::DEFAULT_DEVICE, &info) {
        Ok(device) => device,
        Err(err) => {
            eprintln!("Failed to open {}: {}", fbdev::DEFAULT_DEVICE, err);
            std::process::exit(1);
        }
    };
    let mut screen = Screen::new(device, SCREEN_WIDTH, SCREEN_HEIGHT);

    let mut background = match app::load_background(assets.join("background.pcx")) {
        Ok(background) => background,
        Err(err) => {
            eprintln!("Failed to load background: {:?}", err);
            std::process::exit(1);
        }
    };
    let mut ship = match app::load_sprite(assets.join("ship.tga"), StripKind::Horizontal, 2) {
        Ok(ship) => ship,
        Err(err) => {
            eprintln!("Failed to load ship sprite: {:?}", err);
            std::process::exit(1);
        }
    };
    let mut hud = match app::load_font(assets.join("font.tga")) {
        Ok(hud) => hud,
        Err(err) => {
            eprintln!("Failed to load font: {:?}", err);
            std::process::exit(1);
        }
    };
    ship.set_position(
        SCREEN_WIDTH.saturating_sub(ship.width()) / 2,
        SCREEN_HEIGHT.saturating_sub(ship.height()) / 2,
    );

    #[cfg(feature = "audio")]
    let mut audio = AudioOutput::new();
    #[cfg(feature = "audio")]
    {
        if audio.start() {
            audio.set_volume(settings.volume);
            match app::load_sound(assets.join("music.wav")) {
                Ok(music) => audio.play_looping(&music),
                Err(err) => eprintln!("Failed to load music: {:?}", err),
            }
        }
    }

    #[cfg(feature = "gamepad")]
    let mut backend = GamepadBackend::new();
    #[cfg(feature = "gamepad")]
    let mut pad = GamepadState::new();

    let mut animation = Timer::new();
    animation.set(Duration::from_secs(1));

    loop {
        #[cfg(feature = "gamepad")]
        {
            if let Some(backend) = backend.as_mut() {
                backend.pump(&mut pad);
            }
            if pad.check_press(Button::Start) || pad.check_press(Button::Power) {
                break;
            }
            if pad.check_hold(Button::Left) {
                ship.decrease_x(MOVE_STEP);
            }
            if pad.check_hold(Button::Right) {
                ship.increase_x(MOVE_STEP);
            }
            if pad.check_hold(Button::Up) {
                ship.decrease_y(MOVE_STEP);
            }
            if pad.check_hold(Button::Down) {
                ship.increase_y(MOVE_STEP);
            }
            if pad.check_press(Button::A) {
                ship.mirror(Mirror::Horizontal);
            }
            if pad.check_press(Button::B) {
                ship.mirror(Mirror::Vertical);
            }
        }

        if animation.expired() {
            ship.step();
        }

        background.draw(&mut screen);
        ship.draw(&mut screen);
        if settings.show_fps {
            let fps_label = format!("FPS {}", screen.fps());
            hud.draw_text_at(&mut screen, 8, 8, &fps_label);
        }

        if let Err(err) = screen.update() {
            eprintln!("Failed to present frame: {}", err);
            std::process::exit(1);
        }
        std::thread::sleep(FRAME_TIME);
    }

    #[cfg(feature = "audio")]
    audio.stop();
}

fn assets_dir() -> PathBuf {
    let mut args = std::env::args().skip_while(|arg| arg != "--demo");
    args.next();
    args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("assets"))
}
