pub mod background;
pub mod collision;
pub mod frame;
pub mod gamepad;
pub mod image;
pub mod primitive;
pub mod screen;
pub mod sprite;
pub mod surface;
pub mod text;
pub mod tileset;
pub mod timer;
pub mod wave;

pub use background::Background;
pub use collision::CollisionBox;
pub use frame::{DrawTarget, Frame, pack_rgb565, unpack_rgb565};
pub use gamepad::{Button, ButtonEvent, ButtonState, GamepadState};
pub use image::{Image, ImageError};
pub use primitive::Pen;
pub use screen::{DisplayDevice, FpsCounter, Screen};
pub use sprite::Sprite;
pub use surface::{FrameStrip, Mirror, Pixel, StripKind, StripRegion, Surface, strip_region};
pub use text::Text;
pub use tileset::Tileset;
pub use timer::Timer;
pub use wave::{WavAudio, WavError};
