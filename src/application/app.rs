use std::path::Path;

use crate::domain::{Background, Image, Sprite, StripKind, Text, Tileset, WavAudio};
use crate::infrastructure::audio_loader::{self, AudioLoadError};
use crate::infrastructure::image_loader::{self, ImageLoadError};

/// Loads an image, picking the decoder from the file extension. Extensions
/// are matched case-insensitively; anything but `.tga` and `.pcx` is an
/// unsupported-format error.
pub fn load_image(path: impl AsRef<Path>) -> Result<Image, ImageLoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("tga") => image_loader::load_tga(path),
        Some("pcx") => image_loader::load_pcx(path),
        _ => Err(ImageLoadError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("unsupported image extension: {}", path.display()),
        ))),
    }
}

pub fn load_background(path: impl AsRef<Path>) -> Result<Background, ImageLoadError> {
    let image = load_image(path)?;
    let mut background = Background::new();
    background.load_image(image);
    Ok(background)
}

pub fn load_sprite(
    path: impl AsRef<Path>,
    kind: StripKind,
    frames: u32,
) -> Result<Sprite, ImageLoadError> {
    let image = load_image(path)?;
    let mut sprite = Sprite::new();
    sprite.load_sprite(image, kind, frames);
    Ok(sprite)
}

pub fn load_tileset(
    path: impl AsRef<Path>,
    rows: u32,
    columns: u32,
) -> Result<Tileset, ImageLoadError> {
    let image = load_image(path)?;
    let mut tileset = Tileset::new();
    tileset.load_tileset(image, rows, columns);
    Ok(tileset)
}

/// Loads a bitmap font. The image is treated as a 128-frame horizontal
/// strip indexed by character code.
pub fn load_font(path: impl AsRef<Path>) -> Result<Text, ImageLoadError> {
    let image = load_image(path)?;
    let mut font = Sprite::new();
    font.load_image(image);
    Ok(Text::new(font))
}

pub fn load_sound(path: impl AsRef<Path>) -> Result<WavAudio, AudioLoadError> {
    audio_loader::load_wave(path)
}
