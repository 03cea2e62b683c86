use std::path::Path;

use crate::domain::{Image, ImageError};

#[derive(Debug)]
pub enum ImageLoadError {
    Io(std::io::Error),
    Decode(ImageError),
}

impl From<std::io::Error> for ImageLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ImageError> for ImageLoadError {
    fn from(err: ImageError) -> Self {
        Self::Decode(err)
    }
}

pub fn load_tga(path: impl AsRef<Path>) -> Result<Image, ImageLoadError> {
    let bytes = std::fs::read(path)?;
    Ok(Image::decode_tga(&bytes)?)
}

pub fn load_pcx(path: impl AsRef<Path>) -> Result<Image, ImageLoadError> {
    let bytes = std::fs::read(path)?;
    Ok(Image::decode_pcx(&bytes)?)
}
