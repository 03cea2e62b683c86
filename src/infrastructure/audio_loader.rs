use std::path::Path;

use crate::domain::{WavAudio, WavError};

#[derive(Debug)]
pub enum AudioLoadError {
    Io(std::io::Error),
    Decode(WavError),
}

impl From<std::io::Error> for AudioLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<WavError> for AudioLoadError {
    fn from(err: WavError) -> Self {
        Self::Decode(err)
    }
}

pub fn load_wave(path: impl AsRef<Path>) -> Result<WavAudio, AudioLoadError> {
    let bytes = std::fs::read(path)?;
    Ok(WavAudio::decode(&bytes)?)
}
