use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Encoding(bincode::Error),
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<bincode::Error> for SettingsError {
    fn from(err: bincode::Error) -> Self {
        Self::Encoding(err)
    }
}

/// User-facing knobs persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub volume: f32,
    pub backlight: u32,
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            backlight: 70,
            show_fps: false,
        }
    }
}

impl Settings {
    /// A missing file yields the defaults; any other failure surfaces.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(bincode::deserialize(&bytes)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(self)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
