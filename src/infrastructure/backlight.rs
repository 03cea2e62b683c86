use std::path::{Path, PathBuf};

pub const DEFAULT_SYSFS_DIR: &str = "/sys/class/backlight/backlight";
const STEP: u32 = 10;

/// Panel backlight control through the sysfs brightness files. Levels are
/// clamped to the panel's reported maximum.
#[derive(Debug, Clone)]
pub struct Backlight {
    dir: PathBuf,
}

impl Backlight {
    pub fn new() -> Self {
        Self::at(DEFAULT_SYSFS_DIR)
    }

    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn level(&self) -> std::io::Result<u32> {
        read_value(self.dir.join("brightness"))
    }

    pub fn max_level(&self) -> std::io::Result<u32> {
        read_value(self.dir.join("max_brightness"))
    }

    pub fn set_level(&self, level: u32) -> std::io::Result<()> {
        let clamped = level.min(self.max_level()?);
        std::fs::write(self.dir.join("brightness"), clamped.to_string())
    }

    pub fn increase(&self) -> std::io::Result<()> {
        let current = self.level()?;
        self.set_level(current.saturating_add(STEP))
    }

    pub fn decrease(&self) -> std::io::Result<()> {
        let current = self.level()?;
        self.set_level(current.saturating_sub(STEP))
    }

    pub fn on(&self) -> std::io::Result<()> {
        let max = self.max_level()?;
        self.set_level(max)
    }

    pub fn off(&self) -> std::io::Result<()> {
        self.set_level(0)
    }
}

impl Default for Backlight {
    fn default() -> Self {
        Self::new()
    }
}

fn read_value(path: PathBuf) -> std::io::Result<u32> {
    let text = std::fs::read_to_string(path)?;
    text.trim()
        .parse()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}
